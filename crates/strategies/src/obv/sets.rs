// In crates/strategies/src/obv/sets.rs

use core_types::{Symbol, Timeframe};
use rust_decimal_macros::dec;

use crate::fields::SymbolSet;

pub(super) fn eurusd_h4() -> SymbolSet {
    SymbolSet {
        symbol: Symbol::from("EURUSD"),
        timeframe: Timeframe::H4,
        values: vec![
            ("OBV_Period", dec!(2)),
            ("OBV_Applied_Price", dec!(3)),
            ("OBV_Shift", dec!(0)),
            ("OBV_TrailingStopMethod", dec!(6)),
            ("OBV_TrailingProfitMethod", dec!(11)),
            ("OBV_SignalOpenLevel", dec!(36)),
            ("OBV_SignalBaseMethod", dec!(0)),
            ("OBV_SignalOpenMethod1", dec!(1)),
            ("OBV_SignalOpenMethod2", dec!(0)),
            ("OBV_SignalCloseLevel", dec!(36)),
            ("OBV_SignalCloseMethod1", dec!(1)),
            ("OBV_SignalCloseMethod2", dec!(0)),
            ("OBV_MaxSpread", dec!(10)),
        ],
    }
}

pub(super) fn eurusd_m5() -> SymbolSet {
    SymbolSet {
        symbol: Symbol::from("EURUSD"),
        timeframe: Timeframe::M5,
        values: vec![
            ("OBV_Applied_Price", dec!(3)),
            ("OBV_Shift", dec!(0)),
            ("OBV_SignalOpenMethod", dec!(-61)),
            ("OBV_SignalOpenLevel", dec!(36)),
            ("OBV_SignalCloseMethod", dec!(1)),
            ("OBV_SignalCloseLevel", dec!(36)),
            ("OBV_PriceLimitMethod", dec!(0)),
            ("OBV_PriceLimitLevel", dec!(0)),
            ("OBV_MaxSpread", dec!(3)),
        ],
    }
}
