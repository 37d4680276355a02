// In crates/strategies/src/obv/timeframes.rs

use core_types::{AppliedPrice, Timeframe};
use rust_decimal_macros::dec;

use crate::types::{IndicatorOverride, ParamOverride, StrategyOverride};

// Fast timeframes: trade on method 2 with a 60/6 stop and profit target.

pub(super) fn m1() -> ParamOverride {
    ParamOverride {
        indicator: IndicatorOverride {
            applied_price: Some(AppliedPrice::Close),
            shift: Some(0),
            period: Some(Timeframe::M1),
        },
        strategy: StrategyOverride {
            lot_size: Some(dec!(0)),
            signal_open_method: Some(2),
            signal_open_filter: Some(32),
            signal_open_level: Some(dec!(0.0)),
            signal_open_boost: Some(0),
            signal_close_method: Some(2),
            signal_close_level: Some(dec!(0)),
            price_profit_method: Some(60),
            price_profit_level: Some(dec!(6)),
            price_stop_method: Some(60),
            price_stop_level: Some(dec!(6)),
            tick_filter_method: Some(1),
            max_spread: Some(dec!(0)),
        },
    }
}

pub(super) fn m15() -> ParamOverride {
    ParamOverride {
        indicator: IndicatorOverride {
            applied_price: Some(AppliedPrice::Close),
            shift: Some(0),
            period: Some(Timeframe::M15),
        },
        strategy: StrategyOverride {
            lot_size: Some(dec!(0)),
            signal_open_method: Some(2),
            signal_open_level: Some(dec!(0.0)),
            signal_open_boost: Some(0),
            signal_close_method: Some(2),
            signal_close_level: Some(dec!(0)),
            price_profit_method: Some(60),
            price_profit_level: Some(dec!(6)),
            price_stop_method: Some(60),
            price_stop_level: Some(dec!(6)),
            tick_filter_method: Some(1),
            max_spread: Some(dec!(0)),
            ..Default::default()
        },
    }
}

pub(super) fn h8() -> ParamOverride {
    ParamOverride {
        indicator: IndicatorOverride {
            shift: Some(0),
            period: Some(Timeframe::H8),
            ..Default::default()
        },
        strategy: StrategyOverride {
            lot_size: Some(dec!(0)),
            signal_open_method: Some(2),
            signal_open_level: Some(dec!(0)),
            signal_open_boost: Some(0),
            signal_close_method: Some(2),
            signal_close_level: Some(dec!(0)),
            price_profit_method: Some(60),
            price_profit_level: Some(dec!(6)),
            price_stop_method: Some(60),
            price_stop_level: Some(dec!(6)),
            tick_filter_method: Some(1),
            max_spread: Some(dec!(0)),
            ..Default::default()
        },
    }
}

// Slow timeframes: filter 1 with a fixed stop level and no profit target.

fn filtered(period: Timeframe) -> ParamOverride {
    ParamOverride {
        indicator: IndicatorOverride {
            shift: Some(0),
            period: Some(period),
            ..Default::default()
        },
        strategy: StrategyOverride {
            lot_size: Some(dec!(0)),
            signal_open_method: Some(0),
            signal_open_filter: Some(1),
            signal_open_level: Some(dec!(0)),
            signal_open_boost: Some(0),
            signal_close_method: Some(0),
            signal_close_level: Some(dec!(0)),
            price_stop_method: Some(0),
            price_stop_level: Some(dec!(2)),
            tick_filter_method: Some(1),
            max_spread: Some(dec!(0)),
            ..Default::default()
        },
    }
}

pub(super) fn m30() -> ParamOverride {
    filtered(Timeframe::M30)
}

pub(super) fn h4() -> ParamOverride {
    filtered(Timeframe::H4)
}
