// In crates/strategies/src/obv/mod.rs

//! Parameter tables for the On-Balance-Volume strategy.

mod sets;
mod timeframes;

use core_types::{AppliedPrice, Timeframe};
use rust_decimal::Decimal;

use crate::fields::{FieldMap, FieldTarget, ParamField, SymbolSet};
use crate::types::{IndicatorParams, ParamOverride, StrategyParams};
use crate::{Result, StrategyDefinition};

pub const KIND: &str = "OBV";

/// Flattened input names used by OBV symbol sets.
const FIELD_MAP: &[(&str, FieldTarget)] = &[
    ("OBV_Applied_Price", FieldTarget::Param(ParamField::AppliedPrice)),
    ("OBV_Shift", FieldTarget::Param(ParamField::Shift)),
    ("OBV_LotSize", FieldTarget::Param(ParamField::LotSize)),
    ("OBV_SignalOpenMethod", FieldTarget::Param(ParamField::SignalOpenMethod)),
    ("OBV_SignalOpenFilterMethod", FieldTarget::Param(ParamField::SignalOpenFilter)),
    ("OBV_SignalOpenLevel", FieldTarget::Param(ParamField::SignalOpenLevel)),
    ("OBV_SignalOpenBoost", FieldTarget::Param(ParamField::SignalOpenBoost)),
    ("OBV_SignalCloseMethod", FieldTarget::Param(ParamField::SignalCloseMethod)),
    ("OBV_SignalCloseLevel", FieldTarget::Param(ParamField::SignalCloseLevel)),
    ("OBV_PriceStopMethod", FieldTarget::Param(ParamField::PriceStopMethod)),
    ("OBV_PriceStopLevel", FieldTarget::Param(ParamField::PriceStopLevel)),
    ("OBV_PriceProfitMethod", FieldTarget::Param(ParamField::PriceProfitMethod)),
    ("OBV_PriceProfitLevel", FieldTarget::Param(ParamField::PriceProfitLevel)),
    ("OBV_TickFilterMethod", FieldTarget::Param(ParamField::TickFilterMethod)),
    ("OBV_MaxSpread", FieldTarget::Param(ParamField::MaxSpread)),
    // Older names for the stop method and level.
    ("OBV_PriceLimitMethod", FieldTarget::Param(ParamField::PriceStopMethod)),
    ("OBV_PriceLimitLevel", FieldTarget::Param(ParamField::PriceStopLevel)),
    // Inputs of earlier releases with no counterpart in the current records.
    ("OBV_Period", FieldTarget::Retired),
    ("OBV_SignalBaseMethod", FieldTarget::Retired),
    ("OBV_SignalOpenMethod1", FieldTarget::Retired),
    ("OBV_SignalOpenMethod2", FieldTarget::Retired),
    ("OBV_SignalCloseMethod1", FieldTarget::Retired),
    ("OBV_SignalCloseMethod2", FieldTarget::Retired),
    ("OBV_TrailingStopMethod", FieldTarget::Retired),
    ("OBV_TrailingProfitMethod", FieldTarget::Retired),
];

/// Canonical fields OBV symbol sets have no input for. The indicator period
/// is pinned by the timeframe tables; sets are already keyed by timeframe.
const UNFLATTENED: &[ParamField] = &[ParamField::Period];

/// The OBV strategy definition.
#[derive(Debug, Default, Clone, Copy)]
pub struct Obv;

impl StrategyDefinition for Obv {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn indicator_defaults(&self) -> IndicatorParams {
        IndicatorParams {
            applied_price: AppliedPrice::Close,
            shift: 0,
            period: None,
        }
    }

    fn strategy_defaults(&self) -> StrategyParams {
        StrategyParams {
            lot_size: Decimal::ZERO,
            signal_open_method: 0,
            signal_open_filter: 0,
            signal_open_level: Decimal::ZERO,
            signal_open_boost: 0,
            signal_close_method: 0,
            signal_close_level: Decimal::ZERO,
            price_stop_method: 0,
            price_stop_level: Decimal::ZERO,
            price_profit_method: 0,
            price_profit_level: Decimal::ZERO,
            tick_filter_method: 0,
            max_spread: Decimal::ZERO,
        }
    }

    fn field_map(&self) -> Result<FieldMap> {
        FieldMap::new(KIND, FIELD_MAP, UNFLATTENED)
    }

    fn timeframe_overrides(&self) -> Vec<(Timeframe, ParamOverride)> {
        vec![
            (Timeframe::M1, timeframes::m1()),
            (Timeframe::M15, timeframes::m15()),
            (Timeframe::M30, timeframes::m30()),
            (Timeframe::H4, timeframes::h4()),
            (Timeframe::H8, timeframes::h8()),
        ]
    }

    fn symbol_sets(&self) -> Vec<SymbolSet> {
        vec![sets::eurusd_h4(), sets::eurusd_m5()]
    }
}
