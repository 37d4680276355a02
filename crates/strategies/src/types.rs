// In crates/strategies/src/types.rs

use core_types::{AppliedPrice, Timeframe};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Tunable fields of an indicator.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct IndicatorParams {
    pub applied_price: AppliedPrice,
    /// Bars back from the current one; never negative.
    pub shift: u32,
    /// Candle period the indicator is computed on. `None` uses the chart's own.
    pub period: Option<Timeframe>,
}

/// Tunable fields of a strategy.
///
/// Method, filter and boost fields are integer codes decoded by the signal
/// engine; negative values are composite encodings and are kept as-is.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct StrategyParams {
    pub lot_size: Decimal,
    pub signal_open_method: i32,
    pub signal_open_filter: i32,
    pub signal_open_level: Decimal,
    pub signal_open_boost: i32,
    pub signal_close_method: i32,
    pub signal_close_level: Decimal,
    pub price_stop_method: i32,
    pub price_stop_level: Decimal,
    pub price_profit_method: i32,
    pub price_profit_level: Decimal,
    pub tick_filter_method: i32,
    /// Spread ceiling; never negative.
    pub max_spread: Decimal,
}

/// A partial `IndicatorParams`. `None` fields inherit from the layer below.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct IndicatorOverride {
    pub applied_price: Option<AppliedPrice>,
    pub shift: Option<u32>,
    pub period: Option<Timeframe>,
}

/// A partial `StrategyParams`. `None` fields inherit from the layer below.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct StrategyOverride {
    pub lot_size: Option<Decimal>,
    pub signal_open_method: Option<i32>,
    pub signal_open_filter: Option<i32>,
    pub signal_open_level: Option<Decimal>,
    pub signal_open_boost: Option<i32>,
    pub signal_close_method: Option<i32>,
    pub signal_close_level: Option<Decimal>,
    pub price_stop_method: Option<i32>,
    pub price_stop_level: Option<Decimal>,
    pub price_profit_method: Option<i32>,
    pub price_profit_level: Option<Decimal>,
    pub tick_filter_method: Option<i32>,
    pub max_spread: Option<Decimal>,
}

/// One override layer covering both the indicator and the strategy record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ParamOverride {
    pub indicator: IndicatorOverride,
    pub strategy: StrategyOverride,
}

/// A fully populated pair of records for one strategy kind.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ParamSet {
    pub indicator: IndicatorParams,
    pub strategy: StrategyParams,
}

impl IndicatorParams {
    /// Returns a new record with every field present in `layer` taken from it.
    pub fn apply(&self, layer: &IndicatorOverride) -> IndicatorParams {
        IndicatorParams {
            applied_price: layer.applied_price.unwrap_or(self.applied_price),
            shift: layer.shift.unwrap_or(self.shift),
            period: layer.period.or(self.period),
        }
    }
}

impl StrategyParams {
    /// Returns a new record with every field present in `layer` taken from it.
    pub fn apply(&self, layer: &StrategyOverride) -> StrategyParams {
        StrategyParams {
            lot_size: layer.lot_size.unwrap_or(self.lot_size),
            signal_open_method: layer.signal_open_method.unwrap_or(self.signal_open_method),
            signal_open_filter: layer.signal_open_filter.unwrap_or(self.signal_open_filter),
            signal_open_level: layer.signal_open_level.unwrap_or(self.signal_open_level),
            signal_open_boost: layer.signal_open_boost.unwrap_or(self.signal_open_boost),
            signal_close_method: layer.signal_close_method.unwrap_or(self.signal_close_method),
            signal_close_level: layer.signal_close_level.unwrap_or(self.signal_close_level),
            price_stop_method: layer.price_stop_method.unwrap_or(self.price_stop_method),
            price_stop_level: layer.price_stop_level.unwrap_or(self.price_stop_level),
            price_profit_method: layer.price_profit_method.unwrap_or(self.price_profit_method),
            price_profit_level: layer.price_profit_level.unwrap_or(self.price_profit_level),
            tick_filter_method: layer.tick_filter_method.unwrap_or(self.tick_filter_method),
            max_spread: layer.max_spread.unwrap_or(self.max_spread),
        }
    }
}

impl ParamSet {
    pub fn apply(&self, layer: &ParamOverride) -> ParamSet {
        ParamSet {
            indicator: self.indicator.apply(&layer.indicator),
            strategy: self.strategy.apply(&layer.strategy),
        }
    }
}

fn check_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(Error::InvalidValue {
            field: field.to_string(),
            value,
            reason: "must not be negative".to_string(),
        });
    }
    Ok(())
}

impl StrategyParams {
    /// Checks the record's invariants: `lot_size >= 0` and `max_spread >= 0`.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("lot_size", self.lot_size)?;
        check_non_negative("max_spread", self.max_spread)
    }
}

impl ParamOverride {
    /// Checks the invariants of every present field.
    pub fn validate(&self) -> Result<()> {
        if let Some(lot_size) = self.strategy.lot_size {
            check_non_negative("lot_size", lot_size)?;
        }
        if let Some(max_spread) = self.strategy.max_spread {
            check_non_negative("max_spread", max_spread)?;
        }
        Ok(())
    }

    /// Number of fields this layer sets.
    pub fn len(&self) -> usize {
        let i = &self.indicator;
        let s = &self.strategy;
        [
            i.applied_price.is_some(),
            i.shift.is_some(),
            i.period.is_some(),
            s.lot_size.is_some(),
            s.signal_open_method.is_some(),
            s.signal_open_filter.is_some(),
            s.signal_open_level.is_some(),
            s.signal_open_boost.is_some(),
            s.signal_close_method.is_some(),
            s.signal_close_level.is_some(),
            s.price_stop_method.is_some(),
            s.price_stop_level.is_some(),
            s.price_profit_method.is_some(),
            s.price_profit_level.is_some(),
            s.tick_filter_method.is_some(),
            s.max_spread.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
