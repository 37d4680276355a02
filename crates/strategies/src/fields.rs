// In crates/strategies/src/fields.rs

//! Canonical parameter names and the mapping from flattened symbol-set names.
//!
//! Symbol sets name their fields the way the trading platform's input
//! variables were named (`OBV_SignalOpenLevel`), while the records in
//! [`crate::types`] use `signal_open_level`. Each strategy kind declares an
//! explicit [`FieldMap`] between the two; nothing is matched by name.

use std::collections::{HashMap, HashSet};
use std::fmt;

use core_types::{AppliedPrice, Symbol, Timeframe};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::types::ParamOverride;
use crate::{Error, Result};

/// Every field of `IndicatorParams` and `StrategyParams`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    AppliedPrice,
    Shift,
    Period,
    LotSize,
    SignalOpenMethod,
    SignalOpenFilter,
    SignalOpenLevel,
    SignalOpenBoost,
    SignalCloseMethod,
    SignalCloseLevel,
    PriceStopMethod,
    PriceStopLevel,
    PriceProfitMethod,
    PriceProfitLevel,
    TickFilterMethod,
    MaxSpread,
}

impl ParamField {
    /// Every variant, in declaration order. Keep in step with the enum.
    pub const ALL: [ParamField; 16] = [
        ParamField::AppliedPrice,
        ParamField::Shift,
        ParamField::Period,
        ParamField::LotSize,
        ParamField::SignalOpenMethod,
        ParamField::SignalOpenFilter,
        ParamField::SignalOpenLevel,
        ParamField::SignalOpenBoost,
        ParamField::SignalCloseMethod,
        ParamField::SignalCloseLevel,
        ParamField::PriceStopMethod,
        ParamField::PriceStopLevel,
        ParamField::PriceProfitMethod,
        ParamField::PriceProfitLevel,
        ParamField::TickFilterMethod,
        ParamField::MaxSpread,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ParamField::AppliedPrice => "applied_price",
            ParamField::Shift => "shift",
            ParamField::Period => "period",
            ParamField::LotSize => "lot_size",
            ParamField::SignalOpenMethod => "signal_open_method",
            ParamField::SignalOpenFilter => "signal_open_filter",
            ParamField::SignalOpenLevel => "signal_open_level",
            ParamField::SignalOpenBoost => "signal_open_boost",
            ParamField::SignalCloseMethod => "signal_close_method",
            ParamField::SignalCloseLevel => "signal_close_level",
            ParamField::PriceStopMethod => "price_stop_method",
            ParamField::PriceStopLevel => "price_stop_level",
            ParamField::PriceProfitMethod => "price_profit_method",
            ParamField::PriceProfitLevel => "price_profit_level",
            ParamField::TickFilterMethod => "tick_filter_method",
            ParamField::MaxSpread => "max_spread",
        }
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn invalid(field: ParamField, value: Decimal, reason: &str) -> Error {
    Error::InvalidValue {
        field: field.name().to_string(),
        value,
        reason: reason.to_string(),
    }
}

fn integer(field: ParamField, value: Decimal) -> Result<i32> {
    if !value.fract().is_zero() {
        return Err(invalid(field, value, "must be an integer"));
    }
    value
        .to_i32()
        .ok_or_else(|| invalid(field, value, "out of range"))
}

fn non_negative(field: ParamField, value: Decimal) -> Result<Decimal> {
    if value < Decimal::ZERO {
        return Err(invalid(field, value, "must not be negative"));
    }
    Ok(value)
}

impl ParamOverride {
    /// Sets one field from a raw numeric value, checking the field's invariants.
    pub fn set(&mut self, field: ParamField, value: Decimal) -> Result<()> {
        let i = &mut self.indicator;
        let s = &mut self.strategy;
        match field {
            ParamField::AppliedPrice => {
                let code = integer(field, value)?;
                let price = AppliedPrice::from_code(code)
                    .ok_or_else(|| invalid(field, value, "unknown applied price code"))?;
                i.applied_price = Some(price);
            }
            ParamField::Shift => {
                let shift = integer(field, value)?;
                let shift = u32::try_from(shift)
                    .map_err(|_| invalid(field, value, "must not be negative"))?;
                i.shift = Some(shift);
            }
            ParamField::Period => {
                let minutes = integer(field, value)?;
                let tf = u32::try_from(minutes)
                    .ok()
                    .and_then(Timeframe::from_minutes)
                    .ok_or_else(|| invalid(field, value, "not a timeframe length in minutes"))?;
                i.period = Some(tf);
            }
            ParamField::LotSize => s.lot_size = Some(non_negative(field, value)?),
            ParamField::SignalOpenMethod => s.signal_open_method = Some(integer(field, value)?),
            ParamField::SignalOpenFilter => s.signal_open_filter = Some(integer(field, value)?),
            ParamField::SignalOpenLevel => s.signal_open_level = Some(value),
            ParamField::SignalOpenBoost => s.signal_open_boost = Some(integer(field, value)?),
            ParamField::SignalCloseMethod => s.signal_close_method = Some(integer(field, value)?),
            ParamField::SignalCloseLevel => s.signal_close_level = Some(value),
            ParamField::PriceStopMethod => s.price_stop_method = Some(integer(field, value)?),
            ParamField::PriceStopLevel => s.price_stop_level = Some(value),
            ParamField::PriceProfitMethod => s.price_profit_method = Some(integer(field, value)?),
            ParamField::PriceProfitLevel => s.price_profit_level = Some(value),
            ParamField::TickFilterMethod => s.tick_filter_method = Some(integer(field, value)?),
            ParamField::MaxSpread => s.max_spread = Some(non_negative(field, value)?),
        }
        Ok(())
    }

    pub fn is_set(&self, field: ParamField) -> bool {
        let i = &self.indicator;
        let s = &self.strategy;
        match field {
            ParamField::AppliedPrice => i.applied_price.is_some(),
            ParamField::Shift => i.shift.is_some(),
            ParamField::Period => i.period.is_some(),
            ParamField::LotSize => s.lot_size.is_some(),
            ParamField::SignalOpenMethod => s.signal_open_method.is_some(),
            ParamField::SignalOpenFilter => s.signal_open_filter.is_some(),
            ParamField::SignalOpenLevel => s.signal_open_level.is_some(),
            ParamField::SignalOpenBoost => s.signal_open_boost.is_some(),
            ParamField::SignalCloseMethod => s.signal_close_method.is_some(),
            ParamField::SignalCloseLevel => s.signal_close_level.is_some(),
            ParamField::PriceStopMethod => s.price_stop_method.is_some(),
            ParamField::PriceStopLevel => s.price_stop_level.is_some(),
            ParamField::PriceProfitMethod => s.price_profit_method.is_some(),
            ParamField::PriceProfitLevel => s.price_profit_level.is_some(),
            ParamField::TickFilterMethod => s.tick_filter_method.is_some(),
            ParamField::MaxSpread => s.max_spread.is_some(),
        }
    }
}

/// Where a flattened field name lands in the canonical records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    Param(ParamField),
    /// A legacy input with no canonical counterpart. Accepted and skipped.
    Retired,
}

/// A per-symbol, per-timeframe table using flattened field names.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSet {
    pub symbol: Symbol,
    pub timeframe: Timeframe,
    pub values: Vec<(&'static str, Decimal)>,
}

/// The correspondence between one kind's flattened names and `ParamField`.
///
/// Total in both directions: every flattened name a set uses must have an
/// entry, and every `ParamField` must either be the target of an entry or be
/// listed as having no flattened name.
#[derive(Debug, Clone)]
pub struct FieldMap {
    kind: String,
    entries: HashMap<&'static str, FieldTarget>,
}

impl FieldMap {
    /// `unflattened` lists the canonical fields symbol sets cannot name.
    pub fn new(
        kind: &str,
        entries: &[(&'static str, FieldTarget)],
        unflattened: &[ParamField],
    ) -> Result<Self> {
        let mut map = HashMap::with_capacity(entries.len());
        for (name, target) in entries {
            if map.insert(*name, *target).is_some() {
                return Err(Error::DuplicateMapping {
                    kind: kind.to_string(),
                    field: name.to_string(),
                });
            }
        }

        let mapped: HashSet<ParamField> = map
            .values()
            .filter_map(|target| match target {
                FieldTarget::Param(field) => Some(*field),
                FieldTarget::Retired => None,
            })
            .collect();
        for field in unflattened {
            if mapped.contains(field) {
                return Err(Error::DuplicateMapping {
                    kind: kind.to_string(),
                    field: field.name().to_string(),
                });
            }
        }
        if let Some(missing) = ParamField::ALL
            .into_iter()
            .find(|field| !mapped.contains(field) && !unflattened.contains(field))
        {
            return Err(Error::UnmappedField {
                kind: kind.to_string(),
                field: missing.name().to_string(),
            });
        }

        Ok(Self {
            kind: kind.to_string(),
            entries: map,
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn target(&self, name: &str) -> Result<FieldTarget> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnmappedField {
                kind: self.kind.clone(),
                field: name.to_string(),
            })
    }

    /// Converts a flattened set into a canonical override layer.
    ///
    /// Fails on the first unmapped name, invalid value, or canonical field
    /// reached through two different names.
    pub fn translate(&self, set: &SymbolSet) -> Result<ParamOverride> {
        let mut layer = ParamOverride::default();
        for (name, value) in &set.values {
            match self.target(name)? {
                FieldTarget::Retired => {
                    tracing::debug!(
                        kind = %self.kind,
                        symbol = %set.symbol,
                        timeframe = %set.timeframe,
                        field = *name,
                        "Skipping retired override field."
                    );
                }
                FieldTarget::Param(field) => {
                    if layer.is_set(field) {
                        return Err(Error::ConflictingField {
                            symbol: set.symbol.to_string(),
                            timeframe: set.timeframe.to_string(),
                            field: field.name().to_string(),
                        });
                    }
                    layer.set(field, *value)?;
                }
            }
        }
        Ok(layer)
    }
}
