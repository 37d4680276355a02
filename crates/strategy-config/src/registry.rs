// In crates/strategy-config/src/registry.rs

use std::collections::HashMap;

use strategies::{IndicatorParams, ParamSet, StrategyDefinition, StrategyParams};

use crate::{Error, Result};

/// Canonical default records, keyed by kind.
///
/// Filled once while the process starts, then moved into a
/// [`crate::Resolver`] and only read from. Lookups hand out copies, so no
/// caller can change the canonical record.
#[derive(Debug, Default)]
pub struct DefaultRegistry {
    indicators: HashMap<String, IndicatorParams>,
    strategies: HashMap<String, StrategyParams>,
}

impl DefaultRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers both default records of a strategy definition.
    ///
    /// All-or-nothing: on error neither record is stored.
    pub fn register(&mut self, def: &dyn StrategyDefinition) -> Result<()> {
        let kind = def.kind();
        if self.indicators.contains_key(kind) || self.strategies.contains_key(kind) {
            return Err(Error::DuplicateKind { kind: kind.to_string() });
        }
        let strategy = def.strategy_defaults();
        strategy.validate()?;

        self.register_indicator(kind, def.indicator_defaults())?;
        self.register_strategy(kind, strategy)
    }

    pub fn register_indicator(&mut self, kind: &str, params: IndicatorParams) -> Result<()> {
        if self.indicators.contains_key(kind) {
            return Err(Error::DuplicateKind { kind: kind.to_string() });
        }
        tracing::debug!(kind, "Registered indicator defaults.");
        self.indicators.insert(kind.to_string(), params);
        Ok(())
    }

    pub fn register_strategy(&mut self, kind: &str, params: StrategyParams) -> Result<()> {
        if self.strategies.contains_key(kind) {
            return Err(Error::DuplicateKind { kind: kind.to_string() });
        }
        params.validate()?;
        tracing::debug!(kind, "Registered strategy defaults.");
        self.strategies.insert(kind.to_string(), params);
        Ok(())
    }

    pub fn indicator_defaults(&self, kind: &str) -> Result<IndicatorParams> {
        self.indicators
            .get(kind)
            .cloned()
            .ok_or_else(|| Error::UnknownKind { kind: kind.to_string() })
    }

    pub fn strategy_defaults(&self, kind: &str) -> Result<StrategyParams> {
        self.strategies
            .get(kind)
            .cloned()
            .ok_or_else(|| Error::UnknownKind { kind: kind.to_string() })
    }

    /// Both records for `kind`. Fails unless both are registered.
    pub fn defaults(&self, kind: &str) -> Result<ParamSet> {
        Ok(ParamSet {
            indicator: self.indicator_defaults(kind)?,
            strategy: self.strategy_defaults(kind)?,
        })
    }

    /// Kinds with strategy defaults registered.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }
}
