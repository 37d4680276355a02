// In crates/strategy-config/src/resolver.rs

use core_types::{Symbol, Timeframe};
use strategies::StrategyDefinition;

use crate::overrides::OverrideRegistry;
use crate::registry::DefaultRegistry;
use crate::types::ResolvedConfig;
use crate::Result;

/// Assembles effective parameters from the default and override registries.
///
/// Owns both registries and never mutates them, so one instance can be
/// shared between threads (e.g. behind an `Arc`) without locking.
#[derive(Debug)]
pub struct Resolver {
    defaults: DefaultRegistry,
    overrides: OverrideRegistry,
}

impl Resolver {
    pub fn new(defaults: DefaultRegistry, overrides: OverrideRegistry) -> Self {
        Self { defaults, overrides }
    }

    /// Builds both registries from a set of strategy definitions.
    pub fn from_definitions<'a, I>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a dyn StrategyDefinition>,
    {
        let mut defaults = DefaultRegistry::new();
        let mut overrides = OverrideRegistry::new();
        for def in definitions {
            defaults.register(def)?;
            overrides.register(def)?;
        }
        Ok(Self::new(defaults, overrides))
    }

    pub fn defaults(&self) -> &DefaultRegistry {
        &self.defaults
    }

    pub fn overrides(&self) -> &OverrideRegistry {
        &self.overrides
    }

    /// Defaults, then the timeframe table, then the exact symbol+timeframe
    /// table; each later layer's present fields win.
    ///
    /// Fails only with `UnknownKind`. Missing override tables are inherited
    /// through, not errors.
    pub fn resolve(&self, kind: &str, symbol: &Symbol, timeframe: Timeframe) -> Result<ResolvedConfig> {
        let cfg = self.defaults.defaults(kind)?;
        let cfg = self.overrides.apply_timeframe_override(kind, &cfg, timeframe);
        let cfg = self.overrides.apply_symbol_override(kind, &cfg, symbol, timeframe);

        tracing::debug!(kind, %symbol, %timeframe, "Resolved strategy parameters.");
        Ok(ResolvedConfig::new(kind, symbol, timeframe, cfg))
    }
}
