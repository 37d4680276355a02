// In crates/strategy-config/src/types.rs

use core_types::{Symbol, Timeframe};
use serde::Serialize;
use strategies::{IndicatorParams, ParamSet, StrategyParams};

/// The effective parameters of one strategy instance.
///
/// Built only by [`crate::Resolver::resolve`] and read-only afterwards: the
/// instance that asked for it owns it outright.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    kind: String,
    symbol: Symbol,
    timeframe: Timeframe,
    params: ParamSet,
}

impl ResolvedConfig {
    pub(crate) fn new(kind: &str, symbol: &Symbol, timeframe: Timeframe, params: ParamSet) -> Self {
        Self {
            kind: kind.to_string(),
            symbol: symbol.clone(),
            timeframe,
            params,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// What the indicator engine reads.
    pub fn indicator(&self) -> &IndicatorParams {
        &self.params.indicator
    }

    /// What the signal and order engine reads.
    pub fn strategy(&self) -> &StrategyParams {
        &self.params.strategy
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    pub fn into_parts(self) -> (IndicatorParams, StrategyParams) {
        (self.params.indicator, self.params.strategy)
    }
}
