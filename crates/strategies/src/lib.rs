// In crates/strategies/src/lib.rs

use core_types::Timeframe;

pub mod error;
pub mod factory;
pub mod fields;
pub mod obv;
pub mod types;

pub use error::{Error, Result};
pub use fields::{FieldMap, FieldTarget, ParamField, SymbolSet};
pub use types::{
    IndicatorOverride, IndicatorParams, ParamOverride, ParamSet, StrategyOverride,
    StrategyParams,
};

/// The parameter tables a strategy kind ships with.
///
/// A definition is static data: every method returns a fresh copy of the
/// same literal tables, so registries can take what they need and own it.
pub trait StrategyDefinition {
    /// The kind identifier callers resolve by, e.g. `"OBV"`.
    fn kind(&self) -> &'static str;

    fn indicator_defaults(&self) -> IndicatorParams;

    fn strategy_defaults(&self) -> StrategyParams;

    /// Correspondence between flattened symbol-set names and canonical fields.
    fn field_map(&self) -> Result<FieldMap>;

    /// One partial layer per timeframe. Timeframes not listed inherit the defaults.
    fn timeframe_overrides(&self) -> Vec<(Timeframe, ParamOverride)>;

    /// Per-symbol, per-timeframe tables in flattened naming.
    fn symbol_sets(&self) -> Vec<SymbolSet>;
}
