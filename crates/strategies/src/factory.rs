// In crates/strategies/src/factory.rs

use crate::StrategyDefinition;
use crate::obv::Obv;

/// Every strategy definition compiled into this crate.
pub fn catalogue() -> Vec<Box<dyn StrategyDefinition + Send + Sync>> {
    vec![Box::new(Obv)]
}

/// Looks up a compiled-in definition by its kind identifier.
pub fn definition_for(kind: &str) -> Option<Box<dyn StrategyDefinition + Send + Sync>> {
    catalogue().into_iter().find(|def| def.kind() == kind)
}
