// In crates/strategy-config/src/lib.rs

pub mod error;
pub mod overrides;
pub mod registry;
pub mod resolver;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use overrides::OverrideRegistry;
pub use registry::DefaultRegistry;
pub use resolver::Resolver;
pub use types::ResolvedConfig;

/// Builds a resolver over every strategy definition compiled into `strategies`.
///
/// Call once at process start and share the result. Any unmapped field,
/// invalid value or duplicate table in the built-in data fails here.
pub fn load_builtin() -> Result<Resolver> {
    let catalogue = strategies::factory::catalogue();
    let resolver = Resolver::from_definitions(
        catalogue
            .iter()
            .map(|def| def.as_ref() as &dyn strategies::StrategyDefinition),
    )?;

    let (timeframe_tables, symbol_tables) = resolver.overrides().table_counts();
    tracing::info!(
        kinds = ?resolver.defaults().kinds().collect::<Vec<_>>(),
        timeframe_tables,
        symbol_tables,
        "Strategy parameter tables loaded."
    );
    Ok(resolver)
}
