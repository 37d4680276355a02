// In crates/strategies/src/error.rs

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Override field '{field}' has no mapping for strategy kind '{kind}'")]
    UnmappedField { kind: String, field: String },

    #[error("Field '{field}' is mapped more than once for strategy kind '{kind}'")]
    DuplicateMapping { kind: String, field: String },

    #[error("Parameter '{field}' is set twice in the {symbol} {timeframe} set")]
    ConflictingField {
        symbol: String,
        timeframe: String,
        field: String,
    },

    #[error("Invalid value {value} for parameter '{field}': {reason}")]
    InvalidValue {
        field: String,
        value: Decimal,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
