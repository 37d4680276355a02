// In crates/strategy-config/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No defaults registered for kind '{kind}'")]
    UnknownKind { kind: String },

    #[error("Defaults for kind '{kind}' are already registered")]
    DuplicateKind { kind: String },

    #[error("An override table is already registered for {scope}")]
    DuplicateOverride { scope: String },

    #[error("Field map for kind '{kind}' is locked: symbol sets were already translated with it")]
    FieldMapLocked { kind: String },

    #[error("No field map registered for kind '{kind}'")]
    MissingFieldMap { kind: String },

    #[error("Invalid strategy definition: {0}")]
    Definition(#[from] strategies::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
