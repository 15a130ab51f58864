//! Error types for cfged-schema

/// Result type for cfged-schema operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or interpreting the schema
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source document could not be fetched
    #[error("Failed to load {location}: {reason}")]
    LoadFailed { location: String, reason: String },

    /// A source document was fetched but is not valid
    #[error("Invalid document {location}: {message}")]
    InvalidDocument { location: String, message: String },

    /// A JSON value has no counterpart in the value model
    #[error("Unsupported value: {found}")]
    UnsupportedValue { found: String },

    /// A property path is empty or too deep
    #[error("Invalid property path '{path}'")]
    InvalidPath { path: String },

    /// Two schema entries share a key that must be unique
    #[error("Duplicate {kind}: {key}")]
    DuplicateKey { kind: &'static str, key: String },

    /// A nested property declares nested children of its own
    #[error("Property {class_name}.{property} nests more than one level")]
    NestingTooDeep { class_name: String, property: String },
}
