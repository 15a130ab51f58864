//! Error types for cfged-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Schema or manifest could not be fetched or parsed
    #[error("Error loading configuration: {0}")]
    Load(#[source] cfged_schema::Error),

    /// Archive packaging or delivery failed
    #[error("Error generating config files: {0}")]
    Export(#[from] cfged_archive::Error),

    /// Error from cfged-core
    #[error(transparent)]
    Core(#[from] cfged_core::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
