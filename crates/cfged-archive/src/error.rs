//! Error types for cfged-archive

/// Result type for cfged-archive operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while packaging or delivering an archive
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error from cfged-fs
    #[error(transparent)]
    Fs(#[from] cfged_fs::Error),

    #[error("Invalid compression level {level} (expected 0-9)")]
    InvalidCompressionLevel { level: i64 },

    #[error("Invalid archive name: {name:?}")]
    InvalidArchiveName { name: String },
}
