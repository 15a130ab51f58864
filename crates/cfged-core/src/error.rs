//! Error types for cfged-core

/// Result type for cfged-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cfged-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Class name not declared by the schema
    #[error("Unknown config class: {class_name}")]
    UnknownClass { class_name: String },

    /// Property path not declared for the class
    #[error("Unknown property {class_name}.{path}")]
    UnknownProperty { class_name: String, path: String },

    /// A child path was given for a property that holds a plain value
    #[error("Property {class_name}.{path} is not nested")]
    NotNested { class_name: String, path: String },

    /// A nested property can only be written one child at a time
    #[error("Property {class_name}.{path} is nested; address one of its children")]
    NestedRequiresChild { class_name: String, path: String },

    /// Element edit on a value that is not an array
    #[error("Property {class_name}.{path} is not an array")]
    NotAnArray { class_name: String, path: String },

    /// Element edit past the end of an array
    #[error("Index {index} out of range for {class_name}.{path} (length {len})")]
    IndexOutOfRange {
        class_name: String,
        path: String,
        index: usize,
        len: usize,
    },

    /// Preset name neither "default" nor declared by the schema
    #[error("Preset not found: {name}")]
    PresetNotFound { name: String },

    /// Schema error from cfged-schema
    #[error(transparent)]
    Schema(#[from] cfged_schema::Error),

    /// Filesystem error from cfged-fs
    #[error(transparent)]
    Fs(#[from] cfged_fs::Error),
}
