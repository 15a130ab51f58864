//! Schema model for the cfged configuration editor.
//!
//! The schema enumerates configurable classes, their typed properties and
//! defaults, and the named presets that override those defaults. A separate
//! presentation manifest carries ordering and visibility hints used only when
//! rendering the editing form.
//!
//! Both documents are loaded once at startup through [`loader::load_sources`]
//! and are immutable afterwards.

pub mod error;
pub mod loader;
pub mod presentation;
pub mod schema;
pub mod value;

pub use error::{Error, Result};
pub use loader::{FileFetcher, LoadedSources, SourceFetcher, load_sources};
pub use presentation::{
    ConfigPresentation, ImageRef, PresentationManifest, PropertyPresentation, display_label,
    format_default,
};
pub use schema::{
    ConfigDescriptor, DEFAULT_PRESET, Overrides, PresetDescriptor, PropertyDescriptor,
    PropertyPath, PropertyType, SchemaModel,
};
pub use value::{ClassValues, PropertyValue, Scalar, Value};
