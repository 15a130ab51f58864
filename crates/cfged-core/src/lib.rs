//! Core value model for the cfged configuration editor.
//!
//! An [`EditorSession`] owns everything that changes while editing: the
//! `defaults` and `current` value trees, the active preset, and the store that
//! persists the preset selection between runs. The rest of this crate is the
//! pieces it is built from:
//!
//! - [`ValueTree`] / [`ValueStore`]: nested class -> property -> value maps
//! - [`preset`]: resolving a preset name to its override tree
//! - [`coerce`]: converting raw edited values to their declared types
//! - [`document`]: projecting the current values into one JSON document per class
//! - [`config`]: layered editor configuration
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cfged_core::{DocumentOptions, EditorSession, MemorySelectionStore, ValueChangeHandler};
//! use cfged_schema::{SchemaModel, Value};
//!
//! let schema = SchemaModel::from_json("schema.json", r#"{
//!     "configs": [ { "className": "Erosion", "fileName": "erosion.json", "properties": [
//!         { "name": "rate", "type": "float", "defaultValue": 0.5 }
//!     ] } ]
//! }"#).unwrap();
//!
//! let mut session = EditorSession::start(Arc::new(schema), Box::new(MemorySelectionStore::default())).unwrap();
//! session.on_value_changed("Erosion", "rate", Value::from(0.8)).unwrap();
//!
//! let documents = session.documents(DocumentOptions::default());
//! assert_eq!(documents.get("erosion.json").unwrap()["rate"], 0.8);
//! ```

pub mod coerce;
pub mod config;
pub mod document;
pub mod error;
pub mod preset;
pub mod selection;
pub mod session;
pub mod store;
pub mod tree;

pub use coerce::coerce;
pub use config::{
    ArchiveLayer, ArchiveSettings, ConfigLayer, ConfigResolver, EditorConfig, PROJECT_CONFIG_FILE,
};
pub use document::{DocumentOptions, DocumentSet, build_document, build_documents};
pub use error::{Error, Result};
pub use preset::{Resolution, resolve};
pub use selection::{FileSelectionStore, MemorySelectionStore, SelectionStore};
pub use session::{EditorSession, PresetSwitch, ValueChangeHandler};
pub use store::ValueStore;
pub use tree::ValueTree;
