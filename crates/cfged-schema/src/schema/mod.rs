//! Schema definitions for config classes, properties, and presets
//!
//! The schema document is JSON:
//!
//! ```json
//! {
//!   "configs": [
//!     {
//!       "className": "Erosion",
//!       "displayName": "Erosion",
//!       "fileName": "erosion.json",
//!       "properties": [
//!         { "name": "rate", "type": "float", "defaultValue": 0.5 },
//!         { "name": "Wind", "type": "WindSettings", "isNested": true,
//!           "nestedProperties": [ { "name": "speed", "type": "int", "defaultValue": 10 } ] }
//!       ]
//!     }
//!   ],
//!   "presets": [
//!     { "name": "arid", "displayName": "Arid", "overrides": { "Erosion": { "Wind": { "speed": 40 } } } }
//!   ]
//! }
//! ```

pub mod descriptor;
pub mod model;
pub mod path;
pub mod preset;

pub use descriptor::{ConfigDescriptor, PropertyDescriptor, PropertyType};
pub use model::SchemaModel;
pub use path::PropertyPath;
pub use preset::{DEFAULT_PRESET, Overrides, PresetDescriptor};
