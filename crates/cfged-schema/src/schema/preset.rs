//! Named presets overriding schema defaults

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::ClassValues;

/// Preset name meaning "schema defaults, no overrides".
pub const DEFAULT_PRESET: &str = "default";

/// Sparse override tree: className -> propertyName -> value or nested mapping.
pub type Overrides = BTreeMap<String, ClassValues>;

/// A named, partial override set layered onto the default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetDescriptor {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub overrides: Overrides,
}
