//! The complete schema: config classes plus presets

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::schema::{ConfigDescriptor, DEFAULT_PRESET, PresetDescriptor, PropertyDescriptor};
use crate::value::PropertyValue;
use crate::{Error, Result};

/// Ordered config classes and presets, immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaModel {
    pub configs: Vec<ConfigDescriptor>,
    #[serde(default)]
    pub presets: Vec<PresetDescriptor>,
}

impl SchemaModel {
    pub fn new(configs: Vec<ConfigDescriptor>, presets: Vec<PresetDescriptor>) -> Self {
        Self { configs, presets }
    }

    /// Parse and validate a schema document.
    ///
    /// `location` names the document in error messages.
    pub fn from_json(location: &str, content: &str) -> Result<Self> {
        let schema: SchemaModel =
            serde_json::from_str(content).map_err(|e| Error::InvalidDocument {
                location: location.to_string(),
                message: e.to_string(),
            })?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn config(&self, class_name: &str) -> Option<&ConfigDescriptor> {
        self.configs.iter().find(|c| c.class_name == class_name)
    }

    pub fn preset(&self, name: &str) -> Option<&PresetDescriptor> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Check structural invariants.
    ///
    /// Class names, file names, preset names, and property names within each
    /// scope must be unique, and nesting stops at one level. Preset overrides
    /// that reference unknown classes or properties are only warned about:
    /// applying them is harmless and the archive never reads them.
    pub fn validate(&self) -> Result<()> {
        let mut class_names = HashSet::new();
        let mut file_names = HashSet::new();

        for config in &self.configs {
            if !class_names.insert(config.class_name.as_str()) {
                return Err(Error::DuplicateKey {
                    kind: "class name",
                    key: config.class_name.clone(),
                });
            }
            if !file_names.insert(config.file_name.as_str()) {
                return Err(Error::DuplicateKey {
                    kind: "file name",
                    key: config.file_name.clone(),
                });
            }
            validate_properties(&config.class_name, &config.properties, true)?;
        }

        let mut preset_names = HashSet::new();
        for preset in &self.presets {
            if !preset_names.insert(preset.name.as_str()) {
                return Err(Error::DuplicateKey {
                    kind: "preset name",
                    key: preset.name.clone(),
                });
            }
            if preset.name == DEFAULT_PRESET {
                tracing::warn!(
                    preset = %preset.name,
                    "preset shadowed by the built-in default selection"
                );
            }
            self.warn_unknown_overrides(preset);
        }

        tracing::debug!(
            configs = self.configs.len(),
            presets = self.presets.len(),
            "schema validated"
        );
        Ok(())
    }

    fn warn_unknown_overrides(&self, preset: &PresetDescriptor) {
        for (class_name, class_overrides) in &preset.overrides {
            let Some(config) = self.config(class_name) else {
                tracing::warn!(preset = %preset.name, class = %class_name, "override targets unknown class");
                continue;
            };
            for (prop_name, value) in class_overrides {
                let Some(prop) = config.property(prop_name) else {
                    tracing::warn!(preset = %preset.name, class = %class_name, property = %prop_name, "override targets unknown property");
                    continue;
                };
                if let PropertyValue::Nested(children) = value {
                    for child in children.keys() {
                        if prop.child(child).is_none() {
                            let path = format!("{prop_name}.{child}");
                            tracing::warn!(preset = %preset.name, class = %class_name, property = %path, "override targets unknown property");
                        }
                    }
                }
            }
        }
    }
}

fn validate_properties(
    class_name: &str,
    properties: &[PropertyDescriptor],
    top_level: bool,
) -> Result<()> {
    let mut names = HashSet::new();
    for prop in properties {
        if !names.insert(prop.name.as_str()) {
            return Err(Error::DuplicateKey {
                kind: "property name",
                key: format!("{class_name}.{}", prop.name),
            });
        }
        if let Some(children) = prop.children() {
            if !top_level {
                return Err(Error::NestingTooDeep {
                    class_name: class_name.to_string(),
                    property: prop.name.clone(),
                });
            }
            validate_properties(class_name, children, false)?;
        } else if !prop.property_type.is_known() {
            tracing::warn!(
                class = %class_name,
                property = %prop.name,
                tag = %prop.property_type,
                "unknown type tag; value will be exported unchanged"
            );
        }
    }
    Ok(())
}
