//! The Value Store: default and current value trees

use cfged_schema::{Overrides, PropertyPath, PropertyValue, Scalar, SchemaModel, Value};

use crate::tree::ValueTree;
use crate::{Error, Result};

/// `defaults` holds schema defaults overlaid with the active preset;
/// `current` holds the live edits.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueStore {
    defaults: ValueTree,
    current: ValueTree,
}

impl ValueStore {
    /// Both trees seeded from the schema defaults, no preset applied.
    pub fn new(schema: &SchemaModel) -> Self {
        let defaults = ValueTree::from_schema(schema);
        let current = defaults.clone();
        Self { defaults, current }
    }

    pub fn defaults(&self) -> &ValueTree {
        &self.defaults
    }

    pub fn current(&self) -> &ValueTree {
        &self.current
    }

    /// Rebuild both trees from the schema and overlay `overrides`.
    ///
    /// `defaults` is rebuilt and overlaid, `current` is reseeded from it and
    /// then overlaid a second time. Any edits held in `current` are dropped.
    pub fn rebase(&mut self, schema: &SchemaModel, overrides: &Overrides) {
        let mut defaults = ValueTree::from_schema(schema);
        defaults.apply_overrides(overrides);

        let mut current = defaults.clone();
        current.apply_overrides(overrides);

        self.defaults = defaults;
        self.current = current;
    }

    /// Write one leaf of `current`.
    ///
    /// A child path on a property with no mapping yet (absent or null)
    /// creates the mapping.
    pub fn set_value(&mut self, class_name: &str, path: &PropertyPath, value: Value) -> Result<()> {
        let values = self
            .current
            .class_mut(class_name)
            .ok_or_else(|| Error::UnknownClass {
                class_name: class_name.to_string(),
            })?;

        let slot = values.get_mut(path.property());
        match (slot, path.child()) {
            (Some(PropertyValue::Nested(_)), None) => Err(Error::NestedRequiresChild {
                class_name: class_name.to_string(),
                path: path.to_string(),
            }),
            (Some(PropertyValue::Nested(children)), Some(child)) => {
                children.insert(child.to_string(), value);
                Ok(())
            }
            (Some(slot @ PropertyValue::Leaf(Value::Null)), Some(child)) => {
                *slot = PropertyValue::Nested([(child.to_string(), value)].into());
                Ok(())
            }
            (Some(PropertyValue::Leaf(_)), Some(_)) => Err(Error::NotNested {
                class_name: class_name.to_string(),
                path: path.to_string(),
            }),
            (Some(slot @ PropertyValue::Leaf(_)), None) => {
                *slot = PropertyValue::Leaf(value);
                Ok(())
            }
            (None, None) => {
                values.insert(path.property().to_string(), PropertyValue::Leaf(value));
                Ok(())
            }
            (None, Some(child)) => {
                values.insert(
                    path.property().to_string(),
                    PropertyValue::Nested([(child.to_string(), value)].into()),
                );
                Ok(())
            }
        }
    }

    /// Replace element `index` of an array leaf in `current`.
    ///
    /// `index == len` appends; anything past that is out of range.
    pub fn set_array_element(
        &mut self,
        class_name: &str,
        path: &PropertyPath,
        index: usize,
        element: Scalar,
    ) -> Result<()> {
        let not_an_array = || Error::NotAnArray {
            class_name: class_name.to_string(),
            path: path.to_string(),
        };

        let values = self
            .current
            .class_mut(class_name)
            .ok_or_else(|| Error::UnknownClass {
                class_name: class_name.to_string(),
            })?;

        let leaf = match (values.get_mut(path.property()), path.child()) {
            (Some(PropertyValue::Leaf(value)), None) => value,
            (Some(PropertyValue::Nested(children)), Some(child)) => {
                children.get_mut(child).ok_or_else(not_an_array)?
            }
            _ => return Err(not_an_array()),
        };

        let items = leaf.as_list_mut().ok_or_else(not_an_array)?;
        let len = items.len();
        match index {
            i if i < len => items[i] = element,
            i if i == len => items.push(element),
            _ => {
                return Err(Error::IndexOutOfRange {
                    class_name: class_name.to_string(),
                    path: path.to_string(),
                    index,
                    len,
                });
            }
        }
        Ok(())
    }

    /// Copy every schema-described leaf from `defaults` into `current`.
    ///
    /// Keys in `current` the schema does not describe are left alone.
    pub fn reset_to_defaults(&mut self, schema: &SchemaModel) {
        for config in &schema.configs {
            for prop in &config.properties {
                match prop.children() {
                    Some(children) => {
                        for child in children {
                            let path = PropertyPath::nested(&prop.name, &child.name);
                            self.copy_default(&config.class_name, &path);
                        }
                    }
                    None => self.copy_default(&config.class_name, &PropertyPath::top(&prop.name)),
                }
            }
        }
        tracing::debug!("current values reset to defaults");
    }

    fn copy_default(&mut self, class_name: &str, path: &PropertyPath) {
        let Some(value) = self.defaults.get(class_name, path).cloned() else {
            return;
        };
        if let Err(e) = self.set_value(class_name, path, value) {
            tracing::warn!(class = %class_name, path = %path, error = %e, "could not reset value");
        }
    }
}
