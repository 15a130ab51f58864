//! Value trees: className -> propertyName -> value

use std::collections::BTreeMap;

use cfged_schema::{
    ClassValues, Overrides, PropertyPath, PropertyValue, SchemaModel, Value,
};
use serde::Serialize;

/// Runtime values shaped after the schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValueTree {
    classes: BTreeMap<String, ClassValues>,
}

impl ValueTree {
    /// Build a fresh tree holding a copy of every schema default.
    ///
    /// Nested properties get a mapping of their children's defaults. The
    /// tree owns its values; later edits never reach the schema.
    pub fn from_schema(schema: &SchemaModel) -> Self {
        let classes = schema
            .configs
            .iter()
            .map(|config| {
                let values: ClassValues = config
                    .properties
                    .iter()
                    .map(|prop| {
                        let value = match prop.children() {
                            Some(children) => PropertyValue::Nested(
                                children
                                    .iter()
                                    .map(|c| (c.name.clone(), c.default_value.clone()))
                                    .collect(),
                            ),
                            None => PropertyValue::Leaf(prop.default_value.clone()),
                        };
                        (prop.name.clone(), value)
                    })
                    .collect();
                (config.class_name.clone(), values)
            })
            .collect();

        Self { classes }
    }

    pub fn class(&self, class_name: &str) -> Option<&ClassValues> {
        self.classes.get(class_name)
    }

    pub(crate) fn class_mut(&mut self, class_name: &str) -> Option<&mut ClassValues> {
        self.classes.get_mut(class_name)
    }

    pub fn property(&self, class_name: &str, property: &str) -> Option<&PropertyValue> {
        self.class(class_name)?.get(property)
    }

    /// The leaf value at `path`, if present.
    pub fn get(&self, class_name: &str, path: &PropertyPath) -> Option<&Value> {
        let slot = self.property(class_name, path.property())?;
        match (slot, path.child()) {
            (PropertyValue::Leaf(value), None) => Some(value),
            (PropertyValue::Nested(children), Some(child)) => children.get(child),
            _ => None,
        }
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Merge preset overrides into this tree.
    ///
    /// Classes missing from the tree are skipped. A nested override merges
    /// child by child into the existing mapping, creating it when the property
    /// is absent; any other override replaces the value. An override whose
    /// shape disagrees with the existing entry (mapping onto a plain value or
    /// the reverse) is skipped so nested properties stay mappings.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        for (class_name, class_overrides) in overrides {
            let Some(target) = self.classes.get_mut(class_name) else {
                tracing::debug!(class = %class_name, "skipping overrides for unknown class");
                continue;
            };

            for (prop_name, override_value) in class_overrides {
                match (target.get_mut(prop_name), override_value) {
                    (None, value) => {
                        target.insert(prop_name.clone(), value.clone());
                    }
                    (Some(PropertyValue::Nested(existing)), PropertyValue::Nested(children)) => {
                        for (child, value) in children {
                            existing.insert(child.clone(), value.clone());
                        }
                    }
                    (Some(slot @ PropertyValue::Leaf(_)), PropertyValue::Leaf(value)) => {
                        *slot = PropertyValue::Leaf(value.clone());
                    }
                    (Some(_), _) => {
                        tracing::warn!(
                            class = %class_name,
                            property = %prop_name,
                            "override shape does not match property; skipped"
                        );
                    }
                }
            }
        }
    }

    /// Whether both trees hold exactly the same keys at every level.
    pub fn same_shape(&self, other: &ValueTree) -> bool {
        self.classes.len() == other.classes.len()
            && self.classes.iter().all(|(name, values)| {
                other.classes.get(name).is_some_and(|theirs| {
                    values.len() == theirs.len()
                        && values.iter().all(|(prop, value)| {
                            match (value, theirs.get(prop)) {
                                (PropertyValue::Leaf(_), Some(PropertyValue::Leaf(_))) => true,
                                (PropertyValue::Nested(a), Some(PropertyValue::Nested(b))) => {
                                    a.len() == b.len() && a.keys().all(|k| b.contains_key(k))
                                }
                                _ => false,
                            }
                        })
                })
            })
    }
}
