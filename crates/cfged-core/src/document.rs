//! Projection of value trees into per-class JSON documents
//!
//! Each config class becomes one JSON object keyed by its properties in
//! declaration order, with every value coerced to its declared type. When
//! descriptions are enabled, a described property `x` gets a companion
//! `xDescription` key right after it.

use cfged_schema::{ClassValues, ConfigDescriptor, PropertyDescriptor, PropertyValue, SchemaModel};
use serde::Serialize;
use serde_json::{Map, Value as Json};

use crate::coerce::coerce;
use crate::tree::ValueTree;

const DESCRIPTION_SUFFIX: &str = "Description";

/// Options for building documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Emit `<name>Description` keys for described properties.
    pub include_descriptions: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            include_descriptions: true,
        }
    }
}

/// Ordered mapping fileName -> JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DocumentSet {
    documents: Map<String, Json>,
}

impl DocumentSet {
    pub fn get(&self, file_name: &str) -> Option<&Json> {
        self.documents.get(file_name)
    }

    /// Documents in schema declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Json)> {
        self.documents.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Json> {
        self.documents
    }
}

/// Build the document for one config class.
///
/// Missing class values are treated as empty, so every property still appears
/// with its type's zero value.
pub fn build_document(
    config: &ConfigDescriptor,
    values: Option<&ClassValues>,
    options: DocumentOptions,
) -> Json {
    let mut doc = Map::new();

    for prop in &config.properties {
        let slot = values.and_then(|v| v.get(&prop.name));

        match prop.children() {
            Some(children) => {
                let nested = slot.and_then(PropertyValue::as_nested);
                let mut object = Map::new();
                for child in children {
                    let value = nested.and_then(|n| n.get(&child.name));
                    object.insert(child.name.clone(), coerce(value, &child.property_type).to_json());
                    insert_description(&mut object, child, options);
                }
                doc.insert(prop.name.clone(), Json::Object(object));
            }
            None => {
                let value = slot.and_then(PropertyValue::as_leaf);
                doc.insert(prop.name.clone(), coerce(value, &prop.property_type).to_json());
            }
        }
        insert_description(&mut doc, prop, options);
    }

    Json::Object(doc)
}

fn insert_description(target: &mut Map<String, Json>, prop: &PropertyDescriptor, options: DocumentOptions) {
    if !options.include_descriptions {
        return;
    }
    if let Some(description) = &prop.description {
        target.insert(
            format!("{}{DESCRIPTION_SUFFIX}", prop.name),
            Json::String(description.clone()),
        );
    }
}

/// Build one document per config class, keyed by file name.
pub fn build_documents(schema: &SchemaModel, values: &ValueTree, options: DocumentOptions) -> DocumentSet {
    let documents = schema
        .configs
        .iter()
        .map(|config| {
            let doc = build_document(config, values.class(&config.class_name), options);
            (config.file_name.clone(), doc)
        })
        .collect();

    tracing::debug!(
        count = schema.configs.len(),
        descriptions = options.include_descriptions,
        "built config documents"
    );
    DocumentSet { documents }
}
