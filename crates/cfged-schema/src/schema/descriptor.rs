//! Config class and property descriptors

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as Json;

use crate::schema::PropertyPath;
use crate::value::Value;

/// Declared type of a property.
///
/// Nested properties usually carry the name of their settings class as a
/// type tag; any tag outside the known set is kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Bool,
    Int,
    Float,
    Double,
    String,
    IntArray,
    FloatArray,
    Other(String),
}

impl PropertyType {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Bool => "bool",
            PropertyType::Int => "int",
            PropertyType::Float => "float",
            PropertyType::Double => "double",
            PropertyType::String => "string",
            PropertyType::IntArray => "int[]",
            PropertyType::FloatArray => "float[]",
            PropertyType::Other(tag) => tag,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, PropertyType::IntArray | PropertyType::FloatArray)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PropertyType::Other(_))
    }
}

impl Default for PropertyType {
    fn default() -> Self {
        PropertyType::Other(String::new())
    }
}

impl From<String> for PropertyType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "bool" => PropertyType::Bool,
            "int" => PropertyType::Int,
            "float" => PropertyType::Float,
            "double" => PropertyType::Double,
            "string" => PropertyType::String,
            "int[]" => PropertyType::IntArray,
            "float[]" => PropertyType::FloatArray,
            _ => PropertyType::Other(tag),
        }
    }
}

impl From<PropertyType> for String {
    fn from(ty: PropertyType) -> Self {
        ty.as_str().to_string()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configurable property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type", default)]
    pub property_type: PropertyType,
    /// Ignored for nested properties; their children carry the defaults.
    #[serde(default, deserialize_with = "lenient_default")]
    pub default_value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_nested: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_properties: Option<Vec<PropertyDescriptor>>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, property_type: PropertyType, default_value: Value) -> Self {
        Self {
            name: name.into(),
            property_type,
            default_value,
            description: None,
            is_nested: false,
            nested_properties: None,
        }
    }

    /// A nested property holding the given children.
    pub fn nested(name: impl Into<String>, children: Vec<PropertyDescriptor>) -> Self {
        Self {
            name: name.into(),
            property_type: PropertyType::default(),
            default_value: Value::Null,
            description: None,
            is_nested: true,
            nested_properties: Some(children),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Children of a nested property.
    ///
    /// A property is nested only when it is flagged and declares a child list;
    /// a flag without a list is treated as a plain leaf.
    pub fn children(&self) -> Option<&[PropertyDescriptor]> {
        if self.is_nested {
            self.nested_properties.as_deref()
        } else {
            None
        }
    }

    pub fn child(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.children()?.iter().find(|c| c.name == name)
    }
}

/// Read a `defaultValue`, turning shapes a leaf cannot hold into `Null`.
///
/// Nested properties may carry an object default that is never read, and
/// custom-typed leaves may carry structured defaults the editor passes through
/// as absent.
fn lenient_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
    let json = Json::deserialize(deserializer)?;
    Ok(Value::try_from(json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "defaultValue read as null");
        Value::Null
    }))
}

/// One configurable class, written to its own file in the archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDescriptor {
    pub class_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub file_name: String,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl ConfigDescriptor {
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// The descriptor a path points at: a top-level property or a nested child.
    pub fn resolve(&self, path: &PropertyPath) -> Option<&PropertyDescriptor> {
        let property = self.property(path.property())?;
        match path.child() {
            None => Some(property),
            Some(child) => property.child(child),
        }
    }
}
