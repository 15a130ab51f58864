//! Runtime values held by the editor
//!
//! Values are an explicit tagged union rather than free-form JSON, so every
//! coercion path can be enumerated per tag. Conversion from JSON rejects shapes
//! the editor never produces (objects at leaf level, arrays of arrays).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::{Error, Result};

/// A single non-container value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// A leaf value: absent, a scalar, or a flat list of scalars.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Json", into = "Json")]
pub enum Value {
    #[default]
    Null,
    Scalar(Scalar),
    List(Vec<Scalar>),
}

/// The value stored under one property name.
///
/// Nested properties always hold a mapping, even an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Json", into = "Json")]
pub enum PropertyValue {
    Leaf(Value),
    Nested(BTreeMap<String, Value>),
}

/// Property name -> value for one config class.
pub type ClassValues = BTreeMap<String, PropertyValue>;

impl Scalar {
    fn from_json(json: &Json) -> Result<Self> {
        match json {
            Json::Bool(b) => Ok(Scalar::Bool(*b)),
            Json::Number(n) => Ok(match n.as_i64() {
                Some(i) => Scalar::Int(i),
                None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            Json::String(s) => Ok(Scalar::Text(s.clone())),
            other => Err(Error::UnsupportedValue {
                found: kind_of(other).to_string(),
            }),
        }
    }

    /// JSON form. Non-finite floats have no JSON form and become `null`.
    pub fn to_json(&self) -> Json {
        match self {
            Scalar::Bool(b) => Json::Bool(*b),
            Scalar::Int(i) => Json::from(*i),
            Scalar::Float(f) => serde_json::Number::from_f64(*f)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Scalar::Text(s) => Json::String(s.clone()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Scalar>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Interpret raw user input: JSON literals when they parse, text otherwise.
    ///
    /// `0.8` becomes a float, `[1, 2]` a list, `true` a bool, and `sandy loam`
    /// stays text.
    pub fn parse_literal(raw: &str) -> Self {
        serde_json::from_str::<Json>(raw)
            .ok()
            .and_then(|json| Value::try_from(json).ok())
            .unwrap_or_else(|| Value::Scalar(Scalar::Text(raw.to_string())))
    }

    pub fn to_json(&self) -> Json {
        match self {
            Value::Null => Json::Null,
            Value::Scalar(s) => s.to_json(),
            Value::List(items) => Json::Array(items.iter().map(Scalar::to_json).collect()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Scalar(s) => write!(f, "{s}"),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

impl TryFrom<Json> for Value {
    type Error = Error;

    fn try_from(json: Json) -> Result<Self> {
        match json {
            Json::Null => Ok(Value::Null),
            Json::Array(items) => items
                .iter()
                .map(Scalar::from_json)
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            Json::Object(_) => Err(Error::UnsupportedValue {
                found: "object".into(),
            }),
            scalar => Scalar::from_json(&scalar).map(Value::Scalar),
        }
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        value.to_json()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Scalar(Scalar::Int(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Scalar(Scalar::Float(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::Text(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::Text(s))
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Vec<i64>> for Value {
    fn from(items: Vec<i64>) -> Self {
        Value::List(items.into_iter().map(Scalar::Int).collect())
    }
}

impl From<Vec<f64>> for Value {
    fn from(items: Vec<f64>) -> Self {
        Value::List(items.into_iter().map(Scalar::Float).collect())
    }
}

impl PropertyValue {
    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            PropertyValue::Leaf(v) => Some(v),
            PropertyValue::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            PropertyValue::Nested(map) => Some(map),
            PropertyValue::Leaf(_) => None,
        }
    }

    pub fn to_json(&self) -> Json {
        match self {
            PropertyValue::Leaf(v) => v.to_json(),
            PropertyValue::Nested(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<Json> for PropertyValue {
    type Error = Error;

    fn try_from(json: Json) -> Result<Self> {
        match json {
            Json::Object(map) => map
                .into_iter()
                .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                .collect::<Result<BTreeMap<_, _>>>()
                .map(PropertyValue::Nested),
            other => Value::try_from(other).map(PropertyValue::Leaf),
        }
    }
}

impl From<PropertyValue> for Json {
    fn from(value: PropertyValue) -> Self {
        value.to_json()
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        PropertyValue::Leaf(value)
    }
}

fn kind_of(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
