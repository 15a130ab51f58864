//! Dotted property paths (`rate`, `Wind.speed`)

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Address of a value inside one config class.
///
/// Either a top-level property, or a child of a nested property. Deeper paths
/// do not exist because nesting is limited to one level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    property: String,
    child: Option<String>,
}

impl PropertyPath {
    pub fn top(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            child: None,
        }
    }

    pub fn nested(property: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            child: Some(child.into()),
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn child(&self) -> Option<&str> {
        self.child.as_deref()
    }
}

impl FromStr for PropertyPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPath { path: s.to_string() };
        let mut parts = s.split('.');
        let property = parts.next().filter(|p| !p.is_empty()).ok_or_else(invalid)?;

        match (parts.next(), parts.next()) {
            (None, _) => Ok(Self::top(property)),
            (Some(child), None) if !child.is_empty() => Ok(Self::nested(property, child)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.child {
            Some(child) => write!(f, "{}.{}", self.property, child),
            None => f.write_str(&self.property),
        }
    }
}
