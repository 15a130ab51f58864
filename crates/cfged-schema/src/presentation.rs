//! Presentation manifest: ordering and visibility hints for the form
//!
//! The manifest is keyed by class name. A config absent from the manifest is
//! not shown at all; a property absent from its config entry is shown with
//! default settings. Nothing here affects values or the exported archive.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::{ConfigDescriptor, PropertyDescriptor, SchemaModel};
use crate::value::Value;

const DEFAULT_ORDER: f64 = 999.0;
const ENABLED_PROPERTY: &str = "Enabled";
const MAX_INLINE_ITEMS: usize = 5;
const PREVIEW_ITEMS: usize = 3;

static EMPTY_PROPERTY: PropertyPresentation = PropertyPresentation {
    order: None,
    visible: None,
    advanced: false,
    display_name: None,
    input_type: None,
    min: None,
    max: None,
    step: None,
    images: Vec::new(),
    properties: BTreeMap::new(),
};

/// Presentation hints for every rendered config class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationManifest {
    #[serde(default)]
    pub configs: BTreeMap<String, ConfigPresentation>,
}

/// Presentation hints for one config class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPresentation {
    pub order: Option<f64>,
    pub visible: Option<bool>,
    #[serde(default)]
    pub advanced: bool,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub compact_nested_layout: bool,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyPresentation>,
}

/// Presentation hints for one property or nested child.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPresentation {
    pub order: Option<f64>,
    pub visible: Option<bool>,
    #[serde(default)]
    pub advanced: bool,
    pub display_name: Option<String>,
    pub input_type: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyPresentation>,
}

/// Illustration attached to a property: a bare URL or a described image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Url(String),
    Described {
        src: String,
        #[serde(default)]
        description: Option<String>,
    },
}

impl PresentationManifest {
    /// Parse a manifest document. `location` names it in error messages.
    pub fn from_json(location: &str, content: &str) -> crate::Result<Self> {
        serde_json::from_str(content).map_err(|e| crate::Error::InvalidDocument {
            location: location.to_string(),
            message: e.to_string(),
        })
    }

    pub fn config(&self, class_name: &str) -> Option<&ConfigPresentation> {
        self.configs.get(class_name)
    }

    /// Configs to render, in display order.
    ///
    /// Only configs listed in the manifest and not hidden are returned. Ties in
    /// `order` keep schema order.
    pub fn visible_configs<'a>(&self, schema: &'a SchemaModel) -> Vec<&'a ConfigDescriptor> {
        let mut configs: Vec<(&'a ConfigDescriptor, f64)> = schema
            .configs
            .iter()
            .filter_map(|c| {
                let hints = self.config(&c.class_name)?;
                hints
                    .is_visible()
                    .then(|| (c, hints.order.unwrap_or(DEFAULT_ORDER)))
            })
            .collect();
        configs.sort_by(|a, b| a.1.total_cmp(&b.1));
        configs.into_iter().map(|(c, _)| c).collect()
    }
}

impl ConfigPresentation {
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    /// Hints for a property, or empty hints when the manifest has none.
    pub fn property(&self, name: &str) -> &PropertyPresentation {
        self.properties.get(name).unwrap_or(&EMPTY_PROPERTY)
    }

    /// Visible properties of `config`, sorted by manifest order.
    pub fn ordered_properties<'a>(
        &self,
        config: &'a ConfigDescriptor,
    ) -> Vec<&'a PropertyDescriptor> {
        let mut props: Vec<(&'a PropertyDescriptor, f64)> = config
            .properties
            .iter()
            .filter_map(|p| {
                let hints = self.property(&p.name);
                hints
                    .is_visible()
                    .then(|| (p, hints.order.unwrap_or(DEFAULT_ORDER)))
            })
            .collect();
        props.sort_by(|a, b| a.1.total_cmp(&b.1));
        props.into_iter().map(|(p, _)| p).collect()
    }

    /// Heading for the section: manifest name, then schema display name.
    pub fn title<'a>(&'a self, config: &'a ConfigDescriptor) -> &'a str {
        self.display_name.as_deref().unwrap_or(&config.display_name)
    }
}

impl PropertyPresentation {
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    pub fn child(&self, name: &str) -> &PropertyPresentation {
        self.properties.get(name).unwrap_or(&EMPTY_PROPERTY)
    }

    /// Label for the input: manifest name, then the humanised property name.
    pub fn label(&self, property: &PropertyDescriptor) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| display_label(&property.name))
    }

    /// Visible children of a nested property, `Enabled` first.
    pub fn ordered_children<'a>(
        &self,
        property: &'a PropertyDescriptor,
    ) -> Vec<&'a PropertyDescriptor> {
        let mut children: Vec<&'a PropertyDescriptor> = property
            .children()
            .unwrap_or_default()
            .iter()
            .filter(|c| self.child(&c.name).is_visible())
            .collect();
        children.sort_by_key(|c| c.name != ENABLED_PROPERTY);
        children
    }

    /// Whether a nested group belongs to the advanced settings.
    ///
    /// A group is advanced when flagged, or when every visible child is.
    pub fn group_is_advanced(&self, property: &PropertyDescriptor) -> bool {
        self.advanced
            || !self
                .ordered_children(property)
                .iter()
                .any(|c| !self.child(&c.name).advanced)
    }

    /// Whether a numeric input should render as a bounded slider.
    pub fn slider_bounds(&self) -> Option<(f64, f64)> {
        if self.input_type.as_deref() != Some("slider") {
            return None;
        }
        Some((self.min?, self.max?))
    }
}

/// Humanise a property name: `maxHeight` -> `Max Height`.
pub fn display_label(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    let mut chars = spaced.chars();
    let capitalised = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    capitalised.trim().to_string()
}

/// Short text for a default value, eliding long arrays.
pub fn format_default(value: &Value) -> String {
    match value.as_list() {
        Some(items) if items.len() > MAX_INLINE_ITEMS => {
            let head: Vec<String> = items[..PREVIEW_ITEMS].iter().map(ToString::to_string).collect();
            format!("[{}, ... ({} items)]", head.join(", "), items.len())
        }
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PropertyType;
    use pretty_assertions::assert_eq;

    fn schema() -> SchemaModel {
        let json = r#"{
            "configs": [
                { "className": "Erosion", "displayName": "Erosion", "fileName": "erosion.json", "properties": [
                    { "name": "rate", "type": "float", "defaultValue": 0.5 },
                    { "name": "depth", "type": "int", "defaultValue": 2 },
                    { "name": "seed", "type": "int", "defaultValue": 7 }
                ] },
                { "className": "Rivers", "displayName": "Rivers", "fileName": "rivers.json", "properties": [] },
                { "className": "Hidden", "displayName": "Hidden", "fileName": "hidden.json", "properties": [] },
                { "className": "Unlisted", "displayName": "Unlisted", "fileName": "unlisted.json", "properties": [] }
            ]
        }"#;
        SchemaModel::from_json("schema.json", json).unwrap()
    }

    fn manifest() -> PresentationManifest {
        let json = r#"{
            "configs": {
                "Erosion": { "order": 2, "properties": {
                    "seed": { "order": 0 },
                    "depth": { "visible": false }
                } },
                "Rivers": { "order": 1, "displayName": "River Network" },
                "Hidden": { "visible": false }
            }
        }"#;
        PresentationManifest::from_json("manifest.json", json).unwrap()
    }

    #[test]
    fn test_visible_configs_filtered_and_sorted() {
        let schema = schema();
        let names: Vec<_> = manifest()
            .visible_configs(&schema)
            .iter()
            .map(|c| c.class_name.as_str())
            .collect();
        assert_eq!(names, vec!["Rivers", "Erosion"]);
    }

    #[test]
    fn test_ordered_properties_respect_order_and_visibility() {
        let schema = schema();
        let manifest = manifest();
        let erosion = schema.config("Erosion").unwrap();
        let names: Vec<_> = manifest
            .config("Erosion")
            .unwrap()
            .ordered_properties(erosion)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["seed", "rate"]);
    }

    #[test]
    fn test_title_prefers_manifest_name() {
        let schema = schema();
        let manifest = manifest();
        let rivers = schema.config("Rivers").unwrap();
        assert_eq!(manifest.config("Rivers").unwrap().title(rivers), "River Network");
    }

    #[test]
    fn test_enabled_child_sorted_first() {
        let prop = PropertyDescriptor::nested(
            "Wind",
            vec![
                PropertyDescriptor::new("speed", PropertyType::Int, Value::from(1)),
                PropertyDescriptor::new("Enabled", PropertyType::Bool, Value::from(true)),
                PropertyDescriptor::new("gust", PropertyType::Int, Value::from(2)),
            ],
        );
        let names: Vec<_> = EMPTY_PROPERTY
            .ordered_children(&prop)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Enabled", "speed", "gust"]);
    }

    #[test]
    fn test_group_advanced_when_all_children_advanced() {
        let prop = PropertyDescriptor::nested(
            "Wind",
            vec![PropertyDescriptor::new("speed", PropertyType::Int, Value::from(1))],
        );
        let hints: PropertyPresentation =
            serde_json::from_str(r#"{ "properties": { "speed": { "advanced": true } } }"#).unwrap();
        assert!(hints.group_is_advanced(&prop));
        assert!(!EMPTY_PROPERTY.group_is_advanced(&prop));
    }

    #[test]
    fn test_slider_bounds_need_min_and_max() {
        let slider: PropertyPresentation =
            serde_json::from_str(r#"{ "inputType": "slider", "min": 0, "max": 1 }"#).unwrap();
        let open: PropertyPresentation =
            serde_json::from_str(r#"{ "inputType": "slider", "min": 0 }"#).unwrap();
        assert_eq!(slider.slider_bounds(), Some((0.0, 1.0)));
        assert_eq!(open.slider_bounds(), None);
    }

    #[test]
    fn test_images_accept_urls_and_described_entries() {
        let hints: PropertyPresentation = serde_json::from_str(
            r#"{ "images": [ "a.png", { "src": "b.png", "description": "Bank cut" } ] }"#,
        )
        .unwrap();
        assert_eq!(hints.images[0], ImageRef::Url("a.png".into()));
        assert!(matches!(&hints.images[1], ImageRef::Described { src, .. } if src == "b.png"));
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("maxHeight"), "Max Height");
        assert_eq!(display_label("Wind"), "Wind");
        assert_eq!(display_label("rate"), "Rate");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn test_format_default() {
        assert_eq!(format_default(&Value::Null), "null");
        assert_eq!(format_default(&Value::from(vec![1_i64, 2, 3])), "[1, 2, 3]");
        assert_eq!(
            format_default(&Value::from(vec![1_i64, 2, 3, 4, 5, 6])),
            "[1, 2, 3, ... (6 items)]"
        );
        assert_eq!(format_default(&Value::from(0.25)), "0.25");
    }
}
