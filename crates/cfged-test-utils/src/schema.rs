//! Canned schema documents
//!
//! `erosion` is the smallest useful schema: one class with one scalar and one
//! nested property, no presets. `terrain` covers every value shape and carries
//! two presets.

use cfged_schema::{PresentationManifest, SchemaModel};

pub const EROSION_SCHEMA_JSON: &str = r#"{
  "configs": [
    {
      "className": "Erosion",
      "displayName": "Erosion",
      "fileName": "erosion.json",
      "properties": [
        { "name": "rate", "type": "float", "defaultValue": 0.5 },
        {
          "name": "Wind",
          "type": "WindSettings",
          "isNested": true,
          "nestedProperties": [
            { "name": "speed", "type": "int", "defaultValue": 10 }
          ]
        }
      ]
    }
  ]
}"#;

pub const TERRAIN_SCHEMA_JSON: &str = r#"{
  "configs": [
    {
      "className": "Erosion",
      "displayName": "Erosion",
      "description": "Hydraulic and wind erosion",
      "fileName": "erosion.json",
      "properties": [
        { "name": "rate", "type": "float", "defaultValue": 0.5, "description": "Material removed per step" },
        { "name": "iterations", "type": "int", "defaultValue": 50 },
        { "name": "layers", "type": "int[]", "defaultValue": [1, 2, 3] },
        {
          "name": "Wind",
          "type": "WindSettings",
          "description": "Wind erosion",
          "isNested": true,
          "nestedProperties": [
            { "name": "Enabled", "type": "bool", "defaultValue": true },
            { "name": "speed", "type": "int", "defaultValue": 10, "description": "Wind speed in m/s" },
            { "name": "direction", "type": "float[]", "defaultValue": [0.0, 1.0] }
          ]
        }
      ]
    },
    {
      "className": "Rivers",
      "displayName": "Rivers",
      "fileName": "rivers.json",
      "properties": [
        { "name": "enabled", "type": "bool", "defaultValue": false },
        { "name": "name", "type": "string", "defaultValue": "main" },
        { "name": "widths", "type": "float[]", "defaultValue": [1.5, 2.5] }
      ]
    }
  ],
  "presets": [
    {
      "name": "arid",
      "displayName": "Arid",
      "description": "Strong wind, fast erosion",
      "overrides": {
        "Erosion": { "rate": 0.9, "Wind": { "speed": 40 } }
      }
    },
    {
      "name": "wet",
      "displayName": "Wet",
      "overrides": {
        "Erosion": { "iterations": 80 },
        "Rivers": { "enabled": true, "widths": [3.0] }
      }
    }
  ]
}"#;

pub const TERRAIN_MANIFEST_JSON: &str = r#"{
  "configs": {
    "Rivers": {
      "order": 1,
      "properties": {
        "name": { "visible": false }
      }
    },
    "Erosion": {
      "order": 2,
      "displayName": "Terrain Erosion",
      "properties": {
        "rate": { "order": 1, "displayName": "Erosion Rate", "inputType": "slider", "min": 0, "max": 1, "step": 0.05 },
        "iterations": { "order": 2, "advanced": true },
        "layers": { "order": 3, "advanced": true },
        "Wind": {
          "order": 4,
          "properties": {
            "speed": { "order": 1 },
            "direction": { "order": 2, "advanced": true }
          }
        }
      }
    }
  }
}"#;

/// One class, `Erosion`: `rate` (float 0.5) and `Wind.speed` (int 10).
pub fn erosion_schema() -> SchemaModel {
    parse_schema(EROSION_SCHEMA_JSON)
}

/// Two classes, `Erosion` and `Rivers`, with presets `arid` and `wet`.
pub fn terrain_schema() -> SchemaModel {
    parse_schema(TERRAIN_SCHEMA_JSON)
}

/// Presentation manifest matching [`terrain_schema`].
pub fn terrain_manifest() -> PresentationManifest {
    PresentationManifest::from_json("terrain-manifest.json", TERRAIN_MANIFEST_JSON)
        .unwrap_or_else(|e| panic!("terrain manifest fixture is invalid: {e}"))
}

fn parse_schema(json: &str) -> SchemaModel {
    SchemaModel::from_json("fixture-schema.json", json)
        .unwrap_or_else(|e| panic!("schema fixture is invalid: {e}"))
}
