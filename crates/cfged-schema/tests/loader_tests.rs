//! Integration tests for loading schema sources from disk

use cfged_schema::{Error, FileFetcher, PropertyType, Value, load_sources};
use std::fs;
use tempfile::TempDir;

const SCHEMA: &str = r#"{
    "configs": [
        {
            "className": "Erosion",
            "displayName": "Erosion",
            "fileName": "erosion.json",
            "properties": [
                { "name": "rate", "type": "float", "defaultValue": 0.5, "description": "Material removed per step" },
                { "name": "Wind", "type": "WindSettings", "isNested": true, "nestedProperties": [
                    { "name": "speed", "type": "int", "defaultValue": 10 }
                ] }
            ]
        }
    ],
    "presets": [
        { "name": "arid", "displayName": "Arid", "overrides": { "Erosion": { "Wind": { "speed": 40 } } } }
    ]
}"#;

const MANIFEST: &str = r#"{ "configs": { "Erosion": { "order": 1 } } }"#;

fn write_sources(temp: &TempDir, schema: &str, manifest: Option<&str>) {
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("config-metadata.json"), schema).unwrap();
    if let Some(manifest) = manifest {
        fs::write(data.join("config-manifest.json"), manifest).unwrap();
    }
}

#[tokio::test]
async fn test_load_from_directory() {
    let temp = TempDir::new().unwrap();
    write_sources(&temp, SCHEMA, Some(MANIFEST));

    let fetcher = FileFetcher::new(temp.path());
    let loaded = load_sources(&fetcher, "data/config-metadata.json", "data/config-manifest.json")
        .await
        .unwrap();

    let erosion = loaded.schema.config("Erosion").unwrap();
    assert_eq!(erosion.properties[0].property_type, PropertyType::Float);
    assert_eq!(erosion.properties[0].default_value, Value::from(0.5));
    assert_eq!(loaded.schema.preset("arid").unwrap().display_name, "Arid");
    assert_eq!(loaded.manifest.config("Erosion").unwrap().order, Some(1.0));
}

#[tokio::test]
async fn test_missing_schema_is_load_failure() {
    let temp = TempDir::new().unwrap();

    let fetcher = FileFetcher::new(temp.path());
    let err = load_sources(&fetcher, "data/config-metadata.json", "data/config-manifest.json")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::LoadFailed { .. }));
    assert!(err.to_string().starts_with("Failed to load data/config-"));
}

#[tokio::test]
async fn test_malformed_schema_is_invalid_document() {
    let temp = TempDir::new().unwrap();
    write_sources(&temp, r#"{ "configs": [ { "className": 3 } ] }"#, Some(MANIFEST));

    let fetcher = FileFetcher::new(temp.path());
    let err = load_sources(&fetcher, "data/config-metadata.json", "data/config-manifest.json")
        .await
        .unwrap_err();

    match err {
        Error::InvalidDocument { location, .. } => {
            assert_eq!(location, "data/config-metadata.json")
        }
        other => panic!("expected invalid document, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_leaf_type_is_kept() {
    let temp = TempDir::new().unwrap();
    let schema = r#"{ "configs": [ { "className": "A", "fileName": "a.json", "properties": [
        { "name": "curve", "type": "AnimationCurve", "defaultValue": [0, 1] }
    ] } ] }"#;
    write_sources(&temp, schema, Some(MANIFEST));

    let fetcher = FileFetcher::new(temp.path());
    let loaded = load_sources(&fetcher, "data/config-metadata.json", "data/config-manifest.json")
        .await
        .unwrap();

    let prop = &loaded.schema.configs[0].properties[0];
    assert_eq!(prop.property_type, PropertyType::Other("AnimationCurve".into()));
}

#[tokio::test]
async fn test_object_defaults_do_not_abort_loading() {
    let schema = r#"{
        "configs": [
            {
                "className": "Erosion",
                "fileName": "erosion.json",
                "properties": [
                    { "name": "Wind", "type": "WindSettings", "isNested": true, "defaultValue": { "speed": 10 }, "nestedProperties": [
                        { "name": "speed", "type": "int", "defaultValue": 10 }
                    ] },
                    { "name": "falloff", "type": "AnimationCurve", "defaultValue": { "keys": [] } }
                ]
            }
        ]
    }"#;
    let temp = TempDir::new().unwrap();
    write_sources(&temp, schema, Some(MANIFEST));

    let fetcher = FileFetcher::new(temp.path());
    let loaded = load_sources(&fetcher, "data/config-metadata.json", "data/config-manifest.json")
        .await
        .unwrap();

    let erosion = loaded.schema.config("Erosion").unwrap();
    let wind = erosion.property("Wind").unwrap();
    assert_eq!(wind.child("speed").unwrap().default_value, Value::from(10));
    let falloff = erosion.property("falloff").unwrap();
    assert_eq!(falloff.property_type, PropertyType::Other("AnimationCurve".into()));
    assert_eq!(falloff.default_value, Value::Null);
}
