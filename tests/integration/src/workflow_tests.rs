//! End-to-end editing workflows
//!
//! Each test drives the library stack the way the CLI does: resolve the
//! project configuration, load both source documents, start a session on a
//! file-backed selection, edit, and export an archive to disk.

use std::io::{Cursor, Read};
use std::sync::Arc;

use cfged_archive::{DirectorySink, ZipPackager, export_archive};
use cfged_core::{
    ConfigResolver, EditorConfig, EditorSession, FileSelectionStore, PresetSwitch,
    ValueChangeHandler,
};
use cfged_schema::{FileFetcher, LoadedSources, Scalar, Value, load_sources};
use cfged_test_utils::{TERRAIN_MANIFEST_JSON, TERRAIN_SCHEMA_JSON, TestWorkspace};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Resolve the workspace config with an empty global layer.
fn resolve(ws: &TestWorkspace, global: &TempDir) -> EditorConfig {
    ConfigResolver::with_global_config_dir(ws.root(), global.path())
        .resolve()
        .unwrap()
        .rooted_at(ws.root())
}

async fn load(config: &EditorConfig) -> LoadedSources {
    load_sources(
        &FileFetcher::new(""),
        &config.schema.to_string_lossy(),
        &config.manifest.to_string_lossy(),
    )
    .await
    .unwrap()
}

fn start(config: &EditorConfig, sources: LoadedSources) -> EditorSession {
    EditorSession::start(
        Arc::new(sources.schema),
        Box::new(FileSelectionStore::new(&config.state)),
    )
    .unwrap()
}

fn export(session: &EditorSession, config: &EditorConfig) -> std::path::PathBuf {
    let packager =
        ZipPackager::new(&config.archive.folder, config.archive.compression_level).unwrap();
    let mut sink = DirectorySink::new(&config.output_dir);
    export_archive(
        &session.documents(config.document_options()),
        &packager,
        &mut sink,
        &config.archive.file_name,
    )
    .unwrap()
}

fn entry(archive: &std::path::Path, name: &str) -> serde_json::Value {
    let bytes = std::fs::read(archive).unwrap();
    let mut zip = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut text = String::new();
    zip.by_name(name).unwrap().read_to_string(&mut text).unwrap();
    serde_json::from_str(&text).unwrap()
}

// =============================================================================
// Workflows
// =============================================================================

#[tokio::test]
async fn test_edit_and_export_defaults_layout() {
    let ws = TestWorkspace::terrain();
    let global = TempDir::new().unwrap();
    let config = resolve(&ws, &global);
    let mut session = start(&config, load(&config).await);

    session
        .on_value_changed("Erosion", "rate", Value::from(0.8))
        .unwrap();
    session
        .on_value_changed("Erosion", "Wind.speed", Value::from("25"))
        .unwrap();
    session
        .on_array_element_changed("Erosion", "layers", 0, Scalar::Float(9.6))
        .unwrap();

    let archive = export(&session, &config);
    assert_eq!(archive, ws.path("WatershedsConfig.zip"));

    assert_eq!(
        entry(&archive, "Watersheds/erosion.json"),
        json!({
            "rate": 0.8,
            "rateDescription": "Material removed per step",
            "iterations": 50,
            "layers": [10, 2, 3],
            "Wind": {
                "Enabled": true,
                "speed": 25,
                "speedDescription": "Wind speed in m/s",
                "direction": [0.0, 1.0]
            },
            "WindDescription": "Wind erosion"
        })
    );
}

#[tokio::test]
async fn test_preset_choice_survives_restart() {
    let ws = TestWorkspace::terrain();
    let global = TempDir::new().unwrap();
    let config = resolve(&ws, &global);

    let mut first = start(&config, load(&config).await);
    assert_eq!(first.switch_preset("wet").unwrap(), PresetSwitch::Applied);
    first
        .on_value_changed("Rivers", "name", Value::from("delta"))
        .unwrap();
    drop(first);

    let second = start(&config, load(&config).await);
    assert_eq!(second.active_preset(), "wet");

    let archive = export(&second, &config);
    let rivers = entry(&archive, "Watersheds/rivers.json");
    assert_eq!(rivers, json!({ "enabled": true, "name": "main", "widths": [3.0] }));
}

#[tokio::test]
async fn test_project_config_redirects_everything() {
    let ws = TestWorkspace::empty();
    ws.write("schema/meta.json", TERRAIN_SCHEMA_JSON);
    ws.write("schema/manifest.json", TERRAIN_MANIFEST_JSON);
    ws.write_config(
        r#"
schema = "schema/meta.json"
manifest = "schema/manifest.json"
state = "state/selection.yaml"
output_dir = "out"

[archive]
folder = "Terrain"
file_name = "terrain.zip"
compression_level = 1
include_descriptions = false
"#,
    );
    let global = TempDir::new().unwrap();
    let config = resolve(&ws, &global);

    let mut session = start(&config, load(&config).await);
    session.switch_preset("arid").unwrap();
    ws.assert_file_exists("state/selection.yaml");
    assert!(ws.read("state/selection.yaml").contains("selectedPreset: arid"));

    let archive = export(&session, &config);
    assert_eq!(archive, ws.path("out/terrain.zip"));
    let erosion = entry(&archive, "Terrain/erosion.json");
    assert_eq!(erosion["rate"], 0.9);
    assert!(erosion.get("rateDescription").is_none());
}

#[tokio::test]
async fn test_missing_manifest_prevents_session() {
    let ws = TestWorkspace::empty();
    ws.write("data/config-metadata.json", TERRAIN_SCHEMA_JSON);
    let global = TempDir::new().unwrap();
    let config = resolve(&ws, &global);

    let err = load_sources(
        &FileFetcher::new(""),
        &config.schema.to_string_lossy(),
        &config.manifest.to_string_lossy(),
    )
    .await
    .unwrap_err();
    assert!(
        err.to_string().starts_with("Failed to load "),
        "unexpected error: {err}"
    );
    assert!(err.to_string().contains("config-manifest.json"));
    ws.assert_file_not_exists(".cfged/state.json");
}
