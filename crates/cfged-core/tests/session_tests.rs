//! Editor session behaviour across preset switches, edits and restarts

use std::sync::Arc;

use cfged_core::{
    DocumentOptions, EditorSession, FileSelectionStore, MemorySelectionStore, PresetSwitch,
    SelectionStore, ValueChangeHandler, ValueTree,
};
use cfged_schema::{Overrides, PropertyPath, SchemaModel, Value};
use cfged_test_utils::{erosion_schema, terrain_schema};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

fn start(schema: SchemaModel, selection: impl SelectionStore + 'static) -> EditorSession {
    EditorSession::start(Arc::new(schema), Box::new(selection)).unwrap()
}

fn get<'a>(tree: &'a ValueTree, class_name: &str, path: &str) -> Option<&'a Value> {
    tree.get(class_name, &path.parse::<PropertyPath>().unwrap())
}

#[test]
fn test_defaults_round_trip_through_documents() {
    let session = start(terrain_schema(), MemorySelectionStore::default());
    let docs = session.documents(DocumentOptions {
        include_descriptions: false,
    });

    assert_eq!(
        docs.get("erosion.json").unwrap(),
        &json!({
            "rate": 0.5,
            "iterations": 50,
            "layers": [1, 2, 3],
            "Wind": { "Enabled": true, "speed": 10, "direction": [0.0, 1.0] }
        })
    );
    assert_eq!(
        docs.get("rivers.json").unwrap(),
        &json!({ "enabled": false, "name": "main", "widths": [1.5, 2.5] })
    );
}

#[test]
fn test_switch_and_back_restores_baseline() {
    let schema = terrain_schema();
    let baseline = ValueTree::from_schema(&schema);
    let mut session = start(schema, MemorySelectionStore::default());

    assert_eq!(session.switch_preset("arid").unwrap(), PresetSwitch::Applied);
    assert_eq!(get(session.current(), "Erosion", "rate"), Some(&Value::from(0.9)));
    assert_eq!(get(session.current(), "Erosion", "Wind.speed"), Some(&Value::from(40)));
    assert_eq!(get(session.current(), "Erosion", "iterations"), Some(&Value::from(50)));

    session
        .on_value_changed("Erosion", "iterations", Value::from(3))
        .unwrap();

    assert_eq!(session.switch_preset("default").unwrap(), PresetSwitch::Applied);
    assert_eq!(session.current(), &baseline);
    assert_eq!(session.defaults(), &baseline);
}

#[test]
fn test_switch_discards_edits() {
    let mut session = start(terrain_schema(), MemorySelectionStore::default());
    session
        .on_value_changed("Rivers", "name", Value::from("delta"))
        .unwrap();

    session.switch_preset("wet").unwrap();
    assert_eq!(get(session.current(), "Rivers", "name"), Some(&Value::from("main")));
    assert_eq!(get(session.current(), "Rivers", "enabled"), Some(&Value::from(true)));
    assert_eq!(
        get(session.current(), "Rivers", "widths"),
        Some(&Value::from(vec![3.0]))
    );
}

#[test]
fn test_nested_override_merges_child_by_child() {
    let mut tree = ValueTree::from_schema(&terrain_schema());
    let overrides: Overrides =
        serde_json::from_value(json!({ "Erosion": { "Wind": { "speed": 9 } } })).unwrap();
    tree.apply_overrides(&overrides);

    let wind = tree.property("Erosion", "Wind").unwrap().as_nested().unwrap();
    assert_eq!(wind["speed"], Value::from(9));
    assert_eq!(wind["Enabled"], Value::from(true));
    assert_eq!(wind["direction"], Value::from(vec![0.0, 1.0]));
}

#[test]
fn test_erosion_edit_and_reset_scenario() {
    let mut session = start(erosion_schema(), MemorySelectionStore::default());
    let original = session.documents(DocumentOptions::default());
    assert_eq!(
        original.get("erosion.json").unwrap(),
        &json!({ "rate": 0.5, "Wind": { "speed": 10 } })
    );

    session.on_value_changed("Erosion", "rate", Value::from(0.8)).unwrap();
    session
        .on_value_changed("Erosion", "Wind.speed", Value::from(25))
        .unwrap();
    let edited = session.documents(DocumentOptions::default());
    assert_eq!(
        edited.get("erosion.json").unwrap(),
        &json!({ "rate": 0.8, "Wind": { "speed": 25 } })
    );

    session.reset_to_defaults();
    assert_eq!(session.documents(DocumentOptions::default()), original);
}

#[test]
fn test_unknown_preset_switch_changes_nothing() {
    let mut session = start(terrain_schema(), MemorySelectionStore::with_selection("arid"));
    session.on_value_changed("Erosion", "rate", Value::from(0.1)).unwrap();
    let before = session.current().clone();

    assert_eq!(session.switch_preset("tundra").unwrap(), PresetSwitch::Unknown);
    assert_eq!(session.active_preset(), "arid");
    assert_eq!(session.current(), &before);
}

#[test]
fn test_persisted_selection_is_applied_at_startup() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("state.json");

    {
        let mut session = start(terrain_schema(), FileSelectionStore::new(&state));
        session.switch_preset("wet").unwrap();
    }

    let session = start(terrain_schema(), FileSelectionStore::new(&state));
    assert_eq!(session.active_preset(), "wet");
    assert_eq!(get(session.current(), "Erosion", "iterations"), Some(&Value::from(80)));
}

#[test]
fn test_stale_selection_falls_back_and_is_cleared() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("state.json");
    std::fs::write(&state, r#"{ "selectedPreset": "retired" }"#).unwrap();

    let schema = terrain_schema();
    let baseline = ValueTree::from_schema(&schema);
    let session = start(schema, FileSelectionStore::new(&state));

    assert_eq!(session.active_preset(), "default");
    assert_eq!(session.current(), &baseline);
    assert_eq!(FileSelectionStore::new(&state).load().unwrap(), None);
}

#[test]
fn test_unreadable_selection_starts_on_default() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("state.json");
    std::fs::write(&state, "not json").unwrap();

    let session = start(terrain_schema(), FileSelectionStore::new(&state));
    assert_eq!(session.active_preset(), "default");
}

#[test]
fn test_sessions_are_independent() {
    let mut a = start(erosion_schema(), MemorySelectionStore::default());
    let b = start(erosion_schema(), MemorySelectionStore::default());

    a.on_value_changed("Erosion", "rate", Value::from(0.7)).unwrap();
    assert_eq!(get(b.current(), "Erosion", "rate"), Some(&Value::from(0.5)));
}
