//! Persistence of the selected preset name between runs

use std::fs;
use std::path::{Path, PathBuf};

use cfged_fs::ConfigStore;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Key/value persistence for the one piece of state that survives a session.
pub trait SelectionStore: Send {
    /// The stored preset name, if any.
    fn load(&self) -> Result<Option<String>>;

    fn save(&mut self, name: &str) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectionState {
    selected_preset: Option<String>,
}

/// Stores `{ "selectedPreset": "<name>" }` in a state file.
///
/// The format follows the file extension, so `state.toml` works as well as
/// `state.json`.
#[derive(Debug, Clone)]
pub struct FileSelectionStore {
    path: PathBuf,
    store: ConfigStore,
}

impl FileSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            store: ConfigStore::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for FileSelectionStore {
    fn load(&self) -> Result<Option<String>> {
        let state: Option<SelectionState> = self.store.load_optional(&self.path)?;
        Ok(state.and_then(|s| s.selected_preset))
    }

    fn save(&mut self, name: &str) -> Result<()> {
        let state = SelectionState {
            selected_preset: Some(name.to_string()),
        };
        self.store.save(&self.path, &state)?;
        tracing::debug!(path = %self.path.display(), preset = %name, "saved preset selection");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(cfged_fs::Error::io(&self.path, e).into()),
        }
    }
}

/// In-memory selection, for tests and one-shot runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySelectionStore {
    selected: Option<String>,
}

impl MemorySelectionStore {
    pub fn with_selection(name: impl Into<String>) -> Self {
        Self {
            selected: Some(name.into()),
        }
    }
}

impl SelectionStore for MemorySelectionStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.selected.clone())
    }

    fn save(&mut self, name: &str) -> Result<()> {
        self.selected = Some(name.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.selected = None;
        Ok(())
    }
}
