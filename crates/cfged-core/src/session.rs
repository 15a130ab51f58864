//! The editor session: one owner for all mutable editing state

use std::sync::Arc;

use cfged_schema::{DEFAULT_PRESET, PropertyPath, Scalar, SchemaModel, Value};

use crate::document::{DocumentOptions, DocumentSet, build_documents};
use crate::preset::resolve;
use crate::selection::SelectionStore;
use crate::store::ValueStore;
use crate::tree::ValueTree;
use crate::{Error, Result};

/// Callbacks a renderer uses to report edits.
pub trait ValueChangeHandler {
    /// A leaf value changed. `path` is `name` or `parent.child`.
    fn on_value_changed(&mut self, class_name: &str, path: &str, value: Value) -> Result<()>;

    /// One element of an array value changed.
    fn on_array_element_changed(
        &mut self,
        class_name: &str,
        path: &str,
        index: usize,
        value: Scalar,
    ) -> Result<()>;
}

/// Outcome of a preset switch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetSwitch {
    /// The preset is now active and persisted.
    Applied,
    /// No such preset; nothing changed.
    Unknown,
}

/// Schema handle, value store, active preset and selection store.
pub struct EditorSession {
    schema: Arc<SchemaModel>,
    store: ValueStore,
    active_preset: String,
    selection: Box<dyn SelectionStore>,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("active_preset", &self.active_preset)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl EditorSession {
    /// Seed the value store and apply the persisted preset selection.
    ///
    /// A stored name that no longer matches a preset falls back to the schema
    /// baseline and the stale selection is cleared. Neither that nor an
    /// unreadable selection store prevents the session from starting.
    pub fn start(schema: Arc<SchemaModel>, mut selection: Box<dyn SelectionStore>) -> Result<Self> {
        let stored = selection.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not read stored preset selection");
            None
        });
        let requested = stored.unwrap_or_else(|| DEFAULT_PRESET.to_string());

        let mut store = ValueStore::new(&schema);
        let active_preset = match resolve(&schema.presets, &requested) {
            Ok(resolution) => {
                store.rebase(&schema, resolution.overrides());
                resolution.name().to_string()
            }
            Err(Error::PresetNotFound { name }) => {
                tracing::warn!(preset = %name, "stored preset no longer exists; using defaults");
                if let Err(e) = selection.clear() {
                    tracing::warn!(error = %e, "could not clear stale preset selection");
                }
                DEFAULT_PRESET.to_string()
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(preset = %active_preset, configs = schema.configs.len(), "editor session started");
        Ok(Self {
            schema,
            store,
            active_preset,
            selection,
        })
    }

    pub fn schema(&self) -> &SchemaModel {
        &self.schema
    }

    pub fn defaults(&self) -> &ValueTree {
        self.store.defaults()
    }

    pub fn current(&self) -> &ValueTree {
        self.store.current()
    }

    pub fn active_preset(&self) -> &str {
        &self.active_preset
    }

    /// Switch to `name`, discarding edits.
    ///
    /// An unknown name leaves values, the active preset and the stored
    /// selection untouched.
    pub fn switch_preset(&mut self, name: &str) -> Result<PresetSwitch> {
        let resolution = match resolve(&self.schema.presets, name) {
            Ok(resolution) => resolution,
            Err(Error::PresetNotFound { name }) => {
                tracing::warn!(preset = %name, "unknown preset; selection unchanged");
                return Ok(PresetSwitch::Unknown);
            }
            Err(e) => return Err(e),
        };

        self.selection.save(resolution.name())?;
        self.store.rebase(&self.schema, resolution.overrides());
        self.active_preset = resolution.name().to_string();

        tracing::debug!(preset = %self.active_preset, "switched preset");
        Ok(PresetSwitch::Applied)
    }

    /// Restore every edited value to the active preset's defaults.
    pub fn reset_to_defaults(&mut self) {
        self.store.reset_to_defaults(&self.schema);
    }

    /// Write a value at a schema-declared path.
    pub fn set_value(&mut self, class_name: &str, path: &str, value: Value) -> Result<()> {
        let path = self.checked_path(class_name, path)?;
        self.store.set_value(class_name, &path, value)
    }

    /// Write one array element at a schema-declared path.
    pub fn set_array_element(
        &mut self,
        class_name: &str,
        path: &str,
        index: usize,
        value: Scalar,
    ) -> Result<()> {
        let path = self.checked_path(class_name, path)?;
        self.store.set_array_element(class_name, &path, index, value)
    }

    /// Project the current values into one document per class.
    pub fn documents(&self, options: DocumentOptions) -> DocumentSet {
        build_documents(&self.schema, self.store.current(), options)
    }

    fn checked_path(&self, class_name: &str, path: &str) -> Result<PropertyPath> {
        let config = self
            .schema
            .config(class_name)
            .ok_or_else(|| Error::UnknownClass {
                class_name: class_name.to_string(),
            })?;
        let parsed: PropertyPath = path.parse()?;
        if config.resolve(&parsed).is_none() {
            return Err(Error::UnknownProperty {
                class_name: class_name.to_string(),
                path: path.to_string(),
            });
        }
        Ok(parsed)
    }
}

impl ValueChangeHandler for EditorSession {
    fn on_value_changed(&mut self, class_name: &str, path: &str, value: Value) -> Result<()> {
        tracing::debug!(class = %class_name, path = %path, value = %value, "value changed");
        self.set_value(class_name, path, value)
    }

    fn on_array_element_changed(
        &mut self,
        class_name: &str,
        path: &str,
        index: usize,
        value: Scalar,
    ) -> Result<()> {
        tracing::debug!(class = %class_name, path = %path, index, value = %value, "array element changed");
        self.set_array_element(class_name, path, index, value)
    }
}
