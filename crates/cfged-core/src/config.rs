//! Layered editor configuration
//!
//! Configuration is resolved from, in order (later wins):
//! 1. Built-in defaults
//! 2. Global config (`<config_dir>/cfged/config.toml`)
//! 3. Project config (`cfged.toml` in the project directory)
//! 4. Command-line flags and `CFGED_*` environment variables, applied by the
//!    caller with [`EditorConfig::apply`]
//!
//! Missing files are skipped. A file that fails to parse is an error.

use std::path::{Path, PathBuf};

use cfged_fs::ConfigStore;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::document::DocumentOptions;

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "cfged.toml";

/// Archive packaging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveSettings {
    /// Folder inside the archive holding every document.
    pub folder: String,
    /// File name of the delivered archive.
    pub file_name: String,
    /// DEFLATE level, 0-9.
    pub compression_level: i64,
    pub include_descriptions: bool,
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            folder: "Watersheds".to_string(),
            file_name: "WatershedsConfig.zip".to_string(),
            compression_level: 6,
            include_descriptions: true,
        }
    }
}

/// The effective editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Schema document.
    pub schema: PathBuf,
    /// Presentation manifest.
    pub manifest: PathBuf,
    /// Persisted preset selection.
    pub state: PathBuf,
    /// Directory the archive is written to.
    pub output_dir: PathBuf,
    pub archive: ArchiveSettings,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("data/config-metadata.json"),
            manifest: PathBuf::from("data/config-manifest.json"),
            state: PathBuf::from(".cfged/state.json"),
            output_dir: PathBuf::from("."),
            archive: ArchiveSettings::default(),
        }
    }
}

/// One partial configuration source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub schema: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub state: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub archive: ArchiveLayer,
}

/// The `[archive]` table of a [`ConfigLayer`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveLayer {
    pub folder: Option<String>,
    pub file_name: Option<String>,
    pub compression_level: Option<i64>,
    pub include_descriptions: Option<bool>,
}

impl EditorConfig {
    /// Overlay every field `layer` sets.
    pub fn apply(&mut self, layer: ConfigLayer) {
        if let Some(schema) = layer.schema {
            self.schema = schema;
        }
        if let Some(manifest) = layer.manifest {
            self.manifest = manifest;
        }
        if let Some(state) = layer.state {
            self.state = state;
        }
        if let Some(output_dir) = layer.output_dir {
            self.output_dir = output_dir;
        }

        let archive = layer.archive;
        if let Some(folder) = archive.folder {
            self.archive.folder = folder;
        }
        if let Some(file_name) = archive.file_name {
            self.archive.file_name = file_name;
        }
        if let Some(level) = archive.compression_level {
            self.archive.compression_level = level;
        }
        if let Some(include) = archive.include_descriptions {
            self.archive.include_descriptions = include;
        }
    }

    /// Resolve relative paths against `base`.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        self.schema = base.join(&self.schema);
        self.manifest = base.join(&self.manifest);
        self.state = base.join(&self.state);
        self.output_dir = base.join(&self.output_dir);
        self
    }

    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            include_descriptions: self.archive.include_descriptions,
        }
    }
}

/// Resolves [`EditorConfig`] from the global and project config files.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    project_dir: PathBuf,
    /// Replaces `dirs::config_dir()/cfged` when set.
    global_config_dir_override: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            global_config_dir_override: None,
        }
    }

    /// Use `global_config_dir` instead of the platform config directory.
    pub fn with_global_config_dir(
        project_dir: impl Into<PathBuf>,
        global_config_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_dir: project_dir.into(),
            global_config_dir_override: Some(global_config_dir.into()),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.global_config_dir_override {
            return Some(dir.clone());
        }
        dirs::config_dir().map(|d| d.join("cfged"))
    }

    /// Merge the built-in defaults with the global and project layers.
    pub fn resolve(&self) -> Result<EditorConfig> {
        let store = ConfigStore::new();
        let mut config = EditorConfig::default();

        if let Some(global_dir) = self.global_config_dir() {
            let global_path = global_dir.join("config.toml");
            match store.load_optional::<ConfigLayer>(&global_path)? {
                Some(layer) => {
                    tracing::debug!(?global_path, "loading global config");
                    config.apply(layer);
                }
                None => tracing::debug!(?global_path, "no global config; skipping"),
            }
        }

        let project_path = self.project_dir.join(PROJECT_CONFIG_FILE);
        if let Some(layer) = store.load_optional::<ConfigLayer>(&project_path)? {
            tracing::debug!(?project_path, "loading project config");
            config.apply(layer);
        }

        Ok(config)
    }
}
