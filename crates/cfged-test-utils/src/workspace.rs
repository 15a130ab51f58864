//! [`TestWorkspace`] builder for end-to-end scenarios

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::schema::{TERRAIN_MANIFEST_JSON, TERRAIN_SCHEMA_JSON};

/// A temporary project directory laid out the way `cfged` expects by default:
/// `data/config-metadata.json`, `data/config-manifest.json`, and an optional
/// `cfged.toml`.
///
/// # Example
///
/// ```rust,no_run
/// use cfged_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::terrain();
/// ws.write_config("[archive]\nfolder = \"Out\"\n");
/// ws.assert_file_exists("cfged.toml");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// An empty directory.
    pub fn empty() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A directory holding the terrain schema and manifest.
    pub fn terrain() -> Self {
        let ws = Self::empty();
        ws.write("data/config-metadata.json", TERRAIN_SCHEMA_JSON);
        ws.write("data/config-manifest.json", TERRAIN_MANIFEST_JSON);
        ws
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }

    /// Write the project `cfged.toml`.
    pub fn write_config(&self, toml: &str) {
        self.write("cfged.toml", toml);
    }

    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(
            !path.exists(),
            "Expected file NOT to exist: {}",
            path.display()
        );
    }
}
