//! Delivery of finished archives

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Destination for a finished archive.
pub trait ArchiveSink {
    /// Store `bytes` under `archive_name` and return where they went.
    fn deliver(&mut self, archive_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Writes archives into a directory, replacing any previous file atomically.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArchiveSink for DirectorySink {
    fn deliver(&mut self, archive_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let plain_name = Path::new(archive_name)
            .file_name()
            .is_some_and(|n| n == archive_name);
        if !plain_name {
            return Err(Error::InvalidArchiveName {
                name: archive_name.to_string(),
            });
        }

        let path = self.dir.join(archive_name);
        cfged_fs::write_atomic(&path, bytes)?;
        Ok(path)
    }
}

/// Keeps delivered archives in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub archives: Vec<(String, Vec<u8>)>,
}

impl ArchiveSink for MemorySink {
    fn deliver(&mut self, archive_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.archives.push((archive_name.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(archive_name))
    }
}
