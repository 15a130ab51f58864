//! ZIP packaging of config documents

use std::io::{Cursor, Write};

use cfged_core::DocumentSet;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::{Error, Result};

pub const DEFAULT_FOLDER: &str = "Watersheds";
pub const DEFAULT_ARCHIVE_NAME: &str = "WatershedsConfig.zip";
pub const DEFAULT_COMPRESSION_LEVEL: i64 = 6;

/// Writes every document to `<folder>/<fileName>` in a DEFLATE archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipPackager {
    folder: String,
    compression_level: i64,
}

impl Default for ZipPackager {
    fn default() -> Self {
        Self {
            folder: DEFAULT_FOLDER.to_string(),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl ZipPackager {
    pub fn new(folder: impl Into<String>, compression_level: i64) -> Result<Self> {
        if !(0..=9).contains(&compression_level) {
            return Err(Error::InvalidCompressionLevel {
                level: compression_level,
            });
        }
        Ok(Self {
            folder: folder.into(),
            compression_level,
        })
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn compression_level(&self) -> i64 {
        self.compression_level
    }

    /// Archive path of a document.
    pub fn entry_name(&self, file_name: &str) -> String {
        format!("{}/{}", self.folder, file_name)
    }

    /// Build the archive in memory.
    ///
    /// The folder entry is always written, so an empty set yields an archive
    /// holding only the folder.
    pub fn package(&self, documents: &DocumentSet) -> Result<Vec<u8>> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(self.compression_level));

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.add_directory(format!("{}/", self.folder), SimpleFileOptions::default())?;

        for (file_name, document) in documents.iter() {
            let text = serde_json::to_string_pretty(document)?;
            zip.start_file(self.entry_name(file_name), options)?;
            zip.write_all(text.as_bytes())?;
            tracing::debug!(entry = %file_name, bytes = text.len(), "packaged document");
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}
