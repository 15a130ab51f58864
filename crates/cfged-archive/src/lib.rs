//! Archive packaging for the cfged configuration editor.
//!
//! [`ZipPackager`] turns a [`cfged_core::DocumentSet`] into ZIP bytes with one
//! pretty-printed JSON file per config class under a single folder. An
//! [`ArchiveSink`] delivers those bytes; [`DirectorySink`] writes them to disk.
//! [`export_archive`] ties the two together and is the only export entry point.

pub mod error;
pub mod packager;
pub mod sink;

pub use error::{Error, Result};
pub use packager::{DEFAULT_ARCHIVE_NAME, DEFAULT_COMPRESSION_LEVEL, DEFAULT_FOLDER, ZipPackager};
pub use sink::{ArchiveSink, DirectorySink, MemorySink};

use std::path::PathBuf;

use cfged_core::DocumentSet;

/// Package `documents` and deliver the archive as `archive_name`.
///
/// Returns where the sink put the archive.
pub fn export_archive(
    documents: &DocumentSet,
    packager: &ZipPackager,
    sink: &mut dyn ArchiveSink,
    archive_name: &str,
) -> Result<PathBuf> {
    let bytes = packager.package(documents)?;
    let location = sink.deliver(archive_name, &bytes)?;
    tracing::info!(
        archive = %location.display(),
        documents = documents.len(),
        bytes = bytes.len(),
        "exported config archive"
    );
    Ok(location)
}
