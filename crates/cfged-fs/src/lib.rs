//! Filesystem helpers for cfged
//!
//! Atomic writes for the archive and the persisted preset selection, and a
//! format-agnostic store for configuration files.

pub mod error;
pub mod io;
pub mod store;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
pub use store::ConfigStore;
