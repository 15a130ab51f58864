//! Command implementations for cfged-cli

pub mod edit;
pub mod export;
pub mod presets;
pub mod show;

pub use edit::run_edit;
pub use export::run_export;
pub use presets::{run_presets, run_use_preset};
pub use show::run_show;
