//! Shared test fixtures for the cfged workspace.
//!
//! A dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`schema`]: canned schema and manifest documents
//! - [`workspace`]: [`TestWorkspace`] project directory builder

pub mod schema;
pub mod workspace;

pub use schema::{
    EROSION_SCHEMA_JSON, TERRAIN_MANIFEST_JSON, TERRAIN_SCHEMA_JSON, erosion_schema,
    terrain_manifest, terrain_schema,
};
pub use workspace::TestWorkspace;
