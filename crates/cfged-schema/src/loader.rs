//! Startup loading of the schema and presentation manifest
//!
//! Both documents are fetched concurrently and both must succeed; a failure
//! of either aborts startup before any value state exists.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::presentation::PresentationManifest;
use crate::schema::SchemaModel;
use crate::{Error, Result};

/// Source of raw schema documents.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Fetch the text of the document at `location`.
    async fn fetch(&self, location: &str) -> Result<String>;
}

/// Fetches documents from files relative to a root directory.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl SourceFetcher for FileFetcher {
    async fn fetch(&self, location: &str) -> Result<String> {
        let path = self.root.join(location);
        tracing::debug!(path = %path.display(), "fetching source document");
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::LoadFailed {
                location: location.to_string(),
                reason: e.to_string(),
            })
    }
}

/// The two startup documents, parsed and validated.
#[derive(Debug, Clone)]
pub struct LoadedSources {
    pub schema: SchemaModel,
    pub manifest: PresentationManifest,
}

/// Fetch and parse the schema and manifest concurrently.
pub async fn load_sources(
    fetcher: &dyn SourceFetcher,
    schema_location: &str,
    manifest_location: &str,
) -> Result<LoadedSources> {
    let (schema_text, manifest_text) = tokio::try_join!(
        fetcher.fetch(schema_location),
        fetcher.fetch(manifest_location)
    )?;

    let schema = SchemaModel::from_json(schema_location, &schema_text)?;
    let manifest = PresentationManifest::from_json(manifest_location, &manifest_text)?;

    tracing::debug!(
        configs = schema.configs.len(),
        presets = schema.presets.len(),
        manifest_entries = manifest.configs.len(),
        "loaded schema sources"
    );

    Ok(LoadedSources { schema, manifest })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapFetcher(HashMap<&'static str, &'static str>);

    #[async_trait]
    impl SourceFetcher for MapFetcher {
        async fn fetch(&self, location: &str) -> Result<String> {
            self.0
                .get(location)
                .map(|s| s.to_string())
                .ok_or_else(|| Error::LoadFailed {
                    location: location.to_string(),
                    reason: "404 Not Found".into(),
                })
        }
    }

    #[tokio::test]
    async fn test_loads_both_documents() {
        let fetcher = MapFetcher(HashMap::from([
            ("schema.json", r#"{ "configs": [] }"#),
            ("manifest.json", r#"{ "configs": {} }"#),
        ]));

        let loaded = load_sources(&fetcher, "schema.json", "manifest.json")
            .await
            .unwrap();
        assert!(loaded.schema.configs.is_empty());
        assert!(loaded.manifest.configs.is_empty());
    }

    #[tokio::test]
    async fn test_missing_manifest_fails_whole_load() {
        let fetcher = MapFetcher(HashMap::from([("schema.json", r#"{ "configs": [] }"#)]));

        let err = load_sources(&fetcher, "schema.json", "manifest.json")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to load manifest.json: 404 Not Found"
        );
    }
}
