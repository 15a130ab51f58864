//! Editor startup: configuration, sources and session
//!
//! Everything a command needs is assembled here once. Loading is the only
//! asynchronous step; both documents are fetched on a current-thread runtime
//! and a failure of either aborts before a session exists.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cfged_core::{ConfigResolver, EditorConfig, EditorSession, FileSelectionStore};
use cfged_schema::{FileFetcher, LoadedSources, PresentationManifest, load_sources};

use crate::cli::GlobalArgs;
use crate::error::{CliError, Result};

/// A started editor with its resolved configuration.
pub struct EditorContext {
    pub config: EditorConfig,
    pub manifest: PresentationManifest,
    pub session: EditorSession,
}

impl EditorContext {
    pub fn open(globals: &GlobalArgs) -> Result<Self> {
        let config = resolve_config(globals)?;
        tracing::debug!(
            schema = %config.schema.display(),
            manifest = %config.manifest.display(),
            "resolved editor configuration"
        );

        let LoadedSources { schema, manifest } = load(&config)?;
        let selection = FileSelectionStore::new(&config.state);
        let session = EditorSession::start(Arc::new(schema), Box::new(selection))?;

        Ok(Self {
            config,
            manifest,
            session,
        })
    }
}

/// Layer the config files under the command-line flags.
///
/// Paths from config files are relative to the project directory; paths
/// given on the command line are relative to the working directory.
pub fn resolve_config(globals: &GlobalArgs) -> Result<EditorConfig> {
    let cwd = std::env::current_dir()?;
    let project_dir = match &globals.config_dir {
        Some(dir) => cwd.join(dir),
        None => cwd.clone(),
    };

    let resolver = match &globals.global_config_dir {
        Some(dir) => ConfigResolver::with_global_config_dir(&project_dir, cwd.join(dir)),
        None => ConfigResolver::new(&project_dir),
    };

    let mut config = resolver.resolve()?.rooted_at(&project_dir);
    config.apply(rooted_layer(globals, &cwd));
    Ok(config)
}

fn rooted_layer(globals: &GlobalArgs, cwd: &Path) -> cfged_core::ConfigLayer {
    let mut layer = globals.layer();
    let root = |p: Option<PathBuf>| p.map(|p| cwd.join(p));
    layer.schema = root(layer.schema);
    layer.manifest = root(layer.manifest);
    layer.state = root(layer.state);
    layer
}

fn load(config: &EditorConfig) -> Result<LoadedSources> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let fetcher = FileFetcher::new("");
    let schema = config.schema.to_string_lossy();
    let manifest = config.manifest.to_string_lossy();

    runtime
        .block_on(load_sources(&fetcher, &schema, &manifest))
        .map_err(CliError::Load)
}
