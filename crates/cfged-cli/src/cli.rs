//! CLI argument parsing using clap derive

use std::path::PathBuf;

use cfged_core::ConfigLayer;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// cfged - Edit schema-described configuration and export it as a ZIP archive
#[derive(Parser, Debug)]
#[command(name = "cfged")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub globals: GlobalArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Locations shared by every command. Each overrides the config files.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Schema document (config metadata JSON)
    #[arg(long, global = true, env = "CFGED_SCHEMA", value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Presentation manifest JSON
    #[arg(long, global = true, env = "CFGED_MANIFEST", value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// File holding the selected preset
    #[arg(long, global = true, env = "CFGED_STATE", value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Project directory holding cfged.toml [default: current directory]
    #[arg(long, global = true, env = "CFGED_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Replace the user-wide config directory
    #[arg(long, global = true, env = "CFGED_GLOBAL_CONFIG_DIR", hide = true)]
    pub global_config_dir: Option<PathBuf>,
}

impl GlobalArgs {
    /// The flag layer of the editor configuration.
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            schema: self.schema.clone(),
            manifest: self.manifest.clone(),
            state: self.state.clone(),
            ..Default::default()
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the editing form with current and default values
    Show {
        /// Include advanced settings
        #[arg(long)]
        advanced: bool,

        /// Print the config documents as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// List available presets
    Presets,

    /// Switch to a preset and remember the choice
    ///
    /// Switching discards edits. Use "default" for the plain schema defaults.
    UsePreset {
        /// Preset name
        name: String,
    },

    /// Build the config archive
    ///
    /// Examples:
    ///   cfged export
    ///   cfged export --set Erosion.rate=0.8 --set Erosion.Wind.speed=25
    ///   cfged export --set 'Rivers.widths[0]=3.5' --output dist
    Export {
        /// Edit applied before export: CLASS.PATH=VALUE or CLASS.PATH[INDEX]=VALUE
        #[arg(long = "set", value_name = "EDIT")]
        set: Vec<String>,

        /// Directory to write the archive to
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Leave out <name>Description keys
        #[arg(long)]
        no_descriptions: bool,
    },

    /// Edit values interactively
    Edit,

    /// Generate shell completions
    ///
    /// Examples:
    ///   cfged completions bash > ~/.local/share/bash-completion/completions/cfged
    ///   cfged completions zsh > ~/.zfunc/_cfged
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
