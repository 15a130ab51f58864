//! cfged CLI
//!
//! Edits schema-described configuration values, manages presets, and exports
//! the result as a ZIP archive of JSON files.

mod cli;
mod commands;
mod context;
mod error;
mod render;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use context::EditorContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
    if installed.is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        println!("{} Configuration editor", "cfged".green().bold());
        println!();
        println!("Run {} for available commands.", "cfged --help".cyan());
        return Ok(());
    };

    match command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "cfged", &mut std::io::stdout());
            Ok(())
        }
        Commands::Show { advanced, json } => {
            let ctx = EditorContext::open(&cli.globals)?;
            commands::run_show(&ctx, advanced, json)
        }
        Commands::Presets => {
            let ctx = EditorContext::open(&cli.globals)?;
            commands::run_presets(&ctx.session)
        }
        Commands::UsePreset { name } => {
            let mut ctx = EditorContext::open(&cli.globals)?;
            commands::run_use_preset(&mut ctx.session, &name)
        }
        Commands::Export {
            set,
            output,
            no_descriptions,
        } => {
            let mut ctx = EditorContext::open(&cli.globals)?;
            commands::run_export(&mut ctx, &set, output, no_descriptions)
        }
        Commands::Edit => {
            let mut ctx = EditorContext::open(&cli.globals)?;
            commands::run_edit(&mut ctx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_load_error_message() {
        let error = crate::error::CliError::Load(cfged_schema::Error::LoadFailed {
            location: "data/config-metadata.json".into(),
            reason: "No such file or directory".into(),
        });
        assert_eq!(
            error.to_string(),
            "Error loading configuration: Failed to load data/config-metadata.json: No such file or directory"
        );
    }

    #[test]
    fn test_export_error_message() {
        let error = crate::error::CliError::from(cfged_archive::Error::InvalidCompressionLevel { level: 12 });
        assert_eq!(
            error.to_string(),
            "Error generating config files: Invalid compression level 12 (expected 0-9)"
        );
    }
}
