//! The export command and `--set` edit parsing

use std::path::PathBuf;
use std::str::FromStr;

use cfged_archive::{DirectorySink, ZipPackager, export_archive};
use cfged_core::{DocumentOptions, EditorConfig, EditorSession, ValueChangeHandler};
use cfged_schema::Value;
use colored::Colorize;

use crate::context::EditorContext;
use crate::error::{CliError, Result};

/// One `--set` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct SetEdit {
    pub class_name: String,
    pub path: String,
    pub index: Option<usize>,
    pub value: Value,
}

impl FromStr for SetEdit {
    type Err = CliError;

    /// `Class.path=value` or `Class.path[index]=value`. The value is read as
    /// JSON when it parses, otherwise as text.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CliError::user(format!("Invalid edit '{s}': expected CLASS.PATH=VALUE"));

        let (target, raw) = s.split_once('=').ok_or_else(invalid)?;
        let (target, index) = match target.strip_suffix(']') {
            Some(rest) => {
                let (target, index) = rest.rsplit_once('[').ok_or_else(invalid)?;
                let index = index.trim().parse::<usize>().map_err(|_| {
                    CliError::user(format!("Invalid array index '{index}' in '{s}'"))
                })?;
                (target, Some(index))
            }
            None => (target, None),
        };

        let (class_name, path) = target.trim().split_once('.').ok_or_else(invalid)?;
        if class_name.is_empty() || path.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            class_name: class_name.to_string(),
            path: path.to_string(),
            index,
            value: Value::parse_literal(raw),
        })
    }
}

impl SetEdit {
    /// Send the edit through the renderer callback surface.
    pub fn apply(self, handler: &mut dyn ValueChangeHandler) -> Result<()> {
        match self.index {
            None => handler.on_value_changed(&self.class_name, &self.path, self.value)?,
            Some(index) => {
                let Value::Scalar(element) = self.value else {
                    return Err(CliError::user(format!(
                        "Array element {}.{}[{index}] must be a single value",
                        self.class_name, self.path
                    )));
                };
                handler.on_array_element_changed(&self.class_name, &self.path, index, element)?;
            }
        }
        Ok(())
    }
}

/// Build the archive from the session's current values and write it.
pub fn export(
    session: &EditorSession,
    config: &EditorConfig,
    output: Option<PathBuf>,
    options: DocumentOptions,
) -> Result<PathBuf> {
    let packager = ZipPackager::new(&config.archive.folder, config.archive.compression_level)?;
    let mut sink = DirectorySink::new(output.unwrap_or_else(|| config.output_dir.clone()));
    let documents = session.documents(options);
    Ok(export_archive(
        &documents,
        &packager,
        &mut sink,
        &config.archive.file_name,
    )?)
}

pub fn print_instructions(path: &std::path::Path, folder: &str) {
    println!(
        "{} Config archive written to {}",
        "OK".green().bold(),
        path.display().to_string().cyan()
    );
    println!();
    println!("Next steps:");
    println!("  1. Extract the archive");
    println!(
        "  2. Copy the {} folder into the directory your application reads its config from",
        folder.cyan()
    );
    println!("  3. Restart the application to pick up the new values");
}

/// Apply the `--set` edits, then export.
pub fn run_export(
    ctx: &mut EditorContext,
    edits: &[String],
    output: Option<PathBuf>,
    no_descriptions: bool,
) -> Result<()> {
    for raw in edits {
        let edit: SetEdit = raw.parse()?;
        tracing::debug!(?edit, "applying edit");
        edit.apply(&mut ctx.session)?;
    }

    let mut options = ctx.config.document_options();
    if no_descriptions {
        options.include_descriptions = false;
    }

    let path = export(&ctx.session, &ctx.config, output, options)?;
    print_instructions(&path, &ctx.config.archive.folder);
    Ok(())
}
