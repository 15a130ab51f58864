//! Interactive editing session
//!
//! Uses dialoguer for terminal-based selection and input. Edits go through the
//! session's [`ValueChangeHandler`] surface, the same way `--set` edits do.

use cfged_core::{PresetSwitch, ValueChangeHandler};
use cfged_schema::{ConfigDescriptor, DEFAULT_PRESET, Scalar, Value};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::commands::export::{export, print_instructions};
use crate::context::EditorContext;
use crate::error::{CliError, Result};
use crate::render::{FormField, form_fields, form_sections, render_form, value_text};

const MENU: &[&str] = &[
    "Edit values",
    "Show form",
    "Switch preset",
    "Reset to defaults",
    "Export archive",
    "Quit",
];

/// Run the interactive editor until the user quits.
pub fn run_edit(ctx: &mut EditorContext) -> Result<()> {
    let mut show_advanced = false;

    loop {
        println!();
        let choice = Select::new()
            .with_prompt(format!("cfged [{}]", ctx.session.active_preset()))
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => edit_values(ctx, show_advanced)?,
            1 => {
                show_advanced = Confirm::new()
                    .with_prompt("Include advanced settings?")
                    .default(show_advanced)
                    .interact()?;
                print!("{}", render_form(&ctx.session, &ctx.manifest, show_advanced));
            }
            2 => switch_preset(ctx)?,
            3 => {
                ctx.session.reset_to_defaults();
                println!("{} Values reset to defaults", "OK".green().bold());
            }
            4 => {
                let options = ctx.config.document_options();
                match export(&ctx.session, &ctx.config, None, options) {
                    Ok(path) => print_instructions(&path, &ctx.config.archive.folder),
                    Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
                }
            }
            _ => return Ok(()),
        }
    }
}

fn edit_values(ctx: &mut EditorContext, show_advanced: bool) -> Result<()> {
    let configs: Vec<ConfigDescriptor> =
        form_sections(&ctx.manifest, ctx.session.schema(), show_advanced)
            .into_iter()
            .cloned()
            .collect();
    if configs.is_empty() {
        println!("No configurable sections.");
        return Ok(());
    }

    let titles: Vec<String> = configs
        .iter()
        .map(|c| match ctx.manifest.config(&c.class_name) {
            Some(hints) => hints.title(c).to_string(),
            None => c.display_name.clone(),
        })
        .collect();
    let section = Select::new()
        .with_prompt("Section")
        .items(&titles)
        .default(0)
        .interact()?;
    let config = &configs[section];

    loop {
        let edit = {
            let fields = form_fields(&ctx.manifest, config, show_advanced);
            let mut labels: Vec<String> = fields
                .iter()
                .map(|f| {
                    format!(
                        "{:<28} {}",
                        f.label,
                        value_text(ctx.session.current(), &config.class_name, &f.path)
                    )
                })
                .collect();
            labels.push("Back".to_string());

            let picked = Select::new()
                .with_prompt(titles[section].as_str())
                .items(&labels)
                .default(0)
                .interact()?;
            let Some(field) = fields.get(picked) else {
                return Ok(());
            };
            prompt_edit(ctx, config, field)?
        };

        if let Err(e) = edit.and_then(|edit| edit.apply(&mut ctx.session)) {
            eprintln!("{} {}", "error:".red().bold(), e);
        }
    }
}

/// An edit chosen at the prompt, applied once the form borrows are released.
enum PendingEdit {
    Value {
        class_name: String,
        path: String,
        value: Value,
    },
    Element {
        class_name: String,
        path: String,
        index: usize,
        value: Scalar,
    },
}

impl PendingEdit {
    fn apply(self, handler: &mut dyn ValueChangeHandler) -> Result<()> {
        match self {
            PendingEdit::Value {
                class_name,
                path,
                value,
            } => handler.on_value_changed(&class_name, &path, value)?,
            PendingEdit::Element {
                class_name,
                path,
                index,
                value,
            } => handler.on_array_element_changed(&class_name, &path, index, value)?,
        }
        Ok(())
    }
}

/// Ask for a new value. The outer error is a prompt failure; the inner one
/// is invalid input, reported without leaving the editor.
fn prompt_edit(
    ctx: &EditorContext,
    config: &ConfigDescriptor,
    field: &FormField<'_>,
) -> Result<Result<PendingEdit>> {
    let class_name = config.class_name.clone();
    let path = field.path.to_string();
    let current = ctx
        .session
        .current()
        .get(&config.class_name, &field.path)
        .cloned()
        .unwrap_or_default();

    if let Some(description) = &field.descriptor.description {
        println!("  {}", description.dimmed());
    }

    if let (true, Some(items)) = (field.descriptor.property_type.is_array(), current.as_list()) {
        let mut choices: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("[{i}] {item}"))
            .collect();
        choices.push("Append element".to_string());
        choices.push("Replace whole value".to_string());

        let picked = Select::new()
            .with_prompt(format!("{} ({})", field.label, field.descriptor.property_type))
            .items(&choices)
            .default(0)
            .interact()?;

        if picked <= items.len() {
            let default = items.get(picked).map(ToString::to_string).unwrap_or_default();
            let raw: String = Input::new()
                .with_prompt(format!("Element {picked}"))
                .with_initial_text(default)
                .interact_text()?;
            return Ok(match Value::parse_literal(&raw) {
                Value::Scalar(value) => Ok(PendingEdit::Element {
                    class_name,
                    path,
                    index: picked,
                    value,
                }),
                _ => Err(CliError::user("An array element must be a single value")),
            });
        }
    }

    let initial = match &current {
        Value::List(_) => current.to_json().to_string(),
        Value::Null => String::new(),
        Value::Scalar(s) => s.to_string(),
    };
    let raw: String = Input::new()
        .with_prompt(format!("{} ({})", field.label, field.descriptor.property_type))
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;

    Ok(Ok(PendingEdit::Value {
        class_name,
        path,
        value: Value::parse_literal(&raw),
    }))
}

fn switch_preset(ctx: &mut EditorContext) -> Result<()> {
    let mut names = vec![DEFAULT_PRESET.to_string()];
    names.extend(ctx.session.schema().presets.iter().map(|p| p.name.clone()));

    let active = names
        .iter()
        .position(|n| n == ctx.session.active_preset())
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("Preset")
        .items(&names)
        .default(active)
        .interact()?;

    let confirmed = Confirm::new()
        .with_prompt("Switching presets discards your edits. Continue?")
        .default(true)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    match ctx.session.switch_preset(&names[picked])? {
        PresetSwitch::Applied => println!("{} Using preset {}", "OK".green().bold(), names[picked].cyan()),
        PresetSwitch::Unknown => eprintln!("{} Unknown preset '{}'", "warning:".yellow().bold(), names[picked]),
    }
    Ok(())
}
