//! Text rendering of the editing form

use std::fmt::Write;

use cfged_core::{EditorSession, ValueTree};
use cfged_schema::{
    ConfigDescriptor, PresentationManifest, PropertyDescriptor, PropertyPath,
    PropertyPresentation, SchemaModel, Value, format_default,
};
use colored::Colorize;

const LABEL_WIDTH: usize = 24;

/// One editable leaf as shown in the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField<'a> {
    pub path: PropertyPath,
    pub label: String,
    pub descriptor: &'a PropertyDescriptor,
    pub hints: &'a PropertyPresentation,
}

/// Leaves of one config in display order, with nested children flattened.
///
/// Advanced fields and groups are skipped unless `show_advanced` is set.
pub fn form_fields<'a>(
    manifest: &'a PresentationManifest,
    config: &'a ConfigDescriptor,
    show_advanced: bool,
) -> Vec<FormField<'a>> {
    let Some(hints) = manifest.config(&config.class_name) else {
        return Vec::new();
    };

    let mut fields = Vec::new();
    for prop in hints.ordered_properties(config) {
        let prop_hints = hints.property(&prop.name);
        if prop.children().is_some() {
            if !show_advanced && prop_hints.group_is_advanced(prop) {
                continue;
            }
            let group = prop_hints.label(prop);
            for child in prop_hints.ordered_children(prop) {
                let child_hints = prop_hints.child(&child.name);
                if !show_advanced && child_hints.advanced {
                    continue;
                }
                fields.push(FormField {
                    path: PropertyPath::nested(&prop.name, &child.name),
                    label: format!("{group} / {}", child_hints.label(child)),
                    descriptor: child,
                    hints: child_hints,
                });
            }
        } else {
            if !show_advanced && prop_hints.advanced {
                continue;
            }
            fields.push(FormField {
                path: PropertyPath::top(&prop.name),
                label: prop_hints.label(prop),
                descriptor: prop,
                hints: prop_hints,
            });
        }
    }
    fields
}

/// Sections shown in the form, in display order.
///
/// Configs flagged advanced are skipped unless `show_advanced` is set.
pub fn form_sections<'a>(
    manifest: &PresentationManifest,
    schema: &'a SchemaModel,
    show_advanced: bool,
) -> Vec<&'a ConfigDescriptor> {
    manifest
        .visible_configs(schema)
        .into_iter()
        .filter(|c| {
            manifest
                .config(&c.class_name)
                .is_some_and(|hints| show_advanced || !hints.advanced)
        })
        .collect()
}

pub fn value_text(tree: &ValueTree, class_name: &str, path: &PropertyPath) -> String {
    format_default(tree.get(class_name, path).unwrap_or(&Value::Null))
}

/// Render every visible section of the form.
pub fn render_form(
    session: &EditorSession,
    manifest: &PresentationManifest,
    show_advanced: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        "Preset:".bold(),
        session.active_preset().cyan()
    );

    for config in form_sections(manifest, session.schema(), show_advanced) {
        let Some(hints) = manifest.config(&config.class_name) else {
            continue;
        };

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", hints.title(config).bold());
        if let Some(description) = hints.description.as_ref().or(config.description.as_ref()) {
            let _ = writeln!(out, "  {}", description.dimmed());
        }

        for field in form_fields(manifest, config, show_advanced) {
            let current = value_text(session.current(), &config.class_name, &field.path);
            let default = value_text(session.defaults(), &config.class_name, &field.path);

            let mut line = format!("  {:<LABEL_WIDTH$} {}", field.label, current);
            if current == default {
                let _ = write!(line, "  {}", format!("(default: {default})").dimmed());
            } else {
                let _ = write!(line, "  {}", format!("(default: {default})").yellow());
            }
            if let Some((min, max)) = field.hints.slider_bounds() {
                let _ = write!(line, "  {}", format!("[{min}..{max}]").dimmed());
            }
            let _ = writeln!(out, "{line}");
        }
    }
    out
}
