//! Preset listing and selection

use cfged_core::{EditorSession, PresetSwitch};
use cfged_schema::DEFAULT_PRESET;
use colored::Colorize;

use crate::error::Result;

/// List `default` and every declared preset, marking the active one.
pub fn run_presets(session: &EditorSession) -> Result<()> {
    let active = session.active_preset();
    let marker = |name: &str| if name == active { "*".green().bold() } else { " ".normal() };

    println!("{}", "Presets".bold());
    println!();
    println!(
        "{} {:<16} {}",
        marker(DEFAULT_PRESET),
        DEFAULT_PRESET.cyan(),
        "Schema defaults".dimmed()
    );

    for preset in &session.schema().presets {
        let title = if preset.display_name.is_empty() {
            preset.name.as_str()
        } else {
            preset.display_name.as_str()
        };
        let detail = match &preset.description {
            Some(description) => format!("{title} - {description}"),
            None => title.to_string(),
        };
        println!(
            "{} {:<16} {}",
            marker(&preset.name),
            preset.name.cyan(),
            detail.dimmed()
        );
    }
    Ok(())
}

/// Switch presets. An unknown name is reported, not treated as a failure.
pub fn run_use_preset(session: &mut EditorSession, name: &str) -> Result<()> {
    match session.switch_preset(name)? {
        PresetSwitch::Applied => {
            println!("{} Using preset {}", "OK".green().bold(), name.cyan());
        }
        PresetSwitch::Unknown => {
            eprintln!(
                "{} Unknown preset '{}'; still using '{}'",
                "warning:".yellow().bold(),
                name,
                session.active_preset()
            );
        }
    }
    Ok(())
}
