//! Preset name resolution

use std::collections::BTreeMap;

use cfged_schema::{DEFAULT_PRESET, Overrides, PresetDescriptor};

use crate::{Error, Result};

static NO_OVERRIDES: Overrides = BTreeMap::new();

/// What a preset name resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// Schema defaults with no overrides.
    Baseline,
    /// A declared preset.
    Preset(&'a PresetDescriptor),
}

impl<'a> Resolution<'a> {
    pub fn overrides(&self) -> &'a Overrides {
        match self {
            Resolution::Baseline => &NO_OVERRIDES,
            Resolution::Preset(preset) => &preset.overrides,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Resolution::Baseline => DEFAULT_PRESET,
            Resolution::Preset(preset) => &preset.name,
        }
    }
}

/// Resolve `name` against the declared presets.
///
/// `"default"` always means the baseline, even if a preset of that name is
/// declared.
pub fn resolve<'a>(presets: &'a [PresetDescriptor], name: &str) -> Result<Resolution<'a>> {
    if name == DEFAULT_PRESET {
        return Ok(Resolution::Baseline);
    }
    presets
        .iter()
        .find(|p| p.name == name)
        .map(Resolution::Preset)
        .ok_or_else(|| Error::PresetNotFound {
            name: name.to_string(),
        })
}
