//! Preset configuration loading.
//!
//! Presets are YAML files, `basemaps.yaml` and `projections.yaml`. The copies
//! under `config/scenes/` are embedded at build time; setting
//! `SCENE_CONFIG_DIR` points the loader at a directory holding replacements.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use scene_common::{FontPreset, SceneError, SceneResult};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Environment variable naming a directory of preset files.
pub const CONFIG_DIR_ENV: &str = "SCENE_CONFIG_DIR";

pub const BASEMAPS_FILE: &str = "basemaps.yaml";
pub const PROJECTIONS_FILE: &str = "projections.yaml";

const BUILTIN_BASEMAPS: &str = include_str!("../../../config/scenes/basemaps.yaml");
const BUILTIN_PROJECTIONS: &str = include_str!("../../../config/scenes/projections.yaml");

/// Where preset definitions come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegistrySource {
    /// Presets compiled into the crate
    #[default]
    Builtin,
    /// A directory containing `basemaps.yaml` and `projections.yaml`
    Directory(PathBuf),
}

impl RegistrySource {
    /// Pick the source from `SCENE_CONFIG_DIR`, falling back to the builtin presets.
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(CONFIG_DIR_ENV).ok())
    }

    /// Pick the source from an optional directory setting. Blank means builtin.
    pub fn from_setting(dir: Option<String>) -> Self {
        match dir {
            Some(dir) if !dir.trim().is_empty() => Self::Directory(PathBuf::from(dir.trim())),
            _ => Self::Builtin,
        }
    }

    /// Read the raw preset text for this source.
    pub(crate) fn read(&self) -> SceneResult<PresetText> {
        match self {
            Self::Builtin => Ok(PresetText::builtin()),
            Self::Directory(dir) => {
                if !dir.exists() {
                    warn!(path = ?dir, "Preset config directory not found, using builtin presets");
                    return Ok(PresetText::builtin());
                }
                debug!(path = ?dir, "Reading preset config directory");
                Ok(PresetText {
                    basemaps: Cow::Owned(read_file(&dir.join(BASEMAPS_FILE))?),
                    projections: Cow::Owned(read_file(&dir.join(PROJECTIONS_FILE))?),
                })
            }
        }
    }
}

fn read_file(path: &Path) -> SceneResult<String> {
    fs::read_to_string(path).map_err(|e| SceneError::Io(format!("{}: {}", path.display(), e)))
}

/// Unparsed contents of the two preset files.
#[derive(Debug, Clone)]
pub(crate) struct PresetText {
    pub basemaps: Cow<'static, str>,
    pub projections: Cow<'static, str>,
}

impl PresetText {
    fn builtin() -> Self {
        Self {
            basemaps: Cow::Borrowed(BUILTIN_BASEMAPS),
            projections: Cow::Borrowed(BUILTIN_PROJECTIONS),
        }
    }
}

// ============================================================================
// YAML Parsing Structures
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct YamlBasemapFile {
    #[serde(default)]
    pub font_presets: HashMap<String, FontPreset>,
    #[serde(default)]
    pub fragments: HashMap<String, Value>,
    #[serde(default)]
    pub projectable: Vec<String>,
    pub basemaps: Vec<YamlBasemap>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct YamlBasemap {
    pub name: String,
    #[serde(default)]
    pub import: Option<Vec<YamlImport>>,
    pub label_font: YamlLabelFont,
    #[serde(default)]
    pub overrides: Vec<String>,
    #[serde(default)]
    pub sources: Option<Map<String, Value>>,
    #[serde(default)]
    pub scene: Option<Map<String, Value>>,
}

/// An import is either used verbatim or resolved against the hosting page.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum YamlImport {
    Locator(String),
    PageRelative { page_relative: String },
}

/// Label font given by preset name or spelled out inline.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum YamlLabelFont {
    Preset(String),
    Inline(FontPreset),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct YamlProjectionFile {
    pub projections: Vec<YamlProjection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct YamlProjection {
    pub name: String,
    pub files: Vec<String>,
}
