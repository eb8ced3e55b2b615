//! Preset descriptors handed to the scene composer.
//!
//! Field names serialize exactly as the scene format spells them, so a
//! descriptor can be merged into a scene without renaming.

use scene_common::FontPreset;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Everything a basemap contributes to a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BasemapDescriptor {
    /// Resource locators, merged into the scene in order (later wins)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<Vec<String>>,

    /// Scene-wide settings
    pub global: GlobalSettings,

    /// Data source overrides keyed by source name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Map<String, Value>>,

    /// Direct scene property overrides (e.g. background color)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<Map<String, Value>>,
}

impl BasemapDescriptor {
    /// Append projection files after the basemap's own imports.
    ///
    /// A descriptor without an import list has nowhere to put them, so the
    /// files are dropped.
    pub fn append_imports(&mut self, files: &[String]) {
        if let Some(import) = self.import.as_mut() {
            import.extend(files.iter().cloned());
        }
    }

    /// Serialize to a generic value for merging into a larger scene.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Scene-wide settings carried by a basemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(rename = "featureLabelFont")]
    pub feature_label_font: FontPreset,
}

/// Files that switch the map to a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionDescriptor {
    /// Projection definition, optionally followed by a points companion file
    pub files: Vec<String>,
}
