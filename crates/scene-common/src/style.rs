//! Label styling shared by basemap presets.
//!
//! Colors follow the scene format's conventions: either an array of
//! normalized channels (`[r, g, b]` or `[r, g, b, a]`, each in `0.0..=1.0`)
//! or a CSS-style string (named color or `#RRGGBB`).

use serde::{Deserialize, Serialize};

/// Color representation supporting multiple formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Normalized channels: [r, g, b] or [r, g, b, a]
    Array(Vec<f64>),

    /// Named color or hex string
    Named(String),
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl From<[f64; 3]> for Color {
    fn from(rgb: [f64; 3]) -> Self {
        Color::Array(rgb.to_vec())
    }
}

/// Outline drawn around label glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStroke {
    pub color: Color,

    /// Width with unit, e.g. "4px"
    pub width: String,
}

/// Font settings for feature labels drawn on top of a basemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontPreset {
    pub fill: Color,

    /// Size with unit, e.g. "12px"
    pub size: String,

    pub stroke: FontStroke,
}
