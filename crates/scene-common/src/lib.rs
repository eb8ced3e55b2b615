//! Common types and utilities shared by the scene preset crates.

pub mod error;
pub mod merge;
pub mod style;

pub use error::{SceneError, SceneResult};
pub use merge::{deep_merge, merge_all};
pub use style::{Color, FontPreset, FontStroke};
