//! Basemap and projection presets for a web map viewer.
//!
//! The registries map preset names to the resource locators and overrides a
//! scene composer needs. They are loaded once, from the embedded presets or
//! from a config directory, and are read-only afterwards.
//!
//! ```ignore
//! use basemaps::{BasemapRegistry, StaticPage};
//!
//! let page = StaticPage::new("https://maps.example.com/viewer/index.html");
//! let registry = BasemapRegistry::builtin(&page)?;
//! let scene = registry.resolve_scene_descriptor("none", Some("globe"))?;
//! ```

pub mod base_url;
pub mod config;
pub mod descriptor;
pub mod projection;
pub mod registry;

pub use base_url::{resolve_base_url, PageLocation, StaticPage};
pub use config::RegistrySource;
pub use descriptor::{BasemapDescriptor, GlobalSettings, ProjectionDescriptor};
pub use projection::ProjectionRegistry;
pub use registry::BasemapRegistry;
pub use scene_common::{SceneError, SceneResult};
