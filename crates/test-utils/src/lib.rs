//! Shared test utilities for the scene preset workspace.
//!
//! Registry tests share a few small preset documents and need somewhere to
//! write them. The helpers here cover:
//! - Locating the workspace and the shipped `config/scenes/` presets
//! - Writing preset files into throwaway directories
//! - YAML fixtures for three-basemap registries
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, write_preset_dir};
//! ```

pub mod fixtures;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use paths::*;

/// Macro asserting that a slice ends with the given elements, in order.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_ends_with;
///
/// let imports = vec!["base.yaml".to_string(), "globe.yaml".to_string()];
/// assert_ends_with!(imports, ["globe.yaml"]);
/// ```
#[macro_export]
macro_rules! assert_ends_with {
    ($items:expr, [$($suffix:expr),+ $(,)?]) => {{
        let items: Vec<String> = $items.iter().map(|s| s.to_string()).collect();
        let suffix: Vec<String> = vec![$($suffix.to_string()),+];
        if !items.ends_with(&suffix) {
            panic!(
                "assertion failed: `items.ends_with(suffix)`\n  items: `{:?}`,\n suffix: `{:?}`",
                items, suffix
            );
        }
    }};
}
