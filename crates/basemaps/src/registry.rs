//! Basemap presets and the lookups used to build a scene.
//!
//! The registry keeps basemaps in file order. That order decides the default
//! basemap (the first one) and what "next" means when cycling.

use std::collections::{HashMap, HashSet};

use scene_common::{deep_merge, FontPreset, SceneError, SceneResult};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::base_url::{resolve_base_url, PageLocation};
use crate::config::{RegistrySource, YamlBasemap, YamlBasemapFile, YamlImport, YamlLabelFont};
use crate::descriptor::BasemapDescriptor;
use crate::projection::ProjectionRegistry;

/// Read-only registry of basemap presets together with the projections they
/// can be combined with.
#[derive(Debug, Clone)]
pub struct BasemapRegistry {
    basemaps: Vec<(String, BasemapDescriptor)>,
    projectable: HashSet<String>,
    font_presets: HashMap<String, FontPreset>,
    projections: ProjectionRegistry,
}

/// Input to [`BasemapRegistry::resolve_basemap_name`], classified.
#[derive(Debug, PartialEq, Eq)]
enum NameOrIndex<'a> {
    Name(&'a str),
    /// Numeric input; `None` when it can't be a valid position (negative or too large)
    Index(Option<usize>),
}

impl<'a> NameOrIndex<'a> {
    /// Numeric if the input starts with a base-10 integer, after optional
    /// leading whitespace and sign. Trailing text is ignored.
    fn parse(input: &'a str) -> Self {
        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Self::Name(input);
        }

        let value = rest[..digits].parse::<usize>().ok();
        match (negative, value) {
            (true, Some(0)) => Self::Index(Some(0)),
            (true, _) => Self::Index(None),
            (false, value) => Self::Index(value),
        }
    }
}

impl BasemapRegistry {
    /// Load presets from `source`, resolving page-relative imports against `page`.
    pub fn load(source: &RegistrySource, page: &dyn PageLocation) -> SceneResult<Self> {
        let text = source.read()?;
        Self::from_yaml(&text.basemaps, &text.projections, page)
    }

    /// Load the presets compiled into the crate.
    pub fn builtin(page: &dyn PageLocation) -> SceneResult<Self> {
        Self::load(&RegistrySource::Builtin, page)
    }

    /// Load presets from `basemaps.yaml` and `projections.yaml` in `dir`.
    pub fn load_from_directory<P: AsRef<std::path::Path>>(
        dir: P,
        page: &dyn PageLocation,
    ) -> SceneResult<Self> {
        Self::load(&RegistrySource::Directory(dir.as_ref().to_path_buf()), page)
    }

    /// Build from the text of the two preset documents.
    pub fn from_yaml(
        basemaps_yaml: &str,
        projections_yaml: &str,
        page: &dyn PageLocation,
    ) -> SceneResult<Self> {
        let projections = ProjectionRegistry::from_yaml(projections_yaml)?;
        let file: YamlBasemapFile = serde_yaml::from_str(basemaps_yaml)?;

        if file.basemaps.is_empty() {
            return Err(SceneError::EmptyRegistry("basemap"));
        }

        let page_url = page.current_page_url();
        let mut basemaps: Vec<(String, BasemapDescriptor)> =
            Vec::with_capacity(file.basemaps.len());
        for yaml in file.basemaps {
            if basemaps.iter().any(|(name, _)| *name == yaml.name) {
                return Err(SceneError::DuplicateName {
                    kind: "basemap",
                    name: yaml.name,
                });
            }
            let name = yaml.name.clone();
            let descriptor =
                build_descriptor(yaml, &file.font_presets, &file.fragments, &page_url)?;
            basemaps.push((name, descriptor));
        }

        let mut projectable = HashSet::new();
        for name in file.projectable {
            if !basemaps.iter().any(|(n, _)| *n == name) {
                return Err(SceneError::UnknownReference {
                    kind: "basemap",
                    name,
                    referenced_by: "projectable".to_string(),
                });
            }
            projectable.insert(name);
        }

        info!(
            basemaps = basemaps.len(),
            projectable = projectable.len(),
            projections = projections.len(),
            "Basemap registry loaded"
        );

        Ok(Self {
            basemaps,
            projectable,
            font_presets: file.font_presets,
            projections,
        })
    }

    /// Independent copy of a basemap's descriptor, with the projection's
    /// files appended to its imports when a projection is given.
    pub fn resolve_scene_descriptor(
        &self,
        basemap: &str,
        projection: Option<&str>,
    ) -> SceneResult<BasemapDescriptor> {
        let mut descriptor = self
            .get(basemap)
            .cloned()
            .ok_or_else(|| SceneError::BasemapNotFound(basemap.to_string()))?;

        if let Some(files) = self.projections.resolve_files(projection)? {
            descriptor.append_imports(files);
        }

        debug!(basemap, projection, "Resolved scene descriptor");
        Ok(descriptor)
    }

    /// Map a basemap name or position to a name.
    ///
    /// Numeric input selects by position and yields `None` when out of range.
    /// Any other input is returned unchanged, registered or not.
    pub fn resolve_basemap_name<'a>(&'a self, name_or_index: &'a str) -> Option<&'a str> {
        match NameOrIndex::parse(name_or_index) {
            NameOrIndex::Name(name) => Some(name),
            NameOrIndex::Index(index) => index
                .and_then(|i| self.basemaps.get(i))
                .map(|(name, _)| name.as_str()),
        }
    }

    pub fn default_basemap_name(&self) -> &str {
        // Never empty, checked at load
        self.basemaps
            .first()
            .map(|(name, _)| name.as_str())
            .unwrap_or_default()
    }

    /// The basemap after `current`, wrapping at the end. Unknown names give the default.
    pub fn next_basemap_name(&self, current: &str) -> &str {
        match self.position(current) {
            Some(i) => {
                let next = (i + 1) % self.basemaps.len();
                if next == 0 {
                    debug!(current, "Basemap cycle wrapped to start");
                }
                self.basemaps[next].0.as_str()
            }
            None => self.default_basemap_name(),
        }
    }

    /// Files for an optional projection choice. See [`ProjectionRegistry::resolve_files`].
    pub fn resolve_projection_files(
        &self,
        projection: Option<&str>,
    ) -> SceneResult<Option<&[String]>> {
        self.projections.resolve_files(projection)
    }

    pub fn default_projection_name(&self) -> &str {
        self.projections.default_name()
    }

    /// Whether choosing a projection makes sense for this basemap.
    pub fn is_projectable(&self, basemap: &str) -> bool {
        self.projectable.contains(basemap)
    }

    pub fn get(&self, basemap: &str) -> Option<&BasemapDescriptor> {
        self.position(basemap).map(|i| &self.basemaps[i].1)
    }

    pub fn contains(&self, basemap: &str) -> bool {
        self.position(basemap).is_some()
    }

    pub fn basemap_names(&self) -> impl Iterator<Item = &str> {
        self.basemaps.iter().map(|(name, _)| name.as_str())
    }

    pub fn projection_names(&self) -> impl Iterator<Item = &str> {
        self.projections.names()
    }

    pub fn projections(&self) -> &ProjectionRegistry {
        &self.projections
    }

    pub fn font_preset(&self, name: &str) -> Option<&FontPreset> {
        self.font_presets.get(name)
    }

    pub fn len(&self) -> usize {
        self.basemaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.basemaps.is_empty()
    }

    fn position(&self, basemap: &str) -> Option<usize> {
        self.basemaps.iter().position(|(name, _)| name == basemap)
    }
}

/// Turn one YAML entry into a descriptor: resolve imports and the label font,
/// then merge override fragments on top in the order listed.
fn build_descriptor(
    yaml: YamlBasemap,
    font_presets: &HashMap<String, FontPreset>,
    fragments: &HashMap<String, Value>,
    page_url: &str,
) -> SceneResult<BasemapDescriptor> {
    let font = match yaml.label_font {
        YamlLabelFont::Inline(font) => font,
        YamlLabelFont::Preset(preset) => font_presets
            .get(&preset)
            .cloned()
            .ok_or_else(|| SceneError::UnknownReference {
                kind: "font preset",
                name: preset,
                referenced_by: yaml.name.clone(),
            })?,
    };

    let import = yaml.import.map(|imports| {
        imports
            .into_iter()
            .map(|import| match import {
                YamlImport::Locator(locator) => locator,
                YamlImport::PageRelative { page_relative } => {
                    resolve_base_url(page_url, &page_relative)
                }
            })
            .collect::<Vec<_>>()
    });

    let mut value = json!({
        "import": import,
        "global": { "featureLabelFont": font },
        "sources": yaml.sources,
        "scene": yaml.scene,
    });

    for fragment_name in &yaml.overrides {
        let fragment = fragments
            .get(fragment_name)
            .ok_or_else(|| SceneError::UnknownReference {
                kind: "fragment",
                name: fragment_name.clone(),
                referenced_by: yaml.name.clone(),
            })?;
        deep_merge(&mut value, fragment);
    }

    // Absent sections come through as null; drop them so they read as missing.
    if let Value::Object(map) = &mut value {
        map.retain(|_, v| !v.is_null());
    }

    Ok(serde_json::from_value(value)?)
}
