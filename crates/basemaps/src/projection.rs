//! Projection presets.

use std::collections::HashSet;

use scene_common::{SceneError, SceneResult};
use tracing::info;

use crate::config::YamlProjectionFile;
use crate::descriptor::ProjectionDescriptor;

/// Ordered, read-only mapping of projection name to its files.
///
/// The first projection is the default.
#[derive(Debug, Clone)]
pub struct ProjectionRegistry {
    projections: Vec<(String, ProjectionDescriptor)>,
}

impl ProjectionRegistry {
    /// Build from `(name, descriptor)` pairs, keeping their order.
    pub fn new(projections: Vec<(String, ProjectionDescriptor)>) -> SceneResult<Self> {
        if projections.is_empty() {
            return Err(SceneError::EmptyRegistry("projection"));
        }

        let mut seen = HashSet::new();
        for (name, _) in &projections {
            if !seen.insert(name.as_str()) {
                return Err(SceneError::DuplicateName {
                    kind: "projection",
                    name: name.clone(),
                });
            }
        }

        Ok(Self { projections })
    }

    /// Parse a `projections.yaml` document.
    pub fn from_yaml(yaml: &str) -> SceneResult<Self> {
        let file: YamlProjectionFile = serde_yaml::from_str(yaml)?;
        let registry = Self::new(
            file.projections
                .into_iter()
                .map(|p| (p.name, ProjectionDescriptor { files: p.files }))
                .collect(),
        )?;

        info!(projections = registry.len(), "Projection registry loaded");
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<&ProjectionDescriptor> {
        self.projections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// Files for an optional projection choice.
    ///
    /// No choice gives `Ok(None)`; a name that isn't registered is an error.
    pub fn resolve_files(&self, projection: Option<&str>) -> SceneResult<Option<&[String]>> {
        match projection {
            None => Ok(None),
            Some(name) => self
                .get(name)
                .map(|p| Some(p.files.as_slice()))
                .ok_or_else(|| SceneError::ProjectionNotFound(name.to_string())),
        }
    }

    pub fn default_name(&self) -> &str {
        // Never empty, checked in new()
        self.projections
            .first()
            .map(|(name, _)| name.as_str())
            .unwrap_or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.projections.iter().map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.projections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }
}
