//! Tests for loading registries from custom preset documents.

use std::path::PathBuf;
use std::sync::Arc;

use basemaps::{BasemapRegistry, RegistrySource, SceneError, StaticPage};
use test_utils::{
    assert_ends_with, pages, presets, scene_config_dir, temp_test_dir, write_preset_dir,
};

fn fixture_registry() -> BasemapRegistry {
    BasemapRegistry::from_yaml(
        presets::BASEMAPS,
        presets::PROJECTIONS,
        &StaticPage::new(pages::VIEWER),
    )
    .unwrap()
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_fixture_order_preserved() {
    let r = fixture_registry();
    assert_eq!(r.basemap_names().collect::<Vec<_>>(), presets::BASEMAP_NAMES);
    assert_eq!(r.default_basemap_name(), "pixel");
    assert_eq!(r.default_projection_name(), "mercator");
}

#[test]
fn test_load_from_directory() {
    let dir = write_preset_dir(presets::BASEMAPS, presets::PROJECTIONS);
    let r = BasemapRegistry::load_from_directory(dir.path(), &StaticPage::new(pages::VIEWER))
        .unwrap();
    assert_eq!(r.len(), 3);
    assert!(r.contains("blank"));
    assert!(!r.contains("xyz-pixel"));
}

#[test]
fn test_shipped_config_dir_matches_builtin() {
    let page = StaticPage::new(pages::VIEWER);
    let from_dir = BasemapRegistry::load_from_directory(scene_config_dir(), &page).unwrap();
    let builtin = BasemapRegistry::builtin(&page).unwrap();

    assert_eq!(
        from_dir.basemap_names().collect::<Vec<_>>(),
        builtin.basemap_names().collect::<Vec<_>>()
    );
    for name in builtin.basemap_names() {
        assert_eq!(from_dir.get(name), builtin.get(name));
    }
}

#[test]
fn test_missing_directory_uses_builtin() {
    let source = RegistrySource::Directory(PathBuf::from("/nonexistent/scene/presets"));
    let r = BasemapRegistry::load(&source, &StaticPage::new(pages::VIEWER)).unwrap();
    assert_eq!(r.default_basemap_name(), "xyz-pixel");
}

#[test]
fn test_directory_missing_projection_file() {
    let dir = temp_test_dir();
    std::fs::write(dir.path().join("basemaps.yaml"), presets::BASEMAPS).unwrap();

    let err = BasemapRegistry::load_from_directory(dir.path(), &StaticPage::new(pages::VIEWER))
        .unwrap_err();
    assert!(matches!(err, SceneError::Io(ref msg) if msg.contains("projections.yaml")));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let err = BasemapRegistry::from_yaml(
        "basemaps: [ { name: broken",
        presets::PROJECTIONS,
        &StaticPage::new(pages::VIEWER),
    )
    .unwrap_err();
    assert!(matches!(err, SceneError::ConfigParse(_)));
}

#[test]
fn test_unknown_field_rejected() {
    let yaml = format!("{}\nbasemap_colors: {{}}\n", presets::BASEMAPS);
    let page = StaticPage::new(pages::VIEWER);
    let err = BasemapRegistry::from_yaml(&yaml, presets::PROJECTIONS, &page).unwrap_err();
    assert!(matches!(err, SceneError::ConfigParse(_)));
}

#[test]
fn test_source_from_setting() {
    assert_eq!(RegistrySource::from_setting(None), RegistrySource::Builtin);
    let dir = write_preset_dir(presets::BASEMAPS, presets::PROJECTIONS);
    let source = RegistrySource::from_setting(Some(dir.path().to_string_lossy().to_string()));
    let r = BasemapRegistry::load(&source, &StaticPage::new(pages::VIEWER)).unwrap();
    assert_eq!(r.len(), 3);
}

// ============================================================================
// Page-relative imports
// ============================================================================

#[test]
fn test_page_relative_import_uses_page_directory() {
    let r = fixture_registry();
    let d = r.get("pixel").unwrap();
    assert_ends_with!(
        d.import.as_ref().unwrap(),
        [format!("{}base_scene.yaml", pages::VIEWER_DIR)]
    );
}

#[test]
fn test_page_location_closure_called_at_load() {
    let page = || pages::LOCAL_DEV.to_string();
    let r = BasemapRegistry::from_yaml(presets::BASEMAPS, presets::PROJECTIONS, &page).unwrap();
    assert_eq!(
        r.get("blank").unwrap().import.as_deref(),
        Some(&["http://localhost:8080/base_scene.yaml".to_string()][..])
    );
}

// ============================================================================
// Lookups
// ============================================================================

#[test]
fn test_source_fragment_merged() {
    let r = fixture_registry();
    let sources = r.get("pixel-dark").unwrap().sources.as_ref().unwrap();
    assert_eq!(sources["mapzen"]["url"], "https://tiles.example.com/{z}/{x}/{y}.mvt");
    assert!(r.get("blank").unwrap().sources.is_none());
}

#[test]
fn test_blank_with_globe() {
    let r = fixture_registry();
    assert!(r.is_projectable("blank"));
    assert!(!r.is_projectable("pixel"));

    let d = r.resolve_scene_descriptor("blank", Some("globe")).unwrap();
    let import = d.import.unwrap();
    assert_eq!(import.len(), 3);
    assert_ends_with!(import, ["globe.yaml", "globe-points.yaml"]);
}

#[test]
fn test_index_and_cycle_on_fixture() {
    let r = fixture_registry();
    assert_eq!(r.resolve_basemap_name("2"), Some("blank"));
    assert_eq!(r.resolve_basemap_name("3"), None);
    assert_eq!(r.resolve_basemap_name("-1"), None);
    assert_eq!(r.next_basemap_name("blank"), "pixel");
    assert_eq!(r.next_basemap_name("pixel"), "pixel-dark");
}

#[test]
fn test_descriptor_serializes_for_scene_composer() {
    let r = fixture_registry();
    let value = r
        .resolve_scene_descriptor("pixel", Some("mercator"))
        .unwrap()
        .to_value()
        .unwrap();

    assert_eq!(value["global"]["featureLabelFont"]["fill"], "darkred");
    assert_eq!(value["import"][2], "mercator.yaml");
    assert!(value.get("scene").is_none());
}

#[test]
fn test_registry_shared_across_threads() {
    let r = Arc::new(fixture_registry());
    let handles: Vec<_> = presets::BASEMAP_NAMES
        .iter()
        .map(|name| {
            let r = Arc::clone(&r);
            let name = name.to_string();
            std::thread::spawn(move || {
                let mut d = r.resolve_scene_descriptor(&name, Some("mercator")).unwrap();
                d.import.as_mut().unwrap().clear();
                r.get(&name).unwrap().import.as_ref().unwrap().len()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap() > 0);
    }
}
