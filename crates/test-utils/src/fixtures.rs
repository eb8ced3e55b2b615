//! Common test fixtures for preset registry tests.
//!
//! Small preset documents, far shorter than the shipped ones, so tests can
//! reason about exact ordering and contents.

/// Page URLs handed to registries as the hosting page.
pub mod pages {
    /// Viewer page in a subdirectory
    pub const VIEWER: &str = "https://maps.example.com/viewer/index.html";

    /// Directory of [`VIEWER`]
    pub const VIEWER_DIR: &str = "https://maps.example.com/viewer/";

    /// Local development server with query and fragment
    pub const LOCAL_DEV: &str = "http://localhost:8080/index.html?basemap=none#mercator/0/0";
}

/// Preset documents in the shipped file format.
pub mod presets {
    /// Three basemaps: two sharing a source override, one bare with a scene override.
    pub const BASEMAPS: &str = r#"
font_presets:
  dark:
    fill: [0.9, 0.9, 0.1]
    size: 12px
    stroke: { color: black, width: 4px }
  light:
    fill: darkred
    size: 12px
    stroke: { color: white, width: 4px }

fragments:
  tiles:
    sources:
      mapzen:
        url: "https://tiles.example.com/{z}/{x}/{y}.mvt"
        url_params: { api_key: global.sdk_api_key }

projectable: [blank]

basemaps:
  - name: pixel
    import:
      - https://styles.example.com/pixel/scene.yaml
      - page_relative: base_scene.yaml
    label_font: light
    overrides: [tiles]
  - name: pixel-dark
    import:
      - https://styles.example.com/pixel-dark/scene.yaml
      - page_relative: base_scene.yaml
    label_font: dark
    overrides: [tiles]
  - name: blank
    import:
      - page_relative: base_scene.yaml
    label_font: dark
    scene:
      background:
        color: [0, 0, 0]
"#;

    /// Names in [`BASEMAPS`], in file order.
    pub const BASEMAP_NAMES: [&str; 3] = ["pixel", "pixel-dark", "blank"];

    /// Two projections, the second with a points companion file.
    pub const PROJECTIONS: &str = r#"
projections:
  - name: mercator
    files: [mercator.yaml]
  - name: globe
    files: [globe.yaml, globe-points.yaml]
"#;
}
