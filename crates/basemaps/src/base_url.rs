//! Resolving page-relative resource paths.
//!
//! Some preset imports live next to the page that hosts the map. The page URL
//! is supplied by the embedding application through [`PageLocation`].

/// Source of the URL of the page hosting the map.
pub trait PageLocation {
    fn current_page_url(&self) -> String;
}

impl<F> PageLocation for F
where
    F: Fn() -> String,
{
    fn current_page_url(&self) -> String {
        self()
    }
}

/// A fixed page URL, for hosts that know their location up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPage {
    url: String,
}

impl StaticPage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl PageLocation for StaticPage {
    fn current_page_url(&self) -> String {
        self.url.clone()
    }
}

/// Join `relative_path` onto the directory containing the page at `page_url`.
///
/// Query string and fragment are ignored. A URL with no path
/// (`https://example.com`) is treated as the site root.
pub fn resolve_base_url(page_url: &str, relative_path: &str) -> String {
    // origin + pathname only
    let end = page_url
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(page_url.len());
    let location = &page_url[..end];

    // Path begins at the first '/' after the authority, if there is one.
    let (origin_end, path_start) = match location.find("://") {
        Some(scheme_end) => {
            let authority_start = scheme_end + 3;
            let path_start = location[authority_start..]
                .find('/')
                .map(|i| authority_start + i);
            (location.len(), path_start)
        }
        None => (0, location.find('/')),
    };

    let last_slash =
        path_start.and_then(|start| location[start..].rfind('/').map(|i| start + i));

    let mut base = match last_slash {
        Some(last_slash) => location[..=last_slash].to_string(),
        None => location[..origin_end].to_string(),
    };

    if !base.ends_with('/') {
        base.push('/');
    }

    base + relative_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_in_subdirectory() {
        assert_eq!(
            resolve_base_url(
                "https://maps.example.com/viewer/index.html",
                "tangram_xyz_scene.yaml"
            ),
            "https://maps.example.com/viewer/tangram_xyz_scene.yaml"
        );
    }

    #[test]
    fn test_directory_url_keeps_single_slash() {
        assert_eq!(
            resolve_base_url("https://maps.example.com/viewer/", "scene.yaml"),
            "https://maps.example.com/viewer/scene.yaml"
        );
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        assert_eq!(
            resolve_base_url(
                "http://localhost:8080/app/index.html?basemap=none#mercator/1/2",
                "scene.yaml"
            ),
            "http://localhost:8080/app/scene.yaml"
        );
    }

    #[test]
    fn test_origin_without_path() {
        assert_eq!(
            resolve_base_url("https://maps.example.com", "scene.yaml"),
            "https://maps.example.com/scene.yaml"
        );
    }

    #[test]
    fn test_bare_file_name() {
        assert_eq!(resolve_base_url("index.html", "scene.yaml"), "/scene.yaml");
    }

    #[test]
    fn test_closure_page_location() {
        let page = || "https://maps.example.com/a/b.html".to_string();
        assert_eq!(page.current_page_url(), "https://maps.example.com/a/b.html");

        let fixed = StaticPage::new("https://maps.example.com/");
        assert_eq!(fixed.current_page_url(), "https://maps.example.com/");
    }
}
