//! Application routes.
//!
//! The UI has three screens. Path matching is exact: only `/demo` and
//! `/upload` select their screens, every other path renders the homepage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three application screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRoute {
    /// Marketing homepage, also the fallback for unknown paths.
    #[default]
    Home,
    /// File selection screen.
    Upload,
    /// Scripted analysis demo.
    Demo,
}

impl AppRoute {
    /// All routes, in navigation order.
    pub const ALL: [AppRoute; 3] = [AppRoute::Home, AppRoute::Upload, AppRoute::Demo];

    /// Resolves a location path to a route.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path {
            "/demo" => Self::Demo,
            "/upload" => Self::Upload,
            _ => Self::Home,
        }
    }

    /// Returns the canonical path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Upload => "/upload",
            Self::Demo => "/demo",
        }
    }

    /// Returns the document title shown for this route.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "LexiLingua - AI-Powered Legal Document Analysis",
            Self::Upload => "Upload Document - LexiLingua",
            Self::Demo => "Analysis Demo - LexiLingua",
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_paths_select_their_screens() {
        assert_eq!(AppRoute::from_path("/demo"), AppRoute::Demo);
        assert_eq!(AppRoute::from_path("/upload"), AppRoute::Upload);
    }

    #[test]
    fn every_other_path_falls_back_to_home() {
        for path in ["", "/", "/demo/", "/Demo", "/upload?x=1", "/uploads", "demo", "/pricing"] {
            assert_eq!(AppRoute::from_path(path), AppRoute::Home, "path {path:?}");
        }
    }

    #[test]
    fn canonical_paths_resolve_to_themselves() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), route);
        }
    }

    #[test]
    fn each_path_selects_exactly_one_route() {
        for path in ["/demo", "/upload", "", "/anything"] {
            let matches = AppRoute::ALL
                .iter()
                .filter(|route| **route == AppRoute::from_path(path))
                .count();
            assert_eq!(matches, 1, "path {path:?}");
        }
    }

    #[test]
    fn display_is_the_path() {
        assert_eq!(AppRoute::Demo.to_string(), "/demo");
        assert_eq!(AppRoute::default(), AppRoute::Home);
    }
}
