//! Routes
//!
//! Every screen is addressed by a path under a configurable base path, so the
//! galaxy can be deployed under a sub-path (`/portfolio/design`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::planets::PlanetId;

/// A screen of the application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// `/`: boot terminal and planet field
    Home,
    /// `/<planet>`: a themed content page
    Planet(PlanetId),
}

impl Route {
    /// Route a planet navigates to
    #[must_use]
    pub fn for_planet(id: PlanetId) -> Self {
        Self::Planet(id)
    }

    /// Path relative to the base path (`/` or `/design`)
    #[must_use]
    pub fn relative_path(self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Planet(id) => format!("/{id}"),
        }
    }

    /// Whether this is the home screen
    #[must_use]
    pub fn is_home(self) -> bool {
        matches!(self, Self::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative_path())
    }
}

/// Normalized base path: always starts with `/`, never ends with one
/// (except the root itself, stored as the empty prefix).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BasePath {
    prefix: String,
}

impl BasePath {
    /// Normalize a raw base path value
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        let prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        Self { prefix }
    }

    /// The prefix as configured (`/` for the root)
    #[must_use]
    pub fn as_str(&self) -> &str {
        if self.prefix.is_empty() {
            "/"
        } else {
            &self.prefix
        }
    }

    /// Absolute path of a route under this base
    #[must_use]
    pub fn path_of(&self, route: Route) -> String {
        match route {
            Route::Home if self.prefix.is_empty() => "/".to_string(),
            Route::Home => format!("{}/", self.prefix),
            Route::Planet(_) => format!("{}{}", self.prefix, route.relative_path()),
        }
    }

    /// Resolve an absolute (or base-relative) path back to a route
    ///
    /// Returns `None` for anything that is not `/` or a known planet page.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<Route> {
        let path = path.trim();
        let rest = path.strip_prefix(self.prefix.as_str()).unwrap_or(path);
        let segment = rest.trim_matches('/');
        if segment.is_empty() {
            return Some(Route::Home);
        }
        segment.parse::<PlanetId>().ok().map(Route::Planet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_base_path() {
        let base = BasePath::new("/");
        assert_eq!(base.as_str(), "/");
        assert_eq!(base.path_of(Route::Home), "/");
        assert_eq!(base.path_of(Route::Planet(PlanetId::Design)), "/design");
    }

    #[test]
    fn test_sub_path_deployment() {
        let base = BasePath::new("portfolio/");
        assert_eq!(base.as_str(), "/portfolio");
        assert_eq!(base.path_of(Route::Home), "/portfolio/");
        assert_eq!(
            base.path_of(Route::Planet(PlanetId::Lab)),
            "/portfolio/lab"
        );
    }

    #[test]
    fn test_resolve_paths() {
        let base = BasePath::new("/portfolio");
        assert_eq!(base.resolve("/portfolio/"), Some(Route::Home));
        assert_eq!(
            base.resolve("/portfolio/film"),
            Some(Route::Planet(PlanetId::Film))
        );
        assert_eq!(base.resolve("soul"), Some(Route::Planet(PlanetId::Soul)));
        assert_eq!(base.resolve("/portfolio/nowhere"), None);
    }

    #[test]
    fn test_every_planet_has_a_route() {
        let base = BasePath::default();
        for id in PlanetId::ALL {
            let path = base.path_of(Route::for_planet(id));
            assert_eq!(path, format!("/{}", id.as_str()));
            assert_eq!(base.resolve(&path), Some(Route::Planet(id)));
        }
    }
}
