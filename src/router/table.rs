//! # Route Table
//!
//! An ordered list of validated [`RouteEntry`] values. The first entry whose
//! pattern matches wins, which is why the catch-all must be declared last.
//!
//! ```rust
//! use album_portal::router::{Route, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .route(Route::redirect("/", "/login"))
//!     .route(Route::view("/login", || async { "login" }).name("Login"))
//!     .route(Route::view("/albumDetail/{id}", || async { "album" }).name("AlbumDetail"))
//!     .route(Route::view("/**", || async { "error" }).close_tab(true))
//!     .build()
//!     .unwrap();
//!
//! let matched = table.resolve("/albumDetail/42").unwrap();
//! assert_eq!(matched.name(), Some("AlbumDetail"));
//! assert_eq!(matched.param("id"), Some("42"));
//! ```

use crate::framework::ConfigurationError;
use crate::router::entry::{Route, RouteEntry, RouteMeta, RouteTarget, ViewLoader};
use crate::router::error::RouteError;
use crate::router::pattern::{split_path, RoutePattern};
use std::collections::{BTreeMap, HashSet};
use tracing::trace;

/// Immutable, validated route table.
#[derive(Debug)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

/// Collects routes in declaration order; see [`RouteTable::builder`].
pub struct RouteTableBuilder<V> {
    routes: Vec<Route<V>>,
}

impl<V: 'static> RouteTableBuilder<V> {
    pub fn route(mut self, route: Route<V>) -> Self {
        self.routes.push(route);
        self
    }

    /// Validates the table.
    ///
    /// Fails on malformed patterns or metadata, duplicate patterns or names,
    /// a missing, repeated or misplaced catch-all, entries shadowed by an
    /// earlier entry, a missing redirect of `/`, and redirects that do not
    /// land on a view.
    pub fn build(self) -> Result<RouteTable<V>, ConfigurationError> {
        let mut entries = Vec::with_capacity(self.routes.len());
        let mut shapes = HashSet::new();
        let mut names = HashSet::new();

        for route in self.routes {
            if let Some(e) = route.error {
                return Err(e);
            }
            let pattern = RoutePattern::parse(&route.path)?;
            if !shapes.insert(pattern.shape()) {
                return Err(ConfigurationError::DuplicateRoute(route.path));
            }
            if let Some(name) = &route.name {
                if !names.insert(name.clone()) {
                    return Err(ConfigurationError::DuplicateRouteName(name.clone()));
                }
            }
            entries.push(RouteEntry {
                pattern,
                name: route.name,
                meta: route.meta,
                target: route.target,
            });
        }

        let catch_alls: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.pattern.is_catch_all())
            .map(|(i, _)| i)
            .collect();
        if catch_alls.len() != 1 {
            return Err(ConfigurationError::CatchAllCount(catch_alls.len()));
        }
        if catch_alls[0] + 1 != entries.len() {
            return Err(ConfigurationError::CatchAllNotLast);
        }

        for (i, entry) in entries.iter().enumerate() {
            let shadowing = entries[..i]
                .iter()
                .find(|e| e.pattern.shadows(&entry.pattern));
            if let Some(earlier) = shadowing {
                return Err(ConfigurationError::UnreachableRoute {
                    pattern: entry.pattern.to_string(),
                    shadowed_by: earlier.pattern.to_string(),
                });
            }
        }

        // Shapes are unique, so there is at most one.
        if !entries
            .iter()
            .any(|e| e.is_redirect() && e.pattern.as_str() == "/")
        {
            return Err(ConfigurationError::MissingRootRedirect);
        }

        let table = RouteTable { entries };
        for entry in &table.entries {
            if let RouteTarget::Redirect(to) = &entry.target {
                table.check_redirect(entry, to)?;
            }
        }
        Ok(table)
    }
}

impl<V: 'static> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder { routes: Vec::new() }
    }
}

impl<V> RouteTable<V> {
    fn check_redirect(&self, entry: &RouteEntry<V>, to: &str) -> Result<(), ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidRedirect {
            from: entry.pattern.to_string(),
            to: to.to_string(),
            reason: reason.to_string(),
        };

        if !to.starts_with('/') {
            return Err(invalid("target must be an absolute path"));
        }
        let (target, _) = self
            .first_match(to)
            .ok_or_else(|| invalid("target matches nothing"))?;
        if target.is_redirect() {
            return Err(invalid("target is itself a redirect"));
        }
        if target.pattern.is_catch_all() {
            return Err(invalid("target only reaches the catch-all"));
        }
        Ok(())
    }

    fn first_match(&self, path: &str) -> Option<(&RouteEntry<V>, BTreeMap<String, String>)> {
        let segments = split_path(path);
        self.entries
            .iter()
            .find_map(|entry| entry.pattern.matches(&segments).map(|params| (entry, params)))
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteEntry<V>> {
        self.entries.iter().find(|e| e.name.as_deref() == Some(name))
    }

    /// Builds the path of a named route, e.g. `AlbumDetail` + `id=42`.
    pub fn href(&self, name: &str, params: &[(&str, &str)]) -> Result<String, ConfigurationError> {
        self.by_name(name)
            .ok_or_else(|| ConfigurationError::UnknownRouteName(name.to_string()))?
            .pattern
            .render(params)
    }

    /// Resolves `path` to the entry that will be shown.
    ///
    /// Pure and synchronous: no loader runs here. A redirect entry is followed
    /// once; the table guarantees its target is a view.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<'_, V>, RouteError> {
        let (entry, params) = self
            .first_match(path)
            .ok_or_else(|| RouteError::Unmatched(path.to_string()))?;

        let (entry, params, path, redirected_from) = match &entry.target {
            RouteTarget::View(_) => (entry, params, path.to_string(), None),
            RouteTarget::Redirect(to) => {
                trace!(from = path, to = %to, "Following redirect");
                let (target, params) = self
                    .first_match(to)
                    .ok_or_else(|| RouteError::Unmatched(to.clone()))?;
                (target, params, to.clone(), Some(path.to_string()))
            }
        };

        let loader = entry
            .loader()
            .ok_or_else(|| RouteError::Unmatched(path.clone()))?;

        Ok(RouteMatch {
            entry,
            loader,
            path,
            params,
            redirected_from,
        })
    }
}

/// The outcome of [`RouteTable::resolve`].
#[derive(Debug)]
pub struct RouteMatch<'a, V> {
    entry: &'a RouteEntry<V>,
    loader: &'a ViewLoader<V>,
    /// The path that matched `entry` (the redirect target, if any).
    pub path: String,
    pub params: BTreeMap<String, String>,
    /// The originally requested path when a redirect was followed.
    pub redirected_from: Option<String>,
}

impl<'a, V: 'static> RouteMatch<'a, V> {
    pub fn entry(&self) -> &'a RouteEntry<V> {
        self.entry
    }

    pub fn name(&self) -> Option<&'a str> {
        self.entry.name.as_deref()
    }

    pub fn meta(&self) -> &'a RouteMeta {
        &self.entry.meta
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn is_fallback(&self) -> bool {
        self.entry.pattern.is_catch_all()
    }

    /// Invokes the entry's view loader.
    pub async fn load(&self) -> V {
        self.loader.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(path: &str) -> Route<&'static str> {
        Route::view(path, || async { "view" })
    }

    fn base() -> RouteTableBuilder<&'static str> {
        RouteTable::builder()
            .route(Route::redirect("/", "/login"))
            .route(view("/login").name("Login"))
    }

    #[test]
    fn test_first_match_wins() {
        let table = base()
            .route(view("/album/new").name("New"))
            .route(view("/album/{id}").name("ById"))
            .route(view("/**"))
            .build()
            .unwrap();

        assert_eq!(table.resolve("/album/new").unwrap().name(), Some("New"));
        assert_eq!(table.resolve("/album/7").unwrap().name(), Some("ById"));
        let href = table.href("New", &[]).unwrap();
        assert_eq!(table.resolve(&href).unwrap().name(), Some("New"));
    }

    #[test]
    fn test_shadowed_route_rejected() {
        let err = base()
            .route(view("/album/{id}").name("ById"))
            .route(view("/album/new").name("New"))
            .route(view("/**"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnreachableRoute {
                pattern: "/album/new".into(),
                shadowed_by: "/album/{id}".into(),
            }
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let table = base().route(view("/**")).build().unwrap();
        let first = table.resolve("/login").unwrap();
        let second = table.resolve("/login").unwrap();
        assert!(std::ptr::eq(first.entry(), second.entry()));
    }

    #[test]
    fn test_root_redirect_is_one_hop() {
        let table = base().route(view("/**")).build().unwrap();
        let matched = table.resolve("/").unwrap();
        assert_eq!(matched.name(), Some("Login"));
        assert_eq!(matched.path, "/login");
        assert_eq!(matched.redirected_from.as_deref(), Some("/"));
    }

    #[test]
    fn test_href_renders_named_route() {
        let table = base()
            .route(view("/albumDetail/{id}").name("AlbumDetail"))
            .route(view("/**"))
            .build()
            .unwrap();
        assert_eq!(table.href("AlbumDetail", &[("id", "7")]).unwrap(), "/albumDetail/7");
        assert_eq!(
            table.href("Nope", &[]).unwrap_err(),
            ConfigurationError::UnknownRouteName("Nope".into())
        );
    }

    #[test]
    fn test_catch_all_rules() {
        assert_eq!(
            base().build().unwrap_err(),
            ConfigurationError::CatchAllCount(0)
        );
        assert_eq!(
            base().route(view("/**")).route(view("/home")).build().unwrap_err(),
            ConfigurationError::CatchAllNotLast
        );
        assert_eq!(
            base()
                .route(view("/files/**"))
                .route(view("/**"))
                .build()
                .unwrap_err(),
            ConfigurationError::CatchAllCount(2)
        );
    }

    #[test]
    fn test_duplicates_rejected() {
        assert_eq!(
            base()
                .route(view("/a/{x}"))
                .route(view("/a/{y}"))
                .route(view("/**"))
                .build()
                .unwrap_err(),
            ConfigurationError::DuplicateRoute("/a/{y}".into())
        );
        assert_eq!(
            base().route(view("/other").name("Login")).route(view("/**")).build().unwrap_err(),
            ConfigurationError::DuplicateRouteName("Login".into())
        );
    }

    #[test]
    fn test_redirect_rules() {
        let no_root = RouteTable::builder()
            .route(view("/login"))
            .route(view("/**"))
            .build()
            .unwrap_err();
        assert_eq!(no_root, ConfigurationError::MissingRootRedirect);

        let chained = base()
            .route(Route::redirect("/old", "/"))
            .route(view("/**"))
            .build()
            .unwrap_err();
        assert!(matches!(chained, ConfigurationError::InvalidRedirect { .. }));

        let dangling = RouteTable::builder()
            .route(Route::redirect("/", "/nowhere"))
            .route(view("/**"))
            .build()
            .unwrap_err();
        assert!(matches!(dangling, ConfigurationError::InvalidRedirect { .. }));
    }

    #[test]
    fn test_malformed_pattern_and_meta_fail_build() {
        assert!(matches!(
            base().route(view("/a/**/b")).route(view("/**")).build(),
            Err(ConfigurationError::InvalidRoutePattern { .. })
        ));
        assert!(matches!(
            base().route(view("/a").meta("client", "yes")).route(view("/**")).build(),
            Err(ConfigurationError::InvalidRouteMeta { .. })
        ));
    }
}
