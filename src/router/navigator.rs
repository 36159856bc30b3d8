//! # Navigator
//!
//! Turns a requested location into a loaded view. The navigator owns nothing
//! but a shared [`RouteTable`]; it is handed one at construction instead of
//! reaching for a global.

use crate::router::entry::RouteMeta;
use crate::router::error::RouteError;
use crate::router::table::RouteTable;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// A completed navigation.
#[derive(Debug, Clone)]
pub struct Navigation<V> {
    /// The path that was finally shown.
    pub path: String,
    pub name: Option<String>,
    pub params: BTreeMap<String, String>,
    pub meta: RouteMeta,
    pub redirected_from: Option<String>,
    /// Whether the catch-all answered.
    pub fallback: bool,
    pub view: V,
}

pub struct Navigator<V> {
    routes: Arc<RouteTable<V>>,
}

impl<V> Clone for Navigator<V> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
        }
    }
}

impl<V: 'static> Navigator<V> {
    pub fn new(routes: Arc<RouteTable<V>>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteTable<V> {
        &self.routes
    }

    /// Resolves `location` and loads its view.
    ///
    /// Any `?query` or `#fragment` is ignored for matching. The view loader
    /// runs exactly once per call; only the matched entry's loader runs.
    pub async fn navigate(&self, location: &str) -> Result<Navigation<V>, RouteError> {
        let path = strip_location(location);
        let matched = self.routes.resolve(path)?;

        if matched.is_fallback() {
            debug!(path, "No route matched, showing fallback");
        }
        info!(
            path = %matched.path,
            name = matched.name().unwrap_or("-"),
            redirected_from = matched.redirected_from.as_deref().unwrap_or("-"),
            "Navigating"
        );

        let view = matched.load().await;
        Ok(Navigation {
            name: matched.name().map(str::to_string),
            meta: matched.meta().clone(),
            fallback: matched.is_fallback(),
            path: matched.path,
            params: matched.params,
            redirected_from: matched.redirected_from,
            view,
        })
    }

    /// Navigates to a named route, e.g. `AlbumDetail` with `id=42`.
    pub async fn navigate_named(
        &self,
        name: &str,
        params: &[(&str, &str)],
    ) -> Result<Navigation<V>, NavigateError> {
        let path = self.routes.href(name, params)?;
        Ok(self.navigate(&path).await?)
    }
}

/// Failure of [`Navigator::navigate_named`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigateError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Configuration(#[from] crate::framework::ConfigurationError),
}

fn strip_location(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted(path: &str, counter: &Arc<AtomicUsize>, view: &'static str) -> Route<&'static str> {
        let counter = counter.clone();
        Route::view(path, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                view
            }
        })
    }

    fn navigator(login: &Arc<AtomicUsize>, other: &Arc<AtomicUsize>) -> Navigator<&'static str> {
        let table = RouteTable::builder()
            .route(Route::redirect("/", "/login"))
            .route(counted("/login", login, "login").name("Login"))
            .route(counted("/**", other, "error").close_tab(true))
            .build()
            .unwrap();
        Navigator::new(Arc::new(table))
    }

    #[tokio::test]
    async fn test_loader_runs_once_per_navigation() {
        let login = Arc::new(AtomicUsize::new(0));
        let other = Arc::new(AtomicUsize::new(0));
        let nav = navigator(&login, &other);

        let result = nav.navigate("/").await.unwrap();
        assert_eq!(result.view, "login");
        assert_eq!(result.path, "/login");
        assert_eq!(result.redirected_from.as_deref(), Some("/"));
        assert_eq!(login.load(Ordering::SeqCst), 1);
        assert_eq!(other.load(Ordering::SeqCst), 0);

        nav.navigate("/login").await.unwrap();
        assert_eq!(login.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back() {
        let login = Arc::new(AtomicUsize::new(0));
        let other = Arc::new(AtomicUsize::new(0));
        let nav = navigator(&login, &other);

        let result = nav.navigate("/no/such/page").await.unwrap();
        assert!(result.fallback);
        assert_eq!(result.view, "error");
        assert!(result.meta.close_tab);
        assert_eq!(login.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_strip_location() {
        assert_eq!(strip_location("/albumDetail/3?tab=drawings"), "/albumDetail/3");
        assert_eq!(strip_location("/home#top"), "/home");
        assert_eq!(strip_location("?x=1"), "/");
        assert_eq!(strip_location("/my"), "/my");
    }
}
