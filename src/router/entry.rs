//! Route declarations, metadata and lazy view loaders.

use crate::framework::ConfigurationError;
use crate::router::pattern::RoutePattern;
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Zero-argument factory for a view.
///
/// Nothing runs when the loader is created or when a path is matched. Each
/// call to [`load`](Self::load) invokes the factory again, so a navigator
/// that wants caching has to do it itself, for one navigation at a time.
pub struct ViewLoader<V> {
    factory: Arc<dyn Fn() -> BoxFuture<'static, V> + Send + Sync>,
}

impl<V> Clone for ViewLoader<V> {
    fn clone(&self) -> Self {
        Self {
            factory: self.factory.clone(),
        }
    }
}

impl<V: 'static> ViewLoader<V> {
    pub fn new<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = V> + Send + 'static,
    {
        Self {
            factory: Arc::new(move || -> BoxFuture<'static, V> { factory().boxed() }),
        }
    }

    pub fn load(&self) -> BoxFuture<'static, V> {
        (self.factory)()
    }
}

impl<V> fmt::Debug for ViewLoader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ViewLoader")
    }
}

/// Route metadata: three recognized keys plus an open set.
///
/// | Key | Meaning |
/// |-----|---------|
/// | `title` | Label shown in navigation chrome |
/// | `client` | Usable outside an authenticated session |
/// | `closeTab` | Never opened as a tab in the multi-tab shell |
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub client: bool,
    #[serde(default)]
    pub close_tab: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RouteMeta {
    /// Sets `key`, routing recognized keys to their typed fields.
    pub fn insert(&mut self, key: &str, value: Value) -> Result<(), ConfigurationError> {
        let wrong_type = |expected: &str| ConfigurationError::InvalidRouteMeta {
            key: key.to_string(),
            reason: format!("expected {expected}"),
        };
        match key {
            "title" => {
                self.title = Some(value.as_str().ok_or_else(|| wrong_type("a string"))?.to_string())
            }
            "client" => self.client = value.as_bool().ok_or_else(|| wrong_type("a boolean"))?,
            "closeTab" => self.close_tab = value.as_bool().ok_or_else(|| wrong_type("a boolean"))?,
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    /// Looks up any key, recognized or not.
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "title" => self.title.clone().map(Value::String),
            "client" => Some(Value::Bool(self.client)),
            "closeTab" => Some(Value::Bool(self.close_tab)),
            _ => self.extra.get(key).cloned(),
        }
    }
}

/// What a route leads to.
#[derive(Debug, Clone)]
pub enum RouteTarget<V> {
    View(ViewLoader<V>),
    /// Re-run matching against this path.
    Redirect(String),
}

/// A route as declared, before the table validates it.
#[derive(Debug)]
pub struct Route<V> {
    pub(crate) path: String,
    pub(crate) name: Option<String>,
    pub(crate) meta: RouteMeta,
    pub(crate) target: RouteTarget<V>,
    pub(crate) error: Option<ConfigurationError>,
}

impl<V: 'static> Route<V> {
    pub fn view<F, Fut>(path: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = V> + Send + 'static,
    {
        Self::with_target(path, RouteTarget::View(ViewLoader::new(factory)))
    }

    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self::with_target(path, RouteTarget::Redirect(to.into()))
    }

    fn with_target(path: impl Into<String>, target: RouteTarget<V>) -> Self {
        Self {
            path: path.into(),
            name: None,
            meta: RouteMeta::default(),
            target,
            error: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    pub fn client(mut self, client: bool) -> Self {
        self.meta.client = client;
        self
    }

    pub fn close_tab(mut self, close_tab: bool) -> Self {
        self.meta.close_tab = close_tab;
        self
    }

    /// Sets an arbitrary metadata key. Type errors surface when the table is built.
    pub fn meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        if let Err(e) = self.meta.insert(key, value.into()) {
            self.error.get_or_insert(e);
        }
        self
    }
}

/// A validated entry of a [`RouteTable`](crate::router::RouteTable).
#[derive(Debug, Clone)]
pub struct RouteEntry<V> {
    pub pattern: RoutePattern,
    pub name: Option<String>,
    pub meta: RouteMeta,
    pub target: RouteTarget<V>,
}

impl<V> RouteEntry<V> {
    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }

    pub fn loader(&self) -> Option<&ViewLoader<V>> {
        match &self.target {
            RouteTarget::View(loader) => Some(loader),
            RouteTarget::Redirect(_) => None,
        }
    }
}
