/// Resolution failures.
///
/// A validated [`RouteTable`](crate::router::RouteTable) always ends in a
/// catch-all whose redirects land on views, so seeing this means the table
/// was built around its checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("No route matches {0}")]
    Unmatched(String),
}
