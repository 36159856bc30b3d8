//! Route patterns: `/static`, `/albumDetail/{id}` and the catch-all `/**`.

use crate::framework::ConfigurationError;
use std::collections::BTreeMap;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed navigation pattern.
///
/// Every pattern is validated when parsed, so a pattern that exists can
/// always match something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
    catch_all: bool,
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Result<Self, ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidRoutePattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        let rest = raw
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with '/'"))?;

        let mut segments = Vec::new();
        let mut catch_all = false;
        if !rest.is_empty() {
            let parts: Vec<&str> = rest.split('/').collect();
            for (i, part) in parts.iter().enumerate() {
                if part.is_empty() {
                    return Err(invalid("empty segment"));
                }
                if *part == "**" {
                    if i + 1 != parts.len() {
                        return Err(invalid("'**' must be the last segment"));
                    }
                    catch_all = true;
                    continue;
                }
                if part.contains('*') {
                    return Err(invalid("'*' is only allowed as a whole '**' segment"));
                }
                if let Some(name) = part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                    if name.is_empty()
                        || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                    {
                        return Err(invalid("parameter names must be non-empty identifiers"));
                    }
                    let duplicate = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if duplicate {
                        return Err(invalid("parameter used twice"));
                    }
                    segments.push(Segment::Param(name.to_string()));
                } else if part.contains('{') || part.contains('}') {
                    return Err(invalid("a parameter must fill its whole segment"));
                } else {
                    segments.push(Segment::Static(part.to_string()));
                }
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
            catch_all,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_catch_all(&self) -> bool {
        self.catch_all
    }

    /// True when the pattern matches exactly one path.
    pub fn is_static(&self) -> bool {
        !self.catch_all && self.segments.iter().all(|s| matches!(s, Segment::Static(_)))
    }

    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// The pattern with parameter names erased, e.g. `/albumDetail/{}`.
    ///
    /// Two patterns with the same shape match exactly the same paths.
    pub fn shape(&self) -> String {
        let mut shape = String::new();
        for segment in &self.segments {
            shape.push('/');
            match segment {
                Segment::Static(text) => shape.push_str(text),
                Segment::Param(_) => shape.push_str("{}"),
            }
        }
        if self.catch_all {
            shape.push_str("/**");
        }
        if shape.is_empty() {
            shape.push('/');
        }
        shape
    }

    /// Matches already-split path segments, returning bound parameters.
    pub fn matches(&self, path: &[&str]) -> Option<BTreeMap<String, String>> {
        let fits = if self.catch_all {
            path.len() >= self.segments.len()
        } else {
            path.len() == self.segments.len()
        };
        if !fits {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, actual) in self.segments.iter().zip(path) {
            match segment {
                Segment::Static(text) if text == actual => {}
                Segment::Param(name) if !actual.is_empty() => {
                    params.insert(name.clone(), actual.to_string());
                }
                _ => return None,
            }
        }
        Some(params)
    }

    /// True when every path `later` matches is already matched by `self`.
    ///
    /// A `{param}` segment covers any segment; a static segment only covers
    /// the same static text.
    pub fn shadows(&self, later: &RoutePattern) -> bool {
        if later.catch_all && !self.catch_all {
            return false;
        }
        let fits = if self.catch_all {
            later.segments.len() >= self.segments.len()
        } else {
            later.segments.len() == self.segments.len()
        };
        fits && self
            .segments
            .iter()
            .zip(&later.segments)
            .all(|(earlier, later)| match (earlier, later) {
                (Segment::Param(_), _) => true,
                (Segment::Static(a), Segment::Static(b)) => a == b,
                (Segment::Static(_), Segment::Param(_)) => false,
            })
    }

    /// Builds a concrete path from parameter values.
    pub fn render(&self, params: &[(&str, &str)]) -> Result<String, ConfigurationError> {
        if self.catch_all {
            return Err(ConfigurationError::InvalidRoutePattern {
                pattern: self.raw.clone(),
                reason: "a catch-all pattern has no canonical path".to_string(),
            });
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| *value)
                        .filter(|value| !value.is_empty() && !value.contains('/'))
                        .ok_or_else(|| ConfigurationError::MissingPathParameter {
                            template: self.raw.clone(),
                            parameter: name.clone(),
                        })?;
                    path.push_str(value);
                }
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

impl Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Splits a navigation path into segments.
///
/// A single trailing `/` is ignored, so `/home/` and `/home` are the same
/// location. The root path yields no segments.
pub fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_binding() {
        let pattern = RoutePattern::parse("/albumDetail/{id}").unwrap();
        let params = pattern.matches(&split_path("/albumDetail/42")).unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));

        assert!(pattern.matches(&split_path("/albumDetail")).is_none());
        assert!(pattern.matches(&split_path("/albumDetail/42/edit")).is_none());
    }

    #[test]
    fn test_catch_all_matches_everything() {
        let pattern = RoutePattern::parse("/**").unwrap();
        assert!(pattern.is_catch_all());
        for path in ["/", "/this-does-not-exist", "/a/b/c"] {
            assert!(pattern.matches(&split_path(path)).is_some(), "{path}");
        }
    }

    #[test]
    fn test_shadowing() {
        let p = |raw: &str| RoutePattern::parse(raw).unwrap();

        assert!(p("/album/{id}").shadows(&p("/album/new")));
        assert!(p("/{section}/{id}").shadows(&p("/album/{key}")));
        assert!(p("/files/**").shadows(&p("/files/a/b")));
        assert!(p("/**").shadows(&p("/")));

        assert!(!p("/album/new").shadows(&p("/album/{id}")));
        assert!(!p("/album/{id}").shadows(&p("/album/{id}/edit")));
        assert!(!p("/album/{id}").shadows(&p("/drawing/{id}")));
        assert!(!p("/home").shadows(&p("/**")));
    }

    #[test]
    fn test_root_and_trailing_slash() {
        let root = RoutePattern::parse("/").unwrap();
        assert!(root.is_static());
        assert!(root.matches(&split_path("/")).is_some());
        assert!(root.matches(&split_path("/home")).is_none());

        let home = RoutePattern::parse("/home").unwrap();
        assert!(home.matches(&split_path("/home/")).is_some());
    }

    #[test]
    fn test_shape_ignores_parameter_names() {
        let a = RoutePattern::parse("/albumDetail/{id}").unwrap();
        let b = RoutePattern::parse("/albumDetail/{albumId}").unwrap();
        assert_eq!(a.shape(), b.shape());
        assert_eq!(RoutePattern::parse("/").unwrap().shape(), "/");
        assert_eq!(RoutePattern::parse("/**").unwrap().shape(), "/**");
    }

    #[test]
    fn test_render() {
        let pattern = RoutePattern::parse("/albumDetail/{id}").unwrap();
        assert_eq!(pattern.render(&[("id", "42")]).unwrap(), "/albumDetail/42");
        assert!(pattern.render(&[]).is_err());
        assert!(RoutePattern::parse("/**").unwrap().render(&[]).is_err());
    }

    #[test]
    fn test_malformed_patterns() {
        for raw in [
            "home",
            "/home/",
            "//home",
            "/**/home",
            "/home*",
            "/album/{}",
            "/album/{id-x}",
            "/album/id{x}",
            "/a/{x}/b/{x}",
        ] {
            assert!(
                matches!(
                    RoutePattern::parse(raw),
                    Err(ConfigurationError::InvalidRoutePattern { .. })
                ),
                "{raw} should be rejected"
            );
        }
    }
}
