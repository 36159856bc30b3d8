//! # Resource Operations
//!
//! A [`ResourceOperation`] is one row of a resource's operation table: a name,
//! an HTTP verb and a [`PathTemplate`]. The payload shape is not described
//! here at all; it is whatever the generated client method accepts, and the
//! remote side validates it.

use crate::framework::error::ConfigurationError;
use crate::framework::transport::Method;
use std::fmt::{self, Display, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Param(String),
}

/// A request path that may embed `{name}` placeholders.
///
/// ```rust
/// use album_portal::framework::PathTemplate;
///
/// let template = PathTemplate::parse("/album/admin/{adminID}").unwrap();
/// assert_eq!(template.parameters().collect::<Vec<_>>(), vec!["adminID"]);
/// assert_eq!(template.resolve(&[("adminID", "7")]).unwrap(), "/album/admin/7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    pieces: Vec<Piece>,
}

impl PathTemplate {
    pub fn parse(raw: &str) -> Result<Self, ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidPathTemplate {
            template: raw.to_string(),
            reason: reason.to_string(),
        };

        if !raw.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') | None => return Err(invalid("unbalanced '{'")),
                            Some(c) => name.push(c),
                        }
                    }
                    if name.is_empty() {
                        return Err(invalid("empty parameter name"));
                    }
                    let duplicate = pieces
                        .iter()
                        .any(|p| matches!(p, Piece::Param(existing) if *existing == name));
                    if duplicate {
                        return Err(invalid("parameter used twice"));
                    }
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Param(name));
                }
                '}' => return Err(invalid("unbalanced '}'")),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(Self {
            raw: raw.to_string(),
            pieces,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names, in template order.
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.pieces.iter().filter_map(|p| match p {
            Piece::Param(name) => Some(name.as_str()),
            Piece::Literal(_) => None,
        })
    }

    pub fn has_parameters(&self) -> bool {
        self.parameters().next().is_some()
    }

    /// Substitutes every placeholder.
    ///
    /// Values are percent-encoded so they always stay within one segment.
    pub fn resolve(&self, values: &[(&str, &str)]) -> Result<String, ConfigurationError> {
        if let Some((unknown, _)) = values
            .iter()
            .find(|(name, _)| !self.parameters().any(|p| p == *name))
        {
            return Err(ConfigurationError::UnexpectedPathParameter {
                template: self.raw.clone(),
                parameter: unknown.to_string(),
            });
        }

        let mut path = String::with_capacity(self.raw.len());
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => path.push_str(text),
                Piece::Param(name) => {
                    let value = values
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| *value)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| ConfigurationError::MissingPathParameter {
                            template: self.raw.clone(),
                            parameter: name.clone(),
                        })?;
                    encode_segment(value, &mut path);
                }
            }
        }
        Ok(path)
    }
}

impl Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn encode_segment(value: &str, out: &mut String) {
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
}

/// One named remote action on a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceOperation {
    pub name: &'static str,
    pub method: Method,
    pub path: PathTemplate,
}

impl ResourceOperation {
    pub fn new(
        name: &'static str,
        method: Method,
        path: &str,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            name,
            method,
            path: PathTemplate::parse(path)?,
        })
    }

    pub fn get(name: &'static str, path: &str) -> Result<Self, ConfigurationError> {
        Self::new(name, Method::Get, path)
    }

    pub fn post(name: &'static str, path: &str) -> Result<Self, ConfigurationError> {
        Self::new(name, Method::Post, path)
    }

    pub fn put(name: &'static str, path: &str) -> Result<Self, ConfigurationError> {
        Self::new(name, Method::Put, path)
    }

    pub fn delete(name: &'static str, path: &str) -> Result<Self, ConfigurationError> {
        Self::new(name, Method::Delete, path)
    }
}
