//! # Configuration
//!
//! Two endpoints exist in two historical shapes on the server:
//!
//! | Operation | `Query` (legacy) | `Body` (current) |
//! |-----------|------------------|------------------|
//! | album detail | `GET /album/detail` | `POST /album/get` |
//! | drawing list | `GET /drawing/list` | `POST /drawing/list` |
//!
//! Neither is assumed. The shape is chosen per operation here and the
//! descriptor builders in [`crate::clients`] read it. Selecting a legacy shape
//! logs a warning so the discrepancy stays visible.
//!
//! Settings can be loaded from the environment:
//!
//! ```bash
//! PORTAL_ALBUM_DETAIL_STYLE=query PORTAL_DRAWING_LIST_STYLE=body cargo run
//! ```

use crate::framework::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const ALBUM_DETAIL_STYLE_VAR: &str = "PORTAL_ALBUM_DETAIL_STYLE";
pub const DRAWING_LIST_STYLE_VAR: &str = "PORTAL_DRAWING_LIST_STYLE";

/// Where an operation's identifying fields travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointStyle {
    /// GET with the payload as query parameters.
    Query,
    /// POST with the payload as a JSON body.
    #[default]
    Body,
}

impl FromStr for EndpointStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "query" | "get" => Ok(EndpointStyle::Query),
            "body" | "post" => Ok(EndpointStyle::Body),
            _ => Err(()),
        }
    }
}

/// Per-operation choice between the two historical endpoint shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConventions {
    pub album_detail: EndpointStyle,
    pub drawing_list: EndpointStyle,
}

/// Static configuration for a [`PortalSystem`](crate::lifecycle::PortalSystem).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub conventions: EndpointConventions,
}

impl PortalConfig {
    /// Reads the endpoint styles from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let style = |key: &str, default: EndpointStyle| match lookup(key) {
            None => Ok(default),
            Some(value) => value
                .parse::<EndpointStyle>()
                .map_err(|_| ConfigurationError::InvalidSetting {
                    key: key.to_string(),
                    value,
                }),
        };

        let defaults = EndpointConventions::default();
        Ok(Self {
            conventions: EndpointConventions {
                album_detail: style(ALBUM_DETAIL_STYLE_VAR, defaults.album_detail)?,
                drawing_list: style(DRAWING_LIST_STYLE_VAR, defaults.drawing_list)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_to_body_style() {
        let config = PortalConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.conventions.album_detail, EndpointStyle::Body);
        assert_eq!(config.conventions.drawing_list, EndpointStyle::Body);
    }

    #[test]
    fn test_reads_each_operation_independently() {
        let env: HashMap<&str, &str> = [(ALBUM_DETAIL_STYLE_VAR, "Query")].into();
        let config = PortalConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.conventions.album_detail, EndpointStyle::Query);
        assert_eq!(config.conventions.drawing_list, EndpointStyle::Body);
    }

    #[test]
    fn test_rejects_unknown_style() {
        let err = PortalConfig::from_lookup(|k| {
            (k == DRAWING_LIST_STYLE_VAR).then(|| "latest".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidSetting {
                key: DRAWING_LIST_STYLE_VAR.into(),
                value: "latest".into(),
            }
        );
    }

    #[test]
    fn test_deserializes_from_json() {
        let config: PortalConfig =
            serde_json::from_str(r#"{ "conventions": { "album_detail": "query" } }"#).unwrap();
        assert_eq!(config.conventions.album_detail, EndpointStyle::Query);
        assert_eq!(config.conventions.drawing_list, EndpointStyle::Body);
    }
}
