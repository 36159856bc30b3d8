//! # Resource Descriptors
//!
//! The full remote surface of one resource, as data. Building a descriptor is
//! the only place operation tables are validated; once built it is immutable
//! and shared behind an `Arc` by every client clone.

use crate::framework::error::ConfigurationError;
use crate::framework::operation::ResourceOperation;

/// Operation table for one resource (Album, Drawing, MustRead, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    resource: &'static str,
    operations: Vec<ResourceOperation>,
}

impl ResourceDescriptor {
    /// Builds a descriptor, rejecting duplicate names and duplicate endpoints.
    ///
    /// Two operations may not share a `{method, path}` pair, since that pair is
    /// what identifies the remote endpoint.
    pub fn new(
        resource: &'static str,
        operations: impl IntoIterator<Item = ResourceOperation>,
    ) -> Result<Self, ConfigurationError> {
        let mut accepted: Vec<ResourceOperation> = Vec::new();
        for op in operations {
            if accepted.iter().any(|o| o.name == op.name) {
                return Err(ConfigurationError::DuplicateOperation {
                    resource: resource.to_string(),
                    operation: op.name.to_string(),
                });
            }
            if accepted
                .iter()
                .any(|o| o.method == op.method && o.path == op.path)
            {
                return Err(ConfigurationError::DuplicateEndpoint {
                    resource: resource.to_string(),
                    method: op.method.to_string(),
                    path: op.path.to_string(),
                });
            }
            accepted.push(op);
        }
        Ok(Self {
            resource,
            operations: accepted,
        })
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn operation(&self, name: &str) -> Result<&ResourceOperation, ConfigurationError> {
        self.operations
            .iter()
            .find(|op| op.name == name)
            .ok_or_else(|| ConfigurationError::UnknownOperation {
                resource: self.resource.to_string(),
                operation: name.to_string(),
            })
    }

    /// Operations in declaration order.
    pub fn operations(&self) -> impl Iterator<Item = &ResourceOperation> {
        self.operations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Method;

    #[test]
    fn test_lookup_by_name() {
        let descriptor = ResourceDescriptor::new(
            "mustRead",
            [
                ResourceOperation::post("create", "/mustRead/create").unwrap(),
                ResourceOperation::get("latest", "/mustRead/latest").unwrap(),
            ],
        )
        .unwrap();

        let latest = descriptor.operation("latest").unwrap();
        assert_eq!(latest.method, Method::Get);
        assert_eq!(latest.path.as_str(), "/mustRead/latest");
        assert_eq!(
            descriptor.operations().map(|o| o.name).collect::<Vec<_>>(),
            vec!["create", "latest"]
        );
        assert!(matches!(
            descriptor.operation("archive"),
            Err(ConfigurationError::UnknownOperation { .. })
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = ResourceDescriptor::new(
            "album",
            [
                ResourceOperation::post("create", "/album/create").unwrap(),
                ResourceOperation::post("create", "/album/new").unwrap(),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateOperation { .. }));
    }

    #[test]
    fn test_duplicate_endpoint_rejected() {
        let err = ResourceDescriptor::new(
            "drawing",
            [
                ResourceOperation::post("list", "/drawing/list").unwrap(),
                ResourceOperation::post("search", "/drawing/list").unwrap(),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateEndpoint { .. }));

        // Same path under a different verb is a different endpoint.
        assert!(ResourceDescriptor::new(
            "drawing",
            [
                ResourceOperation::post("list", "/drawing/list").unwrap(),
                ResourceOperation::get("legacyList", "/drawing/list").unwrap(),
            ],
        )
        .is_ok());
    }
}
