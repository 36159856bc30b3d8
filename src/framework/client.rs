//! # Generic Client
//!
//! This module defines the one dispatcher every resource client is built on.
//! A typed client method does nothing but name an operation, pass its path
//! parameters and serialize its payload; [`ResourceClient::dispatch`] does the
//! rest.

use crate::framework::descriptor::ResourceDescriptor;
use crate::framework::error::{ClientError, ConfigurationError};
use crate::framework::transport::{Transport, TransportRequest};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// ## ResourceClient
///
/// Dispatches named operations of one [`ResourceDescriptor`] over a
/// [`Transport`].
///
/// * **Cloneable**: holds two `Arc`s, so cloning is inexpensive.
/// * **Stateless**: every call builds its own request; nothing is cached,
///   retried or validated locally.
/// * **Pass-through**: the transport's result, success or failure, is
///   returned unchanged.
pub struct ResourceClient<T: Transport> {
    descriptor: Arc<ResourceDescriptor>,
    transport: Arc<T>,
}

impl<T: Transport> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            transport: self.transport.clone(),
        }
    }
}

impl<T: Transport> ResourceClient<T> {
    pub fn new(descriptor: ResourceDescriptor, transport: Arc<T>) -> Self {
        Self {
            descriptor: Arc::new(descriptor),
            transport,
        }
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Builds the request for `operation` without sending it.
    ///
    /// The payload goes to `data` for body-carrying verbs and to `params` for
    /// GET. Path parameters are substituted into the URL and never copied into
    /// the payload.
    pub fn build_request(
        &self,
        operation: &str,
        path_params: &[(&str, &str)],
        payload: Option<Value>,
    ) -> Result<TransportRequest, ConfigurationError> {
        let op = self.descriptor.operation(operation)?;
        let mut request = TransportRequest::new(op.method, op.path.resolve(path_params)?);
        if op.method.carries_body() {
            request.data = payload;
        } else {
            request.params = payload;
        }
        Ok(request)
    }

    /// Sends `operation` exactly once and returns the transport's answer.
    #[instrument(skip(self, path_params, payload), fields(resource = self.descriptor.resource()))]
    pub async fn dispatch(
        &self,
        operation: &str,
        path_params: &[(&str, &str)],
        payload: Option<Value>,
    ) -> Result<Value, ClientError> {
        let request = self.build_request(operation, path_params, payload)?;
        debug!(method = %request.method, url = %request.url, "Sending request");

        match self.transport.send(request).await {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(error = %e, "Transport failed");
                Err(ClientError::Transport(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockTransport;
    use crate::framework::{Method, ResourceOperation, TransportError};
    use serde_json::json;

    fn album_client(transport: Arc<MockTransport>) -> ResourceClient<MockTransport> {
        let descriptor = ResourceDescriptor::new(
            "album",
            [
                ResourceOperation::post("create", "/album/create").unwrap(),
                ResourceOperation::get("byCreator", "/album/creator/{creatorUUID}").unwrap(),
                ResourceOperation::delete("delete", "/album/delete").unwrap(),
            ],
        )
        .unwrap();
        ResourceClient::new(descriptor, transport)
    }

    #[test]
    fn test_build_request_places_payload_by_method() {
        let client = album_client(Arc::new(MockTransport::new()));

        let create = client
            .build_request("create", &[], Some(json!({ "title": "Site A" })))
            .unwrap();
        assert_eq!(create.method, Method::Post);
        assert_eq!(create.url, "/album/create");
        assert_eq!(create.data, Some(json!({ "title": "Site A" })));
        assert_eq!(create.params, None);

        let by_creator = client
            .build_request("byCreator", &[("creatorUUID", "u-1")], Some(json!({ "page": 1 })))
            .unwrap();
        assert_eq!(by_creator.url, "/album/creator/u-1");
        assert_eq!(by_creator.data, None);
        assert_eq!(by_creator.params, Some(json!({ "page": 1 })));
    }

    #[test]
    fn test_build_request_rejects_missing_path_parameter() {
        let client = album_client(Arc::new(MockTransport::new()));
        let err = client.build_request("byCreator", &[], None).unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingPathParameter { .. }));
    }

    #[tokio::test]
    async fn test_configuration_error_sends_nothing() {
        let transport = Arc::new(MockTransport::new());
        let client = album_client(transport.clone());

        let result = client.dispatch("archive", &[], None).await;
        assert!(matches!(
            result,
            Err(ClientError::Configuration(ConfigurationError::UnknownOperation { .. }))
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_passes_result_through() {
        let transport = Arc::new(MockTransport::new());
        transport
            .expect(Method::Delete, "/album/delete")
            .return_ok(json!({ "code": 0, "msg": "删除成功" }));
        transport
            .expect(Method::Delete, "/album/delete")
            .return_err(TransportError::Timeout);

        let client = album_client(transport.clone());
        let ok = client
            .dispatch("delete", &[], Some(json!({ "id": 3 })))
            .await
            .unwrap();
        assert_eq!(ok, json!({ "code": 0, "msg": "删除成功" }));

        let err = client
            .dispatch("delete", &[], Some(json!({ "id": 3 })))
            .await
            .unwrap_err();
        assert_eq!(err.as_transport(), Some(&TransportError::Timeout));

        assert_eq!(transport.requests().len(), 2);
        transport.verify();
    }
}
