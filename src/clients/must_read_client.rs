//! # Must-Read Client

use crate::framework::{
    ConfigurationError, ResourceClient, ResourceDescriptor, ResourceOperation, Transport,
};
use crate::model::{CreateMustRead, RecordId, UpdateMustRead};
use crate::resource_client;
use std::sync::Arc;

/// Operation table for must-read notices.
pub fn must_read_descriptor() -> Result<ResourceDescriptor, ConfigurationError> {
    ResourceDescriptor::new(
        "mustRead",
        [
            ResourceOperation::post("create", "/mustRead/create")?,
            ResourceOperation::put("update", "/mustRead/update")?,
            ResourceOperation::delete("delete", "/mustRead/delete")?,
            ResourceOperation::post("get", "/mustRead/get")?,
            ResourceOperation::get("latest", "/mustRead/latest")?,
        ],
    )
}

resource_client! {
    /// Client for must-read notices.
    pub struct MustReadClient;

    fn create_must_read => "create" () with CreateMustRead;
    fn update_must_read => "update" () with UpdateMustRead;
    fn delete_must_read => "delete" () with RecordId;
    fn get_must_read => "get" () with RecordId;
    /// The newest active notice. Takes no payload.
    fn get_latest_must_read => "latest" ();
}

impl<T: Transport> MustReadClient<T> {
    pub fn connect(transport: Arc<T>) -> Result<Self, ConfigurationError> {
        Ok(Self::new(ResourceClient::new(must_read_descriptor()?, transport)))
    }
}
