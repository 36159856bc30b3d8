//! # Drawing Client
//!
//! Drawings are linked to their album by the `albumId` payload field, so every
//! path here is flat (`/drawing/...`).

use crate::framework::{
    ConfigurationError, ResourceClient, ResourceDescriptor, ResourceOperation, Transport,
};
use crate::lifecycle::config::{EndpointConventions, EndpointStyle};
use crate::model::{CreateDrawing, DownloadDrawing, DrawingListQuery, RecordId, UpdateDrawing};
use crate::resource_client;
use std::sync::Arc;
use tracing::warn;

/// Operation table for drawings.
///
/// The list operation follows `conventions.drawing_list`.
pub fn drawing_descriptor(
    conventions: &EndpointConventions,
) -> Result<ResourceDescriptor, ConfigurationError> {
    let list = match conventions.drawing_list {
        EndpointStyle::Body => ResourceOperation::post("list", "/drawing/list")?,
        EndpointStyle::Query => {
            warn!("drawing list uses legacy GET /drawing/list; the server also routes POST /drawing/list");
            ResourceOperation::get("list", "/drawing/list")?
        }
    };

    ResourceDescriptor::new(
        "drawing",
        [
            list,
            ResourceOperation::get("download", "/drawing/download")?,
            ResourceOperation::post("create", "/drawing/create")?,
            ResourceOperation::post("detail", "/drawing/get")?,
            ResourceOperation::put("update", "/drawing/update")?,
            ResourceOperation::delete("delete", "/drawing/delete")?,
        ],
    )
}

resource_client! {
    /// Client for the Drawing resource.
    pub struct DrawingClient;

    /// Drawings of one album, selected by `albumId` in the query.
    fn get_drawing_list => "list" () with DrawingListQuery;
    fn download_drawing => "download" () with DownloadDrawing;
    fn create_drawing => "create" () with CreateDrawing;
    fn get_drawing_detail => "detail" () with RecordId;
    fn update_drawing => "update" () with UpdateDrawing;
    fn delete_drawing => "delete" () with RecordId;
}

impl<T: Transport> DrawingClient<T> {
    /// Builds the descriptor for `conventions` and binds it to `transport`.
    pub fn connect(
        transport: Arc<T>,
        conventions: &EndpointConventions,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(ResourceClient::new(
            drawing_descriptor(conventions)?,
            transport,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockTransport;
    use crate::framework::Method;
    use crate::model::PageInfo;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_style_switches_payload_placement() {
        let query = DrawingListQuery::for_album(4, PageInfo::new(1, 20));

        for (style, method) in [
            (EndpointStyle::Body, Method::Post),
            (EndpointStyle::Query, Method::Get),
        ] {
            let transport = Arc::new(MockTransport::new());
            transport
                .expect(method, "/drawing/list")
                .return_ok(json!({ "drawings": [], "total": 0 }));

            let conventions = EndpointConventions {
                drawing_list: style,
                ..Default::default()
            };
            let client = DrawingClient::connect(transport.clone(), &conventions).unwrap();
            client.get_drawing_list(&query).await.unwrap();

            let sent = transport.last_request().unwrap();
            let expected = json!({ "albumId": 4, "page": 1, "pageSize": 20 });
            match style {
                EndpointStyle::Body => assert_eq!(sent.data, Some(expected)),
                EndpointStyle::Query => assert_eq!(sent.params, Some(expected)),
            }
            transport.verify();
        }
    }
}
