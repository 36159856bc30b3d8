//! Demo: wires a [`PortalSystem`] over an in-process transport that echoes
//! every request back, then issues a few calls and navigations.

use album_portal::framework::{Transport, TransportError, TransportRequest};
use album_portal::lifecycle::tracing::setup_tracing;
use album_portal::lifecycle::{PortalConfig, PortalSystem};
use album_portal::model::{CreateAlbum, DrawingListQuery, PageInfo, RecordId};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, Instrument};
use uuid::Uuid;

/// Answers every request with the request itself.
struct EchoTransport;

#[async_trait]
impl Transport for EchoTransport {
    async fn send(&self, request: TransportRequest) -> Result<Value, TransportError> {
        let echoed = serde_json::to_value(&request)
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;
        Ok(json!({ "code": 0, "data": echoed }))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = PortalConfig::from_env()?;
    let system = PortalSystem::new(config, Arc::new(EchoTransport))?;

    let span = tracing::info_span!("album_workflow");
    async {
        let creator = Uuid::new_v4();
        let created = system
            .album_client
            .create_album(&CreateAlbum::new(creator, "Site A"))
            .await?;
        info!(response = %created, "Album created");

        let by_creator = system.album_client.get_albums_by_creator(creator).await?;
        info!(response = %by_creator, "Albums by creator");

        let detail = system.album_client.get_album_detail(&RecordId::new(1)).await?;
        info!(response = %detail, "Album detail");

        let drawings = system
            .drawing_client
            .get_drawing_list(&DrawingListQuery::for_album(1, PageInfo::default()))
            .await?;
        info!(response = %drawings, "Drawing list");

        let latest = system.must_read_client.get_latest_must_read().await?;
        info!(response = %latest, "Latest must-read");
        Ok::<_, album_portal::framework::ClientError>(())
    }
    .instrument(span)
    .await?;

    let navigator = system.navigator();
    for location in ["/", "/albumDetail/1?tab=drawings", "/scanUpload", "/no/such/page"] {
        let navigation = navigator.navigate(location).await?;
        info!(
            location,
            view = navigation.view.module,
            fallback = navigation.fallback,
            "Navigated"
        );
    }

    Ok(())
}
