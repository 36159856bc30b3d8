use crate::clients::{AlbumClient, DrawingClient, MustReadClient};
use crate::framework::{ConfigurationError, Transport};
use crate::lifecycle::config::PortalConfig;
use crate::router::{Navigator, RouteTable};
use crate::routes::{app_routes, ViewComponent};
use std::sync::Arc;
use tracing::info;

/// Wires every portal component around one transport.
///
/// `PortalSystem` is responsible for:
/// - **Client Wiring**: the Album, Drawing and MustRead clients share a single
///   `Arc<T>` transport
/// - **Endpoint Conventions**: descriptors are built from [`PortalConfig`]
/// - **Navigation**: the validated route table is built once and shared with
///   every [`Navigator`]
///
/// # Example
///
/// ```rust
/// use album_portal::framework::mock::MockTransport;
/// use album_portal::lifecycle::{PortalConfig, PortalSystem};
/// use std::sync::Arc;
///
/// let system = PortalSystem::new(PortalConfig::default(), Arc::new(MockTransport::new())).unwrap();
/// assert!(system.routes.by_name("AlbumDetail").is_some());
/// ```
pub struct PortalSystem<T: Transport> {
    pub album_client: AlbumClient<T>,
    pub drawing_client: DrawingClient<T>,
    pub must_read_client: MustReadClient<T>,
    pub routes: Arc<RouteTable<ViewComponent>>,
    config: PortalConfig,
}

impl<T: Transport> PortalSystem<T> {
    /// Builds every descriptor and the route table.
    ///
    /// Fails if any of them is malformed; nothing is sent over `transport`.
    pub fn new(config: PortalConfig, transport: Arc<T>) -> Result<Self, ConfigurationError> {
        let album_client = AlbumClient::connect(transport.clone(), &config.conventions)?;
        let drawing_client = DrawingClient::connect(transport.clone(), &config.conventions)?;
        let must_read_client = MustReadClient::connect(transport)?;
        let routes = Arc::new(app_routes()?);

        info!(
            album_detail = ?config.conventions.album_detail,
            drawing_list = ?config.conventions.drawing_list,
            routes = routes.entries().len(),
            "Portal system ready"
        );

        Ok(Self {
            album_client,
            drawing_client,
            must_read_client,
            routes,
            config,
        })
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// A navigator over the shared route table.
    pub fn navigator(&self) -> Navigator<ViewComponent> {
        Navigator::new(self.routes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockTransport;
    use crate::framework::Method;
    use crate::lifecycle::config::{EndpointConventions, EndpointStyle};
    use crate::model::RecordId;
    use serde_json::json;

    #[tokio::test]
    async fn test_clients_share_one_transport() {
        let transport = Arc::new(MockTransport::new());
        transport.expect(Method::Get, "/mustRead/latest").return_ok(json!({}));
        transport.expect(Method::Get, "/album/detail").return_ok(json!({ "id": 9 }));

        let config = PortalConfig {
            conventions: EndpointConventions {
                album_detail: EndpointStyle::Query,
                ..Default::default()
            },
        };
        let system = PortalSystem::new(config, transport.clone()).unwrap();

        system.must_read_client.get_latest_must_read().await.unwrap();
        let album = system
            .album_client
            .get_album_detail(&RecordId::new(9))
            .await
            .unwrap();
        assert_eq!(album["id"], 9);

        assert_eq!(transport.requests()[1].params, Some(json!({ "id": 9 })));
        transport.verify();
    }

    #[tokio::test]
    async fn test_navigator_uses_shared_routes() {
        let system = PortalSystem::new(PortalConfig::default(), Arc::new(MockTransport::new())).unwrap();
        let navigation = system.navigator().navigate("/").await.unwrap();
        assert_eq!(navigation.name.as_deref(), Some("Login"));
        assert_eq!(navigation.view.module, "view/login/index.vue");
    }
}
