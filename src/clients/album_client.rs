//! # Album Client
//!
//! Provides the typed API for the Album resource. The operation table lives in
//! [`album_descriptor`]; the methods are generated from the table below.

use crate::framework::{
    ConfigurationError, ResourceClient, ResourceDescriptor, ResourceOperation, Transport,
};
use crate::lifecycle::config::{EndpointConventions, EndpointStyle};
use crate::model::{AlbumListQuery, CreateAlbum, RecordId, UpdateAlbum};
use crate::resource_client;
use std::sync::Arc;
use tracing::warn;

/// Operation table for albums.
///
/// The detail operation follows `conventions.album_detail`.
pub fn album_descriptor(
    conventions: &EndpointConventions,
) -> Result<ResourceDescriptor, ConfigurationError> {
    let detail = match conventions.album_detail {
        EndpointStyle::Body => ResourceOperation::post("detail", "/album/get")?,
        EndpointStyle::Query => {
            warn!("album detail uses legacy GET /album/detail; the server also routes POST /album/get");
            ResourceOperation::get("detail", "/album/detail")?
        }
    };

    ResourceDescriptor::new(
        "album",
        [
            ResourceOperation::post("create", "/album/create")?,
            ResourceOperation::post("list", "/album/list")?,
            ResourceOperation::get("byCreator", "/album/creator/{creatorUUID}")?,
            ResourceOperation::get("byAdmin", "/album/admin/{adminID}")?,
            ResourceOperation::put("update", "/album/update")?,
            ResourceOperation::delete("delete", "/album/delete")?,
            detail,
        ],
    )
}

resource_client! {
    /// Client for the Album resource.
    pub struct AlbumClient;

    fn create_album => "create" () with CreateAlbum;
    /// Paginated album list.
    fn get_album_list => "list" () with AlbumListQuery;
    /// Albums created by one user, addressed by the user's UUID in the path.
    fn get_albums_by_creator => "byCreator" (creator_uuid = "creatorUUID");
    /// Albums administered by one user, addressed by admin id in the path.
    fn get_albums_by_admin => "byAdmin" (admin_id = "adminID");
    fn update_album => "update" () with UpdateAlbum;
    fn delete_album => "delete" () with RecordId;
    fn get_album_detail => "detail" () with RecordId;
}

impl<T: Transport> AlbumClient<T> {
    /// Builds the descriptor for `conventions` and binds it to `transport`.
    pub fn connect(
        transport: Arc<T>,
        conventions: &EndpointConventions,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(ResourceClient::new(
            album_descriptor(conventions)?,
            transport,
        )))
    }
}
