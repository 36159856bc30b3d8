//! Album payloads.
//!
//! Field names follow the server's JSON exactly (`creatorUUID`,
//! `coverImageURL`, `adminUserIDs`), which is why most fields carry an
//! explicit rename.

use crate::model::common::{PageInfo, Status};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload for creating an album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAlbum {
    #[serde(rename = "creatorUUID")]
    pub creator_uuid: Uuid,
    pub title: String,
    #[serde(rename = "coverImageURL", default)]
    pub cover_image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "adminUserIDs", default)]
    pub admin_user_ids: Vec<u64>,
}

impl CreateAlbum {
    pub fn new(creator_uuid: Uuid, title: impl Into<String>) -> Self {
        Self {
            creator_uuid,
            title: title.into(),
            cover_image_url: String::new(),
            description: String::new(),
            admin_user_ids: Vec::new(),
        }
    }
}

/// Payload for updating an album. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAlbum {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "coverImageURL", skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(rename = "adminUserIDs", skip_serializing_if = "Option::is_none")]
    pub admin_user_ids: Option<Vec<u64>>,
}

/// Filter for the paginated album list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumListQuery {
    #[serde(flatten)]
    pub page: PageInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "creatorUUID", skip_serializing_if = "Option::is_none")]
    pub creator_uuid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
