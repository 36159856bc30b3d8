//! Drawing payloads.
//!
//! A drawing belongs to an album through the `albumId` field of its payload;
//! drawing URLs never nest under an album path.

use crate::model::common::PageInfo;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDrawing {
    pub album_id: u64,
    pub serial_number: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bean_quantity: Option<i64>,
    #[serde(rename = "posterImageURL")]
    pub poster_image_url: String,
    #[serde(rename = "drawingURLs")]
    pub drawing_urls: Vec<String>,
    #[serde(rename = "creatorUUID")]
    pub creator_uuid: Uuid,
    #[serde(rename = "allowedMemberUUIDs", default)]
    pub allowed_member_uuids: Vec<String>,
}

/// Full replacement of a drawing's editable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDrawing {
    pub id: u64,
    pub album_id: u64,
    pub serial_number: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bean_quantity: Option<i64>,
    #[serde(rename = "posterImageURL")]
    pub poster_image_url: String,
    #[serde(rename = "drawingURLs")]
    pub drawing_urls: Vec<String>,
    #[serde(rename = "allowedMemberUUIDs", default)]
    pub allowed_member_uuids: Vec<String>,
}

/// Drawings of one album, paginated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingListQuery {
    pub album_id: u64,
    pub page: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<u64>,
}

impl DrawingListQuery {
    pub fn for_album(album_id: u64, page: PageInfo) -> Self {
        Self {
            album_id,
            page: page.page,
            page_size: page.page_size,
            keyword: page.keyword,
            creator_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadDrawing {
    pub drawing_id: u64,
    pub album_id: u64,
}
