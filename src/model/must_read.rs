use crate::model::common::Status;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload for publishing a must-read notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMustRead {
    #[serde(rename = "creatorUUID")]
    pub creator_uuid: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMustRead {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
