use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Pagination block shared by the list queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub keyword: String,
}

impl PageInfo {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            keyword: String::new(),
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// Lifecycle status of albums and must-read notices, sent as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Status {
    Active,
    Disabled,
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        match status {
            Status::Active => 1,
            Status::Disabled => 2,
        }
    }
}

impl TryFrom<i32> for Status {
    type Error = UnknownStatus;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Status::Active),
            2 => Ok(Status::Disabled),
            other => Err(UnknownStatus(other)),
        }
    }
}

/// A status code outside `1..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown status code {0}")]
pub struct UnknownStatus(pub i32);

/// Identifies a single record by numeric id (detail, delete).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordId {
    pub id: u64,
}

impl RecordId {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self { id }
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.id)
    }
}
