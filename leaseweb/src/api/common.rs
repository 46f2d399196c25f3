//! Types shared by every Leaseweb endpoint

use serde::{Deserialize, Serialize};

/// Page size used when walking paginated collections
pub const PAGE_SIZE: i64 = 50;

/// `_metadata` block of paginated listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

impl Metadata {
    /// Offset of the page after the one requested at `current`, `None` once
    /// every item has been fetched
    pub fn next_offset(&self, current: i64, received: usize) -> Option<i64> {
        let next = current + received as i64;
        if received == 0 || next >= self.total_count {
            None
        } else {
            Some(next)
        }
    }
}

/// Error body returned by the API on non 2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_code: Option<serde_json::Value>,
    pub error_message: Option<serde_json::Value>,
    pub correlation_id: Option<String>,
    pub error_details: Option<serde_json::Value>,
}
