use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tournament as returned by the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    #[serde(alias = "start_date")]
    pub start_date: NaiveDate,
    #[serde(alias = "end_date")]
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    // Backend schema extras; older payloads omit them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, alias = "logo_url", skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Error body shape used by the API for non-success responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The `detail` field when it is a plain string.
    pub fn detail_text(&self) -> Option<&str> {
        self.detail.as_ref().and_then(|d| d.as_str())
    }
}
