use thiserror::Error;

/// Message stored in state when a failure carries no usable reason.
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch tournaments";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("failed to decode tournament list: {0}")]
    Decode(String),
    #[error("fetch task did not complete: {0}")]
    Join(String),
}

impl FetchError {
    /// Server-supplied detail, if the failure came with one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            FetchError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The reason handed to the reducer. Status errors surface the server
    /// detail and fall back to the generic message without one.
    pub fn state_message(&self) -> Option<String> {
        match self {
            FetchError::Status { detail, .. } => detail.clone(),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown time zone {0:?}")]
    TimeZone(String),
    #[error("unknown resolution policy {0:?}")]
    ResolutionPolicy(String),
    #[error("invalid config payload: {0}")]
    Json(#[from] serde_json::Error),
}
