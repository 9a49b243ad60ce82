use thiserror::Error;

/// Failures surfaced to the data provider. Per-record problems never end up
/// here; aggregators skip those locally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("HTTP error! status: {status} ({url})")]
    Status { status: u16, url: String },

    #[error("unable to decode response: {0}")]
    Decode(String),

    #[error("invalid world geometry: {0}")]
    Geometry(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
