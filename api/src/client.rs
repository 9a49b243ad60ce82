use crate::{decode_dataset, ApiError, Dataset, Topology, WorldAtlas};

/// Read-only HTTP client for the dataset endpoint and the world geometry.
///
/// There is no retry or caching here; the UI's data provider calls each fetch
/// exactly once per page.
#[derive(Debug, Clone)]
pub struct DataClient {
    base_url: String,
    http: reqwest::Client,
}

impl DataClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/data`
    pub fn data_url(&self) -> String {
        format!("{}/data", self.base_url.trim_end_matches('/'))
    }

    pub async fn fetch_dataset(&self) -> Result<Dataset, ApiError> {
        let url = self.data_url();
        let bytes = self.get_bytes(&url).await?;
        decode_dataset(&bytes)
    }

    /// Fetch a TopoJSON world document and flatten its `countries` object.
    pub async fn fetch_world(&self, url: &str) -> Result<WorldAtlas, ApiError> {
        let bytes = self.get_bytes(url).await?;
        let topology: Topology = serde_json::from_slice(&bytes)?;
        topology.countries()
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
