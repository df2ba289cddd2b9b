use crate::config;
use crate::models::{Envelope, RandomSequence, Section};

const RASQ_SEQUENCE_PATH: &str = "api/rasq/sequence/";
const MEMO_SECTIONS_PATH: &str = "api/memo/sections/";

/// Backend caps the sequence length at 10.
pub const MAX_SEQUENCE_LEN: u32 = 10;

/// Thin client over the backend API. Built once at mount with the base URL
/// selected for the current build mode, then shared via context.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base(config::default_api_base_url())
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = self.url(path);
        tracing::info!("GET {}", url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.status().is_success() {
            return Err(format!("{} returned {}", url, resp.status()));
        }

        resp.json::<T>().await.map_err(|e| e.to_string())
    }

    /// Fetch a fresh random sequence of up to `count` values.
    pub async fn random_sequence(&self, count: u32) -> Result<RandomSequence, String> {
        let count = count.clamp(1, MAX_SEQUENCE_LEN);
        self.get_json(&format!("{}?count={}", RASQ_SEQUENCE_PATH, count))
            .await
    }

    /// Fetch all memo sections with their nested notes.
    pub async fn sections(&self) -> Result<Vec<Section>, String> {
        let envelope: Envelope<Vec<Section>> = self.get_json(MEMO_SECTIONS_PATH).await?;
        envelope.into_detail()
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
