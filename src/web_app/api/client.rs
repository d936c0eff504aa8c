// web_app/api/client.rs - HTTP client for the demo store API
//
// One explicit data-access service owns all remote I/O. Policy: every
// screen visit fetches fresh (fetch-once per mount, no cache); the only
// shared state is the reqwest connection pool inside `StoreClient`.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Public demo endpoint used when `STORE_API_URL` is not set
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

static STORE: OnceLock<StoreClient> = OnceLock::new();

/// Errors from the store API boundary
#[derive(Debug, Error)]
pub enum StoreApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("no resource at {url}")]
    NotFound { url: String },
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl StoreApiError {
    /// True for the (b) taxonomy case: an identifier the remote does not know
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreApiError::NotFound { .. })
    }
}

/// Join a base URL and a path without doubling the slash
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Typed client for the demo store REST API
#[derive(Clone, Debug)]
pub struct StoreClient {
    http: Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreApiError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(StoreApiError::Client)?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Build from the `STORE_API_URL` environment variable, falling back to
    /// the public demo endpoint
    pub fn from_env() -> Result<Self, StoreApiError> {
        let base_url = env::var("STORE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreApiError> {
        let url = endpoint_url(&self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| StoreApiError::Transport {
                url: url.clone(),
                source,
            })?;
        Self::decode(url, response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreApiError> {
        let url = endpoint_url(&self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| StoreApiError::Transport {
                url: url.clone(),
                source,
            })?;
        Self::decode(url, response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreApiError> {
        let url = endpoint_url(&self.base_url, path);
        let response = self
            .http
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| StoreApiError::Transport {
                url: url.clone(),
                source,
            })?;
        Self::decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(
        url: String,
        response: reqwest::Response,
    ) -> Result<T, StoreApiError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreApiError::NotFound { url });
        }
        if !status.is_success() {
            return Err(StoreApiError::Status { url, status });
        }
        response
            .json()
            .await
            .map_err(|source| StoreApiError::Decode { url, source })
    }
}

/// Install the global store client (called once at server startup)
pub fn init_store(client: StoreClient) {
    tracing::info!("Initializing store API client for {}", client.base_url());
    if STORE.set(client).is_err() {
        tracing::warn!("Store API client already initialized");
    }
}

/// Get the global store client, building one from the environment if the
/// server did not install it explicitly
pub fn get_store() -> Result<&'static StoreClient, StoreApiError> {
    if let Some(client) = STORE.get() {
        return Ok(client);
    }
    let client = StoreClient::from_env()?;
    Ok(STORE.get_or_init(|| client))
}
