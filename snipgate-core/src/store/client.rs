//! HTTP client for the remote snippet store

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::error::{StoreError, StoreResult};
use crate::models::{NewRemoteSnippet, RemoteSnippet, SnippetsResponse};

const SNIPPETS_PATH: &str = "snippets";
const JSON: &str = "application/json";

/// Request/response access to the remote snippet catalog
///
/// Failures are returned to the caller as-is; implementations do not retry.
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Fetches every snippet record in store order
    ///
    /// # Errors
    /// Returns `StoreError` on network failure, non-2xx status or malformed body
    async fn fetch_all(&self) -> StoreResult<Vec<RemoteSnippet>>;

    /// Submits a new snippet and returns the record the store created
    ///
    /// # Errors
    /// Returns `StoreError` on network failure, non-2xx status or malformed body
    async fn create(&self, snippet: &NewRemoteSnippet) -> StoreResult<RemoteSnippet>;
}

/// `SnippetStore` backed by a JSON HTTP API
#[derive(Clone)]
pub struct HttpSnippetStore {
    endpoint: Url,
    token: Option<SecretString>,
    client: reqwest::Client,
}

impl std::fmt::Debug for HttpSnippetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSnippetStore")
            .field("endpoint", &self.endpoint.as_str())
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl HttpSnippetStore {
    /// Creates a client for `{base_url}/snippets`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be built or the HTTP client
    /// fails to initialise.
    pub fn new(base_url: &Url, token: Option<SecretString>) -> StoreResult<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            endpoint: Self::snippets_endpoint(base_url)?,
            token,
            client,
        })
    }

    /// The resolved `snippets` endpoint
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn snippets_endpoint(base_url: &Url) -> StoreResult<Url> {
        let base = format!("{}/", base_url.as_str().trim_end_matches('/'));
        Ok(Url::parse(&base)?.join(SNIPPETS_PATH)?)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn read_success(response: Response, method: &str) -> StoreResult<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Transport(format!(
                "{method} {} returned {status}",
                response.url()
            )));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl SnippetStore for HttpSnippetStore {
    async fn fetch_all(&self) -> StoreResult<Vec<RemoteSnippet>> {
        let request = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, JSON);
        let response = self.authorize(request).send().await?;
        let body = Self::read_success(response, "GET").await?;

        let parsed: SnippetsResponse =
            serde_json::from_str(&body).map_err(|e| StoreError::Parse(e.to_string()))?;
        debug!(count = parsed.snippets.len(), "Fetched snippet catalog");
        Ok(parsed.snippets)
    }

    async fn create(&self, snippet: &NewRemoteSnippet) -> StoreResult<RemoteSnippet> {
        let payload = serde_json::to_vec(snippet).map_err(|e| StoreError::Parse(e.to_string()))?;
        let request = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
            .header(CONTENT_LENGTH, payload.len())
            .body(payload);
        let response = self.authorize(request).send().await?;
        let body = Self::read_success(response, "POST").await?;

        serde_json::from_str(&body).map_err(|e| StoreError::Parse(e.to_string()))
    }
}
