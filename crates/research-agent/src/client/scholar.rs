//! Semantic Scholar Graph API client.

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};

use super::{build_http_client, endpoint, handle_response};
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{AuthorPapersResult, AuthorSearchResult, PaperSearchResult, ScholarPaper};

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct ScholarClient {
    /// HTTP client.
    client: Client,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,
}

impl ScholarClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", HeaderValue::from_str(key)?);
        }

        let client =
            build_http_client(headers, config.request_timeout, config.connect_timeout)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            graph_api_url: config.graph_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for papers by free-text query.
    pub async fn search_papers(
        &self,
        query: &str,
        limit: usize,
        fields: &[&str],
    ) -> ClientResult<PaperSearchResult> {
        let url = format!("{}/paper/search", self.graph_api_url);
        let params = [
            ("query", query.to_string()),
            ("offset", "0".to_string()),
            ("limit", limit.to_string()),
            ("fields", fields.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// Search for authors by name.
    pub async fn search_authors(
        &self,
        query: &str,
        limit: usize,
        fields: &[&str],
    ) -> ClientResult<AuthorSearchResult> {
        let url = format!("{}/author/search", self.graph_api_url);
        let params = [
            ("query", query.to_string()),
            ("limit", limit.to_string()),
            ("fields", fields.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// List an author's publications.
    pub async fn get_author_papers(
        &self,
        author_id: &str,
        limit: usize,
        fields: &[&str],
    ) -> ClientResult<AuthorPapersResult> {
        let url = format!("{}/author/{}/papers", self.graph_api_url, author_id);
        let params = [("limit", limit.to_string()), ("fields", fields.join(","))];

        self.get(&url, &params).await
    }

    /// Get a single paper by ID.
    pub async fn get_paper(&self, paper_id: &str, fields: &[&str]) -> ClientResult<ScholarPaper> {
        let url = format!("{}/paper/{}", self.graph_api_url, paper_id);
        let params = [("fields", fields.join(","))];

        self.get(&url, &params).await
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T>(&self, url: &str, params: &[(&str, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = endpoint(url, params)?;
        tracing::debug!(%url, "Semantic Scholar request");

        let response = self.client.get(url).send().await?;
        let response = handle_response(response).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(ClientError::from)
    }
}

impl std::fmt::Debug for ScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScholarClient")
            .field("graph_api_url", &self.graph_api_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
