//! Ollama text-generation client.

use reqwest::Client;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

use super::build_http_client;
use crate::analysis::TextGenerator;
use crate::config::Config;
use crate::error::GenerationError;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for `POST {base_url}/api/generate`.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = build_http_client(
            HeaderMap::new(),
            config.generation_timeout,
            config.connect_timeout,
        )?;
        Ok(Self { client, base_url: config.ollama_url.trim_end_matches('/').to_string() })
    }

    /// Backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, GenerationError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest { model, prompt, stream: false };

        tracing::debug!(model, prompt_len = prompt.len(), "Generation request");
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        let text = response.text().await?;
        if status != reqwest::StatusCode::OK {
            return Err(GenerationError::backend(status.as_u16(), text));
        }

        let decoded: GenerateResponse = serde_json::from_str(&text)?;
        Ok(decoded.response)
    }
}
