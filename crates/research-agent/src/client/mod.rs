//! HTTP clients for the external collaborators.
//!
//! - [`ArxivClient`]: arXiv Atom search (provider A)
//! - [`ScholarClient`]: Semantic Scholar Graph API (provider B)
//! - [`OllamaClient`]: local text-generation backend
//!
//! Each client owns one `reqwest::Client` built at construction and reused for
//! every call. Requests are issued one at a time and never retried.

mod arxiv;
mod ollama;
mod scholar;

use std::time::Duration;

use reqwest::Client;
use reqwest::header::HeaderMap;

use crate::error::{ClientError, ClientResult};

pub use arxiv::{ArxivClient, parse_feed};
pub use ollama::OllamaClient;
pub use scholar::ScholarClient;

/// Build a pooled HTTP client with the given timeouts and default headers.
fn build_http_client(
    headers: HeaderMap,
    request_timeout: Duration,
    connect_timeout: Duration,
) -> reqwest::Result<Client> {
    Client::builder()
        .default_headers(headers)
        .timeout(request_timeout)
        .connect_timeout(connect_timeout)
        .gzip(true)
        .build()
}

/// Build a request URL with query parameters.
fn endpoint(base: &str, params: &[(&str, String)]) -> ClientResult<url::Url> {
    Ok(url::Url::parse_with_params(base, params)?)
}

/// Map non-success status codes to [`ClientError`].
async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match status.as_u16() {
        429 => {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(60);

            Err(ClientError::rate_limited(retry_after))
        }
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::not_found(text))
        }
        400 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::bad_request(text))
        }
        500..=599 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::server(status.as_u16(), text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_query() {
        let url = endpoint("http://localhost/api/query", &[("search_query", "a OR b".to_string())])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost/api/query?search_query=a+OR+b");
    }

    #[test]
    fn test_endpoint_rejects_relative_base() {
        assert!(matches!(endpoint("not a url", &[]), Err(ClientError::Url(_))));
    }
}
