//! arXiv Atom API client.
//!
//! The API answers `GET /api/query` with an Atom feed; entries are parsed with
//! `quick-xml` because namespaces make ad hoc string matching brittle.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use reqwest::Client;
use reqwest::header::HeaderMap;

use super::{build_http_client, endpoint, handle_response};
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::ArxivEntry;

/// arXiv search client.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    client: Client,
    api_url: String,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client =
            build_http_client(HeaderMap::new(), config.request_timeout, config.connect_timeout)?;
        Ok(Self { client, api_url: config.arxiv_api_url.clone() })
    }

    /// Search arXiv, newest submissions first.
    pub async fn search(&self, query: &str, max_results: usize) -> ClientResult<Vec<ArxivEntry>> {
        let params = [
            ("search_query", query.to_string()),
            ("start", "0".to_string()),
            ("max_results", max_results.to_string()),
            ("sortBy", "submittedDate".to_string()),
            ("sortOrder", "descending".to_string()),
        ];
        let url = endpoint(&self.api_url, &params)?;
        tracing::debug!(%url, "arXiv request");

        let response = self.client.get(url).send().await?;
        let response = handle_response(response).await?;
        let body = response.text().await?;

        parse_feed(&body)
    }
}

/// Parse an arXiv Atom feed into entries, in document order.
///
/// arXiv reports query errors as a single entry whose id points at
/// `/api/errors`; that is surfaced as [`ClientError::BadRequest`].
pub fn parse_feed(body: &str) -> ClientResult<Vec<ArxivEntry>> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut current: Option<ArxivEntry> = None;
    let mut in_author = false;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                text.clear();
                match e.local_name().as_ref() {
                    b"entry" => current = Some(ArxivEntry::default()),
                    b"author" => in_author = true,
                    b"link" => {
                        if let Some(entry) = current.as_mut() {
                            read_pdf_link(&e, entry);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"link" {
                    if let Some(entry) = current.as_mut() {
                        read_pdf_link(&e, entry);
                    }
                }
            }
            Ok(Event::Text(t)) => {
                let chunk = t.unescape().map_err(|e| ClientError::feed(e.to_string()))?;
                text.push_str(&chunk);
            }
            Ok(Event::End(e)) => {
                let name = e.local_name();
                if name.as_ref() == b"entry" {
                    if let Some(entry) = current.take() {
                        if entry.id.contains("/api/errors") {
                            return Err(ClientError::bad_request(entry.summary));
                        }
                        entries.push(entry);
                    }
                } else if let Some(entry) = current.as_mut() {
                    let value = normalize_ws(&text);
                    match name.as_ref() {
                        b"id" => entry.id = value,
                        b"title" => entry.title = value,
                        b"summary" => entry.summary = value,
                        b"published" => entry.published = (!value.is_empty()).then_some(value),
                        b"name" if in_author && !value.is_empty() => entry.authors.push(value),
                        b"author" => in_author = false,
                        _ => {}
                    }
                }
                text.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ClientError::feed(format!(
                    "at position {}: {e}",
                    reader.buffer_position()
                )));
            }
            Ok(_) => {}
        }
    }

    Ok(entries)
}

fn read_pdf_link(e: &BytesStart<'_>, entry: &mut ArxivEntry) {
    let mut is_pdf = false;
    let mut href = None;
    for attr in e.attributes().flatten() {
        let value = attr.unescape_value().map(|v| v.to_string()).unwrap_or_default();
        match attr.key.local_name().as_ref() {
            b"title" if value == "pdf" => is_pdf = true,
            b"type" if value == "application/pdf" => is_pdf = true,
            b"href" => href = Some(value),
            _ => {}
        }
    }
    if is_pdf {
        entry.pdf_url = href;
    }
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
