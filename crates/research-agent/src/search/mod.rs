//! Search aggregation across arXiv and Semantic Scholar.
//!
//! Results are concatenated in provider order (arXiv first) without
//! deduplication. Provider failures never reach the caller.

mod providers;

use std::path::{Path, PathBuf};

use crate::client::{ArxivClient, ScholarClient};
use crate::config::Config;
use crate::error::{ReportError, SearchError};
use crate::models::{Paper, PaperCollection};

pub use providers::{search_arxiv, search_by_author, search_scholar};

/// Build the composite query: the topic and each non-blank seed, joined by `OR`.
#[must_use]
pub fn build_query(topic: &str, seeds: &[String]) -> String {
    std::iter::once(topic)
        .chain(seeds.iter().map(String::as_str))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Queries both providers and keeps a running list of everything found.
#[derive(Debug)]
pub struct SearchAggregator {
    arxiv: ArxivClient,
    scholar: ScholarClient,
    max_results: usize,
    output_dir: PathBuf,
    papers: Vec<Paper>,
}

impl SearchAggregator {
    /// Create an aggregator with clients built from the configuration.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            arxiv: ArxivClient::new(config)?,
            scholar: ScholarClient::new(config)?,
            max_results: config.max_results,
            output_dir: config.output_dir.clone(),
            papers: Vec::new(),
        })
    }

    /// Papers accumulated so far.
    #[must_use]
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    /// Directory receiving saved results.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Search both providers for the topic and seed references.
    ///
    /// Appends to the running list and returns it.
    pub async fn search(&mut self, topic: &str, seeds: &[String]) -> Vec<Paper> {
        let query = build_query(topic, seeds);
        tracing::info!(query = %query, max_results = self.max_results, "Searching papers");

        let arxiv = self.query_arxiv(&query).await;
        tracing::info!(count = arxiv.len(), "arXiv search finished");
        self.papers.extend(arxiv);

        let scholar = self.query_scholar(&query).await;
        tracing::info!(count = scholar.len(), "Semantic Scholar search finished");
        self.papers.extend(scholar);

        self.papers.clone()
    }

    async fn query_arxiv(&self, query: &str) -> Vec<Paper> {
        match search_arxiv(&self.arxiv, query, self.max_results).await {
            Ok(papers) => papers,
            Err(e) => {
                tracing::warn!(error = %e, "arXiv search failed");
                Vec::new()
            }
        }
    }

    async fn query_scholar(&self, query: &str) -> Vec<Paper> {
        let err = match search_scholar(&self.scholar, query, self.max_results).await {
            Ok(papers) => return papers,
            Err(e) => e,
        };

        if !err.wants_fallback() {
            tracing::warn!(error = %err, "Semantic Scholar search failed");
            return Vec::new();
        }

        tracing::warn!(error = %err, "Semantic Scholar search failed, trying author search");
        match search_by_author(&self.scholar, query, self.max_results).await {
            Ok(papers) => papers,
            Err(SearchError::NoAuthorMatch { query }) => {
                tracing::warn!(query = %query, "No author found for fallback search");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Author fallback search failed");
                Vec::new()
            }
        }
    }

    /// Serialize the running list as pretty-printed `{"papers": [...]}`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&PaperCollection::new(self.papers.clone()))
    }

    /// Write the running list to `filename` inside the output directory.
    pub fn save_results(&self, filename: &str) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(filename);
        std::fs::write(&path, self.to_json()?)?;
        tracing::info!(path = %path.display(), count = self.papers.len(), "Saved search results");
        Ok(path)
    }
}
