//! Provider adapters: map provider responses onto [`Paper`] records.
//!
//! Adapters return [`SearchError`] kinds and leave the fallback decision to the
//! aggregator. Malformed records are dropped here with a warning.

use serde_json::Value;

use crate::client::{ArxivClient, ScholarClient};
use crate::config::fields;
use crate::error::{SearchError, SearchResult};
use crate::models::{Paper, ScholarPaper};

const ARXIV: &str = "arxiv";
const SCHOLAR: &str = "semantic_scholar";

/// Keep the records that mapped cleanly, logging the rest.
fn collect_records(
    provider: &'static str,
    records: impl IntoIterator<Item = SearchResult<Paper>>,
) -> Vec<Paper> {
    let mut papers = Vec::new();
    for record in records {
        match record {
            Ok(paper) => papers.push(paper),
            Err(e) => tracing::warn!(provider, error = %e, "Skipping malformed record"),
        }
    }
    papers
}

fn decode_scholar(value: Value) -> SearchResult<Paper> {
    serde_json::from_value::<ScholarPaper>(value)
        .map(Paper::from)
        .map_err(|e| SearchError::malformed(SCHOLAR, e.to_string()))
}

/// Provider A: newest arXiv submissions matching the query.
pub async fn search_arxiv(
    client: &ArxivClient,
    query: &str,
    max_results: usize,
) -> SearchResult<Vec<Paper>> {
    let entries = client.search(query, max_results).await?;
    Ok(collect_records(ARXIV, entries.into_iter().take(max_results).map(Paper::try_from)))
}

/// Provider B: Semantic Scholar relevance search.
pub async fn search_scholar(
    client: &ScholarClient,
    query: &str,
    max_results: usize,
) -> SearchResult<Vec<Paper>> {
    let page = client.search_papers(query, max_results, fields::PAPER).await?;
    Ok(collect_records(SCHOLAR, page.data.into_iter().take(max_results).map(decode_scholar)))
}

/// Provider B fallback: publications of the author best matching the query.
///
/// Each publication is fetched individually for its full record; a failed
/// fetch skips that publication only.
pub async fn search_by_author(
    client: &ScholarClient,
    query: &str,
    max_results: usize,
) -> SearchResult<Vec<Paper>> {
    let authors = client.search_authors(query, 1, fields::AUTHOR).await?;
    let author =
        authors.data.into_iter().next().ok_or_else(|| SearchError::no_author_match(query))?;

    tracing::info!(
        author = author.name_or_default(),
        author_id = %author.author_id,
        "Resolved author for fallback search"
    );

    let listing = client.get_author_papers(&author.author_id, max_results, fields::PAPER_ID).await?;

    let mut papers = Vec::new();
    for value in listing.data {
        if papers.len() >= max_results {
            break;
        }

        let Some(paper_id) = value.get("paperId").and_then(Value::as_str) else {
            tracing::warn!(provider = SCHOLAR, "Skipping publication without paperId");
            continue;
        };

        match client.get_paper(paper_id, fields::PAPER).await {
            Ok(paper) => papers.push(paper.into()),
            Err(e) => {
                tracing::warn!(provider = SCHOLAR, paper_id, error = %e, "Skipping publication");
            }
        }
    }

    Ok(papers)
}
