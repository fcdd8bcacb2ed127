//! arXiv Atom feed entry.

use chrono::{DateTime, Datelike};
use serde::Serialize;

use super::Paper;
use crate::error::SearchError;

/// One `<entry>` of an arXiv Atom feed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArxivEntry {
    /// Abstract page URL (`<id>`).
    pub id: String,
    pub title: String,
    pub summary: String,
    /// RFC 3339 submission timestamp.
    pub published: Option<String>,
    pub authors: Vec<String>,
    /// `<link rel="related" type="application/pdf">`.
    pub pdf_url: Option<String>,
}

impl ArxivEntry {
    /// Publication year from the `published` timestamp.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        let published = self.published.as_deref()?;
        DateTime::parse_from_rfc3339(published).ok().map(|dt| dt.year())
    }

    /// PDF link, derived from the abstract URL when the feed omits it.
    #[must_use]
    pub fn pdf_link(&self) -> Option<String> {
        if let Some(url) = self.pdf_url.as_ref().filter(|u| !u.is_empty()) {
            return Some(url.clone());
        }
        let i = self.id.rfind("/abs/")?;
        let arxiv_id = self.id[i + "/abs/".len()..].trim_matches('/');
        (!arxiv_id.is_empty()).then(|| format!("https://arxiv.org/pdf/{arxiv_id}"))
    }
}

impl TryFrom<ArxivEntry> for Paper {
    type Error = SearchError;

    fn try_from(entry: ArxivEntry) -> Result<Self, Self::Error> {
        if entry.id.is_empty() {
            return Err(SearchError::malformed("arxiv", "entry has no <id>"));
        }

        let year = entry.year();
        let url = entry.pdf_link();
        Ok(Self {
            title: entry.title,
            authors: entry.authors.join(", "),
            year,
            r#abstract: Some(entry.summary),
            url,
            citations: None,
            key_findings: None,
        })
    }
}
