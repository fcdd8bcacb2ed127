//! The paper record shared by every pipeline stage.

use serde::{Deserialize, Serialize};

/// A research paper as it flows from search through enrichment to the report.
///
/// The shape is fixed; only `key_findings` changes, from unset to set, during enrichment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title (may be empty).
    #[serde(default)]
    pub title: String,

    /// Author names, comma-separated.
    #[serde(default)]
    pub authors: String,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Direct link to the paper.
    #[serde(default)]
    pub url: Option<String>,

    /// Cited-by count, when the provider exposes one.
    #[serde(default)]
    pub citations: Option<u32>,

    /// Generated bullet-point summary.
    #[serde(default)]
    pub key_findings: Option<String>,
}

impl Paper {
    /// Returns true if the abstract is present and not blank.
    #[must_use]
    pub fn has_abstract(&self) -> bool {
        self.r#abstract.as_deref().is_some_and(|a| !a.trim().is_empty())
    }

    /// Year used for ordering; missing years sort as 0.
    #[must_use]
    pub fn sort_year(&self) -> i32 {
        self.year.unwrap_or(0)
    }

    /// Non-empty URL, if any.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }

    /// Abstract text or the empty string.
    #[must_use]
    pub fn abstract_text(&self) -> &str {
        self.r#abstract.as_deref().unwrap_or_default()
    }
}

/// Persisted search results: `{"papers": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperCollection {
    /// Papers in encounter order.
    #[serde(default)]
    pub papers: Vec<Paper>,
}

impl PaperCollection {
    /// Wrap a list of papers.
    #[must_use]
    pub fn new(papers: Vec<Paper>) -> Self {
        Self { papers }
    }
}
