//! Semantic Scholar Graph API response models.
//!
//! List payloads keep their items as raw JSON so a single bad record can be
//! skipped without losing the page.

use serde::{Deserialize, Serialize};

use super::Paper;

/// A paper as returned by the Graph API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScholarPaper {
    /// Unique Semantic Scholar paper ID.
    pub paper_id: String,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<u32>,

    /// Semantic Scholar page URL.
    #[serde(default)]
    pub url: Option<String>,

    /// List of authors.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,

    /// Open access PDF information.
    #[serde(default)]
    pub open_access_pdf: Option<OpenAccessPdf>,
}

impl ScholarPaper {
    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .filter_map(|a| a.name.as_deref())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Get the open access PDF URL if available.
    #[must_use]
    pub fn pdf_url(&self) -> Option<&str> {
        self.open_access_pdf.as_ref()?.url.as_deref().filter(|u| !u.is_empty())
    }
}

impl From<ScholarPaper> for Paper {
    fn from(paper: ScholarPaper) -> Self {
        let authors = paper.author_names();
        let url = paper.pdf_url().map(str::to_string).or(paper.url);
        Self {
            title: paper.title.unwrap_or_default(),
            authors,
            year: paper.year,
            r#abstract: paper.r#abstract,
            url,
            citations: Some(paper.citation_count.unwrap_or(0)),
            key_findings: None,
        }
    }
}

/// Author reference embedded in a paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Open access PDF information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAccessPdf {
    /// Direct URL to the PDF.
    #[serde(default)]
    pub url: Option<String>,

    /// Status of open access.
    #[serde(default)]
    pub status: Option<String>,
}

/// Paper search page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperSearchResult {
    /// Total number of matching papers.
    #[serde(default)]
    pub total: i64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i32,

    /// Papers in this page, undecoded.
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

/// A research author.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique Semantic Scholar author ID.
    pub author_id: String,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Total number of papers by this author.
    #[serde(default)]
    pub paper_count: Option<i32>,
}

impl Author {
    /// Get the author name, falling back to "Unknown" if not available.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// Author search page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorSearchResult {
    /// Total matching authors.
    #[serde(default)]
    pub total: i64,

    /// Authors ordered by relevance.
    #[serde(default)]
    pub data: Vec<Author>,
}

/// An author's publication listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorPapersResult {
    /// Publications, undecoded.
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}
