//! Data models: the shared paper record and provider wire formats.
//!
//! Provider models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming.

mod arxiv;
mod paper;
mod scholar;

pub use arxiv::ArxivEntry;
pub use paper::{Paper, PaperCollection};
pub use scholar::{
    Author, AuthorPapersResult, AuthorRef, AuthorSearchResult, OpenAccessPdf, PaperSearchResult,
    ScholarPaper,
};
