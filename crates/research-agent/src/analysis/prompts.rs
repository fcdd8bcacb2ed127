//! Prompt templates for the generation backend.

use crate::config::Locale;
use crate::models::Paper;

/// Per-paper summarization prompt.
#[must_use]
pub fn summary_prompt(paper: &Paper, locale: Locale) -> String {
    format!(
        "Title: {title}\n\
         Authors: {authors}\n\
         Abstract: {abstract_text}\n\n\
         Summarize the key findings and most important points of the paper above \
         as 3-5 concise bullet points. Respond in {language}.",
        title = paper.title,
        authors = paper.authors,
        abstract_text = paper.abstract_text(),
        language = locale.language_name(),
    )
}

/// One paper's block in the trend-analysis corpus.
#[must_use]
pub fn paper_digest(paper: &Paper) -> String {
    format!(
        "Title: {}\nYear: {}\nAuthors: {}\nAbstract: {}\nKey findings: {}",
        paper.title,
        paper.year.map_or_else(|| "N/A".to_string(), |y| y.to_string()),
        paper.authors,
        paper.abstract_text(),
        paper.key_findings.as_deref().unwrap_or("N/A"),
    )
}

/// Whole-corpus trend-analysis prompt.
#[must_use]
pub fn trend_prompt(papers_info: &str, locale: Locale) -> String {
    format!(
        "The following is a list of papers on a specific research topic:\n\n\
         {papers_info}\n\n\
         Based on these papers, perform the following analysis:\n\
         1. Analyze how the research has progressed over time\n\
         2. Identify the main research directions and paradigm shifts\n\
         3. Highlight the key findings and innovative approaches\n\
         4. Clearly separate the stages in the development of the topic\n\
         5. Suggest directions for future research\n\n\
         Write a systematic, detailed analysis report in Markdown. Respond in {language}.",
        language = locale.language_name(),
    )
}
