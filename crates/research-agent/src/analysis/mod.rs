//! LLM enrichment and trend analysis.
//!
//! Every generation failure is contained per call: a paper gets the
//! [`KEY_FINDINGS_ERROR`] sentinel, the trend analysis returns
//! [`TREND_ANALYSIS_FALLBACK`].

pub mod prompts;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{Config, Locale};
use crate::error::GenerationError;
use crate::models::Paper;

/// Stored in `key_findings` when summarizing a paper fails.
pub const KEY_FINDINGS_ERROR: &str = "Error while processing data";

/// Returned by [`PaperAnalyzer::analyze_trends`] when the backend fails.
pub const TREND_ANALYSIS_FALLBACK: &str = "Research trend analysis could not be performed.";

/// A text-generation backend.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt` with the named model.
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, GenerationError>;
}

/// Fills `key_findings` and synthesizes the trend narrative.
#[derive(Debug)]
pub struct PaperAnalyzer<G> {
    generator: G,
    fast_model: String,
    deep_model: String,
    locale: Locale,
}

impl<G: TextGenerator> PaperAnalyzer<G> {
    /// Create an analyzer using the model profiles and locale from the configuration.
    pub fn new(generator: G, config: &Config) -> Self {
        Self {
            generator,
            fast_model: config.fast_model.clone(),
            deep_model: config.deep_model.clone(),
            locale: config.chart.locale,
        }
    }

    /// Summarize every paper that has an abstract.
    ///
    /// Papers without an abstract pass through untouched.
    pub async fn enrich(&self, papers: Vec<Paper>) -> Vec<Paper> {
        let progress = ProgressBar::new(papers.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len} papers")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress.set_message("Analyzing");

        let mut enriched = Vec::with_capacity(papers.len());
        for mut paper in papers {
            if paper.has_abstract() {
                paper.key_findings = Some(self.summarize(&paper).await);
            }
            enriched.push(paper);
            progress.inc(1);
        }

        progress.finish_and_clear();
        enriched
    }

    async fn summarize(&self, paper: &Paper) -> String {
        let prompt = prompts::summary_prompt(paper, self.locale);
        match self.generator.generate(&prompt, &self.fast_model).await {
            Ok(response) if !response.trim().is_empty() => response.trim().to_string(),
            Ok(_) => {
                tracing::warn!(title = %paper.title, "Empty summary from generation backend");
                KEY_FINDINGS_ERROR.to_string()
            }
            Err(e) => {
                tracing::warn!(title = %paper.title, error = %e, "Paper summarization failed");
                KEY_FINDINGS_ERROR.to_string()
            }
        }
    }

    /// Synthesize a Markdown narrative of how the research evolved.
    pub async fn analyze_trends(&self, papers: &[Paper]) -> String {
        let mut sorted: Vec<&Paper> = papers.iter().collect();
        sorted.sort_by_key(|p| p.sort_year());

        let papers_info = sorted
            .into_iter()
            .filter(|p| p.has_abstract())
            .map(prompts::paper_digest)
            .collect::<Vec<_>>()
            .join("\n\n");

        let prompt = prompts::trend_prompt(&papers_info, self.locale);
        match self.generator.generate(&prompt, &self.deep_model).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Trend analysis failed");
                TREND_ANALYSIS_FALLBACK.to_string()
            }
        }
    }
}
