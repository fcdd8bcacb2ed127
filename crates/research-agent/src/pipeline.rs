//! End-to-end run: search, enrich, analyze, render.

use std::path::PathBuf;

use anyhow::Context;

use crate::analysis::{PaperAnalyzer, TextGenerator};
use crate::client::OllamaClient;
use crate::config::{Config, artifacts};
use crate::report::MarkdownReport;
use crate::search::SearchAggregator;

/// What the user asked to research.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResearchRequest {
    /// Free-text research topic.
    pub topic: String,
    /// Seed references widening the query.
    pub seeds: Vec<String>,
}

impl ResearchRequest {
    /// Build a request from the topic and a comma-separated seed list.
    #[must_use]
    pub fn parse(topic: &str, seeds_input: &str) -> Self {
        let seeds = seeds_input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { topic: topic.trim().to_string(), seeds }
    }
}

/// Artifacts produced by a run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Number of papers found across both providers.
    pub paper_count: usize,
    /// Raw search results (`paper_results.json`).
    pub results_path: PathBuf,
    /// Markdown report (`output.md`).
    pub report_path: PathBuf,
    /// Chart image, when one was rendered.
    pub chart_path: Option<PathBuf>,
}

/// Sequences the three stages and writes every artifact.
#[derive(Debug)]
pub struct ResearchPipeline<G> {
    config: Config,
    analyzer: PaperAnalyzer<G>,
}

impl ResearchPipeline<OllamaClient> {
    /// Create a pipeline backed by the configured Ollama server.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let generator = OllamaClient::new(&config)?;
        Ok(Self::new(config, generator))
    }
}

impl<G: TextGenerator> ResearchPipeline<G> {
    /// Create a pipeline with an explicit generation backend.
    pub fn new(config: Config, generator: G) -> Self {
        let analyzer = PaperAnalyzer::new(generator, &config);
        Self { config, analyzer }
    }

    /// Run search, enrichment, trend analysis and rendering.
    ///
    /// Only output-directory and file-write failures are returned as errors.
    pub async fn run(&self, request: &ResearchRequest) -> anyhow::Result<PipelineOutput> {
        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("creating output directory {}", output_dir.display()))?;

        tracing::info!(topic = %request.topic, seeds = request.seeds.len(), "Searching for related papers");
        let mut aggregator = SearchAggregator::new(&self.config)?;
        let papers = aggregator.search(&request.topic, &request.seeds).await;
        let results_path = aggregator
            .save_results(artifacts::RESULTS_FILE)
            .context("saving search results")?;
        tracing::info!(count = papers.len(), "Found papers");

        tracing::info!("Analyzing papers");
        let papers = self.analyzer.enrich(papers).await;
        tracing::info!("Analyzing research trends");
        let trends = self.analyzer.analyze_trends(&papers).await;

        tracing::info!("Rendering report");
        let mut report = MarkdownReport::new(&self.config);
        let labels = report.labels();
        report.header(&labels.title_for(&request.topic));
        report.section(labels.overview_heading, &labels.overview_for(&request.topic));
        report.papers_table(&papers);
        let chart_path = report.trend_visualization(&papers, artifacts::CHART_FILE);
        report.section(labels.trend_heading, &trends);
        report.references(&papers);
        let report_path = report.save(artifacts::REPORT_FILE).context("saving report")?;

        Ok(PipelineOutput { paper_count: papers.len(), results_path, report_path, chart_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parse_splits_seeds() {
        let request = ResearchRequest::parse(" LLM agents ", "ReAct, Toolformer ,, ");
        assert_eq!(request.topic, "LLM agents");
        assert_eq!(request.seeds, vec!["ReAct", "Toolformer"]);
    }

    #[test]
    fn test_request_parse_without_seeds() {
        assert!(ResearchRequest::parse("topic", "   ").seeds.is_empty());
    }
}
