//! Research Agent
//!
//! Searches arXiv and Semantic Scholar for a topic, summarizes each paper with a
//! local LLM, synthesizes a research-trend narrative and writes a Markdown report
//! with a papers-per-year chart.
//!
//! # Stages
//!
//! - **Search**: [`search::SearchAggregator`] queries both providers, with an
//!   author-centric fallback for Semantic Scholar
//! - **Enrich/analyze**: [`analysis::PaperAnalyzer`] fills `key_findings` and
//!   builds the trend narrative
//! - **Render**: [`report::MarkdownReport`] builds the document and chart
//!
//! # Example
//!
//! ```no_run
//! use research_agent::{Config, ResearchPipeline, ResearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pipeline = ResearchPipeline::from_config(Config::from_env()?)?;
//!     let request = ResearchRequest::parse("graph neural networks", "GCN, GraphSAGE");
//!     let output = pipeline.run(&request).await?;
//!     println!("{}", output.report_path.display());
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod search;

pub use analysis::{PaperAnalyzer, TextGenerator};
pub use config::Config;
pub use error::{ClientError, GenerationError, ReportError, SearchError};
pub use models::Paper;
pub use pipeline::{PipelineOutput, ResearchPipeline, ResearchRequest};
pub use report::MarkdownReport;
pub use search::SearchAggregator;
