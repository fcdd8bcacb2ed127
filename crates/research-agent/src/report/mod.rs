//! Markdown report rendering.
//!
//! [`MarkdownReport`] is an append-only buffer: each call adds a section at the
//! end and nothing already written is revisited.

pub mod chart;
mod labels;

use std::path::{Path, PathBuf};

use crate::config::{ChartConfig, Config};
use crate::error::ReportError;
use crate::models::Paper;

pub use labels::Labels;

const NOT_AVAILABLE: &str = "N/A";

/// Text or `N/A` when blank.
fn or_na(text: &str) -> &str {
    if text.trim().is_empty() { NOT_AVAILABLE } else { text }
}

/// Make text safe inside a table cell.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

/// Link target that survives both a table cell and `[text](target)` syntax.
fn link_target(url: &str) -> String {
    table_cell(&url.replace('(', "%28").replace(')', "%29"))
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Accumulates a Markdown document and writes it to the output directory.
#[derive(Debug)]
pub struct MarkdownReport {
    output: String,
    output_dir: PathBuf,
    chart: ChartConfig,
    labels: &'static Labels,
}

impl MarkdownReport {
    /// Create an empty report writing into the configured output directory.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_output_dir(&config.output_dir, config.chart.clone())
    }

    /// Create an empty report writing into `output_dir`.
    #[must_use]
    pub fn with_output_dir(output_dir: impl Into<PathBuf>, chart: ChartConfig) -> Self {
        let labels = Labels::for_locale(chart.locale);
        Self { output: String::new(), output_dir: output_dir.into(), chart, labels }
    }

    /// Labels for the configured locale.
    #[must_use]
    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    /// The document so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Directory receiving the report and chart.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Append a top-level heading.
    pub fn header(&mut self, title: &str) {
        self.output.push_str(&format!("# {title}\n\n"));
    }

    /// Append a second-level heading followed by free text.
    pub fn section(&mut self, title: &str, body: &str) {
        self.output.push_str(&format!("## {title}\n\n{body}\n\n"));
    }

    /// Append the papers table, newest first.
    pub fn papers_table(&mut self, papers: &[Paper]) {
        let mut sorted: Vec<&Paper> = papers.iter().collect();
        sorted.sort_by_key(|p| std::cmp::Reverse(p.sort_year()));

        let columns = self.labels.table_columns;
        self.output.push_str(&format!("## {}\n\n", self.labels.papers_heading));
        self.output.push_str(&format!("| {} |\n", columns.join(" | ")));
        self.output.push_str("|------|------|------|--------|------|\n");

        for paper in sorted {
            let title = table_cell(or_na(&paper.title));
            let title_cell = match paper.link() {
                Some(url) => format!("[{title}]({})", link_target(url)),
                None => title,
            };

            self.output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                title_cell,
                table_cell(or_na(&paper.authors)),
                optional(paper.year),
                optional(paper.citations),
                paper.link().map_or_else(|| NOT_AVAILABLE.to_string(), table_cell),
            ));
        }

        self.output.push('\n');
    }

    /// Append a papers-per-year chart section, writing the image to `filename`.
    ///
    /// Without any year the section holds a placeholder and no file is written.
    /// Rendering failures also degrade to a placeholder. Returns the image path
    /// only when one was written.
    pub fn trend_visualization(&mut self, papers: &[Paper], filename: &str) -> Option<PathBuf> {
        let heading = self.labels.visualization_heading;
        let counts = chart::year_counts(papers.iter().filter_map(|p| p.year));

        if counts.is_empty() {
            self.section(heading, self.labels.no_year_data);
            return None;
        }

        let path = self.output_dir.join(filename);
        let rendered = std::fs::create_dir_all(&self.output_dir)
            .map_err(ReportError::from)
            .and_then(|()| chart::render_year_chart(&path, &counts, &self.chart, self.labels));

        match rendered {
            Ok(()) => {
                tracing::info!(file = filename, years = counts.len(), "Rendered trend chart");
                let image = format!("![{}]({})", self.labels.chart_title, link_target(filename));
                self.section(heading, &image);
                Some(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Trend visualization failed");
                self.section(heading, self.labels.visualization_failed);
                None
            }
        }
    }

    /// Append the numbered reference list in input order.
    pub fn references(&mut self, papers: &[Paper]) {
        self.output.push_str(&format!("## {}\n\n", self.labels.references_heading));

        for (i, paper) in papers.iter().enumerate() {
            self.output.push_str(&format!(
                "{}. {} ({}). {}",
                i + 1,
                or_na(&paper.authors),
                optional(paper.year),
                or_na(&paper.title),
            ));
            if let Some(url) = paper.link() {
                self.output.push_str(&format!(". [{}]({})", self.labels.link, link_target(url)));
            }
            self.output.push('\n');
        }

        self.output.push('\n');
    }

    /// Write the document to `filename` inside the output directory.
    pub fn save(&self, filename: &str) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(filename);
        std::fs::write(&path, &self.output)?;
        tracing::info!(path = %path.display(), "Saved report");
        Ok(path)
    }
}
