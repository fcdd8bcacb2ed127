//! Configuration for the research pipeline.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv Atom query endpoint.
    pub const ARXIV_API: &str = "https://export.arxiv.org/api/query";

    /// Semantic Scholar Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Local Ollama server.
    pub const OLLAMA_URL: &str = "http://localhost:11434";

    /// Request timeout for the search providers.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Request timeout for text generation (local models can be slow).
    pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(600);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Results requested from each provider.
    pub const MAX_RESULTS: usize = 10;
}

/// Generation model profiles.
pub mod models {
    /// Fast model used for per-paper summaries.
    pub const FAST: &str = "gemma3";

    /// Reasoning model used for the whole-corpus trend narrative.
    pub const DEEP: &str = "deepseek-r1:1.5b";
}

/// Paper field sets for Semantic Scholar requests.
pub mod fields {
    /// Fields mapped onto a [`crate::models::Paper`].
    pub const PAPER: &[&str] =
        &["paperId", "title", "authors", "year", "abstract", "url", "citationCount", "openAccessPdf"];

    /// Identifier only, for author publication listings.
    pub const PAPER_ID: &[&str] = &["paperId"];

    /// Author fields for author resolution.
    pub const AUTHOR: &[&str] = &["authorId", "name", "paperCount"];
}

/// Default artifact names inside the output directory.
pub mod artifacts {
    /// Output directory.
    pub const OUTPUT_DIR: &str = "output";

    /// Raw search results.
    pub const RESULTS_FILE: &str = "paper_results.json";

    /// Final report.
    pub const REPORT_FILE: &str = "output.md";

    /// Papers-per-year chart.
    pub const CHART_FILE: &str = "research_trend.png";
}

/// Language of the generated report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Korean
    Ko,
}

impl Locale {
    /// English name of the language, used to steer model responses.
    #[must_use]
    pub const fn language_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ko => "Korean",
        }
    }
}

/// Chart rendering configuration, passed to the report renderer at construction.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// TTF/OTF font used for caption and axis labels. Without it the chart is drawn unlabeled.
    pub font_path: Option<PathBuf>,

    /// Label language.
    pub locale: Locale,

    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { font_path: None, locale: Locale::default(), width: 1000, height: 600 }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// arXiv query URL (for testing with mock servers).
    pub arxiv_api_url: String,

    /// Semantic Scholar Graph API base URL (for testing with mock servers).
    pub graph_api_url: String,

    /// Generation backend base URL.
    pub ollama_url: String,

    /// Results requested from each provider.
    pub max_results: usize,

    /// Model profile for per-paper summaries.
    pub fast_model: String,

    /// Model profile for trend analysis.
    pub deep_model: String,

    /// Directory receiving every artifact.
    pub output_dir: PathBuf,

    /// Search request timeout.
    pub request_timeout: Duration,

    /// Generation request timeout.
    pub generation_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Chart and label settings.
    pub chart: ChartConfig,
}

impl Config {
    /// Create a new configuration with optional API key and defaults for everything else.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            arxiv_api_url: api::ARXIV_API.to_string(),
            graph_api_url: api::GRAPH_API.to_string(),
            ollama_url: api::OLLAMA_URL.to_string(),
            max_results: api::MAX_RESULTS,
            fast_model: models::FAST.to_string(),
            deep_model: models::DEEP.to_string(),
            output_dir: PathBuf::from(artifacts::OUTPUT_DIR),
            request_timeout: api::REQUEST_TIMEOUT,
            generation_timeout: api::GENERATION_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            chart: ChartConfig::default(),
        }
    }

    /// Create a test configuration pointing every backend at one mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            arxiv_api_url: format!("{}/api/query", base_url),
            graph_api_url: format!("{}/graph/v1", base_url),
            ollama_url: base_url.to_string(),
            max_results: api::MAX_RESULTS,
            fast_model: models::FAST.to_string(),
            deep_model: models::DEEP.to_string(),
            output_dir: PathBuf::from(artifacts::OUTPUT_DIR),
            request_timeout: Duration::from_secs(5),
            generation_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            chart: ChartConfig::default(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `SEMANTIC_SCHOLAR_API_KEY`, `OLLAMA_BASE_URL`, `RESEARCH_OUTPUT_DIR`
    /// and `RESEARCH_FONT_PATH`.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new(std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok());
        if let Ok(url) = std::env::var("OLLAMA_BASE_URL") {
            config.ollama_url = url;
        }
        if let Ok(dir) = std::env::var("RESEARCH_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Ok(font) = std::env::var("RESEARCH_FONT_PATH") {
            config.chart.font_path = Some(PathBuf::from(font));
        }
        Ok(config)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.has_api_key());
        assert_eq!(config.max_results, 10);
        assert_eq!(config.fast_model, "gemma3");
        assert_eq!(config.deep_model, "deepseek-r1:1.5b");
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_config_for_testing_routes_to_mock() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.arxiv_api_url, "http://127.0.0.1:9999/api/query");
        assert_eq!(config.graph_api_url, "http://127.0.0.1:9999/graph/v1");
        assert_eq!(config.ollama_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_fields() {
        assert!(fields::PAPER.contains(&"citationCount"));
        assert!(fields::PAPER.contains(&"abstract"));
        assert_eq!(fields::PAPER_ID, &["paperId"]);
    }
}
