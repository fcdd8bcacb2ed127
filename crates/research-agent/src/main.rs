//! Research Agent - Entry Point
//!
//! Prompts for a topic and seed references, then runs the search → analyze → render pipeline.

use std::path::PathBuf;

use clap::Parser;
use dialoguer::Input;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use research_agent::config::{Config, Locale};
use research_agent::{ResearchPipeline, ResearchRequest};

#[derive(Parser, Debug)]
#[command(name = "research-agent")]
#[command(about = "Search papers, summarize them with a local LLM and write a Markdown report")]
#[command(version)]
struct Cli {
    /// Research topic (prompted for when omitted)
    #[arg(long)]
    topic: Option<String>,

    /// Comma-separated seed references (prompted for when --topic is omitted)
    #[arg(long)]
    seeds: Option<String>,

    /// Directory for paper_results.json, output.md and the chart
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Ollama base URL
    #[arg(long)]
    ollama_url: Option<String>,

    /// Semantic Scholar API key
    #[arg(long)]
    api_key: Option<String>,

    /// Results requested from each provider
    #[arg(long)]
    max_results: Option<usize>,

    /// Model used for per-paper summaries
    #[arg(long)]
    fast_model: Option<String>,

    /// Model used for the trend analysis
    #[arg(long)]
    deep_model: Option<String>,

    /// Report language
    #[arg(long, value_enum, default_value_t = Locale::En)]
    locale: Locale,

    /// TTF/OTF font for chart labels
    #[arg(long)]
    font_path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    /// Layer explicit flags over the environment-derived configuration.
    fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }
        if let Some(url) = &self.ollama_url {
            config.ollama_url.clone_from(url);
        }
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(n) = self.max_results {
            config.max_results = n;
        }
        if let Some(model) = &self.fast_model {
            config.fast_model.clone_from(model);
        }
        if let Some(model) = &self.deep_model {
            config.deep_model.clone_from(model);
        }
        if let Some(font) = &self.font_path {
            config.chart.font_path = Some(font.clone());
        }
        config.chart.locale = self.locale;
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn read_request(cli: &Cli) -> anyhow::Result<ResearchRequest> {
    if let Some(topic) = &cli.topic {
        return Ok(ResearchRequest::parse(topic, cli.seeds.as_deref().unwrap_or_default()));
    }

    let topic: String = Input::new().with_prompt("Research topic").interact_text()?;
    let seeds: String = Input::new()
        .with_prompt("Seed references (comma-separated)")
        .allow_empty(true)
        .interact_text()?;

    Ok(ResearchRequest::parse(&topic, &seeds))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting research agent");

    let mut config = Config::from_env()?;
    cli.apply(&mut config);

    let request = read_request(&cli)?;
    let pipeline = ResearchPipeline::from_config(config)?;
    let output = pipeline.run(&request).await?;

    tracing::info!(
        papers = output.paper_count,
        results = %output.results_path.display(),
        report = %output.report_path.display(),
        chart = ?output.chart_path,
        "Research run complete"
    );
    println!("Report written to {}", output.report_path.display());

    Ok(())
}
