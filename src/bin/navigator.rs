use anyhow::Context;
use clap::Parser;
use knowledge_navigator::clients::openai::models::OpenAIModel;
use knowledge_navigator::clients::OpenAIClient;
use knowledge_navigator::config::NavigatorConfig;
use knowledge_navigator::core::Assistant;
use knowledge_navigator::features;
use knowledge_navigator::interceptors::file::FileInterceptor;
use knowledge_navigator::menu::{Feature, Navigator};
use knowledge_navigator::ui::TerminalUi;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Knowledge Navigator: an AI-powered educational assistant", long_about = None)]
#[command(after_help = "ENVIRONMENT VARIABLES:
    OPENAI_API_KEY            API key for the completion service (also read from .env)
    NAVIGATOR_MODEL           Model id [default: gpt-4o]
    OPENAI_BASE_URL           Chat-completions base URL
    NAVIGATOR_OUTPUT_DIR      Where charts and concept maps are written
    NAVIGATOR_TRANSCRIPT_DIR  Save every prompt and response here as Markdown
    NAVIGATOR_TIMEOUT_SECS    Request timeout in seconds (0 disables it)
    NAVIGATOR_MAX_RETRIES     Retries for rate limits and network failures
    RUST_LOG                  Log filter, logs go to stderr [default: warn]

EXAMPLES:
    knowledge-navigator                         # Sidebar menu
    knowledge-navigator --feature quiz          # Run one page and exit
    knowledge-navigator --model gpt-4o-mini --max-retries 2")]
struct Args {
    /// Model id, overrides NAVIGATOR_MODEL
    #[arg(short, long)]
    model: Option<String>,

    /// Chat-completions base URL, overrides OPENAI_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Directory for rendered charts and concept maps
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Save prompt/response transcripts to this directory
    #[arg(long)]
    transcript_dir: Option<PathBuf>,

    /// Request timeout in seconds; 0 disables it
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Retries for rate limits and network failures
    #[arg(long)]
    max_retries: Option<usize>,

    /// Open this page once and exit (label or short name, e.g. "quiz")
    #[arg(short, long)]
    feature: Option<Feature>,
}

impl Args {
    fn apply(&self, config: &mut NavigatorConfig) {
        if let Some(model) = &self.model {
            config.model = OpenAIModel::from_id(model);
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(dir) = &self.transcript_dir {
            config.transcript_dir = Some(dir.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = self.max_retries {
            config.retry.max_retries = retries;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = NavigatorConfig::from_env();
    args.apply(&mut config);
    info!(model = %config.model.id(), output_dir = %config.output_dir.display(), "Starting Knowledge Navigator");

    let mut ui = TerminalUi::new();
    features::home::startup_notice(&mut ui, &config);

    let client = OpenAIClient::new(config.openai_config()).context("failed to build HTTP client")?;
    let mut assistant = Assistant::new(client, config.model.clone()).with_retry(config.retry.clone());
    if let Some(dir) = &config.transcript_dir {
        assistant = assistant.with_interceptor(Arc::new(FileInterceptor::new(dir.clone())));
    }

    let mut navigator = Navigator::new(assistant, config.output_dir.clone());
    match args.feature {
        Some(feature) => navigator.visit(&mut ui, feature).await?,
        None => navigator.run(&mut ui).await?,
    }
    Ok(())
}
