use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use hf_core::config::load_keywords;
use hf_core::{Config, Result};
use hf_feed::{Pipeline, RssSerializer};
use hf_sources::{init_logging, HackerNewsSource};
use tracing::{error, info};

const DEFAULT_CONFIG_FILE: &str = "hnfeed.toml";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Publish an RSS feed of Hacker News top stories whose titles match your keywords",
    long_about = None
)]
pub struct Cli {
    /// TOML configuration file (defaults to ./hnfeed.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Keywords file, one keyword per line
    #[arg(long)]
    keywords: Option<PathBuf>,
    /// Where to write the feed
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Number of top stories to inspect
    #[arg(long)]
    limit: Option<usize>,
    /// Base URL of the Hacker News API
    #[arg(long)]
    api_base: Option<String>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn base_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Config::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Config::default()),
        }
    }

    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(keywords) = &self.keywords {
            config.keywords_file = keywords.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(limit) = self.limit {
            config.fetch_limit = limit;
        }
        if let Some(api_base) = &self.api_base {
            config.api_base = api_base.clone();
        }
        config
    }

    pub fn resolve_config(&self) -> Result<Config> {
        let config = self.apply_overrides(self.base_config()?);
        config.validate()?;
        Ok(config)
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;

    let keywords = load_keywords(&config.keywords_file)?;
    if keywords.is_empty() {
        error!(
            "No keywords loaded from {}, nothing to do",
            config.keywords_file.display()
        );
        return Ok(());
    }

    let source = HackerNewsSource::from_config(&config)?;
    let serializer = RssSerializer::new();
    let summary = Pipeline::new(&config, &keywords, &source, &serializer)
        .run()
        .await?;

    info!(
        "✨ Done: {} of {} stories matched, feed at {}",
        summary.matched,
        summary.fetched,
        summary.output.display()
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    info!("🚀 Starting Hacker News feed run");

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ Run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
