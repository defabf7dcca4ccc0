use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::matcher::Keyword;
use crate::{Error, Result};

pub const DEFAULT_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";
pub const DEFAULT_FETCH_LIMIT: usize = 100;
pub const DEFAULT_KEYWORDS_FILE: &str = "keywords.txt";
pub const DEFAULT_OUTPUT: &str = "public/feed.xml";

/// Channel-level metadata of the generated feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedMeta {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
}

impl Default for FeedMeta {
    fn default() -> Self {
        Self {
            title: "Hacker News AI Topics".to_string(),
            link: "https://news.ycombinator.com/".to_string(),
            description: "Top AI/ML stories from Hacker News".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Settings for a single pipeline run.
///
/// Every field has a default, so an empty TOML file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Hacker News API
    pub api_base: String,
    /// How many top stories to inspect
    pub fetch_limit: usize,
    /// File holding one keyword per line
    pub keywords_file: PathBuf,
    /// Where the feed is written; overwritten on every run
    pub output: PathBuf,
    pub feed: FeedMeta,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            keywords_file: PathBuf::from(DEFAULT_KEYWORDS_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            feed: FeedMeta::default(),
        }
    }
}

impl Config {
    /// Reads a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fetch_limit == 0 {
            return Err(Error::Config("fetch_limit must be at least 1".to_string()));
        }
        Url::parse(&self.api_base)
            .map_err(|e| Error::Config(format!("Invalid api_base '{}': {}", self.api_base, e)))?;
        Url::parse(&self.feed.link)
            .map_err(|e| Error::Config(format!("Invalid feed link '{}': {}", self.feed.link, e)))?;
        if self.feed.title.trim().is_empty() {
            return Err(Error::Config("feed title must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Parses keywords from text, one per line.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Duplicates are dropped case-insensitively, keeping the first spelling.
pub fn parse_keywords(content: &str) -> Vec<Keyword> {
    let mut seen = HashSet::new();
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Keyword::new(line).ok())
        .filter(|keyword| seen.insert(keyword.folded().to_string()))
        .collect()
}

pub fn load_keywords(path: &Path) -> Result<Vec<Keyword>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read keywords file {}: {}", path.display(), e))
    })?;
    let keywords = parse_keywords(&content);
    info!("🔑 Loaded {} keywords from {}", keywords.len(), path.display());
    Ok(keywords)
}
