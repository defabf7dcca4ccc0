use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use hf_core::{Config, Error, Result, Story, StorySource};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

const LIST_TIMEOUT: Duration = Duration::from_secs(10);
const ITEM_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT: &str = concat!("hnfeed/", env!("CARGO_PKG_VERSION"));

/// An item record from the Firebase Hacker News API.
///
/// Every field may be missing, and the whole body is `null` for ids that no
/// longer exist.
#[derive(Debug, Clone, Deserialize)]
pub struct HnItem {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub url: Option<String>,
    /// Creation time in unix seconds
    pub time: Option<i64>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub dead: bool,
}

impl HnItem {
    /// Converts to a [`Story`], or `None` when the item is unusable.
    pub fn into_story(self) -> Option<Story> {
        if self.deleted || self.dead {
            return None;
        }
        let id = self.id?;
        Some(Story {
            id: id.into(),
            title: self.title,
            url: self.url,
            timestamp: self.time.and_then(|t| DateTime::from_timestamp(t, 0)),
        })
    }
}

/// Parses a `topstories.json` body and keeps the first `limit` ids.
pub fn parse_top_ids(body: &str, limit: usize) -> Result<Vec<u64>> {
    let mut ids: Vec<u64> = serde_json::from_str(body)?;
    ids.truncate(limit);
    Ok(ids)
}

/// Parses an `item/{id}.json` body; `null` yields `None`.
pub fn parse_item(body: &str) -> Result<Option<HnItem>> {
    Ok(serde_json::from_str(body)?)
}

#[derive(Debug, Clone)]
pub struct HackerNewsSource {
    client: Client,
    api_base: String,
}

impl HackerNewsSource {
    pub fn new(api_base: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base.as_str())
    }

    async fn get_text(&self, url: &str, timeout: Duration) -> Result<String> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    pub async fn fetch_top_ids(&self, limit: usize) -> Result<Vec<u64>> {
        let url = format!("{}/topstories.json", self.api_base);
        let body = self
            .get_text(&url, LIST_TIMEOUT)
            .await
            .map_err(|e| Error::Fetch(format!("Failed to fetch top stories: {}", e)))?;
        parse_top_ids(&body, limit)
            .map_err(|e| Error::Fetch(format!("Malformed top stories response: {}", e)))
    }

    pub async fn fetch_item(&self, id: u64) -> Result<Option<Story>> {
        let url = format!("{}/item/{}.json", self.api_base, id);
        let body = self.get_text(&url, ITEM_TIMEOUT).await?;
        Ok(parse_item(&body)?.and_then(HnItem::into_story))
    }
}

#[async_trait]
impl StorySource for HackerNewsSource {
    fn name(&self) -> &str {
        "Hacker News"
    }

    async fn fetch_top_stories(&self, limit: usize) -> Result<Vec<Story>> {
        let ids = self.fetch_top_ids(limit).await?;
        info!("📰 Fetched {} top story ids", ids.len());

        let mut stories = Vec::with_capacity(ids.len());
        for id in ids {
            match self.fetch_item(id).await {
                Ok(Some(story)) => stories.push(story),
                Ok(None) => warn!("⏭️ Skipping story {}: deleted or incomplete", id),
                Err(e) => warn!("⚠️ Failed to fetch story {}: {}", id, e),
            }
        }

        Ok(stories)
    }
}
