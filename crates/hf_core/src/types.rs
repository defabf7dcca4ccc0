use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::FeedMeta;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for StoryId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for StoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A story as delivered by a [`StorySource`](crate::StorySource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: Option<String>,
    pub url: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Story {
    pub fn new(id: impl Into<StoryId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            url: None,
            timestamp: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Title or the empty string when upstream sent none.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// The story's own link, ignoring blank values.
    pub fn own_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub guid: String,
    pub title: String,
    pub link: String,
    pub comments: String,
    pub description: String,
    pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedDocument {
    pub meta: FeedMeta,
    pub last_build: DateTime<Utc>,
    pub entries: Vec<FeedEntry>,
}

impl FeedDocument {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_id_display() {
        assert_eq!(StoryId::from(42u64).to_string(), "42");
        assert_eq!(StoryId::from("abc").as_str(), "abc");
    }

    #[test]
    fn test_own_url_ignores_blank() {
        let story = Story::new(1u64, "Title").with_url("   ");
        assert_eq!(story.own_url(), None);

        let story = Story::new(1u64, "Title").with_url("https://example.com");
        assert_eq!(story.own_url(), Some("https://example.com"));
    }

    #[test]
    fn test_title_or_empty() {
        let mut story = Story::new(1u64, "Title");
        story.title = None;
        assert_eq!(story.title_or_empty(), "");
    }

    #[test]
    fn test_story_json_shape() {
        let story = Story::new(7u64, "AI news");
        let json = serde_json::to_value(&story).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["title"], "AI news");
        assert!(json["url"].is_null());
    }
}
