pub mod config;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod source;
pub mod types;

pub use config::{Config, FeedMeta};
pub use error::{Error, Result};
pub use filter::{filter_stories, story_matches};
pub use matcher::{matches, Keyword};
pub use source::{FeedSerializer, StorySource};
pub use types::{FeedDocument, FeedEntry, Story, StoryId};

/// Discussion page for a story on Hacker News.
pub fn discussion_url(id: &StoryId) -> String {
    format!("https://news.ycombinator.com/item?id={}", id)
}
