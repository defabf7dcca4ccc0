use async_trait::async_trait;

use crate::types::{FeedDocument, Story};
use crate::Result;

#[async_trait]
pub trait StorySource: Send + Sync {
    /// Name used in log output
    fn name(&self) -> &str;

    /// Fetch up to `limit` of the currently top-ranked stories.
    ///
    /// Stories that cannot be retrieved individually are skipped; an error is
    /// only returned when the story list itself is unavailable.
    async fn fetch_top_stories(&self, limit: usize) -> Result<Vec<Story>>;
}

pub trait FeedSerializer: Send + Sync {
    /// MIME type of the produced document
    fn content_type(&self) -> &str;

    /// Render a complete document into bytes
    fn serialize(&self, document: &FeedDocument) -> Result<Vec<u8>>;
}
