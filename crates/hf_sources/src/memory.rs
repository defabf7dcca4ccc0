use async_trait::async_trait;
use hf_core::{Error, Result, Story, StorySource};

/// A story source backed by a fixed list, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    stories: Vec<Story>,
    failure: Option<String>,
}

impl MemorySource {
    pub fn new(stories: Vec<Story>) -> Self {
        Self {
            stories,
            failure: None,
        }
    }

    /// A source whose story list is never available.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            stories: Vec::new(),
            failure: Some(message.into()),
        }
    }

    pub fn push(&mut self, story: Story) {
        self.stories.push(story);
    }
}

#[async_trait]
impl StorySource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_top_stories(&self, limit: usize) -> Result<Vec<Story>> {
        if let Some(message) = &self.failure {
            return Err(Error::Fetch(message.clone()));
        }
        Ok(self.stories.iter().take(limit).cloned().collect())
    }
}
