use std::path::PathBuf;

use chrono::{DateTime, Utc};
use hf_core::{filter_stories, Config, FeedSerializer, Keyword, Result, StorySource};
use tracing::info;

use crate::builder::FeedBuilder;
use crate::writer::write_atomic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub matched: usize,
    pub output: PathBuf,
}

/// Fetch, filter, build, serialize and write, in that order.
pub struct Pipeline<'a> {
    config: &'a Config,
    keywords: &'a [Keyword],
    source: &'a dyn StorySource,
    serializer: &'a dyn FeedSerializer,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a Config,
        keywords: &'a [Keyword],
        source: &'a dyn StorySource,
        serializer: &'a dyn FeedSerializer,
    ) -> Self {
        Self {
            config,
            keywords,
            source,
            serializer,
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        self.run_at(Utc::now()).await
    }

    /// Runs with an explicit generation time.
    pub async fn run_at(&self, generated_at: DateTime<Utc>) -> Result<RunSummary> {
        info!(
            "🦗 Fetching up to {} stories from {}",
            self.config.fetch_limit,
            self.source.name()
        );
        let stories = self.source.fetch_top_stories(self.config.fetch_limit).await?;
        let fetched = stories.len();
        info!("📥 Fetched {} stories", fetched);

        let matching = filter_stories(stories, self.keywords);
        let matched = matching.len();
        info!("🔍 Found {} matching stories", matched);

        let document = FeedBuilder::new(self.config.feed.clone())
            .generated_at(generated_at)
            .build(&matching);
        let bytes = self.serializer.serialize(&document)?;

        write_atomic(&self.config.output, &bytes)?;
        info!(
            "✅ Feed ({}) written to {}",
            self.serializer.content_type(),
            self.config.output.display()
        );

        Ok(RunSummary {
            fetched,
            matched,
            output: self.config.output.clone(),
        })
    }
}
