use chrono::{DateTime, Utc};
use hf_core::{discussion_url, FeedDocument, FeedEntry, FeedMeta, Story};

/// Turns matching stories into a [`FeedDocument`].
///
/// `generated_at` becomes the document's last-build time and the publication
/// time of any story that carries no timestamp of its own.
#[derive(Debug, Clone)]
pub struct FeedBuilder {
    meta: FeedMeta,
    generated_at: DateTime<Utc>,
}

impl FeedBuilder {
    pub fn new(meta: FeedMeta) -> Self {
        Self {
            meta,
            generated_at: Utc::now(),
        }
    }

    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = at;
        self
    }

    pub fn entry(&self, story: &Story) -> FeedEntry {
        let comments = discussion_url(&story.id);
        let (link, description) = match story.own_url() {
            Some(url) => (url.to_string(), format!("Article: {}", url)),
            None => (comments.clone(), format!("Comments: {}", comments)),
        };

        FeedEntry {
            guid: story.id.to_string(),
            title: story.title_or_empty().to_string(),
            link,
            comments,
            description,
            published: story.timestamp.unwrap_or(self.generated_at),
        }
    }

    pub fn build(&self, stories: &[Story]) -> FeedDocument {
        FeedDocument {
            meta: self.meta.clone(),
            last_build: self.generated_at,
            entries: stories.iter().map(|story| self.entry(story)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_entry_with_url() {
        let story = Story::new(1u64, "GPT-5 released")
            .with_url("http://a")
            .with_timestamp(Utc.with_ymd_and_hms(2025, 2, 28, 8, 30, 0).unwrap());
        let entry = FeedBuilder::new(FeedMeta::default()).generated_at(at()).entry(&story);

        assert_eq!(entry.title, "GPT-5 released");
        assert_eq!(entry.link, "http://a");
        assert_eq!(entry.guid, "1");
        assert_eq!(entry.comments, "https://news.ycombinator.com/item?id=1");
        assert_eq!(entry.description, "Article: http://a");
        assert_eq!(entry.published, Utc.with_ymd_and_hms(2025, 2, 28, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_missing_url_falls_back_to_discussion() {
        let story = Story::new(7u64, "AI news");
        let entry = FeedBuilder::new(FeedMeta::default()).generated_at(at()).entry(&story);

        assert_eq!(entry.link, "https://news.ycombinator.com/item?id=7");
        assert!(entry.link.contains('7'));
        assert_eq!(entry.description, "Comments: https://news.ycombinator.com/item?id=7");
    }

    #[test]
    fn test_missing_timestamp_uses_generation_time() {
        let story = Story::new(7u64, "AI news");
        let entry = FeedBuilder::new(FeedMeta::default()).generated_at(at()).entry(&story);
        assert_eq!(entry.published, at());
    }

    #[test]
    fn test_build_keeps_order_and_metadata() {
        let stories = vec![
            Story::new(3u64, "third"),
            Story::new(1u64, "first"),
            Story::new(2u64, "second"),
        ];
        let meta = FeedMeta {
            title: "LLM digest".to_string(),
            ..FeedMeta::default()
        };
        let doc = FeedBuilder::new(meta.clone()).generated_at(at()).build(&stories);

        let guids: Vec<_> = doc.entries.iter().map(|e| e.guid.as_str()).collect();
        assert_eq!(guids, vec!["3", "1", "2"]);
        assert_eq!(doc.meta, meta);
        assert_eq!(doc.last_build, at());
    }

    #[test]
    fn test_build_empty() {
        let doc = FeedBuilder::new(FeedMeta::default()).build(&[]);
        assert!(doc.is_empty());
        assert_eq!(doc.meta.title, "Hacker News AI Topics");
    }

    #[test]
    fn test_build_is_deterministic() {
        let stories = vec![
            Story::new(1u64, "GPT-5 released").with_url("http://a"),
            Story::new(3u64, "New LLM benchmark"),
        ];
        let builder = FeedBuilder::new(FeedMeta::default()).generated_at(at());
        assert_eq!(builder.build(&stories), builder.build(&stories));

        // entries do not depend on when the builder was created when timestamps exist
        let stamped: Vec<_> = stories.into_iter().map(|s| s.with_timestamp(at())).collect();
        let first = FeedBuilder::new(FeedMeta::default()).build(&stamped);
        let second = FeedBuilder::new(FeedMeta::default()).build(&stamped);
        assert_eq!(first.entries, second.entries);
    }
}
