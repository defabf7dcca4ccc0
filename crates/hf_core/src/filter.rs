use tracing::info;

use crate::matcher::Keyword;
use crate::types::Story;

/// The first keyword matching the story's title, if any.
fn matching_keyword<'k>(story: &Story, keywords: &'k [Keyword]) -> Option<&'k Keyword> {
    let title = story.title_or_empty();
    if title.is_empty() {
        return None;
    }
    keywords.iter().find(|k| k.matches(title))
}

pub fn story_matches(story: &Story, keywords: &[Keyword]) -> bool {
    matching_keyword(story, keywords).is_some()
}

/// Keeps stories whose title matches at least one keyword, in their original order.
///
/// An empty keyword set matches nothing.
pub fn filter_stories(stories: Vec<Story>, keywords: &[Keyword]) -> Vec<Story> {
    if keywords.is_empty() {
        return Vec::new();
    }

    stories
        .into_iter()
        .filter(|story| match matching_keyword(story, keywords) {
            Some(keyword) => {
                info!("🎯 Found match [{}]: {}", keyword, story.title_or_empty());
                true
            }
            None => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<Keyword> {
        words.iter().map(|w| Keyword::new(w).unwrap()).collect()
    }

    fn sample() -> Vec<Story> {
        vec![
            Story::new(1u64, "GPT-5 released").with_url("http://a"),
            Story::new(2u64, "Local elections results"),
            Story::new(3u64, "New LLM benchmark"),
        ]
    }

    #[test]
    fn test_empty_inputs() {
        assert!(filter_stories(vec![], &keywords(&["AI"])).is_empty());
        assert!(filter_stories(sample(), &[]).is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let filtered = filter_stories(sample(), &keywords(&["LLM", "GPT"]));
        let ids: Vec<_> = filtered.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_no_dedup_of_same_title() {
        let stories = vec![Story::new(1u64, "AI news"), Story::new(2u64, "AI news")];
        assert_eq!(filter_stories(stories, &keywords(&["AI"])).len(), 2);
    }

    #[test]
    fn test_missing_title_never_matches() {
        let mut story = Story::new(5u64, "AI");
        story.title = None;
        assert!(!story_matches(&story, &keywords(&["AI"])));
        assert!(filter_stories(vec![story], &keywords(&["AI"])).is_empty());
    }

    #[test]
    fn test_no_match() {
        assert!(filter_stories(sample(), &keywords(&["Blockchain"])).is_empty());
    }
}
