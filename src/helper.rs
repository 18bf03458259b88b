use crate::Idea;

// Helper method for parsing tags
pub fn parse_tags(tags: Option<String>) -> Vec<String> {
    tags.map(|t| {
        t.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Case-insensitive tag match against an idea's tag list.
pub fn has_tag(idea: &Idea, tag: &str) -> bool {
    let needle = tag.trim().to_lowercase();
    idea.tags.iter().any(|t| t.trim().to_lowercase() == needle)
}
