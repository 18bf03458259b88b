//! Derived statistics over the idea collection.
//!
//! Mood distribution, tag popularity and simple activity measures, computed
//! on demand from whatever collection the caller passes in. Ideas with an
//! unknown mood have already been normalized to neutral by the time they
//! reach here, so the distribution always covers the four known moods.

use chrono::{Duration, Timelike, Utc};

use crate::{Idea, Mood};

/// Number of ideas per mood, in [`Mood::ALL`] order.
///
/// Every mood appears in the result, including zero counts, so chart
/// strategies can decide for themselves what to hide.
pub fn mood_distribution(ideas: &[Idea]) -> Vec<(Mood, usize)> {
    Mood::ALL
        .iter()
        .map(|&mood| (mood, ideas.iter().filter(|i| i.mood == mood).count()))
        .collect()
}

/// The most used tags, most frequent first, at most `limit` entries.
///
/// Ties break alphabetically so repeated runs give a stable order.
pub fn top_tags(ideas: &[Idea], limit: usize) -> Vec<(String, usize)> {
    let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for idea in ideas {
        for tag in &idea.tags {
            let tag = tag.trim();
            if !tag.is_empty() {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// Ideas created within the last seven days.
pub fn last_week_count(ideas: &[Idea]) -> usize {
    let cutoff = Utc::now() - Duration::days(7);
    ideas.iter().filter(|i| i.timestamp >= cutoff).count()
}

/// Number of ideas per hour of day (UTC), 24 buckets.
pub fn ideas_by_hour(ideas: &[Idea]) -> [usize; 24] {
    let mut buckets = [0usize; 24];
    for idea in ideas {
        buckets[idea.timestamp.hour() as usize] += 1;
    }
    buckets
}

/// The hour of day with the most ideas, or None for an empty collection.
pub fn most_active_hour(ideas: &[Idea]) -> Option<u32> {
    if ideas.is_empty() {
        return None;
    }
    let buckets = ideas_by_hour(ideas);
    buckets
        .iter()
        .enumerate()
        .max_by_key(|(_, count)| **count)
        .map(|(hour, _)| hour as u32)
}

/// Percentage of ideas carrying at least one tag, rounded to one decimal.
pub fn tagged_share(ideas: &[Idea]) -> f64 {
    if ideas.is_empty() {
        return 0.0;
    }
    let tagged = ideas.iter().filter(|i| !i.tags.is_empty()).count();
    (tagged as f64 / ideas.len() as f64 * 1000.0).round() / 10.0
}
