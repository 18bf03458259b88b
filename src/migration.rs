//! Schema migration for ideas read from storage.
//!
//! The stored collection has gone through several shapes over time: the
//! earliest records carried only Turkish field names (`metin`, `etiket`)
//! with no id, mood or timestamp; later ones gained ids and moods; the
//! current shape uses a tag list. [`RawIdea`] accepts all of them, and a
//! chain of pure upgrade steps brings each record to the current shape.
//! Each step is idempotent, so running the chain on already-migrated data
//! is a no-op.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Deserialize;

use crate::{Idea, Mood};

/// Permissive on-disk shape: every field optional, legacy names accepted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawIdea {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "metin")]
    pub content: Option<String>,
    #[serde(default, alias = "etiket")]
    pub tag: Option<String>,
    #[serde(default, alias = "etiketler")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Missing id: assign a freshly generated one.
fn fill_id(mut raw: RawIdea) -> RawIdea {
    if raw.id.as_deref().map_or(true, str::is_empty) {
        raw.id = Some(Idea::generate_id());
    }
    raw
}

/// Missing or unrecognized mood: normalize to neutral.
fn fill_mood(mut raw: RawIdea) -> RawIdea {
    let mood = raw
        .mood
        .as_deref()
        .and_then(Mood::parse)
        .unwrap_or_default();
    raw.mood = Some(mood.as_str().to_string());
    raw
}

/// Missing or unparsable timestamp: stamp with the current time.
///
/// A record that never had a timestamp gets a new one on every load until
/// it is saved again. Accepted quirk, carried over from the original.
fn fill_timestamp(mut raw: RawIdea) -> RawIdea {
    let valid = raw
        .timestamp
        .as_deref()
        .map_or(false, |t| DateTime::parse_from_rfc3339(t).is_ok());
    if !valid {
        raw.timestamp = Some(Utc::now().to_rfc3339());
    }
    raw
}

/// Single legacy tag but no tag list: lift the tag into a one-element
/// list. The singular field itself is retained for backward compatibility.
fn lift_tags(mut raw: RawIdea) -> RawIdea {
    if raw.tags.is_none() {
        raw.tags = Some(raw.tag.clone().into_iter().collect());
    }
    raw
}

/// Runs the full upgrade chain on one raw record.
pub fn upgrade(raw: RawIdea) -> RawIdea {
    lift_tags(fill_timestamp(fill_mood(fill_id(raw))))
}

/// Upgrades a raw record and converts it to the current [`Idea`] shape.
///
/// Returns None for records with no usable content; the store drops those
/// rather than failing the whole load.
pub fn upgrade_record(raw: RawIdea) -> Option<Idea> {
    let raw = upgrade(raw);
    let content = raw.content.unwrap_or_default();
    if content.trim().is_empty() {
        warn!("Dropping stored idea without content (id: {:?})", raw.id);
        return None;
    }

    // The chain guarantees these are present and well-formed.
    let timestamp = raw
        .timestamp
        .as_deref()
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    Some(Idea {
        id: raw.id.unwrap_or_else(Idea::generate_id),
        content,
        tag: raw.tag,
        tags: raw.tags.unwrap_or_default(),
        mood: raw.mood.as_deref().and_then(Mood::parse).unwrap_or_default(),
        timestamp,
    })
}

/// Upgrades a whole raw collection, preserving its order.
pub fn upgrade_all(raws: Vec<RawIdea>) -> Vec<Idea> {
    let total = raws.len();
    let ideas: Vec<Idea> = raws.into_iter().filter_map(upgrade_record).collect();
    if ideas.len() < total {
        debug!("Migration dropped {} empty record(s)", total - ideas.len());
    }
    ideas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_raw() -> RawIdea {
        serde_json::from_str(r#"{"metin":"old note","etiket":"misc"}"#).unwrap()
    }

    #[test]
    fn legacy_record_is_fully_upgraded() {
        let idea = upgrade_record(legacy_raw()).unwrap();
        assert!(!idea.id.is_empty());
        assert_eq!(idea.content, "old note");
        assert_eq!(idea.mood, Mood::Neutral);
        assert_eq!(idea.tags, vec!["misc"]);
        assert_eq!(idea.tag.as_deref(), Some("misc"));
    }

    #[test]
    fn tag_upgrade_lifts_singular_into_list() {
        let raw = RawIdea {
            content: Some("note".to_string()),
            tag: Some("school".to_string()),
            ..Default::default()
        };
        let idea = upgrade_record(raw).unwrap();
        assert_eq!(idea.tags, vec!["school"]);
        assert_eq!(idea.tag.as_deref(), Some("school"));
    }

    #[test]
    fn upgrade_chain_is_idempotent() {
        let once = upgrade(legacy_raw());
        let twice = upgrade(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn present_fields_are_not_regenerated() {
        let raw = RawIdea {
            id: Some("abc".to_string()),
            content: Some("keep me".to_string()),
            mood: Some("excited".to_string()),
            timestamp: Some("2024-01-01T00:00:00+00:00".to_string()),
            tags: Some(vec!["a".to_string()]),
            tag: None,
        };
        let idea = upgrade_record(raw).unwrap();
        assert_eq!(idea.id, "abc");
        assert_eq!(idea.mood, Mood::Excited);
        assert_eq!(idea.timestamp.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(idea.tags, vec!["a"]);
    }

    #[test]
    fn unknown_mood_becomes_neutral() {
        let raw = RawIdea {
            content: Some("note".to_string()),
            mood: Some("ecstatic".to_string()),
            ..Default::default()
        };
        assert_eq!(upgrade_record(raw).unwrap().mood, Mood::Neutral);
    }

    #[test]
    fn contentless_record_is_dropped() {
        let raw = RawIdea {
            content: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(upgrade_record(raw).is_none());
    }
}
