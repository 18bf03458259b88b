//! Core data structures for the ideapulse application.
//!
//! This module contains the primary types used throughout the application,
//! the Idea record and its Mood label.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::IdeaError;

/// Emotional label attached to an idea at creation time.
///
/// Stored as a lowercase string. Reading is tolerant: an unrecognized
/// value deserializes to `Neutral` rather than failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Inspired,
    Excited,
    #[default]
    Neutral,
    Tired,
}

impl Mood {
    /// All moods, in the order the stats display uses.
    pub const ALL: [Mood; 4] = [Mood::Inspired, Mood::Excited, Mood::Neutral, Mood::Tired];

    /// Strict parse, returning None for unknown names.
    pub fn parse(value: &str) -> Option<Mood> {
        match value.trim().to_lowercase().as_str() {
            "inspired" => Some(Mood::Inspired),
            "excited" => Some(Mood::Excited),
            "neutral" => Some(Mood::Neutral),
            "tired" => Some(Mood::Tired),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Inspired => "inspired",
            Mood::Excited => "excited",
            Mood::Neutral => "neutral",
            Mood::Tired => "tired",
        }
    }

    /// Emoji used when rendering an idea or the mood distribution.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Inspired => "✨",
            Mood::Excited => "🔥",
            Mood::Neutral => "😐",
            Mood::Tired => "😴",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = IdeaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::parse(s).ok_or_else(|| IdeaError::InvalidMood {
            value: s.to_string(),
        })
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Tolerant read: garbage mood strings become Neutral instead of
        // poisoning the stored collection.
        let value = String::deserialize(deserializer)?;
        Ok(Mood::parse(&value).unwrap_or_default())
    }
}

/// Represents a single idea in our system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    /// Unique identifier for the idea
    pub id: String,
    /// Free-form idea text
    pub content: String,
    /// Legacy single-tag field, retained for backward compatibility.
    /// New ideas never set this; migrated ones keep whatever they had.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Tags for filtering
    #[serde(default)]
    pub tags: Vec<String>,
    /// Mood label assigned at creation
    #[serde(default)]
    pub mood: Mood,
    /// Creation or last-modified time
    pub timestamp: DateTime<Utc>,
}

impl Idea {
    /// Creates a new idea with the given content, mood and tags.
    ///
    /// The id is a fresh UUID and the timestamp is the current instant.
    /// Content validation is the caller's responsibility; this constructor
    /// copies its inputs through unchanged.
    pub fn new(content: String, mood: Mood, tags: Vec<String>) -> Self {
        Idea {
            id: Self::generate_id(),
            content,
            tag: None,
            tags,
            mood,
            timestamp: Utc::now(),
        }
    }

    /// Generates a unique idea identifier.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_idea_has_id_and_timestamp() {
        let idea = Idea::new(
            "Write design doc".to_string(),
            Mood::Inspired,
            vec!["work".to_string()],
        );
        assert!(!idea.id.is_empty());
        assert_eq!(idea.content, "Write design doc");
        assert_eq!(idea.mood, Mood::Inspired);
        assert_eq!(idea.tags, vec!["work"]);
        assert!(idea.tag.is_none());
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: HashSet<String> = (0..10_000).map(|_| Idea::generate_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn unknown_mood_reads_as_neutral() {
        let mood: Mood = serde_json::from_str("\"ecstatic\"").unwrap();
        assert_eq!(mood, Mood::Neutral);
    }

    #[test]
    fn mood_parse_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(Mood::parse(mood.as_str()), Some(mood));
        }
        assert!("grumpy".parse::<Mood>().is_err());
    }
}
