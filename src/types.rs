//! Shared types for the ideapulse application.
//!
//! Holds the crate-wide Result alias, the theme preference and the CLI
//! command surface.

use std::{fmt, str::FromStr};

use clap::Subcommand;
use serde::{Deserialize, Serialize};

use crate::{ChartKind, IdeaError};

/// A specialized Result type for ideapulse operations.
pub type Result<T> = std::result::Result<T, IdeaError>;

/// Display theme preference, stored independently of the idea collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}

impl FromStr for Theme {
    type Err = IdeaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(IdeaError::ConfigError {
                message: format!("Unknown theme '{}', expected dark or light", other),
            }),
        }
    }
}

/// Available subcommands for the ideapulse application
#[derive(Subcommand)]
pub enum Commands {
    /// Capture a new idea
    Add {
        /// The idea text
        content: String,

        /// Mood at the time of capture
        #[clap(short, long, default_value = "neutral")]
        mood: String,

        /// Tags to associate with the idea (comma-separated)
        #[clap(short, long)]
        tags: Option<String>,
    },

    /// List ideas with optional filtering
    List {
        /// Filter ideas by tag
        #[clap(short, long)]
        tag: Option<String>,

        /// Filter ideas by mood
        #[clap(short, long)]
        mood: Option<String>,

        /// Limit the number of ideas returned (default from config)
        #[clap(short = 'n', long)]
        limit: Option<usize>,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Search ideas by content
    Search {
        /// Search query text
        query: String,

        /// Limit the number of search results (default from config)
        #[clap(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Edit an existing idea
    Edit {
        /// ID of the idea to edit
        id: String,

        /// New idea text
        #[clap(short, long)]
        content: Option<String>,

        /// New mood
        #[clap(short, long)]
        mood: Option<String>,

        /// New tags (comma-separated, replaces the existing list)
        #[clap(short, long)]
        tags: Option<String>,
    },

    /// Delete an idea by ID
    Delete {
        /// ID of the idea to delete
        id: String,

        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },

    /// Delete every idea
    DeleteAll {
        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },

    /// Show idea statistics and the mood distribution
    Stats {
        /// Chart style for the mood distribution
        #[clap(short, long, value_enum, default_value_t = ChartKind::Bar)]
        chart: ChartKind,
    },

    /// Show or set the display theme
    Theme {
        /// Theme to store (dark or light); omit to show the current one
        theme: Option<String>,
    },
}
