//! IdeaPulse idea-tracking application library
//!
//! This library provides functionality for capturing, storing, filtering and
//! deleting short ideas with tags and mood labels, including schema
//! migration of records persisted by older versions.

mod charts;
mod cli;
mod config;
mod errors;
mod gateway;
mod helper;
mod idea;
mod migration;
mod stats;
mod storage;
mod types;

// Re-export key components
pub use charts::*;
pub use cli::*;
pub use config::*;
pub use errors::*;
pub use gateway::*;
pub use helper::*;
pub use idea::*;
pub use migration::{upgrade, upgrade_all, upgrade_record, RawIdea};
pub use stats::*;
pub use storage::*;
pub use types::*;
