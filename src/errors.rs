//! Error types for the ideapulse application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur while managing ideas and their storage.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the ideapulse application.
#[derive(Error, Debug)]
pub enum IdeaError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Idea was not found when performing an operation.
    #[error("Idea not found: {id}")]
    IdeaNotFound { id: String },

    /// An unrecognized mood name was supplied on the command line.
    #[error("Invalid mood '{value}', expected one of: inspired, excited, neutral, tired")]
    InvalidMood { value: String },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// Generic application error with a custom message.
    #[error("{message}")]
    ApplicationError { message: String },
}
