//! Error types for env2json operations.
//!
//! This module defines [`Env2JsonError`], the error type returned by every
//! fallible step of a conversion, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is terminal: `main` prints it to stderr and exits with 1
//! - The `Display` text of each variant is the exact message shown to users
//! - Clipboard failures never become an `Env2JsonError`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for env2json operations.
#[derive(Debug, Error)]
pub enum Env2JsonError {
    /// Input file does not exist (or is not a regular file).
    ///
    /// `explicit` records whether the path came from `--input`, which
    /// changes the hint shown to the user.
    #[error("{}", not_found_message(path, *explicit))]
    InputNotFound { path: PathBuf, explicit: bool },

    /// Input file could not be opened or read.
    #[error("Error reading .env file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file parsed cleanly but produced no entries.
    #[error("The .env file is empty or contains no valid environment variables.")]
    EmptyInput { path: PathBuf },

    /// Serialization to JSON failed.
    #[error("Error converting to JSON: {0}")]
    Encode(#[from] serde_json::Error),

    /// Output file could not be written.
    #[error("Error writing to file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper (stdout writes).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn not_found_message(path: &std::path::Path, explicit: bool) -> String {
    if explicit {
        format!("File not found: {}", path.display())
    } else {
        [
            "No .env file found in current directory.",
            "Use --input flag to specify a different .env file:",
            "  env2json --input /path/to/.env",
            "  env2json --input .env.production",
        ]
        .join("\n")
    }
}

/// Result type alias for env2json operations.
pub type Result<T> = std::result::Result<T, Env2JsonError>;
