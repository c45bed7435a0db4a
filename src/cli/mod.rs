//! Command-line interface for env2json.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`convert`] - The conversion command

pub mod args;
pub mod convert;

pub use args::{normalize_args, Cli};
pub use convert::{ConvertCommand, ConvertOptions, ConvertSummary, DEFAULT_INPUT};
