//! The conversion command.
//!
//! Ties the parser, encoder and output sink together for one invocation.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::clipboard::{detect_clipboard, Clipboard, NoClipboard};
use crate::encode::encode;
use crate::env_file::EnvFileParser;
use crate::error::{Env2JsonError, Result};
use crate::output::emit;
use crate::secrets::{is_sensitive, matching_patterns};

/// Input file used when `--input` is not given.
pub const DEFAULT_INPUT: &str = ".env";

/// Resolved settings for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// File to read.
    pub input: PathBuf,

    /// Whether `input` was chosen by the user rather than defaulted.
    pub input_explicit: bool,

    /// File to write, or `None` for stdout.
    pub output: Option<PathBuf>,

    /// Copy stdout output to the clipboard.
    pub clipboard: bool,
}

impl From<&Cli> for ConvertOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            input: cli
                .input
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            input_explicit: cli.input.is_some(),
            output: cli.output.clone(),
            clipboard: !cli.no_clipboard,
        }
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Number of entries converted.
    pub entries: usize,

    /// How many of those keys look like secrets.
    pub sensitive: usize,
}

/// Converts one .env file to JSON.
pub struct ConvertCommand {
    options: ConvertOptions,
    clipboard: Box<dyn Clipboard>,
}

impl ConvertCommand {
    /// Create a command, picking the platform clipboard when one is needed.
    pub fn new(options: ConvertOptions) -> Self {
        let clipboard: Box<dyn Clipboard> = if options.clipboard && options.output.is_none() {
            detect_clipboard()
        } else {
            Box::new(NoClipboard)
        };
        Self::with_clipboard(options, clipboard)
    }

    /// Create a command with an explicit clipboard implementation.
    pub fn with_clipboard(options: ConvertOptions, clipboard: Box<dyn Clipboard>) -> Self {
        Self { options, clipboard }
    }

    /// Run the conversion, writing user-facing output to `out`.
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<ConvertSummary> {
        let input = &self.options.input;

        if !input.is_file() {
            return Err(Env2JsonError::InputNotFound {
                path: input.clone(),
                explicit: self.options.input_explicit,
            });
        }

        let vars = EnvFileParser::load(input)?;
        if vars.is_empty() {
            return Err(Env2JsonError::EmptyInput {
                path: input.clone(),
            });
        }

        let mut sensitive = 0;
        for key in vars.keys().filter(|key| is_sensitive(key)) {
            tracing::debug!(
                "{} looks sensitive ({})",
                key,
                matching_patterns(key).join(", ")
            );
            sensitive += 1;
        }
        tracing::debug!(
            "{} of {} keys look sensitive in {}",
            sensitive,
            vars.len(),
            input.display()
        );

        let json = encode(&vars)?;
        emit(
            &json,
            self.options.output.as_deref(),
            vars.len(),
            out,
            self.clipboard.as_ref(),
        )?;

        Ok(ConvertSummary {
            entries: vars.len(),
            sensitive,
        })
    }
}
