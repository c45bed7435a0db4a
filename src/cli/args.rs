//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  env2json                         # Convert .env in current directory
  env2json --input .env.prod       # Convert specific .env file
  env2json --output secrets.json   # Save to specific file";

/// env2json - Convert .env files to JSON format for secrets managers.
#[derive(Debug, Parser)]
#[command(name = "env2json")]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Path to .env file (default: .env in current directory)
    #[arg(long, env = "ENV2JSON_INPUT", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(long, env = "ENV2JSON_OUTPUT", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print to stdout without copying to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Long flags that may also be spelled with a single dash (`-input x`,
/// `-output=y`, `-help`).
const SINGLE_DASH_FLAGS: &[&str] = &[
    "input",
    "output",
    "help",
    "version",
    "no-clipboard",
    "debug",
];

/// Rewrite single-dash spellings of long flags to the double-dash form.
///
/// Arguments after a bare `--` and anything that is not a known flag name
/// pass through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if after_terminator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                after_terminator = true;
                return arg;
            }

            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if SINGLE_DASH_FLAGS.contains(&name) {
                        format!("-{}", text).into()
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_flags() {
        let cli = Cli::try_parse_from(["env2json"]).unwrap();

        assert!(cli.output.is_none());
        assert!(!cli.no_clipboard);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_long_flags() {
        let cli = Cli::try_parse_from([
            "env2json",
            "--input",
            ".env.prod",
            "--output",
            "secrets.json",
            "--no-clipboard",
        ])
        .unwrap();

        assert_eq!(cli.input, Some(PathBuf::from(".env.prod")));
        assert_eq!(cli.output, Some(PathBuf::from("secrets.json")));
        assert!(cli.no_clipboard);
    }

    #[test]
    fn parses_single_dash_flags() {
        let args = normalize_args(["env2json", "-input", "a.env", "-output=a.json", "-debug"]);

        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("a.env")));
        assert_eq!(cli.output, Some(PathBuf::from("a.json")));
        assert!(cli.debug);
    }

    #[test]
    fn normalize_leaves_other_args_alone() {
        let args = normalize_args(["env2json", "--input", "-x", "-", "--", "-output"]);

        assert_eq!(args, ["env2json", "--input", "-x", "-", "--", "-output"]);
    }

    #[test]
    fn normalize_rewrites_help() {
        let err = Cli::try_parse_from(normalize_args(["env2json", "-help"])).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn short_input_flag_is_rejected() {
        let err = Cli::try_parse_from(["env2json", "-i", "a.env"]).unwrap_err();

        assert!(err.use_stderr());
    }

    #[test]
    fn help_is_a_display_request() {
        let err = Cli::try_parse_from(["env2json", "--help"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = Cli::try_parse_from(["env2json", "--bogus"]).unwrap_err();

        assert!(err.use_stderr());
    }
}
