//! .env file parsing.
//!
//! This module provides functionality for parsing environment variable files
//! in the standard KEY=value format into an [`EnvironmentMap`].

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::error::{Env2JsonError, Result};

/// A single key-value pair extracted from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// All entries from one parsed file.
///
/// Keys are kept sorted so encoded output is stable between runs. Inserting
/// an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentMap(BTreeMap<String, String>);

impl EnvironmentMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the value it replaced.
    pub fn insert(&mut self, entry: Entry) -> Option<String> {
        self.0.insert(entry.key, entry.value)
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl FromIterator<Entry> for EnvironmentMap {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut map = Self::new();
        for entry in iter {
            map.insert(entry);
        }
        map
    }
}

/// Parses .env files into an [`EnvironmentMap`].
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// Lines without `=` or with an empty key are skipped, not reported.
///
/// # Example
///
/// ```
/// use env2json::EnvFileParser;
///
/// let content = r#"
/// # Database config
/// DATABASE_URL=postgres://localhost/db
/// DEBUG="true"
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("DATABASE_URL"), Some("postgres://localhost/db"));
/// assert_eq!(vars.get("DEBUG"), Some("true"));
/// assert_eq!(vars.get("EMPTY"), Some(""));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content held in memory.
    pub fn parse(content: &str) -> EnvironmentMap {
        content.lines().filter_map(Self::parse_line).collect()
    }

    /// Parse env file content from a buffered reader.
    ///
    /// A read failure part way through (including invalid UTF-8) is returned
    /// as-is; entries read before it are discarded.
    pub fn parse_reader<R: BufRead>(reader: R) -> std::io::Result<EnvironmentMap> {
        let mut vars = EnvironmentMap::new();

        for line in reader.lines() {
            if let Some(entry) = Self::parse_line(&line?) {
                vars.insert(entry);
            }
        }

        Ok(vars)
    }

    /// Parse a single line.
    ///
    /// Returns `None` for blank lines, comments, lines without `=`, and lines
    /// whose key is empty.
    pub fn parse_line(line: &str) -> Option<Entry> {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some(Entry {
            key: key.to_string(),
            value: Self::unquote(value.trim()).to_string(),
        })
    }

    /// Remove one pair of matching surrounding quotes from a value.
    fn unquote(value: &str) -> &str {
        for quote in ['"', '\''] {
            if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
                return &value[1..value.len() - 1];
            }
        }
        value
    }

    /// Load and parse an env file from a path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use env2json::EnvFileParser;
    /// use std::path::Path;
    ///
    /// let vars = EnvFileParser::load(Path::new(".env")).unwrap();
    /// for (key, value) in vars.iter() {
    ///     println!("{}={}", key, value);
    /// }
    /// ```
    pub fn load(path: &Path) -> Result<EnvironmentMap> {
        let read_error = |source: std::io::Error| Env2JsonError::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        let vars = Self::parse_reader(BufReader::new(file)).map_err(read_error)?;

        tracing::debug!("Parsed {} entries from {}", vars.len(), path.display());
        Ok(vars)
    }
}
