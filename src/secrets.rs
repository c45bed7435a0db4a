//! Secret key detection.
//!
//! This module flags environment variable names that look like they hold
//! secret material. Detection is advisory: it never changes what gets
//! converted.

use std::sync::LazyLock;

use regex::RegexSet;

/// Built-in patterns for common secrets.
///
/// Each tuple contains (name, regex_pattern). Patterns match anywhere in the
/// name, except `KEY` which must stand as its own segment so that names
/// like `MONKEY_COUNT` or `KEYBOARD_LAYOUT` are left alone.
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("password", r"(?i)PASS(WORD|WD)"),
    ("secret", r"(?i)SECRET"),
    ("token", r"(?i)TOKEN"),
    ("credential", r"(?i)CREDENTIAL"),
    ("private_key", r"(?i)PRIVATE"),
    ("key", r"(?i)(^|[_.-])(API_?)?KEY([_.-]|$)|APIKEY"),
];

static SECRET_PATTERNS: LazyLock<RegexSet> =
    LazyLock::new(|| RegexSet::new(BUILTIN_PATTERNS.iter().map(|(_, p)| *p)).unwrap());

/// Check a variable name against the built-in patterns.
///
/// # Example
///
/// ```
/// use env2json::is_sensitive;
///
/// assert!(is_sensitive("DATABASE_PASSWORD"));
/// assert!(is_sensitive("jwt_token"));
/// assert!(!is_sensitive("DATABASE_URL"));
/// assert!(!is_sensitive("PORT"));
/// ```
pub fn is_sensitive(key: &str) -> bool {
    SECRET_PATTERNS.is_match(key)
}

/// Names of the built-in patterns that match `key`, for debug output.
pub fn matching_patterns(key: &str) -> Vec<&'static str> {
    SECRET_PATTERNS
        .matches(key)
        .into_iter()
        .map(|i| BUILTIN_PATTERNS[i].0)
        .collect()
}
