//! env2json - Convert .env files to JSON for secrets managers.
//!
//! Reads a `KEY=value` file, drops comments and malformed lines, and emits a
//! pretty-printed JSON object of string values. The result is printed (and
//! copied to the clipboard when a tool is available) or saved to a file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the conversion command
//! - [`clipboard`] - Platform clipboard dispatch
//! - [`encode`] - JSON encoding
//! - [`env_file`] - .env parsing
//! - [`error`] - Error types and result aliases
//! - [`output`] - Output sink (stdout or file)
//! - [`secrets`] - Secret key detection
//!
//! # Example
//!
//! ```
//! use env2json::{encode, is_sensitive, EnvFileParser};
//!
//! let vars = EnvFileParser::parse("API_SECRET='s3cr3t'\nPORT=8080\n");
//! assert_eq!(vars.get("API_SECRET"), Some("s3cr3t"));
//! assert!(is_sensitive("API_SECRET"));
//!
//! let json = String::from_utf8(encode(&vars).unwrap()).unwrap();
//! assert!(json.contains("\"PORT\": \"8080\""));
//! ```

pub mod cli;
pub mod clipboard;
pub mod encode;
pub mod env_file;
pub mod error;
pub mod output;
pub mod secrets;

pub use encode::encode;
pub use env_file::{EnvFileParser, EnvironmentMap, Entry};
pub use error::{Env2JsonError, Result};
pub use secrets::is_sensitive;
