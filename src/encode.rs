//! JSON encoding of parsed environment maps.

use crate::env_file::EnvironmentMap;
use crate::error::Result;

/// Serialize a map as a pretty-printed JSON object.
///
/// Keys come out sorted, two-space indented, every value a JSON string
/// (`PORT=3000` stays `"3000"`). The returned bytes have no trailing
/// newline. An empty map encodes to `{}`.
///
/// # Example
///
/// ```
/// use env2json::{encode, EnvFileParser};
///
/// let vars = EnvFileParser::parse("PORT=3000\nDEBUG=true");
/// let json = encode(&vars).unwrap();
/// assert_eq!(
///     String::from_utf8(json).unwrap(),
///     "{\n  \"DEBUG\": \"true\",\n  \"PORT\": \"3000\"\n}"
/// );
/// ```
pub fn encode(vars: &EnvironmentMap) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(vars)?)
}
