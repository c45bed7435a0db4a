//! Output sink for converted JSON.

use std::io::Write;
use std::path::Path;

use crate::clipboard::{copy_best_effort, Clipboard};
use crate::error::{Env2JsonError, Result};

/// Deliver encoded JSON to its destination.
///
/// With no `destination`, the JSON and a trailing newline go to `out` and a
/// clipboard copy is attempted. Otherwise the JSON is written verbatim to the
/// file and a `Saved to ...` confirmation line goes to `out`.
pub fn emit<W: Write>(
    json: &[u8],
    destination: Option<&Path>,
    entry_count: usize,
    out: &mut W,
    clipboard: &dyn Clipboard,
) -> Result<()> {
    match destination {
        None => {
            out.write_all(json)?;
            out.write_all(b"\n")?;
            out.flush()?;
            copy_best_effort(clipboard, &String::from_utf8_lossy(json));
        }
        Some(path) => {
            std::fs::write(path, json).map_err(|source| Env2JsonError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!("Wrote {} bytes to {}", json.len(), path.display());
            writeln!(out, "Saved to {} ({} variables)", path.display(), entry_count)?;
        }
    }

    Ok(())
}
