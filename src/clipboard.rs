//! Platform clipboard dispatch.
//!
//! Copying is always best effort. A missing tool or a failing command is
//! logged at debug level and otherwise ignored.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

/// Something that can place text on the system clipboard.
pub trait Clipboard {
    /// Copy `text` to the clipboard.
    fn copy(&self, text: &str) -> Result<()>;

    /// Short description for log output.
    fn describe(&self) -> String;
}

/// Clipboard backed by an external command that reads the text from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Create a clipboard that runs `program` with `args`.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to spawn {}", self.program))?;

        // stdin must be closed before waiting or the tool never sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child
            .wait()
            .with_context(|| format!("failed to wait for {}", self.program))?;
        written.with_context(|| format!("failed to write to {}", self.program))?;
        if !status.success() {
            bail!("{} exited with {}", self.program, status);
        }

        Ok(())
    }

    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Clipboard that does nothing, for platforms without a known tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn copy(&self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn describe(&self) -> String {
        "none".to_string()
    }
}

/// Operating systems with distinct clipboard handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl Platform {
    /// Parse a platform from a `std::env::consts::OS` style name.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            _ => Platform::Other,
        }
    }

    /// The platform this binary was built for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }
}

/// Select the clipboard tool for the current platform and `PATH`.
pub fn detect_clipboard() -> Box<dyn Clipboard> {
    clipboard_for(Platform::current(), &parse_system_path())
}

/// Select the clipboard tool for `platform`, probing `path_entries` where
/// the platform has more than one candidate.
pub fn clipboard_for(platform: Platform, path_entries: &[PathBuf]) -> Box<dyn Clipboard> {
    match platform {
        Platform::MacOs => Box::new(CommandClipboard::new("pbcopy", &[])),
        Platform::Linux => {
            if resolve_tool_path("xclip", path_entries).is_some() {
                Box::new(CommandClipboard::new("xclip", &["-selection", "clipboard"]))
            } else if resolve_tool_path("xsel", path_entries).is_some() {
                Box::new(CommandClipboard::new("xsel", &["--clipboard", "--input"]))
            } else {
                Box::new(NoClipboard)
            }
        }
        Platform::Windows => Box::new(CommandClipboard::new("clip", &[])),
        Platform::Other => Box::new(NoClipboard),
    }
}

/// Copy text, swallowing any failure.
pub fn copy_best_effort(clipboard: &dyn Clipboard, text: &str) {
    match clipboard.copy(text) {
        Ok(()) => tracing::debug!("Copied output to clipboard via {}", clipboard.describe()),
        Err(e) => tracing::debug!("Clipboard copy skipped: {:#}", e),
    }
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct FailingClipboard;

    impl Clipboard for FailingClipboard {
        fn copy(&self, _text: &str) -> Result<()> {
            bail!("no display")
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        copied: RefCell<Vec<String>>,
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&self, text: &str) -> Result<()> {
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn describe(&self) -> String {
            "recording".to_string()
        }
    }

    #[cfg(unix)]
    fn fake_tool(dir: &Path, name: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\ncat > /dev/null\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn platform_from_os() {
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("freebsd"), Platform::Other);
    }

    #[test]
    fn macos_uses_pbcopy() {
        assert_eq!(clipboard_for(Platform::MacOs, &[]).describe(), "pbcopy");
    }

    #[test]
    fn windows_uses_clip() {
        assert_eq!(clipboard_for(Platform::Windows, &[]).describe(), "clip");
    }

    #[test]
    fn other_platforms_do_nothing() {
        assert_eq!(clipboard_for(Platform::Other, &[]).describe(), "none");
    }

    #[test]
    fn linux_without_tools_does_nothing() {
        let empty = TempDir::new().unwrap();
        let clipboard = clipboard_for(Platform::Linux, &[empty.path().to_path_buf()]);

        assert_eq!(clipboard.describe(), "none");
    }

    #[cfg(unix)]
    #[test]
    fn linux_prefers_xclip() {
        let dir = TempDir::new().unwrap();
        fake_tool(dir.path(), "xsel");
        fake_tool(dir.path(), "xclip");

        let clipboard = clipboard_for(Platform::Linux, &[dir.path().to_path_buf()]);

        assert_eq!(clipboard.describe(), "xclip -selection clipboard");
    }

    #[cfg(unix)]
    #[test]
    fn linux_falls_back_to_xsel() {
        let dir = TempDir::new().unwrap();
        fake_tool(dir.path(), "xsel");

        let clipboard = clipboard_for(Platform::Linux, &[dir.path().to_path_buf()]);

        assert_eq!(clipboard.describe(), "xsel --clipboard --input");
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_files_are_not_tools() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("xclip"), "not a program").unwrap();

        assert!(resolve_tool_path("xclip", &[dir.path().to_path_buf()]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn command_clipboard_pipes_text() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("copied.txt");
        let script = format!("cat > '{}'", target.display());

        let clipboard = CommandClipboard::new("sh", &["-c", script.as_str()]);
        clipboard.copy("{\"A\": \"1\"}").unwrap();

        assert_eq!(std::fs::read_to_string(target).unwrap(), "{\"A\": \"1\"}");
    }

    #[cfg(unix)]
    #[test]
    fn command_clipboard_reports_non_zero_exit() {
        let clipboard = CommandClipboard::new("false", &[]);

        assert!(clipboard.copy("text").is_err());
    }

    #[test]
    fn missing_program_is_an_error() {
        let clipboard = CommandClipboard::new("env2json-no-such-clipboard-tool", &[]);

        assert!(clipboard.copy("text").is_err());
    }

    #[test]
    fn best_effort_swallows_failures() {
        copy_best_effort(&FailingClipboard, "text");
        copy_best_effort(&CommandClipboard::new("env2json-no-such-clipboard-tool", &[]), "text");
    }

    #[test]
    fn best_effort_copies_text() {
        let clipboard = RecordingClipboard::default();

        copy_best_effort(&clipboard, "{}");

        assert_eq!(*clipboard.copied.borrow(), ["{}"]);
    }

    #[test]
    fn no_clipboard_always_succeeds() {
        assert!(NoClipboard.copy("anything").is_ok());
    }
}
