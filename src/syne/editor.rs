use crate::error::{Result, SyneError};
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::info;

/// Something that can open a file for the user.
///
/// The CLI uses [`SystemEditor`]; tests substitute a recorder so no real
/// process is spawned.
pub trait Launcher {
    fn launch(&self, editor: &str, path: &Path) -> Result<ExitStatus>;
}

/// Spawns the configured editor command and waits for it to exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEditor;

impl Launcher for SystemEditor {
    fn launch(&self, editor: &str, path: &Path) -> Result<ExitStatus> {
        let mut parts = editor.split_whitespace();
        let program = parts.next().ok_or_else(|| SyneError::EditorLaunch {
            editor: editor.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty editor command"),
        })?;

        info!(editor = %editor, path = %path.display(), "launching editor");
        Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|source| SyneError::EditorLaunch {
                editor: editor.to_string(),
                source,
            })
    }
}
