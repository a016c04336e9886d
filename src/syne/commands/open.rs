use crate::commands::{CmdMessage, CmdResult};
use crate::editor::Launcher;
use crate::error::{Result, SyneError};
use crate::model::NoteRequest;
use std::fs::{self, OpenOptions};
use tracing::debug;

/// Makes sure the note exists on disk, then opens it in `editor`.
///
/// Directories are created as needed and the placeholder file is only
/// created when missing; an existing note is never truncated. Nothing is
/// rolled back if a later step fails.
pub fn run<L: Launcher>(request: NoteRequest, editor: &str, launcher: &L) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !request.directory.is_dir() {
        debug!(dir = %request.directory.display(), "creating note directory");
        fs::create_dir_all(&request.directory).map_err(|source| SyneError::Filesystem {
            path: request.directory.clone(),
            source,
        })?;
        result.add_message(CmdMessage::info(format!(
            "Created folder {}",
            request.directory.display()
        )));
    }

    let target = request.target_path();
    let existed = target.is_file();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(target)
        .map_err(|source| SyneError::Filesystem {
            path: target.to_path_buf(),
            source,
        })?;

    if existed {
        result.add_message(CmdMessage::info(format!("Opening {}", target.display())));
    } else {
        result.add_message(CmdMessage::success(format!("Created {}", target.display())));
    }

    let status = launcher.launch(editor, target)?;
    if !status.success() {
        result.add_message(CmdMessage::warning(format!(
            "Editor '{}' exited with {}",
            editor, status
        )));
    }

    Ok(result.with_request(request))
}
