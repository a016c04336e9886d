use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Lists every file under `pwd`, relative to it, in traversal order.
///
/// Symlinks are followed. Entries that can't be read are logged and skipped.
pub fn run(pwd: &Path) -> Result<CmdResult> {
    if !pwd.is_dir() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "No notes yet: {} does not exist",
            pwd.display()
        )));
        return Ok(result);
    }

    let mut notes = Vec::new();
    let walker = WalkDir::new(pwd)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(pwd) {
            notes.push(relative.to_path_buf());
        }
    }

    let mut result = CmdResult::default().with_listed_notes(notes);
    if result.listed_notes.is_empty() {
        result.add_message(CmdMessage::info("No notes found."));
    }
    Ok(result)
}
