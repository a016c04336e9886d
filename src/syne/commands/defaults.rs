use crate::commands::{CmdMessage, CmdResult};
use crate::config::SyneConfig;
use std::path::Path;

/// Reports the effective settings and where they were read from.
pub fn run(config: &SyneConfig, config_file: Option<&Path>) -> CmdResult {
    let mut result = CmdResult::default()
        .with_settings(config.entries())
        .with_config_file(config_file.map(Path::to_path_buf));

    match config_file {
        Some(file) if file.is_file() => {}
        Some(file) => result.add_message(CmdMessage::info(format!(
            "{} not found, using built-in defaults",
            file.display()
        ))),
        None => result.add_message(CmdMessage::warning(
            "No configuration directory available, using built-in defaults",
        )),
    }
    result
}
