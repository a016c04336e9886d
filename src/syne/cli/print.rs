use colored::Colorize;
use std::path::PathBuf;
use syne::api::{CmdMessage, MessageLevel};
use syne::commands::CmdResult;

const KEY_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_notes(notes: &[PathBuf]) {
    for note in notes {
        println!("{}", note.display());
    }
}

pub(super) fn print_settings(result: &CmdResult) {
    for line in format_settings(result) {
        println!("{}", line);
    }
}

fn format_settings(result: &CmdResult) -> Vec<String> {
    let mut lines: Vec<String> = result
        .settings
        .iter()
        .map(|(key, value)| format!("{:<width$}: {}", key, value, width = KEY_WIDTH))
        .collect();
    if let Some(file) = &result.config_file {
        lines.push(format!(
            "{:<width$}: {}",
            "config file",
            file.display(),
            width = KEY_WIDTH
        ));
    }
    lines
}
