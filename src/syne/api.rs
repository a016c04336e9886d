//! # API Facade
//!
//! A thin layer between any UI and the command modules. It owns the loaded
//! [`SyneConfig`] and the editor [`Launcher`], builds note requests through the
//! pipeline and dispatches to `commands/*.rs`.
//!
//! Nothing here prints or exits; every method returns a [`CmdResult`].

use crate::commands::{self, CmdResult};
use crate::config::SyneConfig;
use crate::editor::Launcher;
use crate::error::Result;
use crate::model::RawRequest;
use crate::pipeline::NoteRequestPipeline;
use std::path::PathBuf;

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct SyneApi<L: Launcher> {
    config: SyneConfig,
    config_file: Option<PathBuf>,
    launcher: L,
}

impl<L: Launcher> SyneApi<L> {
    pub fn new(config: SyneConfig, config_file: Option<PathBuf>, launcher: L) -> Self {
        Self {
            config,
            config_file,
            launcher,
        }
    }

    /// Validates `raw` into a note location, prepares it on disk and opens it.
    /// Validation failures return before anything is written.
    pub fn open_note(&self, raw: &RawRequest) -> Result<CmdResult> {
        let request = NoteRequestPipeline::new(&self.config).build_request(raw)?;
        commands::open::run(request, &self.config.editor(), &self.launcher)
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::list::run(&self.config.pwd)
    }

    pub fn show_defaults(&self) -> CmdResult {
        commands::defaults::run(&self.config, self.config_file.as_deref())
    }
}
