use clap::Parser;
use std::path::PathBuf;
use syne::model::RawRequest;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "syne", bin_name = "syne", version = get_version())]
#[command(about = "Note making facilitator", long_about = None)]
pub struct Cli {
    /// Filename with or without extension
    #[arg(value_name = "FILE")]
    pub filename: Option<String>,

    /// Folder for the note, relative to pwd ("." keeps the default)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Extension of the note
    #[arg(value_name = "EXTENSION")]
    pub extension: Option<String>,

    /// List all notes
    #[arg(short, long, conflicts_with = "filename")]
    pub list: bool,

    /// Show default settings
    #[arg(short = 'd', long = "default")]
    pub show_defaults: bool,

    /// Configuration file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

impl Cli {
    /// Empty positional arguments count as not given.
    pub fn raw_request(&self) -> RawRequest {
        RawRequest {
            filename: self.filename.clone(),
            path: non_empty(&self.path),
            extension: non_empty(&self.extension),
            list_notes: self.list,
            show_defaults: self.show_defaults,
        }
    }
}
