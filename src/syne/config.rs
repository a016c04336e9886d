//! # Configuration
//!
//! Syne reads a single JSON file, `config.json`. The file is located by, in
//! priority order:
//!
//! 1. `--config <FILE>` on the command line
//! 2. the `SYNE_CONFIG` environment variable
//! 3. the OS-appropriate config directory (via the `directories` crate)
//!
//! A missing file is not an error: every key has a built-in fallback.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `pwd` | `.` | Root directory all notes live under; a leading `~` is the home directory |
//! | `path` | `General` | Folder used when no path is given |
//! | `extension` | `txt` | Extension used when the filename has none |
//! | `editor` | `$EDITOR`, `$VISUAL`, then `vi` | Command that opens the note |
//! | `path_alias` | unset | Leading character expanded to `path` |
//! | `max_chars` | unset | Optional `{ "path", "filename", "extension" }` limits |
//!
//! Empty strings are treated as if the key were absent.

use crate::error::{Result, SyneError};
use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_ENV: &str = "SYNE_CONFIG";

const DEFAULT_PWD: &str = ".";
const DEFAULT_PATH: &str = "General";
const DEFAULT_EXTENSION: &str = "txt";

#[cfg(windows)]
const FALLBACK_EDITOR: &str = "notepad";
#[cfg(not(windows))]
const FALLBACK_EDITOR: &str = "vi";

/// Optional per-field truncation limits.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct MaxChars {
    pub path: Option<usize>,
    pub filename: Option<usize>,
    pub extension: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SyneConfig {
    #[serde(default = "default_pwd")]
    pub pwd: PathBuf,

    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub editor: Option<String>,

    #[serde(default)]
    pub path_alias: Option<String>,

    #[serde(default)]
    pub max_chars: MaxChars,
}

fn default_pwd() -> PathBuf {
    PathBuf::from(DEFAULT_PWD)
}

fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for SyneConfig {
    fn default() -> Self {
        Self {
            pwd: default_pwd(),
            path: default_path(),
            extension: default_extension(),
            editor: None,
            path_alias: None,
            max_chars: MaxChars::default(),
        }
    }
}

impl SyneConfig {
    /// Parses a config file, or returns defaults if it doesn't exist.
    ///
    /// The result is normalized: empty values fall back to defaults, the
    /// extension loses its leading dot and `pwd` is made absolute.
    pub fn load<P: AsRef<Path>>(config_file: P) -> Result<Self> {
        let config_file = config_file.as_ref();

        let config = if config_file.exists() {
            debug!(file = %config_file.display(), "loading configuration");
            let content = fs::read_to_string(config_file).map_err(|e| {
                SyneError::Config(format!("cannot read {}: {}", config_file.display(), e))
            })?;
            Self::from_json(&content)
                .map_err(|e| SyneError::Config(format!("{}: {}", config_file.display(), e)))?
        } else {
            debug!(file = %config_file.display(), "no configuration file, using defaults");
            Self::default()
        };

        config.normalized()
    }

    fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Applies the fallback rules and checks the required defaults.
    pub fn normalized(mut self) -> Result<Self> {
        if self.pwd.as_os_str().is_empty() {
            self.pwd = default_pwd();
        }
        if self.path.is_empty() {
            self.path = default_path();
        }
        if self.extension.is_empty() {
            self.extension = default_extension();
        }
        self.extension = self
            .extension
            .strip_prefix('.')
            .unwrap_or(&self.extension)
            .to_string();
        if self.extension.is_empty() {
            return Err(SyneError::Config(
                "the default extension cannot be empty".to_string(),
            ));
        }
        if self.editor.as_deref().is_some_and(|e| e.trim().is_empty()) {
            self.editor = None;
        }
        if self.path_alias.as_deref().is_some_and(str::is_empty) {
            self.path_alias = None;
        }

        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        self.pwd = expand_home(&self.pwd, home.as_deref());
        self.pwd = std::path::absolute(&self.pwd).map_err(|e| {
            SyneError::Config(format!("invalid pwd '{}': {}", self.pwd.display(), e))
        })?;

        Ok(self)
    }

    /// The editor command: configured value, then `$EDITOR`, then `$VISUAL`,
    /// then a platform fallback.
    pub fn editor(&self) -> String {
        resolve_editor(self.editor.as_deref(), |key| env::var(key).ok())
    }

    /// Settings as displayed by `syne -d`.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("pwd", self.pwd.display().to_string()),
            ("path", self.path.clone()),
            ("extension", self.extension.clone()),
            ("editor", self.editor()),
        ];
        if let Some(alias) = &self.path_alias {
            entries.push(("path_alias", alias.clone()));
        }
        let limits = [
            ("max_path", self.max_chars.path),
            ("max_filename", self.max_chars.filename),
            ("max_extension", self.max_chars.extension),
        ];
        for (key, limit) in limits {
            if let Some(limit) = limit {
                entries.push((key, limit.to_string()));
            }
        }
        entries
    }
}

fn resolve_editor<F>(configured: Option<&str>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(editor) = configured {
        return editor.to_string();
    }
    for key in ["EDITOR", "VISUAL"] {
        if let Some(editor) = lookup(key).filter(|e| !e.trim().is_empty()) {
            return editor;
        }
    }
    FALLBACK_EDITOR.to_string()
}

/// Replaces a leading `~` component with `home`. Paths like `~user/x` or
/// `notes/~` are left alone.
fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Where the config file is looked up when none is given explicitly.
pub fn default_config_file() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("com", "syne", "syne").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SyneConfig::default();
        assert_eq!(config.pwd, PathBuf::from("."));
        assert_eq!(config.path, "General");
        assert_eq!(config.extension, "txt");
        assert_eq!(config.path_alias, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = SyneConfig::load(temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config.path, "General");
        assert!(config.pwd.is_absolute());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join(CONFIG_FILENAME);
        fs::write(&file, r#"{"path": "Notes", "path_alias": "~"}"#).unwrap();

        let config = SyneConfig::load(&file).unwrap();
        assert_eq!(config.path, "Notes");
        assert_eq!(config.path_alias.as_deref(), Some("~"));
        assert_eq!(config.extension, "txt");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &file,
            r#"{"pwd": "", "path": "", "extension": "", "editor": " ", "path_alias": ""}"#,
        )
        .unwrap();

        let config = SyneConfig::load(&file).unwrap();
        assert_eq!(config.path, "General");
        assert_eq!(config.extension, "txt");
        assert_eq!(config.editor, None);
        assert_eq!(config.path_alias, None);
    }

    #[test]
    fn test_extension_leading_dot_is_stripped() {
        let config = SyneConfig {
            extension: ".md".to_string(),
            ..Default::default()
        }
        .normalized()
        .unwrap();
        assert_eq!(config.extension, "md");
    }

    #[test]
    fn test_bare_dot_extension_is_a_config_error() {
        let result = SyneConfig {
            extension: ".".to_string(),
            ..Default::default()
        }
        .normalized();
        assert!(matches!(result, Err(SyneError::Config(_))));
    }

    #[test]
    fn test_malformed_json_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join(CONFIG_FILENAME);
        fs::write(&file, "{ not json").unwrap();

        let result = SyneConfig::load(&file);
        assert!(matches!(result, Err(SyneError::Config(_))));
    }

    #[test]
    fn test_max_chars_parsed() {
        let config = SyneConfig::from_json(r#"{"max_chars": {"filename": 32}}"#).unwrap();
        assert_eq!(config.max_chars.filename, Some(32));
        assert_eq!(config.max_chars.path, None);
    }

    #[test]
    fn test_expand_home_leading_tilde() {
        let home = Path::new("/home/ana");
        assert_eq!(
            expand_home(Path::new("~/Documents/notes"), Some(home)),
            PathBuf::from("/home/ana/Documents/notes")
        );
        assert_eq!(expand_home(Path::new("~"), Some(home)), PathBuf::from("/home/ana"));
    }

    #[test]
    fn test_expand_home_leaves_other_paths() {
        let home = Path::new("/home/ana");
        assert_eq!(
            expand_home(Path::new("notes/~"), Some(home)),
            PathBuf::from("notes/~")
        );
        assert_eq!(
            expand_home(Path::new("~ana/notes"), Some(home)),
            PathBuf::from("~ana/notes")
        );
        assert_eq!(
            expand_home(Path::new("~/notes"), None),
            PathBuf::from("~/notes")
        );
    }

    #[test]
    fn test_load_expands_tilde_in_pwd() {
        let Some(dirs) = BaseDirs::new() else {
            return;
        };
        let temp = TempDir::new().unwrap();
        let file = temp.path().join(CONFIG_FILENAME);
        fs::write(&file, r#"{"pwd": "~/Documents/notes"}"#).unwrap();

        let config = SyneConfig::load(&file).unwrap();
        assert_eq!(config.pwd, dirs.home_dir().join("Documents/notes"));
        assert!(!config.pwd.components().any(|c| c.as_os_str() == "~"));
    }

    #[test]
    fn test_resolve_editor_prefers_configured() {
        let editor = resolve_editor(Some("code -w"), |_| Some("nano".to_string()));
        assert_eq!(editor, "code -w");
    }

    #[test]
    fn test_resolve_editor_env_order() {
        let editor = resolve_editor(None, |key| match key {
            "EDITOR" => None,
            "VISUAL" => Some("emacs".to_string()),
            _ => None,
        });
        assert_eq!(editor, "emacs");

        let editor = resolve_editor(None, |key| match key {
            "EDITOR" => Some("nano".to_string()),
            _ => Some("emacs".to_string()),
        });
        assert_eq!(editor, "nano");
    }

    #[test]
    fn test_resolve_editor_fallback() {
        let editor = resolve_editor(None, |_| Some(String::new()));
        assert_eq!(editor, FALLBACK_EDITOR);
    }

    #[test]
    fn test_entries_include_optional_keys() {
        let config = SyneConfig {
            editor: Some("true".into()),
            path_alias: Some("~".into()),
            max_chars: MaxChars {
                filename: Some(10),
                ..Default::default()
            },
            ..Default::default()
        };
        let entries = config.entries();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["pwd", "path", "extension", "editor", "path_alias", "max_filename"]
        );
        assert!(entries.contains(&("editor", "true".to_string())));
    }
}
