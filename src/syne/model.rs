use std::fmt;
use std::path::{Path, PathBuf};

/// The three user-facing components of a note location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Path,
    Filename,
    Extension,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Path => "path",
            Field::Filename => "filename",
            Field::Extension => "extension",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user typed, before any defaulting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRequest {
    pub filename: Option<String>,
    pub path: Option<String>,
    pub extension: Option<String>,
    pub list_notes: bool,
    pub show_defaults: bool,
}

impl RawRequest {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }
}

/// Concrete field values after defaulting and alias expansion.
///
/// `extension` never carries a leading dot and `filename` never carries
/// the extension it was split from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFields {
    pub path: String,
    pub filename: String,
    pub extension: String,
}

impl ResolvedFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Path => &self.path,
            Field::Filename => &self.filename,
            Field::Extension => &self.extension,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Path => &mut self.path,
            Field::Filename => &mut self.filename,
            Field::Extension => &mut self.extension,
        }
    }
}

/// A validated note location, ready for the filesystem and the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRequest {
    pub fields: ResolvedFields,
    pub directory: PathBuf,
    pub target_path: PathBuf,
}

impl NoteRequest {
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}
