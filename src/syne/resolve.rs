//! Turns raw arguments into concrete path, filename and extension values.

use crate::config::SyneConfig;
use crate::model::{RawRequest, ResolvedFields};

/// Path arguments that mean "use the configured default folder". They let a
/// user give an extension without naming a folder: `syne todo . md`.
const DEFAULT_PATH_TOKENS: &[&str] = &[".", "./", "-", "*", "/"];

pub fn resolve(raw: &RawRequest, config: &SyneConfig) -> ResolvedFields {
    let raw_filename = raw.filename.as_deref().unwrap_or_default();

    let (filename, extension) = match raw.extension.as_deref() {
        Some(extension) => (
            raw_filename
                .strip_suffix('.')
                .unwrap_or(raw_filename)
                .to_string(),
            extension.to_string(),
        ),
        None => match split_extension(raw_filename) {
            (stem, Some(extension)) => (stem.to_string(), extension.to_string()),
            (stem, None) => (stem.to_string(), config.extension.clone()),
        },
    };

    let extension = extension
        .strip_prefix('.')
        .map(str::to_string)
        .unwrap_or(extension);

    ResolvedFields {
        path: resolve_path(raw.path.as_deref(), config),
        filename,
        extension,
    }
}

fn resolve_path(raw_path: Option<&str>, config: &SyneConfig) -> String {
    let Some(raw_path) = raw_path.filter(|p| !DEFAULT_PATH_TOKENS.contains(p)) else {
        return config.path.clone();
    };

    match config.path_alias.as_deref() {
        Some(alias) => expand_alias(raw_path, alias, &config.path),
        None => raw_path.to_string(),
    }
}

/// Replaces the first character of `path` with `replacement` when that
/// character is exactly `alias`. Aliases longer than one character never match.
fn expand_alias(path: &str, alias: &str, replacement: &str) -> String {
    let mut chars = path.chars();
    match chars.next() {
        Some(first) if alias.chars().eq(std::iter::once(first)) => {
            format!("{}{}", replacement, chars.as_str())
        }
        _ => path.to_string(),
    }
}

/// Splits `name.ext` at the last dot of the final path component.
///
/// Leading dots don't start an extension (`.bashrc` has none), and a trailing
/// dot yields no extension but is still removed from the stem.
fn split_extension(filename: &str) -> (&str, Option<&str>) {
    let base_start = filename.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let base = &filename[base_start..];
    let leading_dots = base.len() - base.trim_start_matches('.').len();

    match base[leading_dots..].rfind('.') {
        Some(i) => {
            let dot = base_start + leading_dots + i;
            let extension = &filename[dot + 1..];
            let stem = &filename[..dot];
            if extension.is_empty() {
                (stem, None)
            } else {
                (stem, Some(extension))
            }
        }
        None => (filename, None),
    }
}
