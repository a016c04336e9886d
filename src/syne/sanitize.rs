//! Character filtering for user-supplied fields.
//!
//! Sanitizing never fails: unwanted characters are dropped, not replaced,
//! and the result may be empty. Rejecting empty values is the job of
//! [`crate::validation`].

use crate::model::Field;

pub const PATH_EXTRA: &[char] = &['/', '\\'];
pub const FILENAME_EXTRA: &[char] = &['_', '-', ' '];
pub const EXTENSION_EXTRA: &[char] = &['_', '-', ' '];

/// Keeps alphanumerics and `allowed_extra`, dropping everything else.
///
/// With `is_path`, leading non-alphanumeric characters are removed first so
/// the result cannot start with a separator or a `..` component.
pub fn sanitize(value: &str, allowed_extra: &[char], is_path: bool) -> String {
    let value = if is_path {
        value.trim_start_matches(|c: char| !c.is_alphanumeric())
    } else {
        value
    };

    value
        .chars()
        .filter(|c| c.is_alphanumeric() || allowed_extra.contains(c))
        .collect()
}

/// Sanitizes `value` with the character set belonging to `field`.
pub fn sanitize_field(field: Field, value: &str) -> String {
    match field {
        Field::Path => sanitize(value, PATH_EXTRA, true),
        Field::Filename => sanitize(value, FILENAME_EXTRA, false),
        Field::Extension => sanitize(value, EXTENSION_EXTRA, false),
    }
}
