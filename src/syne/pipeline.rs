use crate::config::SyneConfig;
use crate::error::Result;
use crate::model::{Field, NoteRequest, RawRequest, ResolvedFields};
use crate::resolve::resolve;
use crate::sanitize::sanitize_field;
use crate::validation::{RuleSet, default_rules, validate};
use tracing::debug;

/// Resolves, sanitizes and validates a [`RawRequest`] into a [`NoteRequest`].
///
/// Building a request never touches the filesystem.
#[derive(Debug, Clone)]
pub struct NoteRequestPipeline<'a> {
    config: &'a SyneConfig,
    rules: RuleSet,
}

impl<'a> NoteRequestPipeline<'a> {
    /// Uses the default rules plus any `max_chars` limits from `config`.
    pub fn new(config: &'a SyneConfig) -> Self {
        let mut rules = default_rules();
        let limits = [
            (Field::Path, config.max_chars.path),
            (Field::Filename, config.max_chars.filename),
            (Field::Extension, config.max_chars.extension),
        ];
        for (field, limit) in limits {
            if let (Some(limit), Some(rule)) = (limit, rules.rule_mut(field)) {
                rule.max_chars = Some(limit);
            }
        }
        Self { config, rules }
    }

    pub fn with_rules(config: &'a SyneConfig, rules: RuleSet) -> Self {
        Self { config, rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn build_request(&self, raw: &RawRequest) -> Result<NoteRequest> {
        let resolved = resolve(raw, self.config);
        debug!(?resolved, "resolved note fields");

        let sanitized = ResolvedFields {
            path: sanitize_field(Field::Path, &resolved.path),
            filename: sanitize_field(Field::Filename, &resolved.filename),
            extension: sanitize_field(Field::Extension, &resolved.extension),
        };

        let fields = validate(sanitized, &self.rules)?;

        let directory = self.config.pwd.join(&fields.path);
        let target_path = directory.join(format!("{}.{}", fields.filename, fields.extension));
        debug!(target = %target_path.display(), "note request built");

        Ok(NoteRequest {
            fields,
            directory,
            target_path,
        })
    }
}
