//! Placeholder templating for advisory texts.
//!
//! Templates carry `{placeholder}` markers that report pages fill in at
//! render time with page-specific context such as the period label or the
//! data-source label. Substitution is strict: a marker the context cannot
//! resolve is a configuration error, never a silently unfilled string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;

/// Caller-supplied values for template placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateContext(BTreeMap<String, String>);

impl TemplateContext {
    pub fn new() -> Self {
        TemplateContext(BTreeMap::new())
    }

    /// Chainable insert for building a context inline.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Substitutes every `{placeholder}` marker from the context.
///
/// Placeholder names run from `{` to the next `}`. A stray `}` without an
/// opener is literal text.
///
/// # Edge Cases
/// - An unclosed `{` is a malformed template.
/// - A placeholder absent from the context is a configuration error, not
///   a runtime fallback.
pub fn render_template(template: &str, context: &TemplateContext) -> Result<String, ConfigError> {
    let mut rendered = String::with_capacity(template.len());
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch != '{' {
            rendered.push(ch);
            continue;
        }
        let mut name = String::new();
        let mut closed = false;
        for inner in chars.by_ref() {
            if inner == '}' {
                closed = true;
                break;
            }
            name.push(inner);
        }
        if !closed {
            return Err(ConfigError::MalformedTemplate {
                template: template.to_string(),
            });
        }
        match context.get(&name) {
            Some(value) => rendered.push_str(value),
            None => return Err(ConfigError::missing_placeholder(template, name)),
        }
    }
    Ok(rendered)
}

/// Checks template structure without resolving placeholders.
///
/// Registry validation runs this at startup so unclosed markers surface
/// before any page supplies a context.
pub fn validate_template(template: &str) -> Result<(), ConfigError> {
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch != '{' {
            continue;
        }
        let mut closed = false;
        for inner in chars.by_ref() {
            if inner == '}' {
                closed = true;
                break;
            }
        }
        if !closed {
            return Err(ConfigError::MalformedTemplate {
                template: template.to_string(),
            });
        }
    }
    Ok(())
}
