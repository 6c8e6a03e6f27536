//! The template configuration and the render algorithm.
//!
//! A template is three fragments: a `start` emitted once before all records,
//! a per-record `body`, and an `end` emitted once after. The body may contain
//! the placeholder tokens `%PARAMETER%`, `%UNIT%` and `%VALUE%`; the whole
//! assembled output may contain `%N%`, which becomes a newline at the very
//! end of rendering.

use crate::measurement::Measurement;
use serde::{Deserialize, Serialize};

/// Placeholder replaced with the record's parameter name.
pub const TOKEN_PARAMETER: &str = "%PARAMETER%";
/// Placeholder replaced with the record's unit.
pub const TOKEN_UNIT: &str = "%UNIT%";
/// Placeholder replaced with the record's value.
pub const TOKEN_VALUE: &str = "%VALUE%";
/// Placeholder replaced with a newline after the output is fully assembled.
pub const TOKEN_NEWLINE: &str = "%N%";

/// The three configurable template fragments.
///
/// Any fragment may be the empty string. The serialized form is a JSON object
/// with the keys `template_start`, `template_end` and `template_data`; a
/// missing key deserializes to an empty fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Emitted once, before all records.
    #[serde(rename = "template_start", default)]
    pub start: String,

    /// Emitted once, after all records.
    #[serde(rename = "template_end", default)]
    pub end: String,

    /// Instantiated once per record, with placeholders substituted.
    #[serde(rename = "template_data", default)]
    pub body: String,
}

impl Default for TemplateConfig {
    /// The factory template, used when no persisted configuration exists.
    fn default() -> Self {
        TemplateConfig {
            start: String::new(),
            end: String::new(),
            body: r#"{name="%PARAMETER%",type="%UNIT%"}%VALUE%%N%"#.to_string(),
        }
    }
}

impl TemplateConfig {
    /// Render `records` through this template.
    ///
    /// Substitution is literal, case-sensitive, and single-pass per token, in
    /// the fixed order PARAMETER, UNIT, VALUE. Because each pass scans the
    /// already-substituted text, a value that itself contains a later token
    /// is rewritten by that later pass; in particular a value equal to `%N%`
    /// ends up as a newline. Specified behavior, kept for compatibility with
    /// existing templates.
    ///
    /// An empty record sequence is valid and yields `start ++ end` with
    /// `%N%` resolved.
    pub fn render(&self, records: &[Measurement]) -> String {
        let mut output = self.start.clone();
        for record in records {
            let line = self
                .body
                .replace(TOKEN_PARAMETER, &record.parameter)
                .replace(TOKEN_UNIT, &record.unit)
                .replace(TOKEN_VALUE, &record.value);
            output.push_str(&line);
        }
        output.push_str(&self.end);
        // Newline resolution is global and final: it also rewrites any %N%
        // contributed by start, end or substituted values.
        output.replace(TOKEN_NEWLINE, "\n")
    }
}
