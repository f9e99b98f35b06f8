//! Token substitution engine for stub templates.
//! Replaces `$TOKEN$` placeholders in stub text with caller-supplied values.

use indexmap::IndexMap;

/// An ordered set of named replacement values.
///
/// Keys are upper-cased on insertion so lookups are case-insensitive by
/// convention, and entries are matched in insertion order. A fresh map is
/// built for every generation call; nothing is shared between runs.
#[derive(Debug, Default, Clone)]
pub struct Substitutions {
    entries: IndexMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Inserts a replacement value under the upper-cased key.
    /// Re-inserting a key overwrites its value but keeps its original slot.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into().to_uppercase(), value.into());
    }

    /// Builder-style variant of [`Substitutions::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Renders a stub template by literal placeholder replacement.
///
/// The template is scanned once from left to right. At each `$` the
/// substitution entries are tried in insertion order; the first key whose
/// `$KEY$` token matches is replaced with its value and the scan resumes
/// after the token. Replacement values are emitted verbatim and never
/// re-scanned, so a value containing `$TOKEN$`-shaped text or a stray `$`
/// is inserted as-is. No escaping mechanism exists.
///
/// This function never fails: unmatched placeholders are left untouched
/// and unused substitution keys are silently ignored.
pub fn render(template: &str, substitutions: &Substitutions) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(start) = rest.find('$') {
        output.push_str(&rest[..start]);
        let tail = &rest[start..];
        let bytes = tail.as_bytes();

        for (key, value) in substitutions.iter() {
            // Token shape is `$` + key + `$`.
            let token_len = key.len() + 2;
            if bytes.len() >= token_len
                && bytes[token_len - 1] == b'$'
                && &bytes[1..token_len - 1] == key.as_bytes()
            {
                output.push_str(value);
                rest = &tail[token_len..];
                continue 'scan;
            }
        }

        output.push('$');
        rest = &tail[1..];
    }

    output.push_str(rest);
    output
}
