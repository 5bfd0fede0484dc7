//! Argument value kinds and their normalization.

use std::fmt;

use crate::patterns::StylePatterns;

/// Kind of an argument value, inferred from its shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueKind {
    /// Digits and decimal points, optionally followed by a unit: `100px`.
    Numeric,
    /// Quoted or brace-delimited text: `"Hello"`, `'Hello'`, `{Hello}`.
    String,
    /// Hex `#fff` or functional `#(255, 0, 0, .5)` color.
    Color,
    /// Raw CSS between ampersands: `&--my-var&`.
    Raw,
}

impl ValueKind {
    /// Name given to an argument of this kind when none is written.
    ///
    /// Distinct defaults let several unnamed arguments coexist, as in
    /// `border-1px-#fff`.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::Numeric => "num",
            Self::String => "str",
            Self::Color => "col",
            Self::Raw => "arg",
        }
    }

    /// Lowercase kind name, as used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::String => "string",
            Self::Color => "color",
            Self::Raw => "raw",
        }
    }

    /// Rewrite a raw value into its canonical textual form.
    pub(crate) fn normalize(self, value: &str, patterns: &StylePatterns) -> String {
        match self {
            Self::Numeric => value.to_owned(),
            Self::String => quote(&unescape(strip_delimiters(value))),
            Self::Color if patterns.is_rgba_color(value) => rgba(value),
            Self::Color => value.to_owned(),
            Self::Raw => unescape(strip_delimiters(value)),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the text from a canonical quoted string.
pub(crate) fn unquote(value: &str) -> String {
    unescape(strip_delimiters(value))
}

/// Drop the first and last character (the delimiters are always ASCII).
fn strip_delimiters(value: &str) -> &str {
    value.get(1..value.len().saturating_sub(1)).unwrap_or_default()
}

/// Replace every `\x` escape with `x`.
fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // Trailing backslash is kept literally
            result.push(chars.next().unwrap_or('\\'));
        } else {
            result.push(c);
        }
    }
    result
}

/// Wrap text in double quotes, escaping `\` and `"`.
///
/// The output is a valid CSS string and parses back to the same text.
fn quote(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            result.push('\\');
        }
        result.push(c);
    }
    result.push('"');
    result
}

/// `#(255, 0, 0, .5)` becomes `rgba(255, 0, 0, .5)`; a `|` alpha separator
/// becomes `/`.
fn rgba(value: &str) -> String {
    let channels = value
        .get(2..value.len().saturating_sub(1))
        .unwrap_or_default();
    format!("rgba({})", channels.replace('|', "/"))
}
