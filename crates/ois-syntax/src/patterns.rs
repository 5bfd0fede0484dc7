//! Pattern compilation.
//!
//! Builds every matcher used by the tokenizer and the argument parser:
//!
//! - the directive matcher: `{prefix}name-arg-arg...` bounded by whitespace
//! - the single-argument matcher with `name`, `value` and `unit` captures
//! - one anchored checker per value kind
//!
//! All matchers are built on the `regex` crate, so every search runs in time
//! linear in the haystack regardless of how the argument alternation nests.

use regex::Regex;

use crate::value::ValueKind;

/// Directive name: lowercase words joined by single hyphens.
const DIRECTIVE_NAME: &str = r"[a-z]+(?:-[a-z]+)*";

const NUMERIC_VALUE: &str = r"[0-9.]+";

/// Double-quoted, single-quoted and brace-delimited text with backslash escapes.
const STRING_VALUE: &str = r#"(?:"(?:[^"\\]|\\(?s:.))*"|'(?:[^'\\]|\\(?s:.))*'|\{(?:[^}\\]|\\(?s:.))*\})"#;

/// Functional color: `#(255, 0, 0, .5)` or `#(255 0 0 | .5)`.
const RGBA_COLOR_VALUE: &str = r"#\([0-9 .,|]*\)";

const HEX_COLOR_VALUE: &str = r"#[0-9a-fA-F]*";

/// Raw CSS passed through as is: `&--my-var&`.
const RAW_VALUE: &str = r"&(?:[^&\\]|\\(?s:.))*&";

const ARG_UNIT: &str = r"[a-z]*%?";

/// Characters with a meaning inside the directive grammar.
const RESERVED_PREFIX_CHARS: &[char] = &['-', '#', '&', '"', '\'', '{', '}', '(', ')', '\\'];

/// Error raised when a pattern bundle cannot be built.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The prefix would collide with the directive grammar.
    #[error("Invalid prefix {prefix:?}: {reason}")]
    InvalidPrefix {
        /// The rejected prefix.
        prefix: String,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// A matcher failed to compile.
    #[error("Pattern compile error: {0}")]
    Regex(#[from] regex::Error),
}

/// Compiled matchers for one prefix configuration.
///
/// Build it once and share it by reference; it is immutable and can be used
/// from several threads at the same time.
///
/// # Example
///
/// ```
/// use ois_syntax::StylePatterns;
///
/// let patterns = StylePatterns::new(Some(".")).unwrap();
/// let directives = patterns.parse("photo .w-100px h-200px");
/// assert_eq!(directives.len(), 1);
/// assert_eq!(directives[0].name, "w");
/// ```
#[derive(Debug, Clone)]
pub struct StylePatterns {
    prefix: Option<String>,
    directive: Regex,
    arg: Regex,
    numeric_check: Regex,
    string_check: Regex,
    hex_color_check: Regex,
    rgba_color_check: Regex,
    raw_check: Regex,
}

impl StylePatterns {
    /// Compile the matchers for the given prefix.
    ///
    /// An empty prefix is the same as no prefix: directives are then
    /// recognized at the start of the text or after whitespace. With a
    /// prefix, a directive must be written right after it (`.w-100`), and the
    /// prefix itself must start at such a boundary.
    pub fn new(prefix: Option<&str>) -> Result<Self, PatternError> {
        let prefix = prefix.filter(|p| !p.is_empty());
        if let Some(prefix) = prefix {
            validate_prefix(prefix)?;
        }

        let escaped_prefix = prefix.map(regex::escape).unwrap_or_default();
        let directive = format!(
            r"(?:\A|\s){escaped_prefix}(?P<name>{DIRECTIVE_NAME})(?P<args>(?:{})+)?(?:\s|\z)",
            arg_pattern(false)
        );

        Ok(Self {
            prefix: prefix.map(str::to_owned),
            directive: Regex::new(&directive)?,
            arg: Regex::new(&arg_pattern(true))?,
            numeric_check: anchored(NUMERIC_VALUE)?,
            string_check: anchored(STRING_VALUE)?,
            hex_color_check: anchored(HEX_COLOR_VALUE)?,
            rgba_color_check: anchored(RGBA_COLOR_VALUE)?,
            raw_check: anchored(RAW_VALUE)?,
        })
    }

    /// The configured prefix, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Parse all directives in `text`.
    ///
    /// Shorthand for [`parse_directives`](crate::parse_directives).
    #[must_use]
    pub fn parse(&self, text: &str) -> Vec<crate::Directive> {
        crate::parse_directives(text, self)
    }

    /// Infer the kind of an argument value.
    ///
    /// Checkers run in the order numeric, string, color, raw. Returns `None`
    /// unless exactly one of them accepts the value.
    #[must_use]
    pub fn classify(&self, value: &str) -> Option<ValueKind> {
        let checks = [
            (ValueKind::Numeric, self.numeric_check.is_match(value)),
            (ValueKind::String, self.string_check.is_match(value)),
            (ValueKind::Color, self.is_color(value)),
            (ValueKind::Raw, self.raw_check.is_match(value)),
        ];

        let mut matching = checks
            .into_iter()
            .filter_map(|(kind, matched)| matched.then_some(kind));
        match (matching.next(), matching.next()) {
            (Some(kind), None) => Some(kind),
            _ => None,
        }
    }

    pub(crate) fn directive(&self) -> &Regex {
        &self.directive
    }

    pub(crate) fn arg(&self) -> &Regex {
        &self.arg
    }

    /// Whether the value uses the `#(r, g, b[, a])` color form.
    pub(crate) fn is_rgba_color(&self, value: &str) -> bool {
        self.rgba_color_check.is_match(value)
    }

    fn is_color(&self, value: &str) -> bool {
        self.rgba_color_check.is_match(value) || self.hex_color_check.is_match(value)
    }
}

/// Build the single-argument pattern: `-{name}{value}{unit}`.
///
/// The directive matcher embeds the unnamed variant inside a repetition; the
/// named variant is used to split an argument tail.
fn arg_pattern(named: bool) -> String {
    let group = |name: &str| {
        if named {
            format!("?P<{name}>")
        } else {
            "?:".to_owned()
        }
    };
    format!(
        "-({}[a-z]*)({}{NUMERIC_VALUE}|{STRING_VALUE}|{RGBA_COLOR_VALUE}|{HEX_COLOR_VALUE}|{RAW_VALUE})({}{ARG_UNIT})",
        group("name"),
        group("value"),
        group("unit"),
    )
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\A(?:{pattern})\z"))
}

/// Reject prefixes that could never be followed by a directive.
fn validate_prefix(prefix: &str) -> Result<(), PatternError> {
    let reason = if prefix.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else if prefix.contains(RESERVED_PREFIX_CHARS) {
        Some("must not contain any of - # & \" ' { } ( ) \\")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(PatternError::InvalidPrefix {
            prefix: prefix.to_owned(),
            reason,
        }),
        None => Ok(()),
    }
}
