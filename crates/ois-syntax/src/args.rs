//! Directive argument parsing.
//!
//! Splits an argument tail such as `-x10px-"text"-#fff` into typed
//! [`Argument`]s.

use regex::Captures;

use crate::directive::Argument;
use crate::patterns::StylePatterns;
use crate::value::ValueKind;

/// Named sub-matches of a single argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ArgMatch<'a> {
    /// Explicit label, empty when omitted.
    name: &'a str,
    value: &'a str,
    /// Unit suffix, empty when omitted.
    unit: &'a str,
}

impl<'a> ArgMatch<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        Some(Self {
            name: caps.name("name")?.as_str(),
            value: caps.name("value")?.as_str(),
            unit: caps.name("unit").map_or("", |m| m.as_str()),
        })
    }
}

/// Parse an argument tail into typed arguments, in source order.
///
/// Parts of the tail that are not arguments are skipped. An argument whose
/// kind can't be determined is dropped; the other arguments are kept.
///
/// # Example
///
/// ```
/// use ois_syntax::{StylePatterns, ValueKind, parse_args};
///
/// let patterns = StylePatterns::new(None).unwrap();
/// let args = parse_args(Some("-1px-#fff"), &patterns);
/// assert_eq!(args.len(), 2);
/// assert_eq!(args[0].kind, ValueKind::Numeric);
/// assert_eq!(args[1].value, "#fff");
/// ```
pub fn parse_args(tail: Option<&str>, patterns: &StylePatterns) -> Vec<Argument> {
    let Some(tail) = tail else {
        return Vec::new();
    };

    patterns
        .arg()
        .captures_iter(tail)
        .filter_map(|caps| ArgMatch::from_captures(&caps))
        .filter_map(|m| build_argument(m, patterns))
        .collect()
}

fn build_argument(m: ArgMatch<'_>, patterns: &StylePatterns) -> Option<Argument> {
    // Unreachable through `parse_args` while every value alternative has a
    // checker of its own; kept so a grammar change can't produce untyped values.
    let Some(kind) = patterns.classify(m.value) else {
        tracing::debug!(value = m.value, "Dropping argument of unknown kind");
        return None;
    };

    Some(Argument {
        name: (!m.name.is_empty()).then(|| m.name.to_owned()),
        kind,
        value: kind.normalize(m.value, patterns),
        // Units only make sense on numbers
        unit: (kind == ValueKind::Numeric && !m.unit.is_empty()).then(|| m.unit.to_owned()),
    })
}
