//! Directive tokenizer.
//!
//! Finds every directive occurrence in a text without interpreting its
//! arguments. Occurrences never overlap and are reported left to right.

use crate::patterns::StylePatterns;

/// A directive occurrence with its argument tail still unparsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawDirective<'a> {
    /// Directive name.
    pub name: &'a str,
    /// Argument tail (`-100px-#fff`), `None` when the directive has no arguments.
    pub args: Option<&'a str>,
    /// Byte offset where the occurrence starts, prefix included.
    pub start: usize,
    /// Byte offset just past the last argument.
    pub end: usize,
}

/// Scan `text` for directive occurrences.
///
/// A directive must start at the beginning of the text or after whitespace
/// (after the prefix, when one is configured) and end at whitespace or the end
/// of the text. Without a prefix, a lone word such as `plain` is prose rather
/// than a directive: it needs a hyphenated name or at least one argument.
pub fn tokenize<'a>(text: &'a str, patterns: &StylePatterns) -> Vec<RawDirective<'a>> {
    let prefix_len = patterns.prefix().map_or(0, str::len);
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(caps) = patterns.directive().captures_at(text, pos) {
        let Some(name) = caps.name("name") else {
            break;
        };
        let args = caps.name("args");
        let end = args.map_or(name.end(), |m| m.end());

        // Resume at the trailing whitespace so it can open the next directive
        pos = end;

        if prefix_len == 0 && args.is_none() && !name.as_str().contains('-') {
            continue;
        }

        found.push(RawDirective {
            name: name.as_str(),
            args: args.map(|m| m.as_str()),
            start: name.start() - prefix_len,
            end,
        });
    }

    found
}
