//! Parser for the image-styling annotation language.
//!
//! Image alt text can carry styling directives next to ordinary words:
//!
//! ```text
//! A sunset over the bay w-300px border-1px-#fff label-{Golden hour}
//! ```
//!
//! Each directive is a hyphenated lowercase name followed by arguments written
//! as `-{name}{value}{unit}`:
//!
//! | value   | example            | normalized            |
//! |---------|--------------------|-----------------------|
//! | numeric | `-100px`, `-x.5em` | `100` + unit `px`     |
//! | string  | `-"hi"`, `-{hi}`   | `"hi"`                |
//! | color   | `-#fff`, `-#(1, 2, 3)` | `#fff`, `rgba(1, 2, 3)` |
//! | raw     | `-&--var&`         | `--var`               |
//!
//! # Architecture
//!
//! 1. [`StylePatterns`] compiles the matchers once per prefix configuration.
//! 2. [`tokenize`] finds directive occurrences and their raw argument tails.
//! 3. [`parse_args`] turns each tail into typed [`Argument`]s.
//!
//! [`parse_directives`] runs the whole pipeline. Parsing never fails: text
//! without directives yields an empty list, and malformed arguments are
//! dropped. Only building [`StylePatterns`] with an unusable prefix is an
//! error.
//!
//! # Example
//!
//! ```
//! use ois_syntax::{StylePatterns, ValueKind, parse_directives};
//!
//! let patterns = StylePatterns::new(None).unwrap();
//! let directives = parse_directives("photo border-1px-#fff", &patterns);
//!
//! assert_eq!(directives.len(), 1);
//! assert_eq!(directives[0].name, "border");
//! assert_eq!(directives[0].args[0].unit.as_deref(), Some("px"));
//! assert_eq!(directives[0].args[1].kind, ValueKind::Color);
//! ```

mod args;
mod directive;
mod patterns;
mod tokenizer;
mod value;

pub use args::parse_args;
pub use directive::{Argument, Directive};
pub use patterns::{PatternError, StylePatterns};
pub use tokenizer::{RawDirective, tokenize};
pub use value::ValueKind;

/// Parse every directive in `text`, in source order.
#[must_use]
pub fn parse_directives(text: &str, patterns: &StylePatterns) -> Vec<Directive> {
    tokenize(text, patterns)
        .into_iter()
        .map(|raw| Directive {
            name: raw.name.to_owned(),
            args: parse_args(raw.args, patterns),
        })
        .collect()
}
