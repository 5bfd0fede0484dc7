//! Parsed directive types.

use crate::value::{self, ValueKind};

/// One recognized annotation: `border-1px-#fff` is the directive `border`
/// with a numeric and a color argument.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Directive {
    /// Directive name, e.g. `w` or `style-name`.
    pub name: String,
    /// Arguments in source order.
    pub args: Vec<Argument>,
}

impl Directive {
    /// Find the first argument whose explicit or default name is `name`.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&Argument> {
        self.args.iter().find(|arg| arg.effective_name() == name)
    }
}

/// A typed value attached to a directive.
///
/// Written as `-{name}{value}{unit}`, where name and unit are optional:
/// `-x10px`, `-"text"`, `-#fff`, `-&--var&`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Argument {
    /// Explicit label, `None` when omitted.
    pub name: Option<String>,
    /// Kind inferred from the value's shape.
    pub kind: ValueKind,
    /// Normalized value.
    ///
    /// - numeric: digits as written (`100`)
    /// - string: double-quoted CSS string (`"Hello"`)
    /// - color: `#hex` as written or `rgba(...)`
    /// - raw: text between the ampersands, unescaped
    pub value: String,
    /// Unit of a numeric value (`px`, `em`, `%`).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub unit: Option<String>,
}

impl Argument {
    /// The explicit name, or the kind's default name (`num`, `str`, `col`, `arg`).
    #[must_use]
    pub fn effective_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.kind.default_name())
    }

    /// Unquoted text of a string argument.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        (self.kind == ValueKind::String).then(|| value::unquote(&self.value))
    }
}
