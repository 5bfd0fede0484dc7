//! Presentation of parsed directives.
//!
//! Every directive becomes a class on the image container (`ois-{name}`) and
//! every argument a CSS custom property (`--ois-{name}-{arg}`) that the
//! stylesheet for that class reads.

use std::fmt;
use std::str::FromStr;

use ois_syntax::{Argument, Directive, StylePatterns, ValueKind, parse_args};
use serde::{Deserialize, Serialize};

use crate::units::default_unit;

/// Class added to every styled image container.
pub const ROOT_CLASS: &str = "ois";

/// Property carrying the configured [`ObjectFit`].
pub const DEFAULT_OBJECT_FIT_PROPERTY: &str = "--ois-default-object-fit";

/// Directives whose string argument is shown as a caption.
const TEXT_DIRECTIVES: &[&str] = &["label", "text", "title"];

/// How images are scaled inside their container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    /// Scale up to fill.
    #[default]
    Cover,
    /// Stretch to fill.
    Fill,
    /// Scale down to contain.
    Contain,
}

impl ObjectFit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Fill => "fill",
            Self::Contain => "contain",
        }
    }
}

impl fmt::Display for ObjectFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`ObjectFit`].
#[derive(Debug, thiserror::Error)]
#[error("Unknown object fit {0:?} (expected cover, fill or contain)")]
pub struct UnknownObjectFit(String);

impl FromStr for ObjectFit {
    type Err = UnknownObjectFit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cover" => Ok(Self::Cover),
            "fill" => Ok(Self::Fill),
            "contain" => Ok(Self::Contain),
            other => Err(UnknownObjectFit(other.to_owned())),
        }
    }
}

/// Settings shared by every styled image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleSettings {
    /// Scaling applied unless a directive overrides it.
    pub object_fit: ObjectFit,
}

/// Explicit `width`/`height` attributes of an image.
///
/// They are styled as if `w-{width}` and `h-{height}` had been written in the
/// alt text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
    /// Value of the `width` attribute (`200`, `50%`).
    pub width: Option<String>,
    /// Value of the `height` attribute.
    pub height: Option<String>,
}

/// A CSS custom property declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CssProperty {
    /// Property name, e.g. `--ois-w-num`.
    pub name: String,
    /// Property value, e.g. `100px`.
    pub value: String,
}

impl CssProperty {
    fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for CssProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

/// Classes and properties to apply to one image container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StyledImage {
    /// Directives in the order they were applied.
    pub directives: Vec<Directive>,
    /// Container classes, starting with [`ROOT_CLASS`], without duplicates.
    pub classes: Vec<String>,
    /// Custom properties in application order; later entries win.
    pub properties: Vec<CssProperty>,
}

impl StyledImage {
    /// Style an image from its alt text and explicit dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use ois_style::{Dimensions, StyleSettings, StyledImage};
    /// use ois_syntax::StylePatterns;
    ///
    /// let patterns = StylePatterns::new(None).unwrap();
    /// let image = StyledImage::from_alt(
    ///     "A cat w-300",
    ///     &patterns,
    ///     &Dimensions::default(),
    ///     &StyleSettings::default(),
    /// );
    /// assert_eq!(image.classes, vec!["ois", "ois-w"]);
    /// assert_eq!(image.property("--ois-w-num"), Some("300px"));
    /// ```
    #[must_use]
    pub fn from_alt(
        alt: &str,
        patterns: &StylePatterns,
        dimensions: &Dimensions,
        settings: &StyleSettings,
    ) -> Self {
        let mut directives = patterns.parse(alt);
        directives.extend(dimension_directive("w", dimensions.width.as_deref(), patterns));
        directives.extend(dimension_directive("h", dimensions.height.as_deref(), patterns));
        Self::from_directives(directives, settings)
    }

    /// Style an image from already parsed directives.
    #[must_use]
    pub fn from_directives(directives: Vec<Directive>, settings: &StyleSettings) -> Self {
        let mut classes = vec![ROOT_CLASS.to_owned()];
        for directive in &directives {
            let class = class_name(directive);
            if !classes.contains(&class) {
                classes.push(class);
            }
        }

        let mut properties = vec![CssProperty::new(
            DEFAULT_OBJECT_FIT_PROPERTY,
            settings.object_fit.as_str(),
        )];
        properties.extend(directives.iter().flat_map(|directive| {
            directive.args.iter().map(move |arg| {
                CssProperty::new(property_name(directive, arg), property_value(directive, arg))
            })
        }));

        Self {
            directives,
            classes,
            properties,
        }
    }

    /// Effective value of a custom property (the last one set).
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .rev()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Caption text from the first `label`, `text` or `title` directive.
    #[must_use]
    pub fn label_text(&self) -> Option<String> {
        self.directives
            .iter()
            .filter(|d| TEXT_DIRECTIVES.iter().any(|t| d.name.starts_with(t)))
            .find_map(|d| d.arg(ValueKind::String.default_name())?.text())
    }

    /// Whether the image is a banner, which also styles its enclosing block.
    #[must_use]
    pub fn is_banner(&self) -> bool {
        self.directives.iter().any(|d| d.name == "banner")
    }

    /// Declarations joined into an inline `style` attribute value.
    #[must_use]
    pub fn style_attribute(&self) -> String {
        self.properties
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// [`StyledImage::style_attribute`] escaped for a double-quoted HTML
    /// attribute.
    ///
    /// String arguments carry their own double quotes, so the raw declarations
    /// can't be written between `style="` and `"` as they are.
    #[must_use]
    pub fn style_attribute_html(&self) -> String {
        html_escape::encode_double_quoted_attribute(&self.style_attribute()).into_owned()
    }
}

/// Container class for a directive: `ois-{name}`.
#[must_use]
pub fn class_name(directive: &Directive) -> String {
    format!("{ROOT_CLASS}-{}", directive.name)
}

/// Custom property for an argument: `--ois-{directive}-{argument}`.
///
/// Unnamed arguments use their kind's default name.
#[must_use]
pub fn property_name(directive: &Directive, arg: &Argument) -> String {
    format!("--{ROOT_CLASS}-{}-{}", directive.name, arg.effective_name())
}

/// Custom property value; unitless numbers get the directive's default unit.
#[must_use]
pub fn property_value(directive: &Directive, arg: &Argument) -> String {
    match arg.kind {
        ValueKind::Numeric => {
            let unit = arg
                .unit
                .as_deref()
                .or_else(|| default_unit(&directive.name))
                .unwrap_or_default();
            format!("{}{unit}", arg.value)
        }
        ValueKind::String | ValueKind::Color | ValueKind::Raw => arg.value.clone(),
    }
}

/// Directive for an explicit dimension attribute (`200`, `50%`).
fn dimension_directive(
    name: &str,
    value: Option<&str>,
    patterns: &StylePatterns,
) -> Option<Directive> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    let arg_name = ValueKind::Numeric.default_name();
    let tail = format!("-{arg_name}{value}");
    let mut args = parse_args(Some(&tail), patterns);

    // The whole value must be one number with an optional unit
    let arg = match (args.pop(), args.is_empty()) {
        (Some(arg), true)
            if arg.kind == ValueKind::Numeric
                && arg.name.as_deref() == Some(arg_name)
                && numeric_text(&arg) == value =>
        {
            arg
        }
        _ => {
            tracing::debug!(directive = name, value, "Ignoring non-numeric image dimension");
            return None;
        }
    };

    Some(Directive {
        name: name.to_owned(),
        args: vec![arg],
    })
}

/// Number and unit as written: `200`, `50%`.
fn numeric_text(arg: &Argument) -> String {
    format!("{}{}", arg.value, arg.unit.as_deref().unwrap_or_default())
}
