//! Default units for numeric arguments.

/// Unit appended to a unitless number of the given directive.
///
/// `w-100` means `100px`, `icon-2` means `2em`, `up-10` means `10%`.
#[must_use]
pub fn default_unit(directive: &str) -> Option<&'static str> {
    match directive {
        "h" | "w" | "round" | "border" | "card" | "banner" | "crop" | "shadow" | "info" => {
            Some("px")
        }
        "icon" | "sticker" | "label" | "font" => Some("em"),
        "up" | "down" | "left" | "right" => Some("%"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_directives() {
        for name in ["h", "w", "round", "border", "card", "banner", "crop", "shadow", "info"] {
            assert_eq!(default_unit(name), Some("px"), "{name}");
        }
    }

    #[test]
    fn test_em_directives() {
        for name in ["icon", "sticker", "label", "font"] {
            assert_eq!(default_unit(name), Some("em"), "{name}");
        }
    }

    #[test]
    fn test_percent_directives() {
        for name in ["up", "down", "left", "right"] {
            assert_eq!(default_unit(name), Some("%"), "{name}");
        }
    }

    #[test]
    fn test_unknown_directive() {
        assert_eq!(default_unit("opacity"), None);
        assert_eq!(default_unit(""), None);
    }
}
