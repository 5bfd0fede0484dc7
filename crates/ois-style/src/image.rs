//! Image source filtering.

/// Extensions of images that can be styled.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "webp", "jpg", "jpeg", "gif", "bmp", "svg"];

/// Lowercased extension of a file name or URL path.
///
/// Returns `None` when there is no extension or it contains characters other
/// than letters, digits and underscores (a query string, for instance).
#[must_use]
pub fn parse_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Whether an embed with this source and alt text should be styled.
///
/// Only image files are styled, and an alt text equal to the source is the
/// host's placeholder rather than user text.
#[must_use]
pub fn is_styleable_image(src: &str, alt: &str) -> bool {
    if alt == src {
        return false;
    }
    parse_extension(src).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extension() {
        assert_eq!(parse_extension("photo.png"), Some("png".to_owned()));
        assert_eq!(parse_extension("dir/photo.final.JPG"), Some("jpg".to_owned()));
    }

    #[test]
    fn test_parse_extension_missing() {
        assert_eq!(parse_extension("photo"), None);
        assert_eq!(parse_extension("photo."), None);
        assert_eq!(parse_extension("photo.png?v=2"), None);
    }

    #[test]
    fn test_styleable_image() {
        assert!(is_styleable_image("cat.webp", "w-100"));
        assert!(is_styleable_image("cat.SVG", "w-100"));
    }

    #[test]
    fn test_not_an_image() {
        assert!(!is_styleable_image("notes.md", "w-100"));
        assert!(!is_styleable_image("archive", "w-100"));
    }

    #[test]
    fn test_alt_equal_to_src_skipped() {
        assert!(!is_styleable_image("cat.png", "cat.png"));
    }
}
