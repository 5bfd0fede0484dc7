//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// Strings without `${` are returned unchanged, so prefixes such as `$` or
/// `$$` stay literal. Bare `$VAR` is never expanded.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("OIS_TEST_PREFIX_SIMPLE", "!");
        }
        let result = expand_env("${OIS_TEST_PREFIX_SIMPLE}", "syntax.prefix").unwrap();
        assert_eq!(result, "!");
        unsafe {
            std::env::remove_var("OIS_TEST_PREFIX_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("OIS_TEST_UNSET");
        }
        let result = expand_env("${OIS_TEST_UNSET:-.}", "syntax.prefix").unwrap();
        assert_eq!(result, ".");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("OIS_TEST_NS", "img");
        }
        let result = expand_env("${OIS_TEST_NS}:", "syntax.prefix").unwrap();
        assert_eq!(result, "img:");
        unsafe {
            std::env::remove_var("OIS_TEST_NS");
        }
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("OIS_TEST_MISSING");
        }
        let err = expand_env("${OIS_TEST_MISSING}", "syntax.prefix").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("OIS_TEST_MISSING"));
        assert!(err.to_string().contains("syntax.prefix"));
    }

    #[test]
    fn test_dollar_prefix_not_expanded() {
        assert_eq!(expand_env("$", "syntax.prefix").unwrap(), "$");
        assert_eq!(expand_env("$VAR", "syntax.prefix").unwrap(), "$VAR");
    }
}
