//! Configuration management for OIS.
//!
//! Parses `ois.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [syntax]
//! prefix = "."
//!
//! [images]
//! default_object_fit = "contain"
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `syntax.prefix` supports `${VAR}` (errors if unset) and
//! `${VAR:-default}`.

mod expand;

use std::path::{Path, PathBuf};

use ois_style::{ObjectFit, StyleSettings};
use ois_syntax::{PatternError, StylePatterns};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override directive prefix.
    pub prefix: Option<String>,
    /// Override image scaling.
    pub object_fit: Option<ObjectFit>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "ois.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directive syntax configuration.
    pub syntax: SyntaxConfig,
    /// Image presentation configuration.
    pub images: ImagesConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Patterns compiled during [`Config::load`].
    #[serde(skip)]
    compiled: Option<StylePatterns>,
}

/// Directive syntax configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SyntaxConfig {
    /// Text that must precede every directive (`.w-100`). Empty for none.
    pub prefix: String,
}

/// Image presentation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// How images are scaled inside their container.
    pub default_object_fit: ObjectFit,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// The prefix can't be used to build directive patterns.
    #[error("Configuration error in syntax.prefix: {0}")]
    Prefix(#[from] PatternError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`syntax.prefix`").
        field: String,
        /// Error message (e.g., "${`OIS_PREFIX`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `ois.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings take precedence over file values. The result is validated
    /// after they are applied.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting prefix is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.compiled = Some(config.compile_patterns()?);
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Prefix` if the prefix collides with the directive
    /// grammar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.patterns().map(|_| ())
    }

    /// Directive patterns for the configured prefix.
    ///
    /// Reuses the patterns compiled by [`Config::load`] unless the prefix has
    /// changed since.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Prefix` if the prefix is invalid.
    pub fn patterns(&self) -> Result<StylePatterns, ConfigError> {
        match &self.compiled {
            Some(patterns) if patterns.prefix().unwrap_or_default() == self.syntax.prefix => {
                Ok(patterns.clone())
            }
            _ => self.compile_patterns(),
        }
    }

    /// Settings for [`ois_style::StyledImage`].
    #[must_use]
    pub fn style_settings(&self) -> StyleSettings {
        StyleSettings {
            object_fit: self.images.default_object_fit,
        }
    }

    fn compile_patterns(&self) -> Result<StylePatterns, ConfigError> {
        tracing::debug!(prefix = %self.syntax.prefix, "Compiling directive patterns");
        Ok(StylePatterns::new(Some(self.syntax.prefix.as_str()))?)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(prefix) = &settings.prefix {
            self.syntax.prefix.clone_from(prefix);
        }
        if let Some(object_fit) = settings.object_fit {
            self.images.default_object_fit = object_fit;
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.syntax.prefix = expand::expand_env(&self.syntax.prefix, "syntax.prefix")?;
        Ok(())
    }
}

/// Search for the config file in `start` and its parents.
fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.syntax.prefix, "");
        assert_eq!(config.images.default_object_fit, ObjectFit::Cover);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.syntax.prefix, "");
        assert_eq!(config.images.default_object_fit, ObjectFit::Cover);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[syntax]
prefix = "!"

[images]
default_object_fit = "contain"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.syntax.prefix, "!");
        assert_eq!(config.images.default_object_fit, ObjectFit::Contain);
    }

    #[test]
    fn test_parse_unknown_object_fit() {
        let toml = r#"
[images]
default_object_fit = "stretch"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            prefix: Some(".".to_owned()),
            object_fit: Some(ObjectFit::Fill),
        });
        assert_eq!(config.syntax.prefix, ".");
        assert_eq!(config.images.default_object_fit, ObjectFit::Fill);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config: Config = toml::from_str("[syntax]\nprefix = \"@\"").unwrap();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.syntax.prefix, "@");
        assert_eq!(config.images.default_object_fit, ObjectFit::Cover);
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_prefix() {
        let mut config = Config::default();
        config.syntax.prefix = "#".to_owned();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Prefix(_)));
        assert!(err.to_string().contains("syntax.prefix"));
    }

    #[test]
    fn test_patterns_use_prefix() {
        let mut config = Config::default();
        config.syntax.prefix = ".".to_owned();
        let patterns = config.patterns().unwrap();
        assert_eq!(patterns.prefix(), Some("."));
        assert_eq!(patterns.parse("w-1 .h-2").len(), 1);
    }

    #[test]
    fn test_load_keeps_compiled_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ois.toml");
        std::fs::write(&path, "[syntax]\nprefix = \"!\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(
            config.compiled.as_ref().and_then(StylePatterns::prefix),
            Some("!")
        );
        assert_eq!(config.patterns().unwrap().prefix(), Some("!"));
    }

    #[test]
    fn test_patterns_follow_prefix_change_after_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ois.toml");
        std::fs::write(&path, "").unwrap();

        let mut config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.patterns().unwrap().prefix(), None);

        config.syntax.prefix = ".".to_owned();
        assert_eq!(config.patterns().unwrap().prefix(), Some("."));

        config.syntax.prefix = "#".to_owned();
        assert!(matches!(config.patterns(), Err(ConfigError::Prefix(_))));
    }

    #[test]
    fn test_style_settings() {
        let mut config = Config::default();
        config.images.default_object_fit = ObjectFit::Contain;
        assert_eq!(config.style_settings().object_fit, ObjectFit::Contain);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[syntax]\nprefix = \".\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.syntax.prefix, ".");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_cli_settings_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[images]\ndefault_object_fit = \"fill\"\n").unwrap();

        let settings = CliSettings {
            object_fit: Some(ObjectFit::Contain),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.images.default_object_fit, ObjectFit::Contain);
    }

    #[test]
    fn test_load_rejects_invalid_cli_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        let settings = CliSettings {
            prefix: Some("a b".to_owned()),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(matches!(err, ConfigError::Prefix(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[syntax\nprefix = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("OIS_TEST_CONFIG_PREFIX", "@");
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[syntax]\nprefix = \"${OIS_TEST_CONFIG_PREFIX}\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.syntax.prefix, "@");

        unsafe {
            std::env::remove_var("OIS_TEST_CONFIG_PREFIX");
        }
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("notes").join("images");
        std::fs::create_dir_all(&nested).unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        assert_eq!(discover_config(&nested), Some(path));
    }

    #[test]
    fn test_discover_config_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("vault");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();
        let nearest = nested.join(CONFIG_FILENAME);
        std::fs::write(&nearest, "").unwrap();

        assert_eq!(discover_config(&nested), Some(nearest));
    }
}
