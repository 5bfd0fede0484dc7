//! Arguments shared by every command: where alt texts and settings come from.

use std::io::BufRead;
use std::path::PathBuf;

use clap::Args;
use ois_config::{CliSettings, Config};
use ois_style::ObjectFit;

use crate::error::CliError;

/// Input and configuration arguments.
#[derive(Args)]
pub(crate) struct InputArgs {
    /// Alt texts to process (default: one per line from stdin).
    texts: Vec<String>,

    /// Path to configuration file (default: auto-discover ois.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directive prefix (overrides config).
    #[arg(long, env = "OIS_PREFIX")]
    prefix: Option<String>,

    /// Enable verbose output (show dropped arguments and dimensions).
    #[arg(short, long)]
    pub verbose: bool,
}

impl InputArgs {
    /// Load the configuration with CLI overrides applied.
    pub(crate) fn load_config(&self, object_fit: Option<ObjectFit>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            prefix: self.prefix.clone(),
            object_fit,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Loaded configuration");
        }

        Ok(config)
    }

    /// Alt texts from the command line, or non-blank stdin lines.
    pub(crate) fn texts(&self) -> Result<Vec<String>, CliError> {
        if !self.texts.is_empty() {
            return Ok(self.texts.clone());
        }

        let mut texts = Vec::new();
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                texts.push(line);
            }
        }
        Ok(texts)
    }
}
