//! `ois parse` command implementation.

use clap::Args;
use ois_syntax::parse_directives;

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the parse command.
#[derive(Args)]
pub(crate) struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

impl ParseArgs {
    /// Execute the parse command.
    ///
    /// Prints one JSON array of directives per alt text.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.input.load_config(None)?;
        let patterns = config.patterns()?;

        for text in self.input.texts()? {
            let directives = parse_directives(&text, &patterns);
            tracing::debug!(text = %text, count = directives.len(), "Parsed alt text");

            let json = if self.pretty {
                serde_json::to_string_pretty(&directives)?
            } else {
                serde_json::to_string(&directives)?
            };
            output.result(&json);
        }

        Ok(())
    }
}
