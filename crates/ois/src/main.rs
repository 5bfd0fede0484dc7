//! OIS CLI - image-styling directives in alt text.
//!
//! Provides commands for:
//! - `parse`: Print the directives found in alt texts as JSON
//! - `style`: Print the CSS classes and custom properties they produce

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ParseArgs, StyleArgs};
use output::Output;

/// OIS - image-styling directives in alt text.
#[derive(Parser)]
#[command(name = "ois", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse alt texts into directives.
    Parse(ParseArgs),
    /// Compute CSS classes and properties for alt texts.
    Style(StyleArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Parse(args) => args.input.verbose,
        Commands::Style(args) => args.input.verbose,
    };

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Parse(args) => args.execute(),
        Commands::Style(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_with_texts() {
        let cli = Cli::try_parse_from(["ois", "parse", "w-100 h-50", "--pretty"]).unwrap();
        assert!(matches!(cli.command, Commands::Parse(_)));
    }

    #[test]
    fn test_style_command_object_fit() {
        let cli =
            Cli::try_parse_from(["ois", "style", "w-100", "--object-fit", "contain"]).unwrap();
        assert!(matches!(cli.command, Commands::Style(_)));
    }

    #[test]
    fn test_style_command_rejects_unknown_object_fit() {
        let result = Cli::try_parse_from(["ois", "style", "w-100", "--object-fit", "stretch"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["ois", "parse", "-v", "w-100"]).unwrap();
        let Commands::Parse(args) = cli.command else {
            panic!("expected parse command");
        };
        assert!(args.input.verbose);
    }
}
