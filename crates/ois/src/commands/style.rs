//! `ois style` command implementation.

use clap::Args;
use ois_style::{Dimensions, ObjectFit, StyledImage, is_styleable_image};

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the style command.
#[derive(Args)]
pub(crate) struct StyleArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Image scaling: cover, fill or contain (overrides config).
    #[arg(long)]
    object_fit: Option<ObjectFit>,

    /// Explicit width attribute of the image.
    #[arg(long)]
    width: Option<String>,

    /// Explicit height attribute of the image.
    #[arg(long)]
    height: Option<String>,

    /// Image source; non-image sources are skipped.
    #[arg(long)]
    src: Option<String>,

    /// Print JSON instead of attributes.
    #[arg(long)]
    json: bool,
}

impl StyleArgs {
    /// Execute the style command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.input.load_config(self.object_fit)?;
        let patterns = config.patterns()?;
        let settings = config.style_settings();
        let dimensions = Dimensions {
            width: self.width.clone(),
            height: self.height.clone(),
        };

        for text in self.input.texts()? {
            if let Some(src) = &self.src
                && !is_styleable_image(src, &text)
            {
                output.warning(&format!("Skipping {src}: not a styleable image"));
                continue;
            }

            let image = StyledImage::from_alt(&text, &patterns, &dimensions, &settings);

            if self.json {
                output.result(&serde_json::to_string(&image)?);
                continue;
            }

            output.result(&format!("class=\"{}\"", image.classes.join(" ")));
            output.result(&format!("style=\"{}\"", image.style_attribute_html()));
            if let Some(label) = image.label_text() {
                output.highlight(&format!("Label: {label}"));
            }
            if image.is_banner() {
                output.highlight("Banner: enclosing block gets ois-banner-container");
            }
        }

        Ok(())
    }
}
