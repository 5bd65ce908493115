//! Command to render a path with a chosen encoder.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions, PathContext};
use clap::{Args, ValueEnum};
use qpath::render::{EncoderKind, TextEncoder};
use serde_json::json;

/// Encoders accepted by `--encoder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncoderArg {
    /// Map characters illegal in names onto the private use area
    Jsr283,
    /// Percent-encoding
    Url,
    /// Pass text through unchanged
    None,
}

impl From<EncoderArg> for EncoderKind {
    fn from(arg: EncoderArg) -> Self {
        match arg {
            EncoderArg::Jsr283 => EncoderKind::Jsr283,
            EncoderArg::Url => EncoderKind::Url,
            EncoderArg::None => EncoderKind::None,
        }
    }
}

/// Render a path in prefixed or expanded form.
///
/// The path is parsed with the configured encoding and re-rendered with the
/// encoder chosen here.
#[derive(Args)]
pub struct RenderCommand {
    /// Path to render
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Encoder applied to local names (defaults to the configured encoder)
    #[arg(long, value_enum)]
    pub encoder: Option<EncoderArg>,

    /// Also pass the `/` delimiter through the encoder
    #[arg(long)]
    pub encode_delimiter: bool,

    /// Render `{uri}local` names instead of prefixes
    #[arg(long)]
    pub expanded: bool,
}

impl RenderCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut ctx = PathContext::load(global)?;
        let path = ctx.parse(&self.path)?;

        if let Some(kind) = self.encoder {
            ctx.encoder = EncoderKind::from(kind).encoder();
        }
        ctx.encode_delimiter |= self.encode_delimiter;

        let rendered = if self.expanded {
            let encoder: &dyn TextEncoder = &*ctx.encoder;
            path.expanded_string(Some(encoder))
        } else {
            ctx.render(&path)?
        };

        print_output(
            ctx.format,
            &[rendered.clone()],
            &json!({
                "input": self.path,
                "rendered": rendered,
                "expanded": path.to_string(),
            }),
        )
    }
}
