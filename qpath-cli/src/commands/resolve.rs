//! Command to resolve a relative path against a base.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions, PathContext};
use clap::Args;
use serde_json::json;

/// Resolve a relative path against a base path.
///
/// The result is normalized.
#[derive(Args)]
pub struct ResolveCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Relative path to resolve
    #[arg(value_name = "RELATIVE")]
    pub relative: String,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        let base = ctx.parse(&self.base)?;
        let relative = ctx.parse(&self.relative)?;

        let resolved = base.resolve(&relative)?;
        let rendered = ctx.display(&resolved);

        print_output(
            ctx.format,
            &[rendered.clone()],
            &json!({
                "base": self.base,
                "relative": self.relative,
                "resolved": rendered,
            }),
        )
    }
}
