//! Command to express one absolute path relative to another.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions, PathContext};
use clap::Args;
use serde_json::json;

/// Express an absolute path relative to an absolute base.
#[derive(Args)]
pub struct RelativizeCommand {
    /// Absolute path to relativize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Absolute base path
    #[arg(short, long, value_name = "BASE")]
    pub base: String,
}

impl RelativizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        let path = ctx.parse(&self.path)?;
        let base = ctx.parse(&self.base)?;

        let relative = path.relative_to(&base)?;
        let rendered = ctx.display(&relative);

        print_output(
            ctx.format,
            &[rendered.clone()],
            &json!({
                "path": self.path,
                "base": self.base,
                "relative": rendered,
            }),
        )
    }
}
