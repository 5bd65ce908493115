//! Command to list the ancestors of a path.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions, PathContext};
use clap::Args;
use serde_json::json;

/// List every path from the root (or first segment) down to a path.
#[derive(Args)]
pub struct AncestorsCommand {
    /// Path whose ancestors to list
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Normalize the path first
    #[arg(long)]
    pub normalize: bool,
}

impl AncestorsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        let mut path = ctx.parse(&self.path)?;
        if self.normalize {
            path = path.normalized()?;
        }

        let chain: Vec<String> = path.paths_from_root().map(|p| ctx.display(&p)).collect();

        print_output(
            ctx.format,
            &chain,
            &json!({
                "path": self.path,
                "ancestors": chain,
            }),
        )
    }
}
