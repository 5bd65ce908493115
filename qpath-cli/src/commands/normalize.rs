//! Command to normalize a path.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions, PathContext};
use clap::Args;
use serde_json::json;

/// Collapse `.` and `..` segments in a path.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Fail with exit code 1 unless the path is already normalized
    #[arg(long)]
    pub check: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        let path = ctx.parse(&self.path)?;

        if self.check && !path.is_normalized() {
            return Err(CliError::SemanticFailure(format!(
                "{} is not normalized",
                ctx.display(&path)
            )));
        }

        let normalized = path.normalized()?;
        let rendered = ctx.display(&normalized);

        print_output(
            ctx.format,
            &[rendered.clone()],
            &json!({
                "input": self.path,
                "normalized": rendered,
                "absolute": normalized.is_absolute(),
                "size": normalized.size(),
            }),
        )
    }
}
