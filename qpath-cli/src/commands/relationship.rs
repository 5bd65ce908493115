//! Command to classify how two paths relate.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions, PathContext};
use clap::{Args, ValueEnum};
use qpath::PathRelationship;
use serde_json::json;

/// Relationships accepted by `--expect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RelationshipArg {
    /// FIRST is a strict ancestor of SECOND
    Ancestor,
    /// FIRST is a strict descendant of SECOND
    Descendant,
    /// The paths are equal
    Same,
    /// Neither path is above the other
    Unrelated,
}

impl From<RelationshipArg> for PathRelationship {
    fn from(arg: RelationshipArg) -> Self {
        match arg {
            RelationshipArg::Ancestor => PathRelationship::Ancestor,
            RelationshipArg::Descendant => PathRelationship::Descendant,
            RelationshipArg::Same => PathRelationship::Same,
            RelationshipArg::Unrelated => PathRelationship::Unrelated,
        }
    }
}

/// Classify how two paths relate.
#[derive(Args)]
pub struct RelationshipCommand {
    /// First path
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second path
    #[arg(value_name = "SECOND")]
    pub second: String,

    /// Normalize both paths before comparing
    #[arg(long)]
    pub normalize: bool,

    /// Fail with exit code 1 unless the paths relate this way
    #[arg(long, value_enum, value_name = "RELATIONSHIP")]
    pub expect: Option<RelationshipArg>,
}

impl RelationshipCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = PathContext::load(global)?;
        let mut first = ctx.parse(&self.first)?;
        let mut second = ctx.parse(&self.second)?;
        if self.normalize {
            first = first.normalized()?;
            second = second.normalized()?;
        }

        let relationship = PathRelationship::between(&first, &second);
        let description = relationship.description(&first, &second);
        log::info!("{description}");

        if let Some(expected) = self.expect.map(PathRelationship::from) {
            if expected != relationship {
                return Err(CliError::SemanticFailure(format!(
                    "expected {}, found {}: {description}",
                    expected.as_str(),
                    relationship.as_str()
                )));
            }
        }

        let common = ctx.display(&first.common_ancestor(&second));
        print_output(
            ctx.format,
            &[relationship.as_str().to_string()],
            &json!({
                "first": self.first,
                "second": self.second,
                "relationship": relationship.as_str(),
                "description": description,
                "common_ancestor": common,
            }),
        )
    }
}
