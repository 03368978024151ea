use anyhow::Result;
use colored::Colorize;

use crate::commands::resolve_context;
use crate::patcher::{GradlePatcher, PatchOutcome};

/// Report whether the Kotlin pin is in place, without writing
///
/// Fails only when the file exists and the strategy is missing.
pub fn execute(root: &str) -> Result<PatchOutcome> {
    let context = resolve_context(root)?;
    let plan = GradlePatcher::for_context(&context)?.plan()?;

    match &plan.outcome {
        PatchOutcome::AlreadyPresent { path } => {
            println!(
                "  {} Kotlin resolution strategy present in {}",
                "✓".green(),
                path.display()
            );
        }
        PatchOutcome::MissingTarget { .. } => plan.outcome.log(),
        PatchOutcome::Injected { path } => {
            println!(
                "  {} Kotlin resolution strategy missing from {}",
                "✗".red(),
                path.display()
            );
            anyhow::bail!(
                "{} is not patched. Run `{} patch` to fix it",
                path.display(),
                env!("CARGO_PKG_NAME")
            );
        }
    }

    Ok(plan.outcome)
}
