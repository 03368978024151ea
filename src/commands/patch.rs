use anyhow::Result;
use colored::Colorize;
use similar::TextDiff;

use crate::commands::resolve_context;
use crate::patcher::{self, GradlePatcher, PatchOutcome};

/// Run the hook against a project root
pub fn execute(root: &str, dry_run: bool) -> Result<PatchOutcome> {
    let context = resolve_context(root)?;

    if !dry_run {
        return patcher::patch(&context);
    }

    let plan = GradlePatcher::for_context(&context)?.plan()?;

    match (&plan.outcome, &plan.before, &plan.after) {
        (PatchOutcome::Injected { path }, Some(before), Some(after)) => {
            println!(
                "{} Dry run, {} would change:",
                "info:".blue().bold(),
                path.display()
            );
            let name = path.strip_prefix(context.root()).unwrap_or(path);
            let name = name.to_string_lossy().replace('\\', "/");
            print_diff(&render_diff(before, after, &name));
        }
        _ => plan.outcome.log(),
    }

    Ok(plan.outcome)
}

/// Unified diff of the pending change, labelled with a project-relative name
pub fn render_diff(before: &str, after: &str, name: &str) -> String {
    TextDiff::from_lines(before, after)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", name), &format!("b/{}", name))
        .to_string()
}

fn print_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("---") || line.starts_with("+++") {
            println!("{}", line.bold());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippet::MARKER;

    #[test]
    fn test_render_diff_shows_only_additions() {
        let before = "android {}\n";
        let after = patcher::inject(before).unwrap();

        let diff = render_diff(before, &after, "platforms/android/app/build.gradle");

        assert!(diff.starts_with("--- a/platforms/android/app/build.gradle\n"));
        assert!(diff.contains("+++ b/platforms/android/app/build.gradle\n"));
        assert!(diff.lines().any(|l| l.starts_with('+') && l.contains(MARKER)));
        assert!(!diff.lines().any(|l| l.starts_with('-') && !l.starts_with("---")));
    }
}
