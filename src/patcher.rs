//! Kotlin resolution strategy injection
//!
//! Appends the pinned `configurations.all { resolutionStrategy { ... } }`
//! block to the Android app's build.gradle, once. Presence is detected by
//! substring match on `snippet::MARKER`, not by parsing Gradle.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config;
use crate::context::BuildContext;
use crate::snippet::{MARKER, PINNED_KOTLIN_VERSION, RESOLUTION_STRATEGY};

/// Result of one hook run
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOutcome {
    /// The strategy was appended (or would be, for a plan)
    Injected { path: PathBuf },
    /// The marker was already there, nothing written
    AlreadyPresent { path: PathBuf },
    /// No build.gradle at the expected location
    MissingTarget { path: PathBuf },
}

impl PatchOutcome {
    pub fn path(&self) -> &Path {
        match self {
            PatchOutcome::Injected { path }
            | PatchOutcome::AlreadyPresent { path }
            | PatchOutcome::MissingTarget { path } => path,
        }
    }

    /// Console line for this outcome
    pub fn message(&self) -> String {
        match self {
            PatchOutcome::Injected { path } => {
                format!(
                    "Kotlin resolution strategy (kotlin-stdlib {}) injected into {}",
                    PINNED_KOTLIN_VERSION,
                    path.display()
                )
            }
            PatchOutcome::AlreadyPresent { path } => format!(
                "Kotlin resolution strategy already present in {}. No changes made.",
                path.display()
            ),
            PatchOutcome::MissingTarget { path } => format!(
                "File not found at path: {}. The hook cannot proceed.",
                path.display()
            ),
        }
    }

    /// Print the outcome line. Missing files go to stderr.
    pub fn log(&self) {
        match self {
            PatchOutcome::Injected { .. } => {
                println!("   {} {}", "Patched".green().bold(), self.message());
            }
            PatchOutcome::AlreadyPresent { .. } => {
                println!("{} {}", "info:".blue().bold(), self.message());
            }
            PatchOutcome::MissingTarget { .. } => {
                eprintln!("{} {}", "error:".red().bold(), self.message());
            }
        }
    }
}

/// What a run would do, before anything is written
#[derive(Debug, Clone)]
pub struct PatchPlan {
    pub outcome: PatchOutcome,
    /// File content as read, if the file exists
    pub before: Option<String>,
    /// New content, only when the strategy needs injecting
    pub after: Option<String>,
}

/// Append the resolution strategy unless the marker is already present
///
/// Returns `None` when `content` needs no change.
pub fn inject(content: &str) -> Option<String> {
    if content.contains(MARKER) {
        return None;
    }

    let mut patched = String::with_capacity(content.len() + RESOLUTION_STRATEGY.len() + 2);
    patched.push_str(content);
    patched.push('\n');
    patched.push_str(RESOLUTION_STRATEGY);
    patched.push('\n');
    Some(patched)
}

/// Patches a single Gradle file
pub struct GradlePatcher {
    target: PathBuf,
}

impl GradlePatcher {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Patcher for a project, honoring `kotlin-fix.toml` if the project has one
    pub fn for_context(context: &BuildContext) -> Result<Self> {
        let config = config::load_config(context.root())?;
        Ok(Self::new(context.gradle_path_with(&config.patch.target)))
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Read the target and decide, without writing
    pub fn plan(&self) -> Result<PatchPlan> {
        if !self.target.exists() {
            return Ok(PatchPlan {
                outcome: PatchOutcome::MissingTarget {
                    path: self.target.clone(),
                },
                before: None,
                after: None,
            });
        }

        let content = fs::read_to_string(&self.target)
            .with_context(|| format!("Failed to read {}", self.target.display()))?;

        let after = inject(&content);
        let outcome = if after.is_some() {
            PatchOutcome::Injected {
                path: self.target.clone(),
            }
        } else {
            PatchOutcome::AlreadyPresent {
                path: self.target.clone(),
            }
        };

        Ok(PatchPlan {
            outcome,
            before: Some(content),
            after,
        })
    }

    /// Plan, then overwrite the file if the strategy was missing
    pub fn apply(&self) -> Result<PatchOutcome> {
        let plan = self.plan()?;

        if let Some(after) = &plan.after {
            fs::write(&self.target, after)
                .with_context(|| format!("Failed to write {}", self.target.display()))?;
        }

        Ok(plan.outcome)
    }
}

/// Hook entry point: patch `<root>/platforms/android/app/build.gradle`
///
/// A missing file is logged and reported as `Ok(MissingTarget)`; it never
/// fails the surrounding build. I/O errors on an existing file propagate.
pub fn patch(context: &BuildContext) -> Result<PatchOutcome> {
    println!(
        "{} Running hook: {}",
        "info:".blue().bold(),
        env!("CARGO_PKG_NAME")
    );

    let outcome = GradlePatcher::for_context(context)?.apply()?;
    outcome.log();

    Ok(outcome)
}
