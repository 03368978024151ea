pub mod check;
pub mod patch;

use anyhow::{Context, Result};
use std::env;
use std::path::Path;

use crate::context::BuildContext;

/// Resolve the project root passed by the hook runner
///
/// Relative roots are anchored at the current directory so logged paths
/// point somewhere the user can find.
pub fn resolve_context(root: &str) -> Result<BuildContext> {
    let root = Path::new(root);
    if root.is_absolute() {
        return Ok(BuildContext::new(root));
    }

    let cwd = env::current_dir().context("Failed to determine current directory")?;
    if root == Path::new(".") {
        Ok(BuildContext::new(cwd))
    } else {
        Ok(BuildContext::new(cwd.join(root)))
    }
}
