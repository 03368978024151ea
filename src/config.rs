use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path};

use crate::context::ANDROID_APP_GRADLE;

/// Optional per-project settings, read from the project root
pub const CONFIG_FILE: &str = "kotlin-fix.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub patch: PatchConfig,
}

#[derive(Debug, Deserialize)]
pub struct PatchConfig {
    /// Gradle file to patch, relative to the project root
    #[serde(default = "default_target")]
    pub target: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
        }
    }
}

fn default_target() -> String {
    ANDROID_APP_GRADLE.to_string()
}

/// Load `kotlin-fix.toml` from the project root, falling back to defaults
/// when the project has none.
pub fn load_config(root: &Path) -> Result<Config> {
    let path = root.join(CONFIG_FILE);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => anyhow::bail!("failed to read `{}`: {}", path.display(), e),
    };

    let config: Config = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse `{}`: {}", path.display(), e))?;

    validate_target(&config.patch.target)?;

    Ok(config)
}

/// The target must stay inside the project
fn validate_target(target: &str) -> Result<()> {
    if target.trim().is_empty() {
        anyhow::bail!("Invalid patch target: must not be empty");
    }

    let path = Path::new(target);
    if path.is_absolute() || target.starts_with('/') {
        anyhow::bail!("Invalid patch target '{}'. Must be relative to the project root", target);
    }

    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        anyhow::bail!("Invalid patch target '{}'. Must not contain '..'", target);
    }

    Ok(())
}
