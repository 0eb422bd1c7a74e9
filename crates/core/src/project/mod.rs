//! Project layout and configuration.
//!
//! - `ProjectLayout`: computed paths for tool metadata under the project root.
//! - `ProjectConfig`: optional per-project settings (sample file, location
//!   list path, scanner lists).

mod config;
mod layout;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use config::{
    ProjectConfig, ScanSettings, DEFAULT_EXTENSIONS, DEFAULT_IGNORE_DIRS, DEFAULT_KEYWORDS,
    DEFAULT_SAMPLE_FILE,
};
pub use layout::{ProjectLayout, META_DIR_NAME};

/// Load the project config JSON, falling back to defaults when the file is absent.
pub fn load_project_config(layout: &ProjectLayout) -> Result<ProjectConfig> {
    if !layout.config_path.exists() {
        tracing::debug!(path = %layout.config_path.display(), "no project config, using defaults");
        return Ok(ProjectConfig::default());
    }
    let config_json = std::fs::read_to_string(&layout.config_path).with_context(|| {
        format!("Failed to read project config at {}", layout.config_path.display())
    })?;
    let config: ProjectConfig =
        serde_json::from_str(&config_json).context("Failed to parse project config JSON")?;
    Ok(config)
}

/// Pick the location list path: explicit override, then config, then the layout default.
pub fn resolve_locations_path(
    layout: &ProjectLayout,
    config: &ProjectConfig,
    override_path: Option<&Path>,
) -> PathBuf {
    if let Some(path) = override_path {
        return layout.resolve(path);
    }
    match &config.locations_file {
        Some(path) => layout.resolve(path),
        None => layout.default_locations_path.clone(),
    }
}
