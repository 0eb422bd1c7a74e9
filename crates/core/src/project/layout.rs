use std::path::{Path, PathBuf};

/// Name of the tool's metadata directory under a project root.
pub const META_DIR_NAME: &str = ".iprewire";

/// Logical layout of a target project on disk.
///
/// This is derived from a chosen root path. It does *not* perform any IO itself.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Root directory of the project being rewritten.
    pub root: PathBuf,
    /// Directory for tool metadata (.iprewire).
    pub meta_dir: PathBuf,
    /// Path to the optional project config file (JSON).
    pub config_path: PathBuf,
    /// Default path of the location list used by precise mode.
    pub default_locations_path: PathBuf,
}

impl ProjectLayout {
    /// Compute the default layout for a project rooted at `root`.
    ///
    /// This does *not* touch the filesystem.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let meta_dir = root.join(META_DIR_NAME);
        let config_path = meta_dir.join("config.json");
        let default_locations_path = meta_dir.join("locations.yaml");

        Self { root, meta_dir, config_path, default_locations_path }
    }

    /// Resolve a path that may be relative to the project root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Render `path` relative to the project root when possible.
    pub fn display_relative(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => path.to_string_lossy().to_string(),
        }
    }
}
