use serde::{Deserialize, Serialize};

/// File extensions the scanner considers.
pub const DEFAULT_EXTENSIONS: &[&str] =
    &[".js", ".jsx", ".ts", ".tsx", ".java", ".kt", ".json", ".xml", ".gradle"];

/// Directory names pruned from the walk.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "build",
    "dist",
    "__pycache__",
    "backend_temporario",
    ".vscode",
    ".bundle",
    "_tests_",
    ".kotlin",
    ".gradle",
    "release",
    "gradle",
    "tools",
];

/// Networking keywords; a line containing one (case-insensitive) marks the
/// addresses on it as genuine.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "http://",
    "https://",
    "API_BASE",
    "api",
    "fetch",
    "axios",
    "baseURL",
    "endpoint",
    "url",
    "HOST",
    "PORT",
    "localhost",
    "BASE_URL",
    "API_URL",
    "SERVER_URL",
];

/// Sample file inspected to auto-detect the current address in precise mode.
pub const DEFAULT_SAMPLE_FILE: &str = "services/authService.ts";

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_extensions() -> Vec<String> {
    to_owned_list(DEFAULT_EXTENSIONS)
}

fn default_ignore_dirs() -> Vec<String> {
    to_owned_list(DEFAULT_IGNORE_DIRS)
}

fn default_keywords() -> Vec<String> {
    to_owned_list(DEFAULT_KEYWORDS)
}

fn default_sample_file() -> String {
    DEFAULT_SAMPLE_FILE.to_string()
}

fn default_config_version() -> String {
    "0.1.0".to_string()
}

/// Scanner tuning. Every list falls back to its built-in default when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSettings {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore_dirs: default_ignore_dirs(),
            keywords: default_keywords(),
        }
    }
}

/// Serializable configuration for a target project.
///
/// Lives at `.iprewire/config.json` in the project root and is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Schema/config version.
    #[serde(default = "default_config_version")]
    pub config_version: String,
    /// File (relative to the root) used to auto-detect the current address.
    #[serde(default = "default_sample_file")]
    pub sample_file: String,
    /// Location list for precise mode; relative paths resolve against the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations_file: Option<String>,
    #[serde(default)]
    pub scan: ScanSettings,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            sample_file: default_sample_file(),
            locations_file: None,
            scan: ScanSettings::default(),
        }
    }
}
