//! Heuristic discovery of hardcoded addresses.
//!
//! The scanner walks a project tree, keeps files with an allowed extension,
//! pulls out every IPv4-shaped token, and keeps the ones that look like they
//! are actually used as network addresses. The filter leans towards
//! accepting: false positives are preferred over misses.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use walkdir::WalkDir;

use crate::address;
use crate::project::{ScanSettings, META_DIR_NAME};

/// Address prefixes accepted without any further context.
pub const LOCAL_PREFIXES: &[&str] = &[
    "192.168.",
    "10.0.",
    "172.16.",
    "172.17.",
    "172.18.",
    "172.19.",
    "172.20.",
    "172.21.",
    "172.22.",
    "172.23.",
    "172.24.",
    "172.25.",
    "172.26.",
    "172.27.",
    "172.28.",
    "172.29.",
    "172.30.",
    "172.31.",
    "127.0.0.1",
    "0.0.0.0",
];

/// Files mapped to the distinct accepted addresses found in each.
pub type ScanReport = BTreeMap<PathBuf, BTreeSet<String>>;

/// Stateless scanner configured by `ScanSettings`.
#[derive(Debug, Clone)]
pub struct Scanner {
    settings: ScanSettings,
    lowered_keywords: Vec<String>,
}

impl Scanner {
    pub fn new(settings: ScanSettings) -> Self {
        let lowered_keywords = settings.keywords.iter().map(|k| k.to_lowercase()).collect();
        Self { settings, lowered_keywords }
    }

    /// Whether `path` ends in one of the allowed extensions.
    pub fn wants_file(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.settings.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    /// The tool's own metadata directory is always pruned.
    fn is_ignored_dir(&self, name: &str) -> bool {
        name == META_DIR_NAME || self.settings.ignore_dirs.iter().any(|d| d == name)
    }

    /// Walk `root` and collect accepted addresses per file.
    ///
    /// Unreadable entries and files are logged and skipped.
    pub fn scan_project(&self, root: &Path) -> ScanReport {
        let mut report = ScanReport::new();

        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !entry.file_name().to_str().is_some_and(|name| self.is_ignored_dir(name))
        });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.wants_file(entry.path()) {
                continue;
            }

            match self.scan_file(entry.path()) {
                Ok(found) if !found.is_empty() => {
                    tracing::info!(
                        file = %entry.path().display(),
                        count = found.len(),
                        "found candidate addresses"
                    );
                    report.insert(entry.into_path(), found);
                }
                Ok(_) => {}
                Err(err) => tracing::warn!("Skipping {}: {err:#}", entry.path().display()),
            }
        }

        report
    }

    /// Read one file and return its distinct accepted addresses.
    pub fn scan_file(&self, path: &Path) -> Result<BTreeSet<String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(self.scan_content(&content))
    }

    /// Distinct accepted addresses in `content`.
    pub fn scan_content(&self, content: &str) -> BTreeSet<String> {
        let distinct: BTreeSet<&str> = address::find_tokens(content).into_iter().collect();
        distinct
            .into_iter()
            .filter(|ip| self.is_network_context(content, ip))
            .map(str::to_string)
            .collect()
    }

    /// Decide whether `ip` inside `content` is a genuine network address.
    ///
    /// Accepted when it has a local prefix, when any line holding it mentions a
    /// networking keyword, or when it directly follows a quoted URL scheme.
    pub fn is_network_context(&self, content: &str, ip: &str) -> bool {
        if has_local_prefix(ip) {
            return true;
        }

        let quoted_url = Regex::new(&format!(r#"['"]https?://{}"#, regex::escape(ip))).ok();
        content.lines().filter(|line| line.contains(ip)).any(|line| {
            let lowered = line.to_lowercase();
            self.lowered_keywords.iter().any(|kw| lowered.contains(kw.as_str()))
                || quoted_url.as_ref().is_some_and(|re| re.is_match(line))
        })
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScanSettings::default())
    }
}

/// True when `ip` starts with a private or loopback prefix.
pub fn has_local_prefix(ip: &str) -> bool {
    LOCAL_PREFIXES.iter().any(|prefix| ip.starts_with(prefix))
}
