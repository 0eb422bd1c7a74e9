//! Heuristic replacement of one address by another.
//!
//! Rewrites happen in three passes over the content: `http://<old>`,
//! `https://<old>` (both with a case-insensitive scheme), then any remaining
//! word-bounded bare `<old>`. The old address must end on a word boundary in
//! every pass, so `10.0.0.1` never rewrites the prefix of `10.0.0.15`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};

/// Per-context counts from one heuristic rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceCounts {
    pub http: usize,
    pub https: usize,
    pub bare: usize,
}

impl ReplaceCounts {
    pub fn total(&self) -> usize {
        self.http + self.https + self.bare
    }
}

/// Compiled patterns for rewriting `old` to `new`.
#[derive(Debug, Clone)]
pub struct AddressRewrite {
    http: Regex,
    https: Regex,
    bare: Regex,
    http_replacement: String,
    https_replacement: String,
    new: String,
}

impl AddressRewrite {
    pub fn new(old: &str, new: &str) -> Result<Self> {
        let escaped = regex::escape(old);
        Ok(Self {
            http: Regex::new(&format!(r"(?i)http://{escaped}\b"))
                .context("Failed to compile http pattern")?,
            https: Regex::new(&format!(r"(?i)https://{escaped}\b"))
                .context("Failed to compile https pattern")?,
            bare: Regex::new(&format!(r"\b{escaped}\b"))
                .context("Failed to compile address pattern")?,
            http_replacement: format!("http://{new}"),
            https_replacement: format!("https://{new}"),
            new: new.to_string(),
        })
    }

    /// Apply all three passes to `content`.
    pub fn apply(&self, content: &str) -> (String, ReplaceCounts) {
        let http = self.http.find_iter(content).count();
        let content = self.http.replace_all(content, NoExpand(&self.http_replacement));

        let https = self.https.find_iter(&content).count();
        let content = self.https.replace_all(&content, NoExpand(&self.https_replacement));

        let bare = self.bare.find_iter(&content).count();
        let content = self.bare.replace_all(&content, NoExpand(&self.new));

        (content.into_owned(), ReplaceCounts { http, https, bare })
    }
}

/// Rewrite `old` to `new` in `content`.
pub fn replace_in_content(content: &str, old: &str, new: &str) -> Result<(String, ReplaceCounts)> {
    Ok(AddressRewrite::new(old, new)?.apply(content))
}

/// Rewrite a file in place, returning the total number of replacements.
///
/// The file is only written when at least one replacement happened.
pub fn try_replace_in_file(path: &Path, old: &str, new: &str) -> Result<ReplaceCounts> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let (updated, counts) = replace_in_content(&content, old, new)?;

    if counts.total() > 0 {
        fs::write(path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(counts)
}

/// Like [`try_replace_in_file`] but never fails: errors are logged and count as zero.
pub fn replace_in_file(path: &Path, old: &str, new: &str) -> usize {
    match try_replace_in_file(path, old, new) {
        Ok(counts) => counts.total(),
        Err(err) => {
            tracing::error!("Failed to replace {old} in {}: {err:#}", path.display());
            0
        }
    }
}
