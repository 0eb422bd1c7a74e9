//! Location-list driven replacement.
//!
//! Precise mode skips discovery entirely: it rewrites a plain substring in
//! exactly the files named by a [`LocationList`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::address;
use crate::locations::LocationList;

/// Outcome for one listed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path as written in the location list.
    pub file: String,
    pub replacements: usize,
}

/// Aggregate result of a precise run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreciseReport {
    pub total_replacements: usize,
    /// Distinct files that were rewritten, in list order.
    pub modified_files: Vec<String>,
    /// Listed files not present under the root.
    pub missing_files: Vec<String>,
    /// Listed files whose content held no occurrence of the old address.
    pub untouched_files: Vec<String>,
    /// Listed files that could not be read or written; counted as zero replacements.
    pub failed_files: Vec<String>,
    /// Records whose pattern no longer matched their file before rewriting.
    pub stale_records: Vec<String>,
    pub changes: Vec<FileChange>,
}

/// Replace every plain occurrence of `old` in `content`, returning the count.
pub fn replace_plain(content: &str, old: &str, new: &str) -> (String, usize) {
    if old.is_empty() {
        return (content.to_string(), 0);
    }
    let count = content.matches(old).count();
    if count == 0 {
        return (content.to_string(), 0);
    }
    (content.replace(old, new), count)
}

/// Rewrite one file in place; writes only when the content changed.
pub fn rewrite_file(path: &Path, old: &str, new: &str) -> Result<usize> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let (updated, count) = replace_plain(&content, old, new);
    if updated != content {
        fs::write(path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(count)
}

/// Apply `old` → `new` to every distinct file in `list`, resolved against `root`.
///
/// Missing files and per-file IO failures are recorded, logged, and skipped.
pub fn apply_locations(root: &Path, list: &LocationList, old: &str, new: &str) -> PreciseReport {
    let mut report = PreciseReport::default();

    for file in list.distinct_files() {
        let path = root.join(file);
        if !path.is_file() {
            tracing::warn!("Listed file not found: {}", path.display());
            report.missing_files.push(file.to_string());
            continue;
        }

        note_stale_records(&path, list, file, &mut report);

        let replacements = match rewrite_file(&path, old, new) {
            Ok(count) => count,
            Err(err) => {
                tracing::error!("{err:#}");
                report.failed_files.push(file.to_string());
                continue;
            }
        };

        if replacements > 0 {
            report.total_replacements += replacements;
            report.modified_files.push(file.to_string());
        } else {
            report.untouched_files.push(file.to_string());
        }
        report.changes.push(FileChange { file: file.to_string(), replacements });
    }

    report
}

fn note_stale_records(path: &Path, list: &LocationList, file: &str, report: &mut PreciseReport) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for record in list.records_for(file) {
        // Patterns were validated when the list was loaded.
        let Ok(re) = record.compile() else { continue };
        if !re.is_match(&content) {
            tracing::warn!(
                file = %record.file,
                line = record.line,
                pattern = %record.pattern,
                "location pattern no longer matches"
            );
            report.stale_records.push(format!("{}:{}", record.file, record.line));
        }
    }
}

/// Result of inspecting the sample file for the address currently in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Found(String),
    /// The sample file does not exist.
    MissingFile,
    /// The sample file could not be read.
    Unreadable(String),
    /// The sample file holds no `192.168.x.x` address.
    NoMatch,
}

impl Detection {
    pub fn address(&self) -> Option<&str> {
        match self {
            Detection::Found(ip) => Some(ip),
            _ => None,
        }
    }
}

/// Look for the first `192.168.x.x` address in `root/sample_file`.
pub fn detect_current_address(root: &Path, sample_file: &str) -> Detection {
    let path = root.join(sample_file);
    if !path.is_file() {
        return Detection::MissingFile;
    }
    match fs::read_to_string(&path) {
        Ok(content) => match address::first_private_192_168(&content) {
            Some(ip) => Detection::Found(ip.to_string()),
            None => Detection::NoMatch,
        },
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}", path.display());
            Detection::Unreadable(err.to_string())
        }
    }
}
