use std::path::PathBuf;

use anyhow::Result;

use crate::canonicalize_or_current;

pub const RULE_WIDTH: usize = 60;

/// Why a run stopped or how it finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Replacements were applied.
    Completed { files_modified: usize, total_replacements: usize, new_ip: String },
    /// Scan mode found nothing to rewrite.
    NothingFound,
    /// Old and new addresses are identical.
    Unchanged,
    /// Stopped before touching any file.
    Aborted(String),
}

/// Print a horizontal separator line.
pub fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Print `message` and return it as an aborted outcome.
pub fn abort(message: impl Into<String>) -> RunOutcome {
    let message = message.into();
    println!("{message}");
    RunOutcome::Aborted(message)
}

/// Resolve the project root; `None` when it is not an existing directory.
pub fn resolve_project_root(project_path: &str) -> Result<Option<PathBuf>> {
    let root = canonicalize_or_current(project_path)?;
    if root.is_dir() {
        Ok(Some(root))
    } else {
        println!("Project path not found: {}", root.display());
        Ok(None)
    }
}
