//! Location list for precise mode.
//!
//! A location list is a hand-maintained data file naming the files (and
//! approximate lines) where an address is known to be hardcoded. YAML is the
//! default format; files ending in `.json` are parsed as JSON.

use std::fs;
use std::path::{Component, Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Failed to read location list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse location list {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid pattern for {file}:{line}: {source}")]
    InvalidPattern {
        file: String,
        line: u32,
        #[source]
        source: regex::Error,
    },

    #[error("Location entry #{index} has an empty file path")]
    EmptyPath { index: usize },

    #[error("Location entry #{index} points outside the project root: {file}")]
    OutsideRoot { index: usize, file: String },
}

/// One known hardcoded site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Path relative to the project root.
    pub file: String,
    /// Approximate line number; informational only.
    pub line: u32,
    /// Regex describing the hardcoded expression at this site.
    pub pattern: String,
}

impl LocationRecord {
    pub fn new(file: impl Into<String>, line: u32, pattern: impl Into<String>) -> Self {
        Self { file: file.into(), line, pattern: pattern.into() }
    }

    /// True when `file` is relative and has no `..` component.
    pub fn stays_under_root(&self) -> bool {
        let path = Path::new(&self.file);
        !path.has_root()
            && path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    }

    pub fn compile(&self) -> Result<Regex, LocationError> {
        Regex::new(&self.pattern).map_err(|source| LocationError::InvalidPattern {
            file: self.file.clone(),
            line: self.line,
            source,
        })
    }
}

/// Ordered collection of location records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationList {
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
}

impl LocationList {
    pub fn new(locations: Vec<LocationRecord>) -> Self {
        Self { locations }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Distinct file paths in first-seen order.
    pub fn distinct_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = Vec::new();
        for record in &self.locations {
            if !files.contains(&record.file.as_str()) {
                files.push(&record.file);
            }
        }
        files
    }

    /// Records pointing at `file`.
    pub fn records_for<'a>(&'a self, file: &'a str) -> impl Iterator<Item = &'a LocationRecord> {
        self.locations.iter().filter(move |r| r.file == file)
    }

    /// Check every record has a relative path under the root and a compilable pattern.
    pub fn validate(&self) -> Result<(), LocationError> {
        for (index, record) in self.locations.iter().enumerate() {
            if record.file.trim().is_empty() {
                return Err(LocationError::EmptyPath { index });
            }
            if !record.stays_under_root() {
                return Err(LocationError::OutsideRoot { index, file: record.file.clone() });
            }
            record.compile()?;
        }
        Ok(())
    }

    /// Parse a location list body; `is_json` picks the format.
    pub fn parse(body: &str, is_json: bool, path: &Path) -> Result<Self, LocationError> {
        let parsed: Result<Self, String> = if is_json {
            serde_json::from_str(body).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(body).map_err(|e| e.to_string())
        };
        let list =
            parsed.map_err(|message| LocationError::Parse { path: path.to_path_buf(), message })?;
        list.validate()?;
        Ok(list)
    }

    /// Load and validate a location list from disk.
    pub fn load(path: &Path) -> Result<Self, LocationError> {
        let body = fs::read_to_string(path)
            .map_err(|source| LocationError::Read { path: path.to_path_buf(), source })?;
        let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
        Self::parse(&body, is_json, path)
    }
}
