//! Project manifest (partcfg.yaml) parsing.
//!
//! The manifest defines project configuration: source paths to scan for
//! part files, exclude patterns, where mesh references resolve, and
//! whether parsing runs with the lenience knobs tightened.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PartError, Result};
use crate::parser::ParseOptions;

/// Project manifest loaded from partcfg.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for part files.
    /// Defaults to the current directory if empty.
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Directory mesh references resolve under. When unset, mesh
    /// references are recorded without being resolved.
    pub mesh_root: Option<PathBuf>,

    /// Report malformed lines and reject garbage attachment flags
    /// instead of silently ignoring them.
    pub strict: bool,
}

impl Manifest {
    /// Load manifest from a partcfg.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PartError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| PartError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check partcfg.yaml syntax".to_string()),
        })
    }

    /// The parse options this manifest asks for.
    pub fn parse_options(&self) -> ParseOptions {
        if self.strict {
            ParseOptions::strict()
        } else {
            ParseOptions::default()
        }
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    /// Get effective source paths, defaulting to the current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

/// Simple glob pattern matching over display paths.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        // **/dir/* matches anything inside dir anywhere in the path
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.contains(&format!("{}/", dir)) || path.starts_with(&format!("{}/", dir));
        }
        return path.contains(suffix) || path.ends_with(suffix);
    }

    if pattern.starts_with('*') && !pattern.contains('/') {
        // Match file extension or suffix
        return path.ends_with(&pattern[1..]);
    }

    if let Some(prefix) = pattern.strip_suffix("/*") {
        // Match directory contents
        return path.starts_with(&format!("{}/", prefix))
            || path.contains(&format!("/{}/", prefix));
    }

    path.contains(pattern)
}
