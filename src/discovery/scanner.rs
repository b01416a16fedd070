//! File system scanner for discovering part definition files.
//!
//! Recursively scans directories for `.cfg` files, honoring the
//! manifest's exclude patterns.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Result of scanning for part files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered part definition files.
    pub parts: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of discovered files.
    pub fn total(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.parts.extend(other.parts);
    }
}

/// Whether a path names a part definition file.
pub fn is_part_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "cfg")
}

/// Scan a directory tree for part files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if manifest.is_excluded(path) {
            continue;
        }

        if is_part_file(path) {
            result.parts.push(path.to_path_buf());
        }
    }

    result
}

/// Scan every manifest source, resolved relative to the project root.
pub fn scan_sources(sources: &[String], root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let path = root.join(source);
        result.merge(scan_directory(&path, manifest));
    }

    result
}
