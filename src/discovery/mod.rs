//! File discovery and part loading for partcfg projects.
//!
//! This module handles finding and loading all part definition files
//! from a project directory, either by convention (every `.cfg` under
//! the root) or through a `partcfg.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use partcfg::discovery::discover;
//!
//! let result = discover("./my-addon")?;
//! println!("Found {} part files", result.scan.total());
//!
//! let registry = result.into_registry()?;
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::registry::PartRegistry;

pub use loader::{load_part_file, load_parts, LoadOptions};
pub use manifest::Manifest;
pub use scanner::{is_part_file, scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "partcfg.yaml";

/// Result of discovering part files in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default when no partcfg.yaml was found).
    pub manifest: Manifest,

    /// Whether a partcfg.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered part files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// The load options the manifest asks for.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            parse: self.manifest.parse_options(),
            mesh_root: self
                .manifest
                .mesh_root
                .as_ref()
                .map(|root| self.root.join(root)),
        }
    }

    /// Load all discovered parts and build a registry.
    pub fn into_registry(self) -> Result<PartRegistry> {
        let options = self.load_options();
        Ok(load_parts(&self.scan, &options)?.build())
    }
}

/// Discover part files in a project directory.
///
/// Looks for a `partcfg.yaml` manifest in the root. If found, its source
/// paths and excludes drive the scan; otherwise the whole directory is
/// scanned.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let sources = manifest.effective_sources();
    let scan = scan_sources(&sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover part files from specific paths (no manifest lookup).
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else if path.is_file() && is_part_file(path) {
            scan.parts.push(path.clone());
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert!(result.scan.is_empty());
    }

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("part.cfg"),
            "name = strut\nmodule = Strut\n\n",
        )
        .unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert_eq!(result.scan.total(), 1);
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("partcfg.yaml"),
            "sources:\n  - parts/\nstrict: true\n",
        )
        .unwrap();

        fs::create_dir_all(dir.path().join("parts")).unwrap();
        fs::write(
            dir.path().join("parts/tank.cfg"),
            "name = tank\nmodule = FuelTank\n\n",
        )
        .unwrap();
        // Outside the manifest's sources, so never scanned.
        fs::write(
            dir.path().join("stray.cfg"),
            "name = stray\nmodule = Strut\n\n",
        )
        .unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(result.has_manifest);
        assert!(result.manifest.strict);
        assert_eq!(result.scan.total(), 1);
    }

    #[test]
    fn test_discover_into_registry() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("pod.cfg"),
            "name = pod\nmodule = CommandPod\nmass = 0.8\n\n",
        )
        .unwrap();

        let registry = discover(dir.path()).unwrap().into_registry().unwrap();
        assert!(registry.get("pod").is_some());
    }

    #[test]
    fn test_discover_paths_single_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pod.cfg");
        fs::write(&path, "name = pod\nmodule = CommandPod\n\n").unwrap();

        let result = discover_paths(&[path]).unwrap();
        assert_eq!(result.scan.total(), 1);
    }

    #[test]
    fn test_discover_paths_skips_non_part_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "not a part").unwrap();

        let result = discover_paths(&[path]).unwrap();
        assert!(result.scan.is_empty());
    }

    #[test]
    fn test_load_options_resolve_mesh_root_under_project() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("partcfg.yaml"), "mesh_root: meshes\n").unwrap();

        let result = discover(dir.path()).unwrap();
        let options = result.load_options();

        assert_eq!(options.mesh_root, Some(dir.path().join("meshes")));
    }
}
