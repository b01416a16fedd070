//! Part loader - parses discovered files into a registry builder.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{DeferredMeshSource, FsMeshSource, MeshSource};
use crate::error::{PartError, Result};
use crate::parser::{parse_part_with, ParseOptions};
use crate::registry::RegistryBuilder;
use crate::types::PartDefinition;

use super::scanner::ScanResult;

/// Options for loading parts.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Lenience knobs for each parse.
    pub parse: ParseOptions,
    /// When set, mesh references resolve under this directory and a
    /// missing mesh fails the part's load. Otherwise references are
    /// recorded unresolved.
    pub mesh_root: Option<PathBuf>,
}

/// Load parts from a scan result into a `RegistryBuilder`.
///
/// Every discovered file is parsed; failures are collected and reported
/// together so one broken definition does not hide the rest.
pub fn load_parts(scan: &ScanResult, options: &LoadOptions) -> Result<RegistryBuilder> {
    let mut builder = RegistryBuilder::new();
    let mut errors: Vec<String> = Vec::new();

    for path in &scan.parts {
        match load_part_file(path, options) {
            Ok(part) => {
                builder.add_part(part);
            }
            Err(e) => {
                errors.push(format!("{}: {}", path.display(), e));
            }
        }
    }

    if !errors.is_empty() {
        return Err(PartError::Build {
            message: format!(
                "Failed to load {} file(s):\n  {}",
                errors.len(),
                errors.join("\n  ")
            ),
            help: Some("Fix the errors above and try again".to_string()),
        });
    }

    Ok(builder)
}

/// Parse one part definition file.
///
/// A part whose `name` line is missing falls back to its parent
/// directory name, matching how part folders are laid out on disk.
pub fn load_part_file(path: &Path, options: &LoadOptions) -> Result<PartDefinition> {
    let content = fs::read_to_string(path).map_err(|e| PartError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut part = match &options.mesh_root {
        Some(root) => parse_part_with(&content, &options.parse, &FsMeshSource::new(root)),
        None => parse_part_with(&content, &options.parse, &DeferredMeshSource),
    }?;

    if part.name.is_empty() {
        if let Some(folder) = path.parent().and_then(|p| p.file_name()) {
            part.name = folder.to_string_lossy().into_owned();
        }
    }

    Ok(part)
}
