//! Init command implementation.
//!
//! Generates a `partcfg.yaml` manifest from the discovered layout.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, MANIFEST_FILENAME};
use crate::error::{PartError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a project by generating a partcfg.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing partcfg.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(PartError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let discovery = discover(&args.path)?;

    // Collect unique top-level part directories, relative to the root.
    let mut source_dirs = BTreeSet::new();
    for file in &discovery.scan.parts {
        if let Some(parent) = file.parent() {
            let relative = parent.strip_prefix(&discovery.root).unwrap_or(parent);
            // A part usually lives in its own folder inside a parts
            // directory; the scan source is that top-level directory.
            let top = relative
                .components()
                .next()
                .map(|c| c.as_os_str().to_string_lossy().into_owned());

            match top {
                Some(dir) => source_dirs.insert(format!("{}/", dir)),
                None => source_dirs.insert(".".to_string()),
            };
        }
    }

    // Build YAML manually for clean formatting.
    let mut yaml = String::new();
    if !source_dirs.is_empty() && !source_dirs.contains(".") {
        yaml.push_str("sources:\n");
        for dir in &source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }
    yaml.push_str("strict: false\n");

    fs::write(&manifest_path, &yaml).map_err(|e| PartError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    let total = discovery.scan.total();
    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(total, "part file", "part files")
        ),
    );

    Ok(())
}

/// Whether a directory already carries a manifest.
pub fn has_manifest(dir: &Path) -> bool {
    dir.join(MANIFEST_FILENAME).is_file()
}
