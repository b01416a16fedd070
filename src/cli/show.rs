//! Show command implementation.
//!
//! Prints one parsed part, either human-readable or as JSON on stdout.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, load_part_file, LoadOptions};
use crate::error::{PartError, Result};
use crate::output::Printer;
use crate::types::PartDefinition;

/// Show one parsed part in full
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Part name, or a path to a .cfg file
    pub part: String,

    /// Directory to search when a name is given (default: current directory)
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Emit the part as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs, printer: &Printer) -> Result<()> {
    let part = resolve_part(&args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&part).map_err(|e| PartError::Build {
            message: format!("Failed to serialize part: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    print_part(&part, printer);
    Ok(())
}

fn resolve_part(args: &ShowArgs) -> Result<PartDefinition> {
    let as_path = Path::new(&args.part);
    if as_path.is_file() {
        return load_part_file(as_path, &LoadOptions::default());
    }

    let discovery = discover(&args.dir)?;
    let options = discovery.load_options();
    let registry = crate::discovery::load_parts(&discovery.scan, &options)?.build();

    registry
        .get(&args.part)
        .cloned()
        .ok_or_else(|| PartError::Build {
            message: format!("No part named '{}' found", args.part),
            help: Some("Run `partcfg list` to see what was discovered".to_string()),
        })
}

fn print_part(part: &PartDefinition, printer: &Printer) {
    printer.info("Part", &format!("{} ({})", part.display_name(), part.module));

    let line = |label: &str, value: String| {
        if !value.is_empty() {
            eprintln!("  {:<14} {}", printer.bold(label), value);
        }
    };

    line("name", part.name.clone());
    line("author", part.author.clone());
    line("manufacturer", part.manufacturer.clone());
    line("description", part.description.clone());
    if let Some(mesh) = &part.mesh {
        line("mesh", mesh.reference.clone());
    }
    if part.cost != 0 {
        line("cost", part.cost.to_string());
    }
    if part.mass != 0.0 {
        line("mass", part.mass.to_string());
    }
    if part.crash_tolerance != 0.0 {
        line("crash tol.", part.crash_tolerance.to_string());
    }
    if part.max_temp != 0.0 {
        line("max temp", part.max_temp.to_string());
    }

    let rules = part.attach_rules.to_flags();
    line(
        "attach",
        format!(
            "stack={} surface={} allowStack={} allowSurface={} allowCollision={}",
            rules[0], rules[1], rules[2], rules[3], rules[4]
        ),
    );

    for node in &part.nodes {
        line(
            "node",
            format!("{} @ ({}) up ({})", node.name, node.position, node.up),
        );
    }
}
