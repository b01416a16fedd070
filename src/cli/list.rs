//! List command implementation.
//!
//! Discovers part files and prints an inventory grouped by module kind.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::registry::PartRegistry;
use crate::types::ModuleKind;

/// List discovered parts grouped by module kind
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Files or directories to scan (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Only list parts of this module kind (wire name, e.g. FuelTank)
    #[arg(long)]
    pub module: Option<String>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.paths.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.paths)?
    };

    let options = discovery.load_options();
    let registry = crate::discovery::load_parts(&discovery.scan, &options)?.build();

    let filter = match args.module.as_deref() {
        Some(name) => match ModuleKind::parse(name) {
            Some(kind) => Some(kind),
            None => {
                return Err(crate::error::PartError::Build {
                    message: format!("'{}' is not a known module kind", name),
                    help: Some(format!(
                        "Known kinds: {}",
                        ModuleKind::ALL.map(|k| k.as_str()).join(", ")
                    )),
                })
            }
        },
        None => None,
    };

    print_inventory(&registry, filter, printer);
    printer.info("Total", &plural(registry.len(), "part", "parts"));

    Ok(())
}

fn print_inventory(registry: &PartRegistry, filter: Option<ModuleKind>, printer: &Printer) {
    for kind in ModuleKind::ALL {
        if filter.is_some_and(|wanted| wanted != kind) {
            continue;
        }

        let names = sorted_names(registry.of_kind(kind).map(|part| part.name.as_str()));
        if names.is_empty() {
            continue;
        }

        printer.info(kind.as_str(), &names.join(", "));
    }
}

fn sorted_names<'a>(iter: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut names: Vec<String> = iter.map(|s| s.to_string()).collect();
    names.sort();
    names
}
