//! Validate command implementation.
//!
//! Parses every discovered part file, then runs the content checks over
//! the parts that parsed. All findings are printed together; the exit
//! status reflects whether any were errors.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths, load_part_file};
use crate::error::{PartError, Result};
use crate::output::{display_path, plural, Printer};
use crate::registry::RegistryBuilder;
use crate::validation::{validate_registry, Severity};

/// Parse and validate part definition files
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files or directories to validate (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Tighten the parse: report malformed lines, reject garbage flags
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.paths.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.paths)?
    };

    let mut options = discovery.load_options();
    if args.strict {
        options.parse = crate::parser::ParseOptions::strict();
    }

    let total = discovery.scan.total();
    printer.status("Validating", &plural(total, "part file", "part files"));

    // Parse each file on its own so one broken definition does not hide
    // findings in the rest.
    let mut builder = RegistryBuilder::new();
    let mut parse_errors = 0usize;
    for path in &discovery.scan.parts {
        match load_part_file(path, &options) {
            Ok(part) => {
                builder.add_part(part);
            }
            Err(e) => {
                parse_errors += 1;
                printer.error("error", &format!("{}: {}", display_path(path), e));
            }
        }
    }

    let registry = builder.build();
    let result = validate_registry(&registry);

    for diagnostic in result.iter() {
        let is_error = diagnostic.severity == Severity::Error;
        let label = printer.severity(&diagnostic.severity.to_string(), is_error);
        eprintln!("{}: {} {}", label, diagnostic.message, printer.dim(&diagnostic.code));
        if let Some(help) = &diagnostic.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }

    let errors = parse_errors + result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        return Err(PartError::Build {
            message: format!(
                "validation failed: {}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
            help: None,
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} ok, {}",
            plural(registry.len(), "part", "parts"),
            plural(warnings, "warning", "warnings")
        ),
    );

    Ok(())
}
