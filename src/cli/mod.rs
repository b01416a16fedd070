pub mod completions;
pub mod init;
pub mod list;
pub mod show;
pub mod validate;

use clap::{Parser, Subcommand};

/// partcfg - part definition parser and validator
#[derive(Parser, Debug)]
#[command(name = "partcfg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List discovered parts grouped by module kind
    List(list::ListArgs),

    /// Parse and validate part definition files
    Validate(validate::ValidateArgs),

    /// Show one parsed part in full
    Show(show::ShowArgs),

    /// Initialize a project (generates partcfg.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
