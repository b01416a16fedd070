use clap::Parser;
use miette::Result;
use partcfg::cli::{Cli, Commands};
use partcfg::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::List(args) => partcfg::cli::list::run(args, &printer)?,
        Commands::Validate(args) => partcfg::cli::validate::run(args, &printer)?,
        Commands::Show(args) => partcfg::cli::show::run(args, &printer)?,
        Commands::Init(args) => partcfg::cli::init::run(args, &printer)?,
        Commands::Completions(args) => partcfg::cli::completions::run(args)?,
    }

    Ok(())
}
