use clap::Parser;
use miette::Result;
use appicon::cli::{Cli, Commands};
use appicon::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => {
            appicon::cli::render::run(args, &printer)?;
        }
        Commands::Resize(args) => {
            appicon::cli::resize::run(args, &printer)?;
        }
        Commands::Init(args) => appicon::cli::init::run(args, &printer)?,
        Commands::Completions(args) => appicon::cli::completions::run(args)?,
    }

    Ok(())
}
