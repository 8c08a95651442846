use anyhow::Result;
use clap::Parser;
use relato::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            request,
            format,
            output,
        } => relato::commands::generate(request, format.into(), output),
        Commands::Init { force } => relato::commands::init_config(force),
    }
}
