use clap::Parser;
use miette::Result;
use artlens::cli::{Cli, Commands};
use artlens::output::Printer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => artlens::cli::generate::run(args, &printer)?,
        Commands::Palettes(args) => artlens::cli::palettes::run(args, &printer)?,
        Commands::Styles(args) => artlens::cli::styles::run(args, &printer)?,
        Commands::List(args) => artlens::cli::list::run(args, &printer)?,
        Commands::Init(args) => artlens::cli::init::run(args, &printer)?,
        Commands::Completions(args) => artlens::cli::completions::run(args)?,
    }

    Ok(())
}
