use anyhow::Result;
use clap::Parser;
use iconmod::cli::Cli;
use iconmod::commands::migrate::{migrate_directory, MigrateConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = MigrateConfig {
        path: cli.path,
        extension: cli.extension,
        skip: cli.skip,
    };
    migrate_directory(&config)?;
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
