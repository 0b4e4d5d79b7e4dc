use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iconmod")]
#[command(about = "Migrates Svelte icon components to the Svelte 5 props convention", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing the icon components
    #[arg(default_value = "./src/lib/icons")]
    pub path: PathBuf,

    /// File extension of candidate components
    #[arg(long, default_value = "svelte")]
    pub extension: String,

    /// File names to leave untouched, e.g. components migrated by hand
    /// (can be repeated)
    #[arg(long = "skip", default_value = "Home.svelte")]
    pub skip: Vec<String>,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
