//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use super::commands;
use transpose::config::GlobalConfig;
use transpose::output::OutputMode;

/// transpose - find the longest word in text files and print it transposed
#[derive(Parser, Debug)]
#[command(
    name = "transpose",
    version,
    about = "Find the longest word in text files and print it transposed",
    long_about = "Read one or more plain-text files, find the longest word\n\
                  across all lines and print it together with its reversed\n\
                  copy.\n\n\
                  Point it at a single file with -f, or at a folder with -p\n\
                  to process every text file beneath it in parallel.",
    group(ArgGroup::new("input").required(true).args(["file", "path"]))
)]
pub struct Cli {
    /// Path to the file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Path to the folder with multiple files
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Enable debugging mode
    #[arg(short, long, conflicts_with = "silent")]
    pub debug: bool,

    /// Enable silent (only critical) mode
    #[arg(short, long)]
    pub silent: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "debug"
    } else if cli.silent {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = GlobalConfig::load();
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match (cli.file, cli.path) {
        (Some(file), None) => commands::file(&file, &config, mode),
        (None, Some(path)) => commands::dir(&path, &config, mode),
        _ => anyhow::bail!("No files requested, add -f file_name or -p path_to_files"),
    }
}
