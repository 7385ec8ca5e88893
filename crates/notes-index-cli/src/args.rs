use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "notes-index")]
#[command(about = "Generate a categorized README index from a directory of markdown notes")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Notes root directory
    #[arg(short = 'C', long, default_value = ".")]
    pub root: PathBuf,

    /// Print the generated index instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Write a default .notes/config.toml and exit
    #[arg(long, conflicts_with = "stdout")]
    pub init: bool,
}
