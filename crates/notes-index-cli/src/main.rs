use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use notes_index_core::{Config, IndexGenerator, IndexReport, Result};

mod args;
use args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = if cli.init {
        handle_init(&cli)
    } else {
        handle_generate(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_init(cli: &Cli) -> Result<()> {
    let path = Config::init(&cli.root)?;
    if !cli.quiet {
        println!("{} {}", "Initialized:".green(), path.display());
    }
    Ok(())
}

fn handle_generate(cli: &Cli) -> Result<()> {
    let generator = IndexGenerator::from_root(&cli.root)?;
    if cli.verbose {
        print_settings(&generator);
    }

    if cli.stdout {
        let report = generator.build()?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(report.content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let report = generator.generate()?;
    if !cli.quiet {
        print_report(&report, cli.verbose);
    }
    Ok(())
}

fn print_settings(generator: &IndexGenerator) {
    let index = &generator.config().index;
    eprintln!("{} {}", "Root:".cyan(), generator.root().display());
    eprintln!(
        "{} header={} footer={} extension={}",
        "Config:".cyan(),
        index.header.display(),
        index.footer.display(),
        index.extension
    );
}

fn print_report(report: &IndexReport, verbose: bool) {
    if verbose {
        println!();
        for (category, count) in &report.categories {
            println!("  {} {}", category.cyan(), format!("({})", count).dimmed());
        }
        println!();
    }

    println!(
        "{} {} ({} notes, {} categories)",
        "Wrote:".green(),
        report.output.display(),
        report.note_count,
        report.categories.len()
    );
}
