//! Word Pack - CLI
//!
//! Filters the master Wordle list down to words without repeated letters and
//! writes them as a packed program-memory header.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use word_pack::{
    commands::{
        GenerateConfig, check,
        generate::{DEFAULT_INPUT, DEFAULT_OUTPUT},
        generate,
    },
    output::{print_check_result, print_generate_result},
};

#[derive(Parser)]
#[command(
    name = "word_pack",
    about = "Generate a packed PROGMEM word list of 5-letter words with no repeated letters",
    version,
    author
)]
struct Cli {
    /// Master word list, one word per line
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Header to write (overwritten if present)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of words to show from each end of the sorted list
    #[arg(short, long, default_value = "10")]
    preview: usize,

    /// Only verify that the existing header matches the word list
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GenerateConfig {
        input: cli.input,
        output: cli.output,
        preview: cli.preview,
        ..GenerateConfig::default()
    };

    if cli.check {
        let result = check(&config)?;
        print_check_result(&result);
        if !result.up_to_date {
            bail!("{} is out of date", result.output.display());
        }
        return Ok(());
    }

    let result = generate(&config)?;
    print_generate_result(&result, config.preview);
    Ok(())
}
