//! CLI argument definitions using clap derive

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catr")]
#[command(author, version, about = "Print files with automatic encoding detection")]
#[command(
    long_about = "Concatenate files to standard output. Each file's text encoding is sniffed before reading, so non-UTF8 files print correctly."
)]
pub struct Cli {
    /// Add line numbers at the beginning of each line
    #[arg(short = 'n', long = "number")]
    pub number: bool,

    /// Add a dollar sign at the end of each line
    #[arg(short = 'E', long = "show-ends")]
    pub show_ends: bool,

    /// Print chunk by chunk, waiting for Enter between chunks (debug)
    #[arg(short = 'p', long = "paged", conflicts_with_all = ["number", "show_ends"])]
    pub paged: bool,

    /// Report each file's detected encoding on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Takes file(s) as input
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
