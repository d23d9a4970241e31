//! CLI module - argument parsing and the print loop

pub mod args;

pub use args::Cli;

use std::io::{self, BufWriter, Write};

use console::{Key, Term};
use miette::{IntoDiagnostic, Result};

use crate::core::{EncodedReader, LinePrinter, ReadError};

pub fn run(cli: Cli) -> Result<()> {
    // A missing file aborts the whole invocation before anything prints.
    for path in &cli.files {
        if !path.exists() {
            let err = ReadError::NotFound { path: path.clone() };
            return Err(miette::miette!("{}", err));
        }
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut printer = LinePrinter::new(cli.number, cli.show_ends);

    for path in &cli.files {
        let mut reader = EncodedReader::open(path).map_err(|e| miette::miette!("{}", e))?;
        if cli.verbose {
            eprintln!("{}: {}", path.display(), reader.encoding().name());
        }
        if cli.paged {
            if !print_paged(&mut reader, &mut out)? {
                break;
            }
        } else {
            while let Some(chunk) = reader.next_chunk().map_err(|e| miette::miette!("{}", e))? {
                printer.write_chunk(&chunk, &mut out).into_diagnostic()?;
            }
            printer.finish(&mut out).into_diagnostic()?;
        }
    }
    out.flush().into_diagnostic()?;
    Ok(())
}

/// Gate each chunk on an Enter keypress at the terminal. Returns false
/// when the user interrupts with Ctrl-C, which skips any remaining files.
fn print_paged<W: Write>(reader: &mut EncodedReader, out: &mut W) -> Result<bool> {
    let term = Term::stderr();
    while let Some(chunk) = reader.next_chunk().map_err(|e| miette::miette!("{}", e))? {
        loop {
            match term.read_key().into_diagnostic()? {
                Key::Enter => break,
                Key::CtrlC => return Ok(false),
                _ => {}
            }
        }
        writeln!(out, "{}", chunk).into_diagnostic()?;
        out.flush().into_diagnostic()?;
    }
    Ok(true)
}
