//! bioseqtk - Terminal DNA Sequence Toolkit
//!
//! Analyze DNA FASTA files: GC content, protein translation, and base
//! composition, per record.
//!
//! ## Usage
//!
//! ```bash
//! bioseqtk sequences.fasta              # interactive TUI
//! bioseqtk sequences.fasta -o report.txt  # plain-text report
//! bioseqtk sequences.fasta -o -         # report to stdout
//! ```
//!
//! ## Keys (TUI)
//!
//! - `j/k`: select record
//! - `g`, `t`, `b`: toggle GC / translation / base chart
//! - `:q`: quit
//! - `:h`: help

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bioseqtk::analysis::{analyze, SequenceStats};
use bioseqtk::controller::run_app;
use bioseqtk::fasta::parse_fasta_file;
use bioseqtk::genetic_code::CodonTable;
use bioseqtk::model::{AppState, DisplayToggles, Document};
use bioseqtk::report::write_report;

/// Runs CLI mode: analyze every record and write a plain-text report.
fn run_cli_mode(document: &Document, toggles: &DisplayToggles, output: &str) -> Result<()> {
    let table = CodonTable::standard();
    let stats: Vec<SequenceStats> = document.records.iter().map(|r| analyze(r, &table)).collect();

    if output == "-" {
        // Write to stdout
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_report(&mut handle, document, &stats, toggles)?;
    } else {
        // Write to file
        let mut file = std::fs::File::create(output)
            .with_context(|| format!("Failed to create output file: {}", output))?;
        write_report(&mut file, document, &stats, toggles)?;
        file.flush()?;
        eprintln!("Wrote report for {} record(s) to {}", document.record_count(), output);
    }

    Ok(())
}

/// bioseqtk - GC content, protein translation, and base composition for DNA FASTA files
///
/// When run without -o/--output, opens an interactive TUI viewer.
/// With -o/--output, runs in CLI mode and writes a plain-text report to a
/// file (or stdout with "-").
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// DNA FASTA file to analyze (.fasta, .fa)
    file: PathBuf,

    /// Output file for a plain-text report (enables CLI mode). Use "-" for stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Hide the GC content line
    #[arg(long = "no-gc")]
    no_gc: bool,

    /// Hide the protein translation block
    #[arg(long = "no-translation")]
    no_translation: bool,

    /// Hide the base composition chart
    #[arg(long = "no-base-plot")]
    no_base_plot: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // All toggles default on, matching the original checkbox defaults
    let toggles = DisplayToggles {
        show_gc: !args.no_gc,
        show_translation: !args.no_translation,
        show_base_plot: !args.no_base_plot,
    };

    // Parse-level errors abort before any record output
    let document = parse_fasta_file(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    if let Some(output) = args.output {
        run_cli_mode(&document, &toggles, &output)?;
    } else {
        run_app(AppState::new(document, toggles))?;
    }

    Ok(())
}
