//! Plain-text report rendering for CLI mode.
//!
//! Produces the same per-record report as the TUI, as plain text suitable
//! for a file or stdout: identifier, GC content, protein translation, and a
//! base composition table with an ASCII bar chart. The same display toggles
//! gate the blocks.

use std::io::{self, Write};

use crate::analysis::SequenceStats;
use crate::model::{DisplayToggles, Document};

/// Wrap width for sequence and protein blocks.
const WRAP_WIDTH: usize = 60;
/// Maximum width of an ASCII bar in the composition table.
const BAR_WIDTH: usize = 40;

/// Writes the full report for a document.
///
/// `stats` must be the per-record statistics in the same order as
/// `document.records`; records appear in the output in file order.
pub fn write_report<W: Write>(
    out: &mut W,
    document: &Document,
    stats: &[SequenceStats],
    toggles: &DisplayToggles,
) -> io::Result<()> {
    for (record, record_stats) in document.records.iter().zip(stats) {
        writeln!(out, "Record: {}", record.id)?;
        writeln!(out, "Length: {} bases", record.len())?;

        if record.is_empty() {
            writeln!(out, "Warning: empty sequence (GC content reported as 0%)")?;
        } else {
            writeln!(out, "Sequence:")?;
            for line in textwrap::wrap(&record.data, WRAP_WIDTH) {
                writeln!(out, "  {}", line)?;
            }
        }

        if toggles.show_gc {
            writeln!(out, "GC content: {:.2}%", record_stats.gc_percent)?;
        }

        if toggles.show_translation {
            if record_stats.trimmed {
                writeln!(
                    out,
                    "Note: length is not a multiple of 3, last {} base(s) ignored for translation",
                    record.len() % 3
                )?;
            }
            writeln!(out, "Protein (to first stop):")?;
            if record_stats.protein.is_empty() {
                writeln!(out, "  (empty)")?;
            } else {
                for line in textwrap::wrap(&record_stats.protein, WRAP_WIDTH) {
                    writeln!(out, "  {}", line)?;
                }
            }
        }

        if toggles.show_base_plot && !record_stats.base_counts.is_empty() {
            writeln!(out, "Base composition:")?;
            let max = record_stats.base_counts.values().copied().max().unwrap_or(0);
            for (symbol, count) in &record_stats.base_counts {
                let bar_len = if max == 0 { 0 } else { count * BAR_WIDTH / max };
                writeln!(out, "  {} {:>8}  {}", symbol, count, "#".repeat(bar_len))?;
            }
        }

        writeln!(out)?;
    }

    Ok(())
}
