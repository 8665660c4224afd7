//! Per-record sequence statistics.
//!
//! The analyzer is a pure function from a record to its statistics:
//! GC content, protein translation, and base composition. Calling it twice
//! on the same record yields identical results.
//!
//! Normalization policy: the sequence is uppercased once before analysis,
//! so GC counting, translation, and base composition all see the same
//! symbols regardless of the case used in the input file.

use std::collections::BTreeMap;

use crate::genetic_code::CodonTable;
use crate::model::SequenceRecord;

/// Statistics derived from one sequence record.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceStats {
    /// GC content as a percentage in [0, 100].
    ///
    /// Empty sequences report 0.0 by convention rather than an undefined
    /// ratio.
    pub gc_percent: f64,
    /// Protein translated from position 0 up to the first stop codon
    /// (exclusive); possibly empty
    pub protein: String,
    /// Occurrences of each symbol in the full, untrimmed sequence.
    ///
    /// A `BTreeMap` keeps the symbols in ascending order for display.
    pub base_counts: BTreeMap<char, usize>,
    /// True iff the sequence length was not a multiple of 3 and trailing
    /// symbols were ignored for translation
    pub trimmed: bool,
}

impl SequenceStats {
    /// Sum of all base composition counts.
    ///
    /// Always equals the length of the original sequence.
    pub fn total_bases(&self) -> usize {
        self.base_counts.values().sum()
    }
}

/// Analyzes one record.
///
/// Translation uses the first `len - len % 3` symbols; a sequence shorter
/// than 3 symbols yields an empty protein. Codons containing symbols
/// outside A/C/G/T translate to the `X` placeholder and translation
/// continues (see [`CodonTable::translate_codon`]).
pub fn analyze(record: &SequenceRecord, table: &CodonTable) -> SequenceStats {
    let symbols: Vec<char> = record.data.chars().map(|c| c.to_ascii_uppercase()).collect();

    let gc_percent = gc_percent(&symbols);

    let trimmed_len = symbols.len() - symbols.len() % 3;
    let trimmed = trimmed_len != symbols.len();
    let protein = table.translate_to_stop(&symbols[..trimmed_len]);

    let mut base_counts = BTreeMap::new();
    for &c in &symbols {
        *base_counts.entry(c).or_insert(0) += 1;
    }

    SequenceStats {
        gc_percent,
        protein,
        base_counts,
        trimmed,
    }
}

/// GC content of an uppercased symbol slice, as a percentage.
///
/// Ambiguity codes never count as G/C but remain in the denominator, so
/// this is a direct count-over-length formula. Empty input reports 0.0.
fn gc_percent(symbols: &[char]) -> f64 {
    if symbols.is_empty() {
        return 0.0;
    }
    let gc = symbols.iter().filter(|&&c| c == 'G' || c == 'C').count();
    gc as f64 / symbols.len() as f64 * 100.0
}
