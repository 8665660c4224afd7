//! Standard genetic code and translation logic.
//!
//! This module provides:
//! - The standard codon table (NCBI translation table 1)
//! - Codon to amino acid translation
//! - Whole-sequence translation up to the first stop codon

use std::collections::HashMap;

/// Amino acids for all 64 codons in NCBI order (TTT, TTC, TTA, TTG, TCT, ...).
const STANDARD_NCBIEAA: &str = "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Marker for stop codons in the table.
pub const STOP: char = '*';

/// Placeholder emitted for codons that cannot be looked up (ambiguity codes
/// such as N, or any symbol outside A/C/G/T).
pub const UNKNOWN_AA: char = 'X';

/// The codon to amino acid table for the standard genetic code.
#[derive(Debug, Clone)]
pub struct CodonTable {
    /// Codon to amino acid mapping (64 entries)
    codon_table: HashMap<String, char>,
}

impl CodonTable {
    /// Builds the standard codon table from the NCBI format string.
    pub fn standard() -> Self {
        let bases = ['T', 'C', 'A', 'G'];
        let mut codon_table = HashMap::with_capacity(64);

        // NCBI order: TTT, TTC, TTA, TTG, TCT, TCC, ... (Base1, Base2, Base3)
        let mut amino_acids = STANDARD_NCBIEAA.chars();
        for &b1 in &bases {
            for &b2 in &bases {
                for &b3 in &bases {
                    let codon: String = [b1, b2, b3].iter().collect();
                    let aa = amino_acids.next().unwrap_or(UNKNOWN_AA);
                    codon_table.insert(codon, aa);
                }
            }
        }

        Self { codon_table }
    }

    /// Translates a single codon to an amino acid.
    ///
    /// # Rules:
    /// - Lookup is case-insensitive, and RNA `U` is treated as `T`
    /// - Stop codons translate to [`STOP`]
    /// - Codons containing any symbol outside A, C, G, T (e.g., the
    ///   ambiguity code N) translate to [`UNKNOWN_AA`] instead of failing
    pub fn translate_codon(&self, codon: &str) -> char {
        if codon.chars().count() != 3 {
            return UNKNOWN_AA;
        }

        // Normalize: uppercase and convert U to T for RNA
        let codon_dna: String = codon
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .map(|c| if c == 'U' { 'T' } else { c })
            .collect();

        let valid_nucleotides = codon_dna.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'T'));
        if !valid_nucleotides {
            return UNKNOWN_AA; // Ambiguous nucleotide
        }

        self.codon_table.get(&codon_dna).copied().unwrap_or(UNKNOWN_AA)
    }

    /// Translates a nucleotide sequence in non-overlapping codons starting
    /// at position 0, stopping at the first stop codon.
    ///
    /// The stop marker itself is excluded from the output. A trailing
    /// partial codon (fewer than 3 symbols) is never translated, so callers
    /// that trim to a multiple of 3 and callers that do not get the same
    /// protein. Translation always starts at position 0; there is no scan
    /// for a start codon.
    pub fn translate_to_stop(&self, symbols: &[char]) -> String {
        let mut protein = String::with_capacity(symbols.len() / 3);

        for codon in symbols.chunks_exact(3) {
            let codon: String = codon.iter().collect();
            let aa = self.translate_codon(&codon);
            if aa == STOP {
                break;
            }
            protein.push(aa);
        }

        protein
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_standard_code_translation() {
        let table = CodonTable::standard();

        // Test some common codons
        assert_eq!(table.translate_codon("ATG"), 'M'); // Start codon
        assert_eq!(table.translate_codon("TAA"), '*'); // Stop codon
        assert_eq!(table.translate_codon("TAG"), '*'); // Stop codon
        assert_eq!(table.translate_codon("TGA"), '*'); // Stop codon
        assert_eq!(table.translate_codon("TTT"), 'F'); // Phenylalanine
        assert_eq!(table.translate_codon("GCC"), 'A'); // Alanine
        assert_eq!(table.translate_codon("GGG"), 'G'); // Glycine
    }

    #[test]
    fn test_rna_translation() {
        let table = CodonTable::standard();

        // U should be treated as T
        assert_eq!(table.translate_codon("AUG"), 'M');
        assert_eq!(table.translate_codon("UUU"), 'F');
    }

    #[test]
    fn test_ambiguous_nucleotides() {
        let table = CodonTable::standard();

        // Ambiguous nucleotides → X
        assert_eq!(table.translate_codon("ATN"), 'X');
        assert_eq!(table.translate_codon("NNN"), 'X');
        assert_eq!(table.translate_codon("CTR"), 'X'); // R = A or G
    }

    #[test]
    fn test_case_insensitive() {
        let table = CodonTable::standard();

        assert_eq!(table.translate_codon("atg"), 'M');
        assert_eq!(table.translate_codon("AtG"), 'M');
    }

    #[test]
    fn test_translate_stops_at_first_stop() {
        let table = CodonTable::standard();

        // ATG GCC TAA → M, A, stop (stop excluded)
        assert_eq!(table.translate_to_stop(&chars("ATGGCCTAA")), "MA");

        // Codons after the stop are never reached
        assert_eq!(table.translate_to_stop(&chars("TAAATGATG")), "");
    }

    #[test]
    fn test_translate_without_stop() {
        let table = CodonTable::standard();

        // GCG CGC GCG → A, R, A, no stop anywhere
        assert_eq!(table.translate_to_stop(&chars("GCGCGCGCG")), "ARA");
    }

    #[test]
    fn test_translate_unknown_codon_continues() {
        let table = CodonTable::standard();

        // ANG is ambiguous, translation continues with a placeholder
        assert_eq!(table.translate_to_stop(&chars("ANGATG")), "XM");
    }

    #[test]
    fn test_translate_ignores_partial_codon() {
        let table = CodonTable::standard();

        assert_eq!(table.translate_to_stop(&chars("ATGGC")), "M");
        assert_eq!(table.translate_to_stop(&chars("GC")), "");
        assert_eq!(table.translate_to_stop(&chars("")), "");
    }
}
