//! FASTA file parser.
//!
//! This module handles reading and tokenizing FASTA format input.
//! It supports both single-line and multi-line sequences.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```
//!
//! Records are returned in file order. Case is preserved as-is; the
//! analyzer normalizes. A header with no sequence lines yields a record
//! with an empty sequence, which the analyzer handles per its documented
//! empty-sequence convention.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::model::{Document, SequenceRecord};

/// Errors that can occur during FASTA parsing.
///
/// All of these abort the whole batch; per-record anomalies (empty
/// sequences, odd lengths) are not errors at this layer.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input is not valid UTF-8 text: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("No FASTA records found: input has no '>' header line")]
    NoRecords,

    #[error("Empty sequence identifier at line {0}")]
    EmptyIdentifier(usize),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Parses FASTA content from a string.
///
/// A record begins at a line starting with `>`; the remainder of that line
/// up to the first whitespace is the identifier. All following lines until
/// the next `>` or end of input are concatenated, with whitespace stripped,
/// to form the sequence. Text before the first header is ignored.
pub fn parse_fasta_str(content: &str) -> FastaResult<Document> {
    let mut records = Vec::new();
    let mut current_id: Option<String> = None;
    let mut current_seq = String::new();
    let mut line_number = 0;

    for line in content.lines() {
        line_number += 1;
        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            // Save previous record, keeping it even when its sequence is empty
            if let Some(id) = current_id.take() {
                records.push(SequenceRecord::new(id, std::mem::take(&mut current_seq)));
            }

            // Identifier is everything before the first whitespace
            let id = header.split_whitespace().next().unwrap_or("");
            if id.is_empty() {
                return Err(FastaError::EmptyIdentifier(line_number));
            }

            current_id = Some(id.to_string());
        } else if current_id.is_some() {
            // Sequence line: append with any internal whitespace removed
            if line.chars().all(|c| !c.is_whitespace()) {
                current_seq.push_str(line);
            } else {
                current_seq.extend(line.chars().filter(|c| !c.is_whitespace()));
            }
        }
        // Lines before the first header are skipped
    }

    // Don't forget the last record
    if let Some(id) = current_id {
        records.push(SequenceRecord::new(id, current_seq));
    }

    if records.is_empty() {
        return Err(FastaError::NoRecords);
    }

    Ok(Document::new(records))
}

/// Parses FASTA content from raw bytes.
///
/// Bytes are decoded as UTF-8 first; invalid encoding fails before any
/// record is produced.
pub fn parse_fasta_bytes(bytes: &[u8]) -> FastaResult<Document> {
    let content = std::str::from_utf8(bytes)?;
    parse_fasta_str(content)
}

/// Parses a FASTA file.
///
/// The whole file is read into memory; the contract is the text content,
/// not the file extension.
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<Document> {
    let file = File::open(&path)?;
    let file_size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(file_size);
    reader.read_to_end(&mut bytes)?;

    parse_fasta_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_simple_fasta() {
        let content = ">seq1\nACGT\n>seq2\nTGCA\n";
        let document = parse_fasta_str(content).unwrap();

        assert_eq!(document.record_count(), 2);
        assert_eq!(document.get(0).unwrap().id, "seq1");
        assert_eq!(document.get(0).unwrap().data, "ACGT");
        assert_eq!(document.get(1).unwrap().id, "seq2");
        assert_eq!(document.get(1).unwrap().data, "TGCA");
    }

    #[test]
    fn test_parse_multiline_sequence() {
        let content = ">seq3\nATG\nGC\n";
        let document = parse_fasta_str(content).unwrap();

        assert_eq!(document.record_count(), 1);
        assert_eq!(document.get(0).unwrap().data, "ATGGC");
    }

    #[test]
    fn test_parse_with_description() {
        let content = ">seq1 This is a description\nACGT\n";
        let document = parse_fasta_str(content).unwrap();

        assert_eq!(document.get(0).unwrap().id, "seq1");
    }

    #[test]
    fn test_parse_with_empty_lines() {
        let content = ">seq1\nACGT\n\n>seq2\n\nTGCA\n";
        let document = parse_fasta_str(content).unwrap();

        assert_eq!(document.record_count(), 2);
        assert_eq!(document.get(0).unwrap().data, "ACGT");
        assert_eq!(document.get(1).unwrap().data, "TGCA");
    }

    #[test]
    fn test_no_header_line() {
        // No '>' anywhere: not a FASTA file
        let result = parse_fasta_str("ACGTACGT\nTTTT\n");
        assert!(matches!(result, Err(FastaError::NoRecords)));

        let result = parse_fasta_str("");
        assert!(matches!(result, Err(FastaError::NoRecords)));
    }

    #[test]
    fn test_text_before_first_header_is_skipped() {
        let content = "; comment line\n>seq1\nACGT\n";
        let document = parse_fasta_str(content).unwrap();

        assert_eq!(document.record_count(), 1);
        assert_eq!(document.get(0).unwrap().data, "ACGT");
    }

    #[test]
    fn test_empty_identifier() {
        let result = parse_fasta_str(">\nACGT\n");
        assert!(matches!(result, Err(FastaError::EmptyIdentifier(1))));
    }

    #[test]
    fn test_record_with_empty_sequence_is_kept() {
        let content = ">empty\n>seq2\nACGT\n";
        let document = parse_fasta_str(content).unwrap();

        assert_eq!(document.record_count(), 2);
        assert_eq!(document.get(0).unwrap().id, "empty");
        assert!(document.get(0).unwrap().is_empty());
        assert_eq!(document.get(1).unwrap().data, "ACGT");
    }

    #[test]
    fn test_case_preserved() {
        let content = ">seq1\nacgt\n";
        let document = parse_fasta_str(content).unwrap();

        // Parser preserves case as-is
        assert_eq!(document.get(0).unwrap().data, "acgt");
    }

    #[test]
    fn test_file_order_preserved() {
        let content = ">b\nAAA\n>a\nCCC\n>c\nGGG\n";
        let document = parse_fasta_str(content).unwrap();

        let ids: Vec<&str> = document.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_invalid_utf8_fails_before_parsing() {
        let bytes = [b'>', b's', b'\n', 0xff, 0xfe];
        let result = parse_fasta_bytes(&bytes);
        assert!(matches!(result, Err(FastaError::Decode(_))));
    }

    #[test]
    fn test_parse_bytes() {
        let document = parse_fasta_bytes(b">seq1\nACGT\n").unwrap();
        assert_eq!(document.record_count(), 1);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ">seq1\nATGGCCTAA\n>seq2\nGCGCGCGCG\n").unwrap();

        let document = parse_fasta_file(file.path()).unwrap();
        assert_eq!(document.record_count(), 2);
        assert_eq!(document.get(0).unwrap().id, "seq1");
        assert_eq!(document.get(1).unwrap().id, "seq2");
    }

    #[test]
    fn test_missing_file() {
        let result = parse_fasta_file("definitely/not/a/real/file.fasta");
        assert!(matches!(result, Err(FastaError::Io(_))));
    }
}
