//! # bioseqtk - Terminal DNA Sequence Toolkit
//!
//! A terminal-based analysis tool for DNA FASTA files using ratatui.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture with clear separation:
//! - `model`: Data structures for records, display toggles, and application state
//! - `fasta`: FASTA file parsing and validation
//! - `genetic_code`: Standard codon table and translation
//! - `analysis`: Per-record statistics (GC content, protein, base composition)
//! - `event`: Keyboard event handling
//! - `ui`: TUI rendering with ratatui
//! - `report`: Plain-text report output for CLI mode
//! - `controller`: Orchestration of state transitions
//!
//! ## Future Extensions
//!
//! The architecture is designed to support:
//! - Reading-frame selection and reverse-complement translation
//! - Alternative genetic codes
//! - Windowed GC content along a sequence
//! - Export of the current report as CSV

pub mod analysis;
pub mod controller;
pub mod event;
pub mod fasta;
pub mod genetic_code;
pub mod model;
pub mod report;
pub mod ui;
