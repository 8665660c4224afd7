//! Data model for the analysis viewer.
//!
//! This module contains all data structures for representing:
//! - Sequence records and documents
//! - Display toggles
//! - Application state

use crate::analysis::{analyze, SequenceStats};
use crate::genetic_code::CodonTable;

/// A single FASTA record: identifier plus nucleotide sequence.
///
/// Immutable once constructed; case is preserved exactly as parsed and the
/// analyzer owns normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// The record identifier (from the FASTA header, without '>')
    pub id: String,
    /// The nucleotide sequence data
    pub data: String,
}

impl SequenceRecord {
    /// Creates a new record.
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Returns the number of symbols in the sequence.
    pub fn len(&self) -> usize {
        self.data.chars().count()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An ordered collection of records parsed from one uploaded file.
#[derive(Debug, Clone)]
pub struct Document {
    /// All records, in file order
    pub records: Vec<SequenceRecord>,
}

impl Document {
    /// Creates a new document from a vector of records.
    pub fn new(records: Vec<SequenceRecord>) -> Self {
        Self { records }
    }

    /// Returns the number of records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Gets a record by index.
    pub fn get(&self, index: usize) -> Option<&SequenceRecord> {
        self.records.get(index)
    }

    /// Returns true if the document has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Independent display toggles, mirroring the sidebar checkboxes of the
/// original tool. They gate presentation only and never alter computed
/// statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayToggles {
    /// Include the GC content line
    pub show_gc: bool,
    /// Include the protein translation block
    pub show_translation: bool,
    /// Include the base composition chart
    pub show_base_plot: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            show_gc: true,
            show_translation: true,
            show_base_plot: true,
        }
    }
}

/// Application mode for handling different input states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Command input mode (after pressing ':')
    Command(String),
}

/// The complete application state.
#[derive(Debug)]
pub struct AppState {
    /// The loaded document
    pub document: Document,
    /// Per-record statistics, computed once at load, in file order
    pub stats: Vec<SequenceStats>,
    /// Index of the currently selected record
    pub selected: usize,
    /// Vertical scroll offset of the detail pane
    pub detail_scroll: usize,
    /// Height of the detail pane, used for page scrolling
    pub detail_height: usize,
    /// Display toggles
    pub toggles: DisplayToggles,
    /// Current application mode
    pub mode: AppMode,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates the application state and analyzes every record.
    ///
    /// Analysis is pure and per-record, so a record with an empty sequence
    /// only produces a warning, never a failure for the rest of the batch.
    pub fn new(document: Document, toggles: DisplayToggles) -> Self {
        let table = CodonTable::standard();
        let stats: Vec<SequenceStats> = document.records.iter().map(|r| analyze(r, &table)).collect();

        let empty_count = document.records.iter().filter(|r| r.is_empty()).count();
        let status_message = if empty_count > 0 {
            Some(format!(
                "Warning: {} record(s) have an empty sequence (GC reported as 0%)",
                empty_count
            ))
        } else {
            Some(format!("{} sequence(s) loaded", document.record_count()))
        };

        Self {
            document,
            stats,
            selected: 0,
            detail_scroll: 0,
            detail_height: 0,
            toggles,
            mode: AppMode::Normal,
            show_help: false,
            should_quit: false,
            status_message,
        }
    }

    /// Returns the currently selected record, if any.
    pub fn selected_record(&self) -> Option<&SequenceRecord> {
        self.document.get(self.selected)
    }

    /// Returns the statistics for the currently selected record, if any.
    pub fn selected_stats(&self) -> Option<&SequenceStats> {
        self.stats.get(self.selected)
    }

    /// Selects the previous record.
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.detail_scroll = 0;
        }
    }

    /// Selects the next record.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.document.record_count() {
            self.selected += 1;
            self.detail_scroll = 0;
        }
    }

    /// Selects the first record.
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.detail_scroll = 0;
    }

    /// Selects the last record.
    pub fn select_last(&mut self) {
        self.selected = self.document.record_count().saturating_sub(1);
        self.detail_scroll = 0;
    }

    /// Jumps to a record by 1-indexed position (used by `:<number>`).
    pub fn goto_record(&mut self, number: usize) {
        if number >= 1 && number <= self.document.record_count() {
            self.selected = number - 1;
            self.detail_scroll = 0;
        } else {
            self.status_message = Some(format!("Invalid record: {}", number));
        }
    }

    /// Scrolls the detail pane down by one line.
    pub fn scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    /// Scrolls the detail pane up by one line.
    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// Scrolls the detail pane down by one page.
    pub fn page_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(self.detail_height.max(1));
    }

    /// Scrolls the detail pane up by one page.
    pub fn page_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(self.detail_height.max(1));
    }

    /// Updates the detail pane height after a resize.
    pub fn update_detail_height(&mut self, height: usize) {
        self.detail_height = height;
    }

    /// Toggles the GC content line.
    pub fn toggle_gc(&mut self) {
        self.toggles.show_gc = !self.toggles.show_gc;
    }

    /// Toggles the protein translation block.
    pub fn toggle_translation(&mut self) {
        self.toggles.show_translation = !self.toggles.show_translation;
    }

    /// Toggles the base composition chart.
    pub fn toggle_base_plot(&mut self) {
        self.toggles.show_base_plot = !self.toggles.show_base_plot;
    }

    /// Enters command mode.
    pub fn enter_command_mode(&mut self) {
        self.mode = AppMode::Command(String::new());
    }

    /// Handles a character input in command mode.
    pub fn command_input(&mut self, c: char) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.push(c);
        }
    }

    /// Handles backspace in command mode.
    pub fn command_backspace(&mut self) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.pop();
            if cmd.is_empty() {
                self.mode = AppMode::Normal;
            }
        }
    }

    /// Executes the current command.
    pub fn execute_command(&mut self) {
        if let AppMode::Command(ref cmd) = self.mode.clone() {
            match cmd.as_str() {
                "q" | "quit" => self.should_quit = true,
                "h" | "help" => self.show_help = true,
                _ => {
                    if let Ok(number) = cmd.parse::<usize>() {
                        self.goto_record(number);
                    } else {
                        self.status_message = Some(format!("Unknown command: {}", cmd));
                    }
                }
            }
        }
        self.mode = AppMode::Normal;
    }

    /// Cancels command mode and returns to normal mode.
    pub fn cancel_command(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Dismisses the help overlay.
    pub fn dismiss_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_record_state() -> AppState {
        let records = vec![
            SequenceRecord::new("seq1", "ATGGCCTAA"),
            SequenceRecord::new("seq2", "GCGCGCGCG"),
            SequenceRecord::new("seq3", "ATGGC"),
        ];
        AppState::new(Document::new(records), DisplayToggles::default())
    }

    #[test]
    fn test_record_creation() {
        let record = SequenceRecord::new("seq1", "ACGT");
        assert_eq!(record.id, "seq1");
        assert_eq!(record.data, "ACGT");
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_stats_computed_in_file_order() {
        let state = three_record_state();
        assert_eq!(state.stats.len(), 3);
        assert_eq!(state.stats[0].protein, "MA");
        assert_eq!(state.stats[1].gc_percent, 100.0);
        assert!(state.stats[2].trimmed);
    }

    #[test]
    fn test_record_selection() {
        let mut state = three_record_state();
        assert_eq!(state.selected, 0);

        state.select_next();
        assert_eq!(state.selected, 1);

        state.select_last();
        assert_eq!(state.selected, 2);

        // Boundary: can't go past the last record
        state.select_next();
        assert_eq!(state.selected, 2);

        state.select_first();
        assert_eq!(state.selected, 0);
        state.select_prev();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selection_resets_detail_scroll() {
        let mut state = three_record_state();
        state.scroll_down();
        state.scroll_down();
        assert_eq!(state.detail_scroll, 2);

        state.select_next();
        assert_eq!(state.detail_scroll, 0);
    }

    #[test]
    fn test_goto_record() {
        let mut state = three_record_state();

        state.goto_record(3);
        assert_eq!(state.selected, 2);

        // Out of range leaves selection unchanged and sets a message
        state.goto_record(10);
        assert_eq!(state.selected, 2);
        assert!(state.status_message.as_deref().unwrap().contains("Invalid record"));
    }

    #[test]
    fn test_toggles_do_not_change_stats() {
        let mut state = three_record_state();
        let before = state.stats.clone();

        state.toggle_gc();
        state.toggle_translation();
        state.toggle_base_plot();

        assert!(!state.toggles.show_gc);
        assert!(!state.toggles.show_translation);
        assert!(!state.toggles.show_base_plot);
        assert_eq!(state.stats, before);
    }

    #[test]
    fn test_command_mode() {
        let mut state = three_record_state();

        state.enter_command_mode();
        state.command_input('q');
        state.execute_command();
        assert!(state.should_quit);
    }

    #[test]
    fn test_command_goto() {
        let mut state = three_record_state();

        state.enter_command_mode();
        state.command_input('2');
        state.execute_command();
        assert_eq!(state.selected, 1);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_empty_sequence_warning() {
        let records = vec![
            SequenceRecord::new("seq1", "ACGT"),
            SequenceRecord::new("empty", ""),
        ];
        let state = AppState::new(Document::new(records), DisplayToggles::default());
        assert!(state.status_message.as_deref().unwrap().contains("empty sequence"));
        assert_eq!(state.stats[1].gc_percent, 0.0);
    }
}
