//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Record list panel on the left
//! - Per-record report panel (sequence, GC content, protein, base chart)
//! - Status bar with mode, toggles, and record position
//! - Help overlay
//!
//! Display toggles only decide which report blocks are rendered; the
//! underlying statistics are computed once at load and never change.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::analysis::SequenceStats;
use crate::model::{AppMode, AppState, SequenceRecord};

/// Width reserved for the record list (including border and padding).
const RECORD_PANEL_WIDTH: u16 = 24;
/// Minimum width for the report panel.
const MIN_REPORT_PANEL_WIDTH: u16 = 20;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;
/// Height of the base composition chart.
const CHART_HEIGHT: u16 = 10;
/// Maximum number of sequence symbols rendered in the preview.
const SEQ_PREVIEW_MAX: usize = 3000;

/// Color scheme for sequence symbols.
pub trait ColorScheme {
    fn get_color(&self, c: char) -> Color;
}

/// DNA nucleotide color scheme.
pub struct DnaColorScheme;

impl ColorScheme for DnaColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            'A' => Color::Red,
            'C' => Color::Green,
            'G' => Color::Yellow,
            'T' => Color::Blue,
            _ => Color::DarkGray,
        }
    }
}

/// Amino acid color scheme, grouped by physicochemical property.
pub struct AminoAcidColorScheme;

impl ColorScheme for AminoAcidColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            // Hydrophobic
            'A' | 'V' | 'I' | 'L' | 'M' | 'F' | 'W' | 'P' => Color::Yellow,
            // Polar
            'S' | 'T' | 'N' | 'Q' | 'C' | 'G' | 'Y' => Color::Green,
            // Charged positive
            'K' | 'R' | 'H' => Color::Blue,
            // Charged negative
            'D' | 'E' => Color::Red,
            // Unknown placeholder
            'X' => Color::DarkGray,
            _ => Color::Gray,
        }
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: content area + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let content_area = main_layout[0];
    let status_area = main_layout[1];

    // Split content area: record list (left) + report panel (right)
    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(RECORD_PANEL_WIDTH),
            Constraint::Min(MIN_REPORT_PANEL_WIDTH),
        ])
        .split(content_area);

    render_record_list(frame, state, content_layout[0]);
    render_report_panel(frame, state, content_layout[1]);
    render_status_bar(frame, state, status_area);

    if state.show_help {
        render_help_overlay(frame, area);
    }
}

/// Renders the record list panel.
fn render_record_list(frame: &mut Frame, state: &AppState, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let visible_rows = area.height.saturating_sub(2) as usize; // -2 for borders

    // Keep the selected record in view
    let first_visible = state
        .selected
        .saturating_sub(visible_rows.saturating_sub(1));
    let end = (first_visible + visible_rows).min(state.document.record_count());

    for idx in first_visible..end {
        if let Some(record) = state.document.get(idx) {
            let is_current = idx == state.selected;

            // Truncate name if too long, counting chars so multibyte ids
            // never split mid-character
            let max_name_len = (RECORD_PANEL_WIDTH.saturating_sub(3)) as usize;
            let name = if record.id.chars().count() > max_name_len {
                let truncated: String = record.id.chars().take(max_name_len - 1).collect();
                format!("{}…", truncated)
            } else {
                record.id.clone()
            };

            let style = if is_current {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            lines.push(Line::from(Span::styled(name, style)));
        }
    }

    let title = format!("Records ({})", state.document.record_count());
    let block = Block::default().borders(Borders::ALL).title(title);

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the report panel for the selected record.
fn render_report_panel(frame: &mut Frame, state: &AppState, area: Rect) {
    let (Some(record), Some(stats)) = (state.selected_record(), state.selected_stats()) else {
        let block = Block::default().borders(Borders::ALL).title("Report");
        frame.render_widget(block, area);
        return;
    };

    // Reserve space for the bar chart when it is enabled and fits
    let show_chart = state.toggles.show_base_plot && area.height > CHART_HEIGHT + 4;
    let areas: Vec<Rect> = if show_chart {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(CHART_HEIGHT)])
            .split(area)
            .to_vec()
    } else {
        vec![area]
    };

    render_report_text(frame, state, record, stats, areas[0]);
    if show_chart {
        render_base_chart(frame, stats, areas[1]);
    }
}

/// Renders the textual report blocks (length, sequence, GC, protein).
fn render_report_text(
    frame: &mut Frame,
    state: &AppState,
    record: &SequenceRecord,
    stats: &SequenceStats,
    area: Rect,
) {
    let mut lines: Vec<Line> = Vec::new();
    let warn_style = Style::default().fg(Color::Yellow);

    lines.push(Line::from(format!("Length: {} bases", record.len())));

    if record.is_empty() {
        lines.push(Line::from(Span::styled(
            "Empty sequence: GC content reported as 0% by convention",
            warn_style,
        )));
    }
    if stats.trimmed {
        lines.push(Line::from(Span::styled(
            format!(
                "Length is not a multiple of 3: last {} base(s) ignored for translation",
                record.len() % 3
            ),
            warn_style,
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Sequence:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(colored_line(&record.data, SEQ_PREVIEW_MAX, &DnaColorScheme));
    if record.len() > SEQ_PREVIEW_MAX {
        lines.push(Line::from(Span::styled(
            format!("… ({} more bases)", record.len() - SEQ_PREVIEW_MAX),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if state.toggles.show_gc {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("GC content: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{:.2}%", stats.gc_percent)),
        ]));
    }

    if state.toggles.show_translation {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Protein (to first stop):",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        if stats.protein.is_empty() {
            lines.push(Line::from(Span::styled(
                "(empty)",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            lines.push(colored_line(&stats.protein, usize::MAX, &AminoAcidColorScheme));
        }
    }

    let title = format!("Record {}/{}: {}", state.selected + 1, state.document.record_count(), record.id);
    let block = Block::default().borders(Borders::ALL).title(title);

    // Clamp so scrolling cannot run past the report or wrap the u16 cast
    let scroll = state.detail_scroll.min(lines.len().saturating_sub(1)) as u16;
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Builds a line of per-symbol colored spans, truncated to `max` symbols.
fn colored_line(text: &str, max: usize, scheme: &dyn ColorScheme) -> Line<'static> {
    let spans: Vec<Span> = text
        .chars()
        .take(max)
        .map(|c| Span::styled(c.to_string(), Style::default().fg(scheme.get_color(c))))
        .collect();
    Line::from(spans)
}

/// Renders the base composition bar chart, symbols in ascending order.
fn render_base_chart(frame: &mut Frame, stats: &SequenceStats, area: Rect) {
    let scheme = DnaColorScheme;
    let bars: Vec<Bar> = stats
        .base_counts
        .iter()
        .map(|(&symbol, &count)| {
            Bar::default()
                .value(count as u64)
                .label(Line::from(symbol.to_string()))
                .style(Style::default().fg(scheme.get_color(symbol)))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Base composition"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let (mode_str, command_str) = match &state.mode {
        AppMode::Normal => ("NORMAL", String::new()),
        AppMode::Command(cmd) => ("COMMAND", format!(":{}", cmd)),
    };

    let toggle_indicator = format!(
        "[gc:{} tr:{} plot:{}]",
        if state.toggles.show_gc { "on" } else { "off" },
        if state.toggles.show_translation { "on" } else { "off" },
        if state.toggles.show_base_plot { "on" } else { "off" },
    );

    let position_info = format!(
        "{} | Rec {}/{} ",
        toggle_indicator,
        state.selected + 1,
        state.document.record_count()
    );

    // Show warning or status message if present
    let message = state.status_message.as_deref().unwrap_or("");

    let left_content = if command_str.is_empty() {
        format!(" {} | {} ", mode_str, message)
    } else {
        format!(" {} | {} ", mode_str, command_str)
    };

    let left_len = left_content.chars().count();
    let status_line = Line::from(vec![
        Span::styled(
            left_content,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len + position_info.len())),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            position_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(status_line);
    frame.render_widget(paragraph, area);
}

/// Renders the help overlay in the center of the screen.
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from("j/k or arrows   select record"),
        Line::from("Home/End        first/last record"),
        Line::from("J/K, PgUp/PgDn  scroll report"),
        Line::from("g               toggle GC content"),
        Line::from("t               toggle translation"),
        Line::from("b               toggle base chart"),
        Line::from(":<number>       jump to record"),
        Line::from(":q or q         quit"),
        Line::from(""),
        Line::from("Press any key to close"),
    ];

    let height = (help_text.len() + 2) as u16;
    let width = 44u16.min(area.width);
    let popup = Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width,
        height: height.min(area.height),
    };

    let block = Block::default().borders(Borders::ALL).title("Help");
    let paragraph = Paragraph::new(help_text).block(block);
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// Calculates the report pane height for page scrolling.
pub fn calculate_report_height(terminal_height: u16) -> usize {
    (terminal_height.saturating_sub(STATUS_BAR_HEIGHT + 2)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppState, DisplayToggles, Document, SequenceRecord};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_state(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_multibyte_id_truncation() {
        // A long accented id must truncate on char boundaries, not bytes
        let id = format!("a{}", "é".repeat(25));
        let records = vec![SequenceRecord::new(id, "ACGT")];
        let state = AppState::new(Document::new(records), DisplayToggles::default());

        let rendered = draw_state(&state);
        assert!(rendered.contains('…'));
    }

    #[test]
    fn test_oversized_scroll_clamps_to_report_end() {
        let records = vec![SequenceRecord::new("seq1", "ATGGCCTAA")];
        let mut state = AppState::new(Document::new(records), DisplayToggles::default());

        // Larger than u16::MAX; an unclamped cast would wrap back to the top
        state.detail_scroll = 70_000;

        let rendered = draw_state(&state);
        assert!(!rendered.contains("Length: 9 bases"));
        // The block title is unaffected by scrolling
        assert!(rendered.contains("Record 1/1: seq1"));
    }

    #[test]
    fn test_dna_colors() {
        let scheme = DnaColorScheme;
        assert_eq!(scheme.get_color('A'), Color::Red);
        assert_eq!(scheme.get_color('a'), Color::Red); // Case insensitive
        assert_eq!(scheme.get_color('C'), Color::Green);
        assert_eq!(scheme.get_color('G'), Color::Yellow);
        assert_eq!(scheme.get_color('T'), Color::Blue);
        assert_eq!(scheme.get_color('N'), Color::DarkGray);
    }

    #[test]
    fn test_amino_acid_colors() {
        let scheme = AminoAcidColorScheme;
        assert_eq!(scheme.get_color('M'), Color::Yellow);
        assert_eq!(scheme.get_color('K'), Color::Blue);
        assert_eq!(scheme.get_color('X'), Color::DarkGray);
    }

    #[test]
    fn test_colored_line_truncation() {
        let line = colored_line("ACGTACGT", 4, &DnaColorScheme);
        assert_eq!(line.spans.len(), 4);
    }

    #[test]
    fn test_report_height() {
        // 50 - 1 (status) - 2 (borders) = 47 rows
        assert_eq!(calculate_report_height(50), 47);
    }
}
