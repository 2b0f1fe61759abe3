//! Screen layout for the artwork table.
//!
//! [`render`] turns the table state into styled [`Line`]s; the terminal
//! module only knows how to paint them.

mod columns;
mod pager;

use columns::{Column, GAP, columns, fit, layout};
use pager::pager;

use artic_lib::view::TableView;
use unicode_width::UnicodeWidthChar;

/// Semantic style of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Title,
    Header,
    Muted,
    Accent,
    Selected,
    Cursor,
    CursorSelected,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One screen row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn plain(text: impl Into<String>, tone: Tone) -> Self {
        Self::new(vec![Span::new(text, tone)])
    }

    /// The line's text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Cuts the line so it occupies at most `width` display columns.
    pub fn clip(mut self, width: u16) -> Self {
        let mut left = width as usize;
        let mut kept = Vec::with_capacity(self.spans.len());
        for mut span in self.spans.drain(..) {
            if left == 0 {
                break;
            }
            let mut cut = String::new();
            for c in span.text.chars() {
                let cw = c.width().unwrap_or(0);
                if cw > left {
                    left = 0;
                    break;
                }
                cut.push(c);
                left -= cw;
            }
            span.text = cut;
            kept.push(span);
        }
        self.spans = kept;
        self
    }
}

/// What the front end needs besides the table state.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Highlighted row index.
    pub cursor: usize,
    /// Current spinner frame, shown while loading.
    pub spinner: &'a str,
    /// Terminal width in columns.
    pub width: u16,
}

/// Lays out the whole screen.
pub fn render(view: &TableView, frame: Frame<'_>) -> Vec<Line> {
    let cols = columns();
    let widths = layout(&cols, frame.width);
    let rule = "─".repeat(frame.width as usize);

    let mut lines = vec![
        Line::plain("Artworks", Tone::Title),
        selected_line(view),
        Line::default(),
        header_line(view, &cols, &widths),
        Line::plain(rule.clone(), Tone::Muted),
    ];

    for (row, record) in view.records().iter().enumerate() {
        let selected = view.is_row_selected(row);
        let tone = match (row == frame.cursor, selected) {
            (true, true) => Tone::CursorSelected,
            (true, false) => Tone::Cursor,
            (false, true) => Tone::Selected,
            (false, false) => Tone::Normal,
        };

        let mut text = String::from(if selected { "[x]" } else { "[ ]" });
        for (column, width) in cols.iter().zip(&widths) {
            text.push_str(&" ".repeat(GAP as usize));
            text.push_str(&fit(&(column.value)(record), *width));
        }
        lines.push(Line::plain(text, tone));
    }

    if view.is_loading() {
        lines.push(Line::new(vec![
            Span::new(format!("{} ", frame.spinner), Tone::Accent),
            Span::new("Loading artworks…", Tone::Muted),
        ]));
    } else if view.records().is_empty() {
        lines.push(Line::plain("No records found.", Tone::Muted));
    }

    lines.push(Line::plain(rule, Tone::Muted));
    lines.push(Line::new(pager(view)));
    lines.push(Line::default());
    lines.push(Line::plain(
        "j/k move · space select · a select page · h/l page · g/G first/last · q quit",
        Tone::Muted,
    ));

    lines.into_iter().map(|line| line.clip(frame.width)).collect()
}

fn selected_line(view: &TableView) -> Line {
    let mut spans = vec![
        Span::new("Selected: ", Tone::Normal),
        Span::new(view.selected_count().to_string(), Tone::Accent),
        Span::new(" rows", Tone::Normal),
    ];
    let total = view.total_selected_count();
    if total != view.selected_count() {
        spans.push(Span::new(format!("  ({} across all pages)", total), Tone::Muted));
    }
    Line::new(spans)
}

fn header_line(view: &TableView, cols: &[Column], widths: &[u16]) -> Line {
    let rows = view.records().len();
    let selected = view.selected_records().len();
    let checkbox = if rows == 0 || selected == 0 {
        "[ ]"
    } else if selected == rows {
        "[x]"
    } else {
        "[-]"
    };

    let mut text = String::from(checkbox);
    for (column, width) in cols.iter().zip(widths) {
        text.push_str(&" ".repeat(GAP as usize));
        text.push_str(&fit(column.header, *width));
    }
    Line::plain(text, Tone::Header)
}
