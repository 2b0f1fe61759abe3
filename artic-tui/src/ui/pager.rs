//! Pagination control: "Showing X to Y of Z entries" plus page links.

use std::ops::Range;

use artic_lib::view::TableView;

use super::Span;
use super::Tone;

/// Number of numbered page links shown at once.
pub const PAGE_LINKS: usize = 5;

/// 0-based pages to show as numbered links, centred on `current` where
/// possible.
pub fn page_links(current: usize, page_count: usize, links: usize) -> Range<usize> {
    if page_count == 0 || links == 0 {
        return 0..0;
    }
    let links = links.min(page_count);
    let start = current
        .saturating_sub(links / 2)
        .min(page_count - links);
    start..start + links
}

/// Spans for the footer of the table.
pub fn pager(view: &TableView) -> Vec<Span> {
    let current = view.current_page().index();
    let has_prev = view.prev_page().is_some();
    let has_next = view.next_page().is_some();
    let arrow = |enabled: bool| if enabled { Tone::Normal } else { Tone::Muted };

    let mut spans = vec![
        Span::new(view.page_report(), Tone::Normal),
        Span::new("   ", Tone::Normal),
        Span::new("«", arrow(has_prev)),
        Span::new(" ", Tone::Normal),
        Span::new("‹", arrow(has_prev)),
    ];

    for page in page_links(current, view.page_count(), PAGE_LINKS) {
        spans.push(Span::new(" ", Tone::Normal));
        let tone = if page == current { Tone::Accent } else { Tone::Normal };
        spans.push(Span::new((page + 1).to_string(), tone));
    }

    spans.push(Span::new(" ", Tone::Normal));
    spans.push(Span::new("›", arrow(has_next)));
    spans.push(Span::new(" ", Tone::Normal));
    spans.push(Span::new("»", arrow(has_next)));
    spans
}
