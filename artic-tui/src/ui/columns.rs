//! Column definitions and width layout for the artwork grid.

use artic_lib::model::Artwork;
use unicode_width::UnicodeWidthChar;

/// Width of the selection checkbox column, `[x]`.
pub const CHECKBOX_WIDTH: u16 = 3;

/// Spaces between adjacent columns.
pub const GAP: u16 = 2;

/// A data column of the grid.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    /// Width the column never shrinks below.
    pub min_width: u16,
    /// Share of any spare width this column receives.
    pub weight: u16,
    pub value: fn(&Artwork) -> String,
}

/// The six data columns, in display order.
pub fn columns() -> [Column; 6] {
    [
        Column {
            header: "Title",
            min_width: 12,
            weight: 3,
            value: |a| a.title.clone(),
        },
        Column {
            header: "Origin",
            min_width: 8,
            weight: 1,
            value: |a| a.place_of_origin.clone(),
        },
        Column {
            header: "Artist",
            min_width: 16,
            weight: 3,
            value: |a| a.artist_display.clone(),
        },
        Column {
            header: "Inscriptions",
            min_width: 12,
            weight: 2,
            value: |a| a.inscriptions.clone(),
        },
        Column {
            header: "Start Date",
            min_width: 10,
            weight: 0,
            value: |a| a.date_start.to_string(),
        },
        Column {
            header: "End Date",
            min_width: 8,
            weight: 0,
            value: |a| a.date_end.to_string(),
        },
    ]
}

/// Computes the width of each column for a terminal `width` columns wide.
///
/// Columns get their minimum width, then spare space is shared by weight
/// with any rounding remainder going to the first weighted column. When the
/// minimums do not fit, the minimums are returned and the row is clipped.
pub fn layout(columns: &[Column], width: u16) -> Vec<u16> {
    let mut widths: Vec<u16> = columns.iter().map(|c| c.min_width).collect();

    let fixed = CHECKBOX_WIDTH + GAP * columns.len() as u16;
    let minimum: u16 = widths.iter().sum();
    let total_weight: u16 = columns.iter().map(|c| c.weight).sum();

    let Some(spare) = width.checked_sub(fixed + minimum) else {
        return widths;
    };
    if spare == 0 || total_weight == 0 {
        return widths;
    }

    let mut handed_out = 0;
    for (w, column) in widths.iter_mut().zip(columns) {
        let share = (spare as u32 * column.weight as u32 / total_weight as u32) as u16;
        *w += share;
        handed_out += share;
    }
    if let Some(i) = columns.iter().position(|c| c.weight > 0) {
        widths[i] += spare - handed_out;
    }

    widths
}

/// Flattens `text` to one line and fits it to exactly `width` display
/// columns, truncating with `…` or padding with spaces.
pub fn fit(text: &str, width: u16) -> String {
    let width = width as usize;
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    let mut out = String::with_capacity(width);
    let mut used = 0;
    let total: usize = flat.chars().filter_map(|c| c.width()).sum();

    if total <= width {
        out.push_str(&flat);
        used = total;
    } else if width > 0 {
        for c in flat.chars() {
            let cw = c.width().unwrap_or(0);
            if used + cw > width - 1 {
                break;
            }
            out.push(c);
            used += cw;
        }
        out.push('…');
        used += 1;
    }

    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}
