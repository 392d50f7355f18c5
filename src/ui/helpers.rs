//! Shared rendering utilities and helpers.
//!
//! Widths are measured in terminal columns with `unicode-width`: most circled
//! digits take one column, but `㉑` through `㊿` take two.
//!
//! # Example
//!
//! ```rust
//! use zoutline::ui::helpers::truncate;
//!
//! assert_eq!(truncate("Selected item: Leaf 12345", 12), "Selected ...");
//! assert_eq!(truncate("Leaf 1", 12), "Leaf 1");
//! ```

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to truncated text.
const ELLIPSIS: &str = "...";

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Shortens `text` to at most `max` columns, marking the cut with `...`.
///
/// When `max` is too small to hold the marker, the text is cut hard. A wide
/// character that would straddle the limit is dropped whole.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }

    let ellipsis = max > ELLIPSIS.len();
    let budget = if ellipsis { max - ELLIPSIS.len() } else { max };

    let mut cut = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        cut.push(ch);
    }

    if ellipsis {
        cut.push_str(ELLIPSIS);
    }
    cut
}

/// Left padding that centers `text_width` columns in `width`.
#[must_use]
pub const fn center_padding(text_width: usize, width: usize) -> usize {
    width.saturating_sub(text_width) / 2
}

/// Prints `text` centered in `width` columns, padding both sides with spaces.
pub fn print_centered(text: &str, width: usize) {
    let text = truncate(text, width);
    let text_width = display_width(&text);
    let padding = center_padding(text_width, width);

    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(width.saturating_sub(padding + text_width)));
}
