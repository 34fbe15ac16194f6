//! Shared rendering utilities and helpers.
//!
//! Widths are counted in characters, not bytes, so names with non-ASCII
//! characters line up with their columns.

/// Positions the cursor at a specific row and column.
///
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use names_panel::ui::helpers::truncate;
///
/// assert_eq!(truncate("Alice", 10), "Alice");
/// assert_eq!(truncate("Bartholomew", 8), "Barth...");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Prints `text` truncated to `width` and padded with spaces to fill it.
pub fn print_padded(text: &str, width: usize) {
    let fitted = truncate(text, width);
    let padding = width.saturating_sub(text_width(&fitted));
    print!("{fitted}{}", " ".repeat(padding));
}

/// Left padding that centers `len` characters in `cols`.
#[must_use]
pub const fn centered_padding(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}
