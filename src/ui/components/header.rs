//! Header component renderer.
//!
//! This module renders the plugin title bar with centered text, theme-aware
//! colors, optional background styling, and the list's busy label.

use crate::ui::helpers::{centered_padding, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// The title is centered; while a refresh runs, its busy label is appended
/// in the busy color.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [status] [right padding]
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let status = header
        .status
        .as_deref()
        .map(|s| format!("{s} "))
        .unwrap_or_default();
    let title_len = text_width(&header.title) + text_width(&status);
    let padding = centered_padding(title_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    if !status.is_empty() {
        print!("{}{status}", Theme::fg(&theme.colors.busy_fg));
        print!("{}", Theme::fg(&theme.colors.header_fg));
    }
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}
