//! Placeholder row renderer.
//!
//! Shown in the list area instead of records while loading, when the
//! collection is empty, or after a failed refresh.

use crate::ui::helpers::{centered_padding, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::Placeholder;

/// Renders the placeholder message centered on a single row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_placeholder(row: usize, placeholder: &Placeholder, theme: &Theme, cols: usize) -> usize {
    let message = truncate(&placeholder.message, cols);
    let msg_len = text_width(&message);
    let padding = centered_padding(msg_len, cols);

    position_cursor(row, 1);
    if placeholder.is_error {
        print!("{}", Theme::fg(&theme.colors.error_fg));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.placeholder_fg));
    }
    print!("{}", " ".repeat(padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + msg_len)));
    print!("{}", Theme::reset());
    row + 1
}
