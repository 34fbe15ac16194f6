//! Table component renderer.
//!
//! This module renders the names list as a table with NAME and ADDED columns
//! and a per-row delete control. It supports selection highlighting and the
//! busy label of a row whose delete is in flight.

use crate::ui::helpers::{position_cursor, print_padded, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const NAME_COLUMN_WIDTH: usize = 37;
const ADDED_COLUMN_WIDTH: usize = 18;

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("  ");
    print_padded("NAME", NAME_COLUMN_WIDTH);
    print_padded("ADDED", cols.saturating_sub(NAME_COLUMN_WIDTH + 2));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single table row at the specified row position.
///
/// # Layout
///
/// ```text
/// [marker] NAME (37 chars) ADDED (18 chars) [Delete] [padding to fill line]
/// ```
///
/// The row is padded to fill the entire terminal width so the selection
/// background covers it.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let restore = || {
        if item.is_selected {
            format!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            )
        } else {
            Theme::fg(&theme.colors.text_normal)
        }
    };

    print!("{}", restore());
    print!("{}", if item.is_selected { "> " } else { "  " });
    print_padded(&item.name, NAME_COLUMN_WIDTH);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print_padded(&item.created_at, ADDED_COLUMN_WIDTH);

    let label = format!("[{}]", item.delete_label);
    if item.is_busy {
        print!("{}", Theme::fg(&theme.colors.busy_fg));
    } else if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.error_fg));
    }
    print!("{label}");
    print!("{}", restore());

    let line_len = 2 + NAME_COLUMN_WIDTH + ADDED_COLUMN_WIDTH + text_width(&label);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
