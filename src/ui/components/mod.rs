//! Composable UI component renderers.
//!
//! Each component renders one region of the panel and returns the next free
//! row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the list's busy label
//! - [`input`]: Name input box with its submit control
//! - [`feedback`]: Field feedback and banner lines
//! - [`table`]: Names list with NAME/ADDED columns and delete controls
//! - [`placeholder`]: Single row shown instead of records
//! - [`footer`]: Keybinding hints or the confirmation prompt
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Input box - 3 lines]
//! [Field feedback]
//! [Banner]
//! [Table Headers]
//! [Border]
//! [Table Rows or Placeholder]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod feedback;
mod footer;
mod header;
mod input;
mod placeholder;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use feedback::render_feedback_line;
use footer::render_footer;
use header::render_header;
use input::render_input_box;
use placeholder::render_placeholder;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole panel.
///
/// # Line Accounting
///
/// Reserves 10 lines for chrome (header, input box, two feedback lines, table
/// header, two borders, footer). Fills remaining space with table rows.
pub fn render_panel(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 1;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_input_box(current_row, &vm.input, theme, cols);
    current_row = render_feedback_line(current_row, vm.field_feedback.as_ref(), theme, cols);
    current_row = render_feedback_line(current_row, vm.banner.as_ref(), theme, cols);
    current_row = render_table_headers(current_row, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(placeholder) = &vm.placeholder {
        render_placeholder(current_row, placeholder, theme, cols);
    } else {
        render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
