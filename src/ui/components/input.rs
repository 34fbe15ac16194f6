//! Name input component renderer.
//!
//! This module renders the input box with a bordered frame, the current value,
//! and the submit control.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputInfo;

/// Horizontal margin for the input box (spaces on left and right).
const INPUT_BOX_MARGIN: usize = 2;

/// Renders the name input box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────┐ [margin]
/// [margin] │ Name: Alice_     [ Add ] │ [margin]
/// [margin] └──────────────────────────┘ [margin]
/// ```
///
/// The border uses the focused color while the input has focus, and the
/// value is followed by a cursor mark. A busy submit control shows its busy
/// label in the busy color instead of the button colors.
pub fn render_input_box(row: usize, input: &InputInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if input.focused {
        &theme.colors.input_border_focused
    } else {
        &theme.colors.input_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let button = format!("[ {} ]", input.submit_label);
    let button_len = text_width(&button);
    let cursor = if input.focused { "_" } else { "" };
    let value_room = inner_width.saturating_sub(button_len + 9);
    let value = tail(&input.value, value_room.saturating_sub(text_width(cursor)));
    let input_text = format!(" Name: {value}{cursor}");
    let padding = inner_width.saturating_sub(text_width(&input_text) + button_len + 1);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{input_text}");
    print!("{}", " ".repeat(padding));
    if input.busy {
        print!("{}", Theme::fg(&theme.colors.busy_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.button_fg));
        print!("{}", Theme::bg(&theme.colors.button_bg));
    }
    print!("{button}");
    print!("{}", Theme::reset());
    print!(" {}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Keeps the end of `value` visible when it does not fit, so the character
/// being typed is always on screen.
fn tail(value: &str, room: usize) -> String {
    let len = text_width(value);
    if len <= room {
        return value.to_string();
    }
    if room <= 3 {
        return truncate(value, room);
    }
    let kept: String = value.chars().skip(len - (room - 3)).collect();
    format!("...{kept}")
}
