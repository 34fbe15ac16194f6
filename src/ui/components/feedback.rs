//! Feedback line renderer for field feedback and the banner.

use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FeedbackLine, Tone};

/// Indent matching the inside of the input box.
const FEEDBACK_INDENT: usize = 4;

/// Renders one feedback line, or a blank line when there is none.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_feedback_line(row: usize, line: Option<&FeedbackLine>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(FEEDBACK_INDENT.min(cols)));

    let width = cols.saturating_sub(FEEDBACK_INDENT);
    let Some(line) = line else {
        print!("{}", " ".repeat(width));
        return row + 1;
    };

    let (color, marker) = match line.tone {
        Tone::Success => (&theme.colors.success_fg, "✓ "),
        Tone::Error => (&theme.colors.error_fg, "✗ "),
        Tone::Notice => (&theme.colors.notice_fg, "ℹ "),
    };
    if line.tone == Tone::Error {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(color));
    print_padded(&format!("{marker}{}", line.text), width);
    print!("{}", Theme::reset());
    row + 1
}
