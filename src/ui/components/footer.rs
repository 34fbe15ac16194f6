//! Footer component renderer.
//!
//! This module renders the footer help bar, or the delete confirmation prompt
//! while one is pending.

use crate::ui::helpers::{centered_padding, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling. A
/// pending prompt is shown in bold error color in front of the hints.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Truncation
///
/// If the text exceeds terminal width, it is truncated to fit. This prevents
/// layout corruption on narrow terminals.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let Some(prompt) = &footer.prompt else {
        let help_text = truncate(&footer.keybindings, cols);
        let text_len = text_width(&help_text);
        let padding = centered_padding(text_len, cols);

        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", " ".repeat(padding));
        print!("{help_text}");
        print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
        print!("{}", Theme::reset());
        return row + 1;
    };

    let line = truncate(&format!("{prompt}  {}", footer.keybindings), cols);
    let prompt_len = text_width(prompt).min(text_width(&line));
    let (question, hints): (String, String) = (
        line.chars().take(prompt_len).collect(),
        line.chars().skip(prompt_len).collect(),
    );
    let padding = centered_padding(text_width(&line), cols);

    print!("{}", " ".repeat(padding));
    print!("{}{}{question}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
    print!("{}{}{hints}", Theme::reset(), Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_width(&line))));
    print!("{}", Theme::reset());
    row + 1
}
