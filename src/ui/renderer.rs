//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the panel layout in [`components`](super::components)

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with absolute cursor positioning; Zellij clears
/// the pane before each render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    tracing::trace!(
        items = viewmodel.display_items.len(),
        rows,
        cols,
        "rendering panel"
    );

    components::render_panel(&viewmodel, &state.theme, cols, rows);
}
