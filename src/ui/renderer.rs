//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from state, then hand it
//! to the components. Output goes to stdout as ANSI escape sequences.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the picker for a pane of `rows` × `cols`.
///
/// Callers should store the viewport in [`AppState::viewport`] first so
/// that later clicks resolve against the same layout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if rows == 0 || cols == 0 {
        return;
    }

    components::render_picker(vm, theme, rows, cols);
}
