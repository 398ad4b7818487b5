//! Composable UI component renderers.
//!
//! Each component draws one part of the picker at positions taken from the
//! view model's [`WidgetLayout`](crate::ui::layout::WidgetLayout).
//!
//! - [`header`]: centered title
//! - [`control`]: bordered chips, search input and chevron
//! - [`options`]: open candidate list
//! - [`info`]: message shown when no candidate matches
//! - [`footer`]: keybinding hints

mod control;
mod footer;
mod header;
mod info;
mod options;

use crate::ui::helpers::{horizontal_rule, position_cell};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use control::render_control;
use footer::render_footer;
use header::render_header;
use options::render_options;

/// Renders a full-width separator on a 0-indexed row.
fn render_border(row: usize, color: &str, cols: usize) {
    position_cell(row, 0);
    print!("{}{}{}", Theme::fg(color), horizontal_rule(cols), Theme::reset());
}

/// Renders every component of the picker.
///
/// ```text
/// [Header]            (unless compact)
/// [Border]
/// [Control]
/// [Option list]       (while open)
/// [Border]
/// [Footer]
/// ```
pub fn render_picker(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let layout = &vm.layout;

    if let (Some(header), Some(row)) = (&vm.header, layout.header_row) {
        render_header(row, header, theme, cols);
        render_border(row + 1, &theme.colors.border, cols);
    }

    render_control(&layout.control, &vm.control, &layout.input, layout.chevron, theme);

    if let Some(dropdown) = &vm.dropdown {
        render_options(dropdown, theme);
    }

    if rows >= 2 {
        render_border(rows - 2, &theme.colors.border, cols);
    }
    render_footer(layout.footer_row, &vm.footer, theme, cols);
}
