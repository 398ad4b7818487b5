//! Footer component renderer.

use crate::ui::helpers::{position_cell, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use unicode_width::UnicodeWidthStr;

/// Renders keybinding hints centered on `row` in the dim text color.
///
/// Hints wider than the pane are truncated.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let help_text = truncate_to_width(&footer.keybindings, cols);
    let text_width = help_text.width();
    let padding = cols.saturating_sub(text_width) / 2;

    position_cell(row, 0);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_width)));
    print!("{}", Theme::reset());
}
