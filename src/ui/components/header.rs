//! Header component renderer.

use crate::ui::helpers::{position_cell, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;
use unicode_width::UnicodeWidthStr;

/// Renders the title centered on `row`, bold in the header colors.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let title = truncate_to_width(&header.title, cols);
    let title_width = title.width();
    let padding = cols.saturating_sub(title_width) / 2;

    position_cell(row, 0);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_width)));

    print!("{}", Theme::reset());
}
