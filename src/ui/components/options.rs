//! Option list component renderer.
//!
//! Draws the open dropdown below the control: one row per visible
//! candidate, the informational row when nothing matches, and a bottom
//! border.

use crate::ui::helpers::{self, position_cell, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, DropdownInfo};
use unicode_width::UnicodeWidthStr;

use super::info::render_info_row;

/// Renders the dropdown.
pub fn render_options(dropdown: &DropdownInfo, theme: &Theme) {
    let rect = &dropdown.rect;
    let inner = rect.width().saturating_sub(2);

    for item in &dropdown.items {
        render_option_row(item, rect.left, inner, theme);
    }

    if let Some((row, info)) = &dropdown.info {
        render_info_row(*row, rect.left, inner, info, theme);
    }

    position_cell(rect.bottom, rect.left);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("└{}┘", "─".repeat(inner));
    print!("{}", Theme::reset());
}

/// Renders one candidate: side borders, then the text padded to the full
/// inner width so the highlight background spans the row.
fn render_option_row(item: &DisplayItem, left: usize, inner: usize, theme: &Theme) {
    position_cell(item.row, left);
    print!("{}│{}", Theme::fg(&theme.colors.border), Theme::reset());

    let base = if item.is_highlighted {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.highlight_fg),
            Theme::bg(&theme.colors.highlight_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base}");

    let marker = if item.is_highlighted { "› " } else { "  " };
    print!("{marker}");

    let text_width = inner.saturating_sub(marker.width());
    let text = truncate_to_width(&item.text, text_width);
    helpers::render_highlighted_text(&text, &item.highlight_ranges, theme, &base);
    print!("{}", " ".repeat(text_width.saturating_sub(text.width())));

    print!("{}", Theme::reset());
    print!("{}│{}", Theme::fg(&theme.colors.border), Theme::reset());
}
