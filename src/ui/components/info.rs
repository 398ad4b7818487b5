//! Informational row renderer.
//!
//! Shown in place of candidates when nothing matches the search.

use crate::ui::helpers::{pad_to_width, position_cell};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InfoRow;

/// Renders `info` on `row` between the dropdown side borders.
pub fn render_info_row(row: usize, left: usize, inner: usize, info: &InfoRow, theme: &Theme) {
    position_cell(row, left);
    print!("{}│{}", Theme::fg(&theme.colors.border), Theme::reset());

    match info {
        InfoRow::CreatePrompt(_) => print!("{}", Theme::fg(&theme.colors.info_fg)),
        InfoRow::NoMatches => print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
    }
    print!("{}", pad_to_width(&format!("  {}", info.message()), inner));
    print!("{}", Theme::reset());

    print!("{}│{}", Theme::fg(&theme.colors.border), Theme::reset());
}
