//! Shared rendering utilities.
//!
//! Text is measured in terminal columns with `unicode-width` so that emoji
//! and CJK labels line up with the layout.

use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Moves the cursor to a 1-indexed `(row, col)`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Moves the cursor to a 0-indexed layout cell.
pub fn position_cell(row: usize, col: usize) {
    position_cursor(row + 1, col + 1);
}

/// Cuts `text` to at most `max_width` columns, ending in `…` when cut.
///
/// # Example
///
/// ```rust
/// use tagpick::ui::helpers::truncate_to_width;
///
/// assert_eq!(truncate_to_width("TypeScript", 6), "TypeS…");
/// assert_eq!(truncate_to_width("Go", 6), "Go");
/// ```
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Pads `text` with spaces to exactly `width` columns, truncating first.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_to_width(text, width);
    let used = out.width();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Prints `text` with match ranges highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive. `base`
/// is the style escape re-applied after each highlight so the surrounding
/// row styling survives. Ranges beyond the text are clipped.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, base: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}{base}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Horizontal rule of `width` columns.
#[must_use]
pub fn horizontal_rule(width: usize) -> String {
    "─".repeat(width)
}
