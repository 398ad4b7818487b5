//! Control component renderer: the bordered box holding chips, the search
//! input and the chevron.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │  🦀 Rust ×   ⚛️ React ×  ty▏       ▾ │
//! └────────────────────────────────────┘
//! ```

use crate::ui::helpers::{pad_to_width, position_cell, truncate_to_width};
use crate::ui::layout::{InputSlot, Rect};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ChipItem, ControlInfo, InputInfo};
use unicode_width::UnicodeWidthStr;

/// Cursor glyph drawn after the search text.
const CURSOR: &str = "▏";

/// Renders the control inside `rect`.
pub fn render_control(
    rect: &Rect,
    control: &ControlInfo,
    input: &InputSlot,
    chevron: (usize, usize),
    theme: &Theme,
) {
    let border_color = if control.is_open {
        &theme.colors.control_border
    } else {
        &theme.colors.border
    };
    let inner = rect.width().saturating_sub(2);

    position_cell(rect.top, rect.left);
    print!("{}┌{}┐{}", Theme::fg(border_color), "─".repeat(inner), Theme::reset());

    for row in rect.top + 1..rect.bottom {
        position_cell(row, rect.left);
        print!("{}│{}", Theme::fg(border_color), Theme::reset());
        print!("{}", " ".repeat(inner));
        print!("{}│{}", Theme::fg(border_color), Theme::reset());
    }

    position_cell(rect.bottom, rect.left);
    print!("{}└{}┘{}", Theme::fg(border_color), "─".repeat(inner), Theme::reset());

    for chip in &control.chips {
        render_chip(chip, control.is_disabled, theme);
    }

    let input_width = input.width;
    position_cell(input.row, input.col);
    match &control.input {
        InputInfo::Placeholder(placeholder) => {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", truncate_to_width(placeholder, input_width));
        }
        InputInfo::Query(query) => {
            let cursor_width = usize::from(control.show_cursor);
            let visible = tail_to_width(query, input_width.saturating_sub(cursor_width));
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{visible}");
            if control.show_cursor {
                print!("{}{CURSOR}", Theme::fg(&theme.colors.control_border));
            }
        }
    }
    print!("{}", Theme::reset());

    let chevron_color = if control.is_disabled {
        &theme.colors.text_dim
    } else {
        border_color
    };
    position_cell(chevron.0, chevron.1);
    print!("{}{}{}", Theme::fg(chevron_color), control.chevron(), Theme::reset());
}

fn render_chip(chip: &ChipItem, is_disabled: bool, theme: &Theme) {
    position_cell(chip.slot.row, chip.slot.col);

    if is_disabled {
        print!("{}", Theme::dim());
    }
    print!("{}", Theme::bg(&theme.colors.chip_bg));
    print!("{}", Theme::fg(&theme.colors.chip_fg));
    print!(" {} ", pad_to_width(&chip.text, chip.slot.text_width));
    print!("{}×", Theme::fg(&theme.colors.chip_remove_fg));
    print!("{}", Theme::reset());
}

/// Keeps the end of the text visible, so the cursor stays in view while
/// typing past the edge.
fn tail_to_width(text: &str, max_width: usize) -> &str {
    let mut start = 0;
    for (index, _) in text.char_indices() {
        if text[index..].width() <= max_width {
            start = index;
            break;
        }
        start = text.len();
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail_to_width("typescript", 4), "ript");
        assert_eq!(tail_to_width("go", 4), "go");
        assert_eq!(tail_to_width("go", 0), "");
        assert_eq!(tail_to_width("", 3), "");
    }
}
