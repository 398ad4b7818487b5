//! Screen geometry for the picker and pointer hit-testing.
//!
//! Rendering and mouse handling must agree on where every chip, the search
//! input and each candidate row sit. Both go through [`WidgetLayout`], which
//! is a pure function of the picker's content and the pane size.
//!
//! All coordinates are 0-indexed `(row, col)` pane cells, matching Zellij
//! mouse events. Renderers add one when positioning the cursor.
//!
//! # Layout
//!
//! ```text
//! row 0   header                       (omitted with the `compact` class)
//! row 1   ────────────────────────
//!         ┌──────────────────────────────┐
//!         │  ⚛️ React ×   🦀 Rust ×  ru▏ ▾ │   chips wrap onto more lines
//!         └──────────────────────────────┘
//!           candidate rows / info row      (only while open)
//!         ────────────────────────────────
//!         ───────────────────────────────────
//! last    footer
//! ```

use crate::app::controller::HitTest;
use unicode_width::UnicodeWidthStr;

/// Columns left blank on each side of the control.
pub const CONTROL_MARGIN: usize = 1;

/// Columns reserved at the right edge of the control for the chevron.
pub const CHEVRON_WIDTH: usize = 2;

/// Columns between neighbouring chips.
pub const CHIP_GAP: usize = 1;

/// Rows kept free at the bottom for the footer and its border.
const FOOTER_ROWS: usize = 2;

/// Extra columns a chip adds around its text: leading space, space, `×`.
const CHIP_DECORATION: usize = 3;

/// Everything the layout depends on, decoupled from application state.
#[derive(Debug, Clone, Default)]
pub struct LayoutInput<'a> {
    /// Display text of each chip (emoji and label), in selection order.
    pub chip_texts: &'a [String],
    /// Search text, or the placeholder when it is shown instead.
    pub input_text: &'a str,
    /// Whether the dropdown is open.
    pub is_open: bool,
    /// Number of filtered candidates.
    pub candidate_count: usize,
    /// Whether an informational row follows an empty candidate list.
    pub has_info_row: bool,
    /// Highlighted candidate, used to window long lists.
    pub highlighted: Option<usize>,
    /// `compact` presentation class: no header.
    pub compact: bool,
}

/// Inclusive-top, inclusive-bottom, half-open column rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// First row.
    pub top: usize,
    /// Last row (inclusive).
    pub bottom: usize,
    /// First column.
    pub left: usize,
    /// One past the last column.
    pub right: usize,
}

impl Rect {
    /// Returns `true` if the cell lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top && row <= self.bottom && col >= self.left && col < self.right
    }

    /// Width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.right.saturating_sub(self.left)
    }
}

/// Placement of one chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSlot {
    /// Index into the selection.
    pub index: usize,
    /// Row of the chip.
    pub row: usize,
    /// First column of the chip.
    pub col: usize,
    /// Columns available to the chip text (text is truncated to this).
    pub text_width: usize,
    /// First column of the remove hotspot (space and `×`).
    pub remove_col: usize,
}

impl ChipSlot {
    /// Total chip width including decoration.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.text_width + CHIP_DECORATION
    }
}

/// Placement of the search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSlot {
    /// Row of the input.
    pub row: usize,
    /// First column.
    pub col: usize,
    /// Columns up to the chevron area.
    pub width: usize,
}

/// Placement of one visible candidate row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSlot {
    /// Index into `filtered_candidates()`.
    pub index: usize,
    /// Row on screen.
    pub row: usize,
}

/// Result of hit-testing a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The remove hotspot of the chip at this selection index.
    RemoveChip(usize),
    /// Anywhere else on the control, chevron included.
    Control,
    /// A candidate row.
    Candidate(usize),
    /// Inside the dropdown but not on a candidate.
    Dropdown,
    /// Outside the widget.
    Outside,
}

/// Computed geometry for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetLayout {
    /// Header row, if shown.
    pub header_row: Option<usize>,
    /// Bordered control box.
    pub control: Rect,
    /// Chip placements in selection order.
    pub chips: Vec<ChipSlot>,
    /// Search input placement.
    pub input: InputSlot,
    /// Chevron cell `(row, col)`.
    pub chevron: (usize, usize),
    /// Dropdown box, if open.
    pub dropdown: Option<Rect>,
    /// Visible candidate rows.
    pub candidates: Vec<CandidateSlot>,
    /// Row of the informational message, if shown.
    pub info_row: Option<usize>,
    /// Row of the footer.
    pub footer_row: usize,
}

impl WidgetLayout {
    /// Lays out the widget for a pane of `rows` × `cols` cells.
    #[must_use]
    pub fn compute(input: &LayoutInput<'_>, rows: usize, cols: usize) -> Self {
        let header_row = (!input.compact).then_some(0);
        let control_top = if input.compact { 0 } else { 2 };

        let control_left = CONTROL_MARGIN;
        let control_right = cols.saturating_sub(CONTROL_MARGIN).max(control_left);
        let inner_left = control_left + 2;
        let inner_width = control_right.saturating_sub(control_left + 4);
        let content_width = inner_width.saturating_sub(CHEVRON_WIDTH);

        let mut line = 0;
        let mut x = 0;
        let mut chips = Vec::with_capacity(input.chip_texts.len());

        for (index, text) in input.chip_texts.iter().enumerate() {
            let full_width = text.width() + CHIP_DECORATION;
            let width = full_width.min(content_width);
            if x > 0 && x + width > content_width {
                line += 1;
                x = 0;
            }
            let col = inner_left + x;
            let text_width = width.saturating_sub(CHIP_DECORATION);
            chips.push(ChipSlot {
                index,
                row: control_top + 1 + line,
                col,
                text_width,
                remove_col: col + text_width + 1,
            });
            x += width + CHIP_GAP;
        }

        let input_width = (input.input_text.width() + 1).min(content_width);
        if x > 0 && x + input_width > content_width {
            line += 1;
            x = 0;
        }
        let input_slot = InputSlot {
            row: control_top + 1 + line,
            col: inner_left + x,
            width: content_width.saturating_sub(x),
        };

        let control_bottom = control_top + line + 2;
        let control = Rect {
            top: control_top,
            bottom: control_bottom,
            left: control_left,
            right: control_right,
        };
        let chevron = (control_top + 1, inner_left + content_width + 1);

        let footer_row = rows.saturating_sub(1);

        let (dropdown, candidates, info_row) = if input.is_open {
            Self::layout_dropdown(input, control_bottom + 1, rows, control_left, control_right)
        } else {
            (None, Vec::new(), None)
        };

        Self {
            header_row,
            control,
            chips,
            input: input_slot,
            chevron,
            dropdown,
            candidates,
            info_row,
            footer_row,
        }
    }

    /// Places candidate rows below the control, windowed around the
    /// highlighted candidate so it always stays visible.
    fn layout_dropdown(
        input: &LayoutInput<'_>,
        top: usize,
        rows: usize,
        left: usize,
        right: usize,
    ) -> (Option<Rect>, Vec<CandidateSlot>, Option<usize>) {
        let available = rows.saturating_sub(top + FOOTER_ROWS + 1);
        let mut candidates = Vec::new();
        let mut info_row = None;

        if input.candidate_count > 0 {
            let count = input.candidate_count;
            let focus = input.highlighted.unwrap_or(0).min(count - 1);

            let mut visible_start = focus.saturating_sub(available / 2);
            let visible_end = (visible_start + available).min(count);
            if visible_end - visible_start < available && count >= available {
                visible_start = visible_end.saturating_sub(available);
            }

            candidates = (visible_start..visible_end)
                .enumerate()
                .map(|(offset, index)| CandidateSlot {
                    index,
                    row: top + offset,
                })
                .collect();
        } else if input.has_info_row && available > 0 {
            info_row = Some(top);
        }

        let used = candidates.len() + usize::from(info_row.is_some());
        let dropdown = Rect {
            top,
            bottom: top + used,
            left,
            right,
        };

        (Some(dropdown), candidates, info_row)
    }

    /// Classifies a pointer position.
    #[must_use]
    pub fn hit(&self, row: usize, col: usize) -> Hit {
        if self.control.contains(row, col) {
            return self
                .chips
                .iter()
                .find(|chip| chip.row == row && col >= chip.remove_col && col < chip.remove_col + 2)
                .map_or(Hit::Control, |chip| Hit::RemoveChip(chip.index));
        }

        if let Some(dropdown) = &self.dropdown {
            if dropdown.contains(row, col) {
                return self
                    .candidates
                    .iter()
                    .find(|slot| slot.row == row)
                    .map_or(Hit::Dropdown, |slot| Hit::Candidate(slot.index));
            }
        }

        Hit::Outside
    }

    /// First candidate index shown, used to keep the highlight in view.
    #[must_use]
    pub fn visible_start(&self) -> usize {
        self.candidates.first().map_or(0, |slot| slot.index)
    }
}

impl HitTest for WidgetLayout {
    fn contains(&self, row: usize, col: usize) -> bool {
        self.hit(row, col) != Hit::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chips(texts: &[&str]) -> Vec<String> {
        texts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn control_starts_below_header() {
        let layout = WidgetLayout::compute(&LayoutInput::default(), 24, 80);
        assert_eq!(layout.header_row, Some(0));
        assert_eq!(layout.control.top, 2);
        assert_eq!(layout.control.bottom, 4);
        assert_eq!(layout.footer_row, 23);
        assert!(layout.dropdown.is_none());
    }

    #[test]
    fn compact_drops_header() {
        let input = LayoutInput {
            compact: true,
            ..LayoutInput::default()
        };
        let layout = WidgetLayout::compute(&input, 24, 80);
        assert_eq!(layout.header_row, None);
        assert_eq!(layout.control.top, 0);
    }

    #[test]
    fn chips_flow_left_to_right_then_input() {
        let texts = chips(&["Go", "Rust"]);
        let input = LayoutInput {
            chip_texts: &texts,
            input_text: "ty",
            ..LayoutInput::default()
        };
        let layout = WidgetLayout::compute(&input, 24, 80);

        // " Go ×" is 5 wide, then a 1 column gap
        assert_eq!(layout.chips[0].col, 3);
        assert_eq!(layout.chips[0].remove_col, 6);
        assert_eq!(layout.chips[1].col, 9);
        assert_eq!(layout.input.col, 9 + 7 + CHIP_GAP);
        assert_eq!(layout.input.row, 3);
    }

    #[test]
    fn chips_wrap_and_grow_the_control() {
        let texts = chips(&["aaaaaaaaaa", "bbbbbbbbbb", "cccccccccc"]);
        let input = LayoutInput {
            chip_texts: &texts,
            ..LayoutInput::default()
        };
        // content width = 40 - 2*1 - 4 - 2 = 32; each chip is 13 + 1 gap
        let layout = WidgetLayout::compute(&input, 24, 40);

        assert_eq!(layout.chips[0].row, 3);
        assert_eq!(layout.chips[1].row, 3);
        assert_eq!(layout.chips[2].row, 4);
        assert_eq!(layout.control.bottom, 5);
    }

    #[test]
    fn wide_emoji_counts_two_columns() {
        let texts = chips(&["🦀 Rust"]);
        let input = LayoutInput {
            chip_texts: &texts,
            ..LayoutInput::default()
        };
        let layout = WidgetLayout::compute(&input, 24, 80);
        assert_eq!(layout.chips[0].text_width, 7);
    }

    #[test]
    fn oversized_chip_is_truncated_to_line() {
        let long = "x".repeat(200);
        let texts = vec![long];
        let input = LayoutInput {
            chip_texts: &texts,
            ..LayoutInput::default()
        };
        let layout = WidgetLayout::compute(&input, 24, 40);
        assert_eq!(layout.chips[0].width(), 32);
    }

    #[test]
    fn dropdown_lists_candidates_below_control() {
        let input = LayoutInput {
            is_open: true,
            candidate_count: 3,
            ..LayoutInput::default()
        };
        let layout = WidgetLayout::compute(&input, 24, 80);

        let rows: Vec<usize> = layout.candidates.iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![5, 6, 7]);
        assert_eq!(layout.dropdown.map(|d| d.bottom), Some(8));
        assert_eq!(layout.hit(6, 10), Hit::Candidate(1));
        assert_eq!(layout.hit(8, 10), Hit::Dropdown);
    }

    #[test]
    fn info_row_replaces_empty_list() {
        let input = LayoutInput {
            is_open: true,
            has_info_row: true,
            ..LayoutInput::default()
        };
        let layout = WidgetLayout::compute(&input, 24, 80);
        assert_eq!(layout.info_row, Some(5));
        assert!(layout.candidates.is_empty());
    }

    #[test]
    fn long_lists_window_around_highlight() {
        let input = LayoutInput {
            is_open: true,
            candidate_count: 50,
            highlighted: Some(40),
            ..LayoutInput::default()
        };
        // rows 5..=20 usable: 24 - (5 + 2 + 1) = 16
        let layout = WidgetLayout::compute(&input, 24, 80);

        assert_eq!(layout.candidates.len(), 16);
        assert_eq!(layout.visible_start(), 32);
        assert!(layout.candidates.iter().any(|c| c.index == 40));
    }

    #[test]
    fn window_sticks_to_the_end() {
        let input = LayoutInput {
            is_open: true,
            candidate_count: 20,
            highlighted: Some(19),
            ..LayoutInput::default()
        };
        let layout = WidgetLayout::compute(&input, 24, 80);
        assert_eq!(layout.candidates.last().map(|c| c.index), Some(19));
        assert_eq!(layout.candidates.len(), 16);
    }

    #[test]
    fn hit_testing_classifies_regions() {
        let texts = chips(&["Go"]);
        let input = LayoutInput {
            chip_texts: &texts,
            ..LayoutInput::default()
        };
        let layout = WidgetLayout::compute(&input, 24, 80);

        assert_eq!(layout.hit(3, 7), Hit::RemoveChip(0));
        assert_eq!(layout.hit(3, 4), Hit::Control);
        assert_eq!(layout.hit(layout.chevron.0, layout.chevron.1), Hit::Control);
        assert_eq!(layout.hit(0, 10), Hit::Outside);
        assert_eq!(layout.hit(3, 79), Hit::Outside);
        assert!(!HitTest::contains(&layout, 15, 15));
        assert!(HitTest::contains(&layout, 2, 1));
    }
}
