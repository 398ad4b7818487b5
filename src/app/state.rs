//! Application state and view model computation.
//!
//! [`AppState`] wraps the [`SelectionController`] with everything the
//! presentation shell needs on top of it: theme, placeholder, interaction
//! mode, keyboard focus inside the dropdown, presentation classes, the last
//! viewport and the CLI pipes subscribed to change notifications.
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns a state snapshot into a
//! [`UIViewModel`]. Geometry comes from [`WidgetLayout`], which is also what
//! mouse clicks are hit-tested against, so both always agree.
//!
//! # Example
//!
//! ```rust
//! use tagpick::app::{AppState, ControllerSettings, SelectionController};
//! use tagpick::ui::Theme;
//! use tagpick::TagOption;
//!
//! let controller = SelectionController::new(
//!     vec![TagOption::new("Rust", "rust")],
//!     vec![],
//!     ControllerSettings::default(),
//! );
//! let state = AppState::new(controller, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.dropdown.is_none());
//! ```

use super::controller::SelectionController;
use super::modes::{DropdownFocus, InteractionMode, StyleClasses};
use crate::domain::TagOption;
use crate::ui::layout::{LayoutInput, WidgetLayout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ChipItem, ControlInfo, DisplayItem, DropdownInfo, FooterInfo, HeaderInfo, InfoRow, InputInfo,
    UIViewModel,
};

/// Placeholder shown when the configuration does not set one.
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Selection state machine.
    pub controller: SelectionController,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Search placeholder, shown while nothing is selected.
    pub placeholder: String,

    /// Whether user input reaches the controller.
    pub mode: InteractionMode,

    /// Keyboard focus inside the dropdown.
    ///
    /// Reset after every search edit and clamped after every selection
    /// change so it always points into `filtered_candidates()`.
    pub focus: DropdownFocus,

    /// Presentation classes.
    pub classes: StyleClasses,

    /// Last `(rows, cols)` passed to render; clicks are resolved against it.
    pub viewport: (usize, usize),

    /// CLI pipe ids that asked to receive every change.
    pub subscribers: Vec<String>,
}

impl AppState {
    /// Creates state around a controller with default presentation.
    #[must_use]
    pub fn new(controller: SelectionController, theme: Theme) -> Self {
        Self {
            controller,
            theme,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            mode: InteractionMode::default(),
            focus: DropdownFocus::default(),
            classes: StyleClasses::default(),
            viewport: (0, 0),
            subscribers: Vec::new(),
        }
    }

    /// Current filtered candidates.
    #[must_use]
    pub fn candidates(&self) -> Vec<TagOption> {
        self.controller.filtered_candidates()
    }

    /// The candidate under keyboard focus, if any.
    #[must_use]
    pub fn highlighted_candidate(&self) -> Option<TagOption> {
        match self.focus {
            DropdownFocus::Input => None,
            DropdownFocus::Candidate(index) => self.candidates().get(index).cloned(),
        }
    }

    /// Moves the highlight down, cycling through the input after the last
    /// candidate.
    pub fn highlight_next(&mut self) {
        let len = self.candidates().len();
        self.focus = match self.focus {
            _ if len == 0 => DropdownFocus::Input,
            DropdownFocus::Input => DropdownFocus::Candidate(0),
            DropdownFocus::Candidate(index) if index + 1 < len => DropdownFocus::Candidate(index + 1),
            DropdownFocus::Candidate(_) => DropdownFocus::Input,
        };
    }

    /// Moves the highlight up, cycling through the input before the first
    /// candidate.
    pub fn highlight_prev(&mut self) {
        let len = self.candidates().len();
        self.focus = match self.focus {
            _ if len == 0 => DropdownFocus::Input,
            DropdownFocus::Input => DropdownFocus::Candidate(len - 1),
            DropdownFocus::Candidate(0) => DropdownFocus::Input,
            DropdownFocus::Candidate(index) => DropdownFocus::Candidate((index - 1).min(len - 1)),
        };
    }

    /// Returns keyboard focus to the search input.
    ///
    /// Candidates are only highlighted by explicit navigation, so `Enter`
    /// after typing commits the search text.
    pub fn reset_focus(&mut self) {
        self.focus = DropdownFocus::Input;
    }

    /// Keeps the highlight inside the candidate list after it changed.
    pub fn clamp_focus(&mut self) {
        if let DropdownFocus::Candidate(index) = self.focus {
            let len = self.candidates().len();
            self.focus = if len == 0 {
                DropdownFocus::Input
            } else {
                DropdownFocus::Candidate(index.min(len - 1))
            };
        }
    }

    /// Message for the informational row, shown only when no candidate
    /// matches.
    #[must_use]
    pub fn info_row(&self, candidates: &[TagOption]) -> Option<InfoRow> {
        if !candidates.is_empty() {
            return None;
        }

        let search = self.controller.search_text();
        let can_create = self.controller.settings().allow_create && !search.trim().is_empty();

        Some(if can_create {
            InfoRow::CreatePrompt(search.to_string())
        } else {
            InfoRow::NoMatches
        })
    }

    /// Geometry for the last rendered viewport.
    #[must_use]
    pub fn layout(&self) -> WidgetLayout {
        let (rows, cols) = self.viewport;
        let candidates = self.candidates();
        self.layout_for(&candidates, rows, cols)
    }

    /// Computes a renderable view model for a pane of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            rows,
            cols,
            selected = self.controller.selected().len(),
            is_open = self.controller.is_open()
        )
        .entered();

        let candidates = self.candidates();
        let layout = self.layout_for(&candidates, rows, cols);

        let chips = self
            .controller
            .selected()
            .iter()
            .zip(&layout.chips)
            .map(|(option, slot)| ChipItem {
                text: self.chip_text(option),
                slot: *slot,
            })
            .collect();

        let search = self.controller.search_text();
        let input = if search.is_empty() && self.controller.selected().is_empty() {
            InputInfo::Placeholder(self.placeholder.clone())
        } else {
            InputInfo::Query(search.to_string())
        };

        let control = ControlInfo {
            chips,
            input,
            show_cursor: self.controller.is_open() && self.mode.accepts_input(),
            is_open: self.controller.is_open(),
            is_disabled: !self.mode.accepts_input(),
        };

        let dropdown = layout.dropdown.map(|rect| {
            let items = layout
                .candidates
                .iter()
                .filter_map(|slot| {
                    candidates
                        .get(slot.index)
                        .map(|option| self.compute_display_item(option, slot.index, slot.row))
                })
                .collect();
            let info = layout
                .info_row
                .zip(self.info_row(&candidates));
            DropdownInfo { rect, items, info }
        });

        UIViewModel {
            header: layout.header_row.map(|_| self.compute_header()),
            control,
            dropdown,
            footer: self.compute_footer(),
            layout,
        }
    }

    fn layout_for(&self, candidates: &[TagOption], rows: usize, cols: usize) -> WidgetLayout {
        let chip_texts: Vec<String> = self
            .controller
            .selected()
            .iter()
            .map(|option| self.chip_text(option))
            .collect();

        let search = self.controller.search_text();
        let input_text = if search.is_empty() && self.controller.selected().is_empty() {
            self.placeholder.as_str()
        } else {
            search
        };

        let highlighted = match self.focus {
            DropdownFocus::Input => None,
            DropdownFocus::Candidate(index) => Some(index),
        };

        WidgetLayout::compute(
            &LayoutInput {
                chip_texts: &chip_texts,
                input_text,
                is_open: self.controller.is_open(),
                candidate_count: candidates.len(),
                has_info_row: self.info_row(candidates).is_some(),
                highlighted,
                compact: self.classes.compact,
            },
            rows,
            cols,
        )
    }

    fn chip_text(&self, option: &TagOption) -> String {
        if self.classes.hide_emoji {
            option.label.clone()
        } else {
            option.display_text()
        }
    }

    /// Builds one candidate row, shifting label highlight ranges past the
    /// emoji prefix.
    fn compute_display_item(&self, option: &TagOption, index: usize, row: usize) -> DisplayItem {
        let offset = match (&option.emoji, self.classes.hide_emoji) {
            (Some(emoji), false) => emoji.chars().count() + 1,
            _ => 0,
        };

        let highlight_ranges = self
            .controller
            .settings()
            .filter
            .highlight_ranges(&option.label, self.controller.search_text())
            .into_iter()
            .map(|(start, end)| (start + offset, end + offset))
            .collect();

        DisplayItem {
            text: self.chip_text(option),
            row,
            is_highlighted: self.focus == DropdownFocus::Candidate(index),
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.controller.selected().len();
        let title = match self.controller.settings().max_selections {
            Some(max) => format!(" Tags ({count}/{max} selected) "),
            None => format!(" Tags ({count} selected) "),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.mode, self.controller.is_open()) {
            (InteractionMode::Disabled, _) => "Read only  Esc: hide".to_string(),
            (InteractionMode::Interactive, true) => {
                "↑/↓ or Ctrl+n/p: navigate  Enter: toggle/add  Tab: close list  Esc: close".to_string()
            }
            (InteractionMode::Interactive, false) => {
                "Type to search  Tab: open  Backspace: remove last  Click ×: remove  Esc: hide"
                    .to_string()
            }
        };
        FooterInfo { keybindings }
    }
}
