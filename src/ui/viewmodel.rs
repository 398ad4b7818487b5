//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry
//! display-ready text together with the [`WidgetLayout`] that positions it,
//! and contain no selection logic.
//!
//! # Example
//!
//! ```rust
//! use tagpick::ui::viewmodel::InfoRow;
//!
//! let info = InfoRow::CreatePrompt("Svelte".to_string());
//! assert_eq!(info.message(), "Press Enter to add \"Svelte\"");
//! assert_eq!(InfoRow::NoMatches.message(), "No options found");
//! ```

use super::layout::{ChipSlot, Rect, WidgetLayout};

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Geometry shared with hit-testing.
    pub layout: WidgetLayout,

    /// Header title, absent with the `compact` class.
    pub header: Option<HeaderInfo>,

    /// Bordered control holding chips and the search input.
    pub control: ControlInfo,

    /// Open option list.
    pub dropdown: Option<DropdownInfo>,

    /// Footer keybinding hints.
    pub footer: FooterInfo,
}

/// Header information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, e.g. `" Tags (2 selected) "`.
    pub title: String,
}

/// One selected option rendered as a chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipItem {
    /// Emoji and label, or label only with the `no-emoji` class.
    pub text: String,
    /// Where the chip sits.
    pub slot: ChipSlot,
}

/// Search input contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputInfo {
    /// Typed search text (possibly empty).
    Query(String),
    /// Placeholder, shown while nothing is selected and nothing is typed.
    Placeholder(String),
}

/// Control state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlInfo {
    /// Chips in selection order.
    pub chips: Vec<ChipItem>,
    /// Search input contents.
    pub input: InputInfo,
    /// Whether to draw the text cursor after the query.
    pub show_cursor: bool,
    /// Whether the list is open, which flips the chevron.
    pub is_open: bool,
    /// Whether interaction is suppressed; chips render dimmed.
    pub is_disabled: bool,
}

impl ControlInfo {
    /// Chevron glyph reflecting the open state.
    #[must_use]
    pub const fn chevron(&self) -> &'static str {
        if self.is_open {
            "▴"
        } else {
            "▾"
        }
    }
}

/// Display information for a single candidate row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Emoji and label, or label only with the `no-emoji` class.
    pub text: String,

    /// Screen row.
    pub row: usize,

    /// Whether keyboard focus is on this row.
    pub is_highlighted: bool,

    /// Character ranges of `text` matching the search.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices,
    /// end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Message shown below an empty candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoRow {
    /// Enter will create an option from this search text.
    CreatePrompt(String),
    /// Nothing matches and nothing can be created.
    NoMatches,
}

impl InfoRow {
    /// User-facing text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::CreatePrompt(search) => format!("Press Enter to add \"{search}\""),
            Self::NoMatches => "No options found".to_string(),
        }
    }
}

/// Open dropdown contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownInfo {
    /// Bounding box, bottom border included.
    pub rect: Rect,
    /// Visible candidate rows.
    pub items: Vec<DisplayItem>,
    /// Informational row and its screen row.
    pub info: Option<(usize, InfoRow)>,
}

/// Footer information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding hints for the current state.
    pub keybindings: String,
}
