//! Interaction mode types for the presentation shell.
//!
//! These enums decide which inputs reach the selection controller and where
//! keyboard focus sits inside the dropdown. They carry no selection state of
//! their own.
//!
//! # Example
//!
//! ```rust
//! use tagpick::app::{DropdownFocus, InteractionMode};
//!
//! let mode = InteractionMode::from_disabled(false);
//! assert!(mode.accepts_input());
//! assert_eq!(DropdownFocus::default(), DropdownFocus::Input);
//! ```

/// Whether the widget reacts to user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal operation.
    #[default]
    Interactive,

    /// All interaction entry points are suppressed: opening the list,
    /// typing, keyboard selection and chip removal. Selected chips still
    /// render and external updates still apply.
    Disabled,
}

impl InteractionMode {
    /// Maps the `disabled` configuration flag to a mode.
    #[must_use]
    pub const fn from_disabled(disabled: bool) -> Self {
        if disabled {
            Self::Disabled
        } else {
            Self::Interactive
        }
    }

    /// Returns `true` if user input should be forwarded to the controller.
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::Interactive)
    }
}

/// Keyboard focus within the open dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownFocus {
    /// Focus is on the search text; `Enter` commits the text.
    #[default]
    Input,

    /// A candidate row is highlighted; `Enter` toggles it.
    ///
    /// The index refers to the current `filtered_candidates()` sequence and
    /// is clamped whenever that sequence changes.
    Candidate(usize),
}

/// Presentation classes parsed from the `class_name` setting.
///
/// Unknown class names are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleClasses {
    /// `compact`: drop the header so the control starts at the top row.
    pub compact: bool,
    /// `no-emoji`: render labels without their emoji.
    pub hide_emoji: bool,
}

impl StyleClasses {
    /// Parses a space separated class list.
    #[must_use]
    pub fn parse(class_name: &str) -> Self {
        class_name
            .split_whitespace()
            .fold(Self::default(), |mut classes, class| {
                match class {
                    "compact" => classes.compact = true,
                    "no-emoji" => classes.hide_emoji = true,
                    other => tracing::debug!(class = %other, "ignoring unknown class"),
                }
                classes
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_mode_rejects_input() {
        assert!(!InteractionMode::from_disabled(true).accepts_input());
        assert!(InteractionMode::from_disabled(false).accepts_input());
    }

    #[test]
    fn parses_known_classes() {
        let classes = StyleClasses::parse("  compact  picker no-emoji ");
        assert!(classes.compact);
        assert!(classes.hide_emoji);
        assert_eq!(StyleClasses::parse(""), StyleClasses::default());
    }
}
