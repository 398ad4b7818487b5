//! The selectable option model.
//!
//! A [`TagOption`] is one entry of the picker: a display label, a value that
//! identifies it, and an optional decorative emoji. Two options are the same
//! entity iff their values are equal; labels and emoji play no part in
//! identity.

use serde::{Deserialize, Serialize};

/// A selectable entry of the tag picker.
///
/// Options are immutable once constructed. The `emoji` field is skipped when
/// serialising if absent, so JSON payloads match the shape hosts send:
///
/// ```json
/// { "label": "Rust", "value": "rust", "emoji": "🦀" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagOption {
    /// Display text.
    pub label: String,
    /// Identity key, unique within a catalog.
    pub value: String,
    /// Optional decorative prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl TagOption {
    /// Creates an option without an emoji.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagpick::TagOption;
    ///
    /// let option = TagOption::new("Rust", "rust");
    /// assert_eq!(option.value, "rust");
    /// assert!(option.emoji.is_none());
    /// ```
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            emoji: None,
        }
    }

    /// Returns a copy of this option decorated with `emoji`.
    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Builds an option whose value is derived from the label with [`slugify`].
    ///
    /// The label is kept exactly as given.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let value = slugify(&label);
        Self {
            label,
            value,
            emoji: None,
        }
    }

    /// Returns `true` if both options share the same value.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.value == other.value
    }

    /// Text shown for this option: emoji (if any), a space, then the label.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.emoji {
            Some(emoji) if !emoji.is_empty() => format!("{emoji} {}", self.label),
            _ => self.label.clone(),
        }
    }
}

/// Derives an option value from free text.
///
/// Trims surrounding whitespace, lower-cases the rest and collapses every
/// internal whitespace run into a single hyphen. No other normalisation is
/// applied, so punctuation and emoji pass through.
///
/// # Examples
///
/// ```
/// use tagpick::domain::slugify;
///
/// assert_eq!(slugify("Site Reliability"), "site-reliability");
/// assert_eq!(slugify("  Node.js \t Runtime "), "node.js-runtime");
/// assert_eq!(slugify("   "), "");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Returns `true` if `options` holds an entry with the given value.
pub(crate) fn contains_value(options: &[TagOption], value: &str) -> bool {
    options.iter().any(|o| o.value == value)
}
