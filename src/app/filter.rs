//! Candidate filtering predicates.
//!
//! The controller decides which candidates survive a search by asking a
//! [`FilterOption`]. The default keeps an option iff its label contains the
//! search text case-insensitively. Hosts can pick a built-in alternative by
//! name or install their own predicate.
//!
//! # Example
//!
//! ```rust
//! use tagpick::app::FilterOption;
//! use tagpick::TagOption;
//!
//! let rust = TagOption::new("Rust", "rust");
//! assert!(FilterOption::Substring.matches(&rust, "US"));
//! assert!(!FilterOption::Prefix.matches(&rust, "us"));
//!
//! let by_value = FilterOption::custom(|option, search| option.value.starts_with(search));
//! assert!(by_value.matches(&rust, "ru"));
//! ```

use crate::domain::TagOption;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::fmt;
use std::sync::Arc;

/// Signature of a host-supplied filter predicate.
pub type FilterFn = dyn Fn(&TagOption, &str) -> bool + Send + Sync;

/// Predicate deciding whether a candidate matches the search text.
#[derive(Clone, Default)]
pub enum FilterOption {
    /// Case-insensitive label substring match.
    #[default]
    Substring,

    /// Case-insensitive label prefix match.
    Prefix,

    /// Skim-style fuzzy match on the label.
    ///
    /// Empty search text matches everything.
    Fuzzy,

    /// Host-supplied predicate, called with every candidate and the raw
    /// search text.
    Custom(Arc<FilterFn>),
}

impl FilterOption {
    /// Wraps a closure as a [`FilterOption::Custom`] predicate.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&TagOption, &str) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    /// Parses a built-in predicate name from plugin configuration.
    ///
    /// Accepts `substring`, `prefix` and `fuzzy` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "substring" | "contains" => Some(Self::Substring),
            "prefix" | "starts-with" => Some(Self::Prefix),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }

    /// Returns `true` if `option` should be kept for `search`.
    #[must_use]
    pub fn matches(&self, option: &TagOption, search: &str) -> bool {
        match self {
            Self::Substring => option.label.to_lowercase().contains(&search.to_lowercase()),
            Self::Prefix => option.label.to_lowercase().starts_with(&search.to_lowercase()),
            Self::Fuzzy => {
                search.is_empty()
                    || SkimMatcherV2::default()
                        .ignore_case()
                        .fuzzy_match(&option.label, search)
                        .is_some()
            }
            Self::Custom(predicate) => predicate(option, search),
        }
    }

    /// Character ranges of `label` to highlight for `search`.
    ///
    /// Ranges are `(start, end)` character indices with exclusive end. Custom
    /// predicates produce no highlighting since their match semantics are
    /// opaque.
    #[must_use]
    pub fn highlight_ranges(&self, label: &str, search: &str) -> Vec<(usize, usize)> {
        if search.is_empty() {
            return vec![];
        }

        match self {
            Self::Substring => substring_range(label, search, false),
            Self::Prefix => substring_range(label, search, true),
            Self::Fuzzy => SkimMatcherV2::default()
                .ignore_case()
                .fuzzy_indices(label, search)
                .map(|(_score, indices)| coalesce(&indices))
                .unwrap_or_default(),
            Self::Custom(_) => vec![],
        }
    }
}

impl fmt::Debug for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substring => f.write_str("Substring"),
            Self::Prefix => f.write_str("Prefix"),
            Self::Fuzzy => f.write_str("Fuzzy"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Finds the first case-insensitive occurrence of `search` in `label`.
///
/// Works on characters so that multi-byte labels stay aligned. Lower-casing
/// may change lengths for a few scripts; in that case nothing is highlighted.
fn substring_range(label: &str, search: &str, anchored: bool) -> Vec<(usize, usize)> {
    let label_chars: Vec<char> = label.to_lowercase().chars().collect();
    let search_chars: Vec<char> = search.to_lowercase().chars().collect();

    if label_chars.len() != label.chars().count() || search_chars.len() > label_chars.len() {
        return vec![];
    }

    let last_start = if anchored { 0 } else { label_chars.len() - search_chars.len() };
    (0..=last_start)
        .find(|&start| label_chars[start..start + search_chars.len()] == search_chars[..])
        .map(|start| vec![(start, start + search_chars.len())])
        .unwrap_or_default()
}

/// Merges sorted character indices into contiguous `(start, end)` ranges.
fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(label: &str) -> TagOption {
        TagOption::from_label(label)
    }

    #[test]
    fn substring_is_case_insensitive() {
        assert!(FilterOption::Substring.matches(&option("TypeScript"), "script"));
        assert!(FilterOption::Substring.matches(&option("TypeScript"), ""));
        assert!(!FilterOption::Substring.matches(&option("TypeScript"), "rust"));
    }

    #[test]
    fn prefix_only_matches_start() {
        assert!(FilterOption::Prefix.matches(&option("MongoDB"), "mon"));
        assert!(!FilterOption::Prefix.matches(&option("MongoDB"), "db"));
    }

    #[test]
    fn fuzzy_matches_scattered_characters() {
        assert!(FilterOption::Fuzzy.matches(&option("GraphQL"), "gql"));
        assert!(!FilterOption::Fuzzy.matches(&option("GraphQL"), "zz"));
        assert!(FilterOption::Fuzzy.matches(&option("GraphQL"), ""));
    }

    #[test]
    fn custom_receives_raw_search() {
        let exact = FilterOption::custom(|o, s| o.value == s);
        assert!(exact.matches(&option("Go"), "go"));
        assert!(!exact.matches(&option("Go"), "Go"));
    }

    #[test]
    fn from_name_recognises_builtins() {
        assert!(matches!(FilterOption::from_name("Fuzzy"), Some(FilterOption::Fuzzy)));
        assert!(matches!(FilterOption::from_name("prefix"), Some(FilterOption::Prefix)));
        assert!(FilterOption::from_name("regex").is_none());
    }

    #[test]
    fn substring_highlight_uses_char_indices() {
        let ranges = FilterOption::Substring.highlight_ranges("Crème brûlée", "BRÛ");
        assert_eq!(ranges, vec![(6, 9)]);
    }

    #[test]
    fn fuzzy_highlight_coalesces_runs() {
        let ranges = FilterOption::Fuzzy.highlight_ranges("docker", "dock");
        assert_eq!(ranges, vec![(0, 4)]);
    }

    #[test]
    fn coalesce_splits_on_gaps() {
        assert_eq!(coalesce(&[0, 1, 3, 4, 6]), vec![(0, 2), (3, 5), (6, 7)]);
    }
}
