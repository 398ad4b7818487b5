//! The selection controller: a plain state-transition object.
//!
//! [`SelectionController`] owns everything that defines what the picker has
//! selected: the selected options, the search text, whether the option list
//! is open, and the options the user created from free text. It knows nothing
//! about Zellij, terminals or rendering; the presentation shell forwards
//! input to it and renders whatever state results.
//!
//! # Notifications
//!
//! Mutating operations return `Option<SelectionChanged>`. `Some` means the
//! host must be told about the new selection (the `onChange` contract);
//! `None` means the call was a no-op as far as the host is concerned. An
//! in-process callback registered with [`SelectionController::on_change`] is
//! invoked with the same sequence before the method returns.
//!
//! # Example
//!
//! ```rust
//! use tagpick::app::{ControllerSettings, SelectionController};
//! use tagpick::TagOption;
//!
//! let catalog = vec![TagOption::new("Rust", "rust"), TagOption::new("Go", "go")];
//! let mut controller = SelectionController::new(catalog, vec![], ControllerSettings::default());
//!
//! let changed = controller.toggle(&TagOption::new("Rust", "rust"));
//! assert_eq!(changed.unwrap().selected.len(), 1);
//! assert_eq!(controller.filtered_candidates(), vec![TagOption::new("Go", "go")]);
//! ```

use super::filter::FilterOption;
use crate::domain::option::contains_value;
use crate::domain::{slugify, TagOption};
use std::fmt;

/// Behavioural settings fixed for the lifetime of a controller.
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    /// Upper bound on the number of selected options. `None` means unbounded.
    pub max_selections: Option<usize>,
    /// Whether free text may be committed as a new option.
    pub allow_create: bool,
    /// Predicate used by [`SelectionController::filtered_candidates`].
    pub filter: FilterOption,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            max_selections: None,
            allow_create: true,
            filter: FilterOption::default(),
        }
    }
}

/// Notification payload: the full selection after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// Selected options in selection order.
    pub selected: Vec<TagOption>,
}

/// Hit-test capability supplied by the presentation shell.
///
/// The controller only needs to know whether a pointer-down landed inside
/// the widget; how bounds are computed is the shell's business.
pub trait HitTest {
    /// Returns `true` if the cell at `(row, col)` belongs to the widget.
    fn contains(&self, row: usize, col: usize) -> bool;
}

impl<F> HitTest for F
where
    F: Fn(usize, usize) -> bool,
{
    fn contains(&self, row: usize, col: usize) -> bool {
        self(row, col)
    }
}

type ChangeCallback = Box<dyn FnMut(&[TagOption])>;

/// Selection state machine for one picker instance.
pub struct SelectionController {
    catalog: Vec<TagOption>,
    selected: Vec<TagOption>,
    search_text: String,
    is_open: bool,
    created: Vec<TagOption>,
    settings: ControllerSettings,
    callback: Option<ChangeCallback>,
}

impl SelectionController {
    /// Creates a controller seeded with a catalog and an initial selection.
    ///
    /// The initial selection is taken as-is, like any external value.
    #[must_use]
    pub fn new(catalog: Vec<TagOption>, initial: Vec<TagOption>, settings: ControllerSettings) -> Self {
        tracing::debug!(
            catalog_size = catalog.len(),
            initial_selected = initial.len(),
            max_selections = ?settings.max_selections,
            allow_create = settings.allow_create,
            filter = ?settings.filter,
            "selection controller created"
        );
        Self {
            catalog,
            selected: initial,
            search_text: String::new(),
            is_open: false,
            created: Vec::new(),
            settings,
            callback: None,
        }
    }

    /// Registers an in-process change callback, replacing any previous one.
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&[TagOption]) + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Selected options in selection order.
    #[must_use]
    pub fn selected(&self) -> &[TagOption] {
        &self.selected
    }

    /// Current search text, verbatim.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Whether the option list is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Options created from free text, in creation order.
    #[must_use]
    pub fn created(&self) -> &[TagOption] {
        &self.created
    }

    /// The supplied catalog.
    #[must_use]
    pub fn catalog(&self) -> &[TagOption] {
        &self.catalog
    }

    /// Controller settings.
    #[must_use]
    pub const fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Returns `true` if an option with this value is selected.
    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        contains_value(&self.selected, value)
    }

    /// Returns `true` if no further option can be added.
    #[must_use]
    pub fn is_at_capacity(&self) -> bool {
        self.settings
            .max_selections
            .is_some_and(|max| self.selected.len() >= max)
    }

    /// Replaces the catalog. Selected and created options are left alone.
    pub fn set_catalog(&mut self, catalog: Vec<TagOption>) {
        tracing::debug!(catalog_size = catalog.len(), "catalog replaced");
        self.catalog = catalog;
    }

    /// Overwrites the selection with an externally owned value.
    ///
    /// The caller is trusted: no catalog or cap validation happens, and the
    /// host is not notified since it is the source of the change.
    pub fn set_external_selection(&mut self, options: Vec<TagOption>) {
        tracing::debug!(
            previous = self.selected.len(),
            incoming = options.len(),
            "external selection applied"
        );
        self.selected = options;
    }

    /// Selects `option` if absent, deselects it if present.
    ///
    /// Adding while at capacity is a silent no-op. Any actual change clears
    /// the search text.
    pub fn toggle(&mut self, option: &TagOption) -> Option<SelectionChanged> {
        let is_selected = self.is_selected(&option.value);

        if !is_selected && self.is_at_capacity() {
            tracing::debug!(value = %option.value, "selection cap reached, toggle ignored");
            return None;
        }

        if is_selected {
            self.selected.retain(|o| o.value != option.value);
        } else {
            self.selected.push(option.clone());
        }

        tracing::debug!(value = %option.value, selected = !is_selected, "option toggled");
        self.search_text.clear();
        Some(self.notify())
    }

    /// Removes `option` by value.
    ///
    /// Removing an absent value changes nothing but still notifies.
    pub fn remove(&mut self, option: &TagOption) -> Option<SelectionChanged> {
        let before = self.selected.len();
        self.selected.retain(|o| o.value != option.value);
        tracing::debug!(value = %option.value, removed = before != self.selected.len(), "option removed");
        Some(self.notify())
    }

    /// Removes the most recently selected option.
    ///
    /// Only applies while the search text is empty and something is
    /// selected.
    pub fn remove_last(&mut self) -> Option<SelectionChanged> {
        if !self.search_text.is_empty() {
            return None;
        }

        let removed = self.selected.pop()?;
        tracing::debug!(value = %removed.value, "last selection removed");
        Some(self.notify())
    }

    /// Commits the search text as a selection, creating an option if needed.
    ///
    /// The value is the slug of the search text while the label keeps the
    /// text exactly as typed. An existing catalog or created option with the
    /// same value is reused instead of creating a duplicate.
    pub fn create_from_search(&mut self) -> Option<SelectionChanged> {
        if !self.settings.allow_create || self.search_text.trim().is_empty() {
            return None;
        }

        if self.is_at_capacity() {
            tracing::debug!("selection cap reached, creation ignored");
            return None;
        }

        let value = slugify(&self.search_text);
        let existing = self
            .catalog
            .iter()
            .chain(self.created.iter())
            .find(|o| o.value == value)
            .cloned();

        let option = existing.unwrap_or_else(|| {
            let created = TagOption {
                label: self.search_text.clone(),
                value,
                emoji: None,
            };
            tracing::debug!(value = %created.value, label = %created.label, "option created from search");
            self.created.push(created.clone());
            created
        });

        if !self.is_selected(&option.value) {
            self.selected.push(option);
        }

        self.search_text.clear();
        Some(self.notify())
    }

    /// Replaces the search text verbatim.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Shows the option list.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hides the option list.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Flips the option list visibility.
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Reacts to a pointer-down anywhere on screen.
    ///
    /// Closes the list when `bounds` says the pointer is outside the widget.
    /// Returns `true` if the list was open and got closed.
    pub fn pointer_down(&mut self, bounds: &impl HitTest, row: usize, col: usize) -> bool {
        if bounds.contains(row, col) || !self.is_open {
            return false;
        }
        tracing::debug!(row, col, "pointer down outside widget, closing");
        self.close();
        true
    }

    /// Options the user can still pick for the current search text.
    ///
    /// Catalog entries come first in their given order, followed by created
    /// options in creation order. Selected values are excluded, and every
    /// remaining option is tested with the configured predicate. Each call
    /// returns a fresh vector.
    #[must_use]
    pub fn filtered_candidates(&self) -> Vec<TagOption> {
        self.catalog
            .iter()
            .chain(self.created.iter())
            .filter(|o| !self.is_selected(&o.value))
            .filter(|o| self.settings.filter.matches(o, &self.search_text))
            .cloned()
            .collect()
    }

    fn notify(&mut self) -> SelectionChanged {
        if let Some(callback) = self.callback.as_mut() {
            callback(&self.selected);
        }
        SelectionChanged {
            selected: self.selected.clone(),
        }
    }
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("catalog", &self.catalog.len())
            .field("selected", &self.selected)
            .field("search_text", &self.search_text)
            .field("is_open", &self.is_open)
            .field("created", &self.created)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn opt(label: &str, value: &str) -> TagOption {
        TagOption::new(label, value)
    }

    fn catalog() -> Vec<TagOption> {
        vec![
            opt("React", "react").with_emoji("⚛️"),
            opt("TypeScript", "typescript").with_emoji("📘"),
            opt("Rust", "rust").with_emoji("🦀"),
            opt("Go", "go").with_emoji("🚀"),
        ]
    }

    fn controller() -> SelectionController {
        SelectionController::new(catalog(), vec![], ControllerSettings::default())
    }

    fn capped(max: usize) -> SelectionController {
        SelectionController::new(
            catalog(),
            vec![],
            ControllerSettings {
                max_selections: Some(max),
                ..ControllerSettings::default()
            },
        )
    }

    fn values(options: &[TagOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut c = controller();
        let rust = opt("Rust", "rust");

        c.toggle(&rust);
        assert_eq!(values(c.selected()), vec!["rust"]);

        c.toggle(&rust);
        assert!(c.selected().is_empty());
    }

    #[test]
    fn toggle_twice_restores_previous_selection() {
        let mut c = controller();
        c.toggle(&opt("React", "react"));
        c.toggle(&opt("Go", "go"));
        let before = c.selected().to_vec();

        c.toggle(&opt("Rust", "rust"));
        c.toggle(&opt("Rust", "rust"));

        assert_eq!(c.selected(), before.as_slice());
    }

    #[test]
    fn toggle_clears_search_text() {
        let mut c = controller();
        c.set_search_text("ru");
        c.toggle(&opt("Rust", "rust"));
        assert_eq!(c.search_text(), "");
    }

    #[test]
    fn cap_blocks_additions_silently() {
        let mut c = capped(2);
        let (a, b, cc) = (opt("React", "react"), opt("Rust", "rust"), opt("Go", "go"));

        assert!(c.toggle(&a).is_some());
        assert!(c.toggle(&b).is_some());
        c.set_search_text("g");
        assert!(c.toggle(&cc).is_none());
        assert!(c.toggle(&cc).is_none());
        assert_eq!(values(c.selected()), vec!["react", "rust"]);
        assert_eq!(c.search_text(), "g");

        c.toggle(&a);
        assert!(c.toggle(&cc).is_some());
        assert_eq!(values(c.selected()), vec!["rust", "go"]);
    }

    #[test]
    fn cap_still_allows_deselecting() {
        let mut c = capped(1);
        let rust = opt("Rust", "rust");
        c.toggle(&rust);
        assert!(c.toggle(&rust).is_some());
        assert!(c.selected().is_empty());
    }

    #[test]
    fn zero_cap_blocks_every_addition_but_not_removal() {
        let mut c = SelectionController::new(
            catalog(),
            vec![opt("Go", "go")],
            ControllerSettings {
                max_selections: Some(0),
                ..ControllerSettings::default()
            },
        );

        assert!(c.toggle(&opt("Rust", "rust")).is_none());
        c.set_search_text("Brand New");
        assert!(c.create_from_search().is_none());
        assert!(c.remove(&opt("Go", "go")).is_some());
        assert!(c.selected().is_empty());
    }

    #[test]
    fn remove_of_absent_value_still_notifies() {
        let mut c = controller();
        c.toggle(&opt("Go", "go"));

        let changed = c.remove(&opt("Rust", "rust")).unwrap();
        assert_eq!(values(&changed.selected), vec!["go"]);
    }

    #[test]
    fn remove_last_pops_when_search_empty() {
        let mut c = SelectionController::new(
            catalog(),
            vec![opt("A", "a"), opt("B", "b"), opt("C", "c")],
            ControllerSettings::default(),
        );

        let changed = c.remove_last().unwrap();
        assert_eq!(values(&changed.selected), vec!["a", "b"]);
    }

    #[test]
    fn remove_last_is_noop_with_search_text() {
        let mut c = SelectionController::new(
            catalog(),
            vec![opt("A", "a"), opt("B", "b")],
            ControllerSettings::default(),
        );
        c.set_search_text("x");

        assert!(c.remove_last().is_none());
        assert_eq!(c.selected().len(), 2);
    }

    #[test]
    fn remove_last_on_empty_selection_does_not_notify() {
        let mut c = controller();
        assert!(c.remove_last().is_none());
    }

    #[test]
    fn create_from_search_with_empty_catalog() {
        let mut c = SelectionController::new(vec![], vec![], ControllerSettings::default());
        c.set_search_text("Site Reliability");

        let changed = c.create_from_search().unwrap();

        let expected = opt("Site Reliability", "site-reliability");
        assert_eq!(c.created(), &[expected.clone()]);
        assert_eq!(changed.selected, vec![expected]);
        assert_eq!(c.search_text(), "");
    }

    #[test]
    fn create_keeps_raw_label_and_trims_value() {
        let mut c = controller();
        c.set_search_text("  Platform   Team ");
        c.create_from_search();

        assert_eq!(c.created()[0].label, "  Platform   Team ");
        assert_eq!(c.created()[0].value, "platform-team");
    }

    #[test]
    fn create_reuses_matching_catalog_option() {
        let mut c = controller();
        c.set_search_text("RUST");

        let changed = c.create_from_search().unwrap();

        assert!(c.created().is_empty());
        assert_eq!(changed.selected, vec![opt("Rust", "rust").with_emoji("🦀")]);
    }

    #[test]
    fn create_does_not_duplicate_selected_value() {
        let mut c = controller();
        c.toggle(&opt("Rust", "rust").with_emoji("🦀"));
        c.set_search_text("rust");

        let changed = c.create_from_search().unwrap();

        assert_eq!(values(&changed.selected), vec!["rust"]);
        assert_eq!(c.search_text(), "");
    }

    #[test]
    fn create_reuses_previously_created_option() {
        let mut c = controller();
        c.set_search_text("Infra");
        c.create_from_search();
        c.remove_last();

        c.set_search_text("infra");
        c.create_from_search();

        assert_eq!(c.created().len(), 1);
        assert_eq!(c.selected()[0].label, "Infra");
    }

    #[test]
    fn create_ignores_blank_text_and_disabled_creation() {
        let mut c = controller();
        c.set_search_text("   ");
        assert!(c.create_from_search().is_none());
        assert_eq!(c.search_text(), "   ");

        let mut locked = SelectionController::new(
            vec![],
            vec![],
            ControllerSettings {
                allow_create: false,
                ..ControllerSettings::default()
            },
        );
        locked.set_search_text("Anything");
        assert!(locked.create_from_search().is_none());
        assert!(locked.selected().is_empty());
    }

    #[test]
    fn create_respects_cap() {
        let mut c = capped(1);
        c.toggle(&opt("Go", "go"));
        c.set_search_text("Extra");
        assert!(c.create_from_search().is_none());
        assert!(c.created().is_empty());
    }

    #[test]
    fn external_selection_overwrites_local_state() {
        let mut c = controller();
        c.toggle(&opt("A", "a"));

        c.set_external_selection(vec![opt("D", "d"), opt("E", "e")]);

        assert_eq!(c.selected(), &[opt("D", "d"), opt("E", "e")]);
    }

    #[test]
    fn candidates_exclude_selected_and_keep_order() {
        let mut c = controller();
        c.set_search_text("Custom Tag");
        c.create_from_search();
        c.toggle(&opt("TypeScript", "typescript"));
        c.remove(&opt("Custom Tag", "custom-tag"));

        let candidates = c.filtered_candidates();
        assert_eq!(values(&candidates), vec!["react", "rust", "go", "custom-tag"]);
    }

    #[test]
    fn candidates_use_case_insensitive_substring_by_default() {
        let mut c = controller();
        c.set_search_text("SCR");
        assert_eq!(values(&c.filtered_candidates()), vec!["typescript"]);
    }

    #[test]
    fn candidates_use_custom_predicate() {
        let mut c = SelectionController::new(
            catalog(),
            vec![],
            ControllerSettings {
                filter: FilterOption::custom(|o, s| o.value.ends_with(s)),
                ..ControllerSettings::default()
            },
        );
        c.set_search_text("t");
        assert_eq!(values(&c.filtered_candidates()), vec!["react", "typescript", "rust"]);
    }

    #[test]
    fn pointer_down_outside_closes() {
        let mut c = controller();
        c.open();
        let bounds = |row: usize, _col: usize| row < 5;

        assert!(!c.pointer_down(&bounds, 2, 10));
        assert!(c.is_open());

        assert!(c.pointer_down(&bounds, 8, 10));
        assert!(!c.is_open());
    }

    #[test]
    fn open_close_toggle() {
        let mut c = controller();
        assert!(!c.is_open());
        c.toggle_open();
        assert!(c.is_open());
        c.close();
        assert!(!c.is_open());
        c.open();
        c.open();
        assert!(c.is_open());
    }

    #[test]
    fn callback_sees_every_notification() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = Rc::clone(&seen);

        let mut c = controller();
        c.on_change(move |selected| sink.borrow_mut().push(selected.len()));

        c.toggle(&opt("Go", "go"));
        c.toggle(&opt("Rust", "rust"));
        c.remove_last();
        c.set_search_text("zz");
        c.remove_last();

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }
}
