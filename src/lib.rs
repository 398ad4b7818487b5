//! Tagpick: a multi-select tag picker plugin for Zellij.
//!
//! Tagpick renders a bordered control holding the selected options as
//! removable chips, followed by a search input. Typing filters the catalog;
//! `Enter` picks the highlighted option or, when nothing matches, creates a
//! new one from the typed text. A host process keeps the authoritative
//! selection and talks to the picker over Zellij pipes.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, mouse, pipes
//! └─────────────────────────────────────────────────────┘
//!                        │ Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - SelectionController (pure state machine)         │
//! │  - Event handling, focus, actions                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Pipe Protocol │   │ Domain        │
//! │ (ui/)         │   │ (pipe/)       │   │ (domain/)     │
//! │ - Layout      │   │ - Commands    │   │ - TagOption   │
//! │ - Components  │   │ - JSON codec  │   │ - Catalog     │
//! │ - Theming     │   │               │   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - OTLP file export (observability/)                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/tagpick.wasm" {
//!         options "React|react|⚛️,TypeScript|typescript|📘,Rust|rust|🦀"
//!         catalog_file "~/.config/tagpick/tags.toml"
//!         value "rust"
//!         placeholder "Pick a stack..."
//!         max_selections "5"
//!         allow_create "true"
//!         filter "fuzzy"
//!         class_name "compact"
//!         theme "catppuccin-mocha"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Library Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use tagpick::{handle_event, initialize, Action, Config, Event};
//!
//! let mut map = BTreeMap::new();
//! map.insert("options".to_string(), "Rust|rust|🦀,Go".to_string());
//! let mut state = initialize(&Config::from_zellij(&map));
//!
//! for event in [Event::Char('g'), Event::HighlightNext, Event::Enter] {
//!     let (_render, actions) = handle_event(&mut state, &event)?;
//!     for action in actions {
//!         if let Action::NotifyChange { selected } = action {
//!             assert_eq!(selected[0].value, "go");
//!         }
//!     }
//! }
//! # Ok::<(), tagpick::TagpickError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod pipe;
pub mod ui;

pub mod observability;

pub use app::{
    handle_event, Action, AppState, ControllerSettings, Event, FilterOption, HitTest,
    InteractionMode, SelectionChanged, SelectionController, StyleClasses,
};
pub use domain::{Result, TagOption, TagpickError};
pub use pipe::PipeCommand;
pub use ui::Theme;

use app::state::DEFAULT_PLACEHOLDER;
use domain::catalog;
use infrastructure::paths::{display_path, resolve_host_path};
use std::collections::BTreeMap;

/// Plugin configuration parsed from the Zellij layout.
#[derive(Debug, Clone)]
pub struct Config {
    /// Inline catalog: comma separated `label`, `label|value` or
    /// `label|value|emoji` entries.
    pub options: Option<String>,

    /// TOML catalog file, appended after the inline entries.
    pub catalog_file: Option<String>,

    /// Placeholder shown while nothing is selected. Default: `Select...`
    pub placeholder: String,

    /// Initial selection as comma separated values.
    pub value: Option<String>,

    /// Space separated presentation classes (`compact`, `no-emoji`).
    pub class_name: String,

    /// Suppresses interaction when `true`.
    pub disabled: bool,

    /// Cap on the selection size. `None` means unbounded.
    pub max_selections: Option<usize>,

    /// Whether free text may become a new option. Default: `true`
    pub allow_create: bool,

    /// Candidate filter. Default: substring.
    pub filter: FilterOption,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: None,
            catalog_file: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            value: None,
            class_name: String::new(),
            disabled: false,
            max_selections: None,
            allow_create: true,
            filter: FilterOption::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Malformed values are logged and replaced by their defaults so that a
    /// typo never keeps the plugin from loading.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tagpick::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("max_selections".to_string(), "3".to_string());
    /// map.insert("allow_create".to_string(), "false".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.max_selections, Some(3));
    /// assert!(!config.allow_create);
    /// assert_eq!(config.placeholder, "Select...");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let disabled = parse_or(config, "disabled", parse_flag, defaults.disabled);
        let allow_create = parse_or(config, "allow_create", parse_flag, defaults.allow_create);
        let max_selections = parse_or(config, "max_selections", parse_cap, None);

        let filter = match non_empty("filter") {
            Some(name) => FilterOption::from_name(&name).unwrap_or_else(|| {
                tracing::warn!(filter = %name, "unknown filter, using substring");
                FilterOption::default()
            }),
            None => defaults.filter,
        };

        Self {
            options: non_empty("options"),
            catalog_file: non_empty("catalog_file"),
            placeholder: config
                .get("placeholder")
                .cloned()
                .unwrap_or(defaults.placeholder),
            value: non_empty("value"),
            class_name: config.get("class_name").cloned().unwrap_or_default(),
            disabled,
            max_selections,
            allow_create,
            filter,
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
        }
    }
}

fn parse_or<T>(
    config: &BTreeMap<String, String>,
    key: &str,
    parse: fn(&str, &str) -> Result<T>,
    default: T,
) -> T {
    match config.get(key) {
        Some(raw) => parse(key, raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default");
            default
        }),
        None => default,
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(TagpickError::Config(format!("{key}: expected a boolean, got '{other}'"))),
    }
}

fn parse_cap(key: &str, raw: &str) -> Result<Option<usize>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| TagpickError::Config(format!("{key}: expected a non-negative integer, got '{raw}'")))
}

/// Builds the catalog from the inline list followed by the catalog file.
///
/// A missing or malformed file is logged and skipped.
#[must_use]
pub fn load_catalog(config: &Config) -> Vec<TagOption> {
    let mut options = config
        .options
        .as_deref()
        .map(catalog::parse_inline)
        .unwrap_or_default();

    if let Some(file) = &config.catalog_file {
        let path = resolve_host_path(file);
        match catalog::load_file(&path) {
            Ok(loaded) => options.extend(loaded),
            Err(e) => tracing::warn!(
                catalog_file = %display_path(&path.to_string_lossy()),
                error = %e,
                "failed to load catalog file"
            ),
        }
    }

    options
}

/// Resolves the configured theme, falling back to the default.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(resolve_host_path(theme_file)).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config
        .theme_name
        .as_deref()
        .map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
}

/// Builds the initial application state from configuration.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let catalog = load_catalog(config);
    let initial = config
        .value
        .as_deref()
        .map(|raw| catalog::resolve_values(&catalog, raw))
        .unwrap_or_default();

    let settings = ControllerSettings {
        max_selections: config.max_selections,
        allow_create: config.allow_create,
        filter: config.filter.clone(),
    };

    let mut state = AppState::new(
        SelectionController::new(catalog, initial, settings),
        load_theme(config),
    );
    state.placeholder.clone_from(&config.placeholder);
    state.mode = InteractionMode::from_disabled(config.disabled);
    state.classes = StyleClasses::parse(&config.class_name);

    tracing::debug!(
        catalog_size = state.controller.catalog().len(),
        selected = state.controller.selected().len(),
        mode = ?state.mode,
        "tagpick initialized"
    );
    state
}
