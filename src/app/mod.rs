//! Application layer coordinating selection state, events and actions.
//!
//! This layer sits between the plugin runtime (`main.rs`) and the domain
//! types. Data flows one way:
//!
//! ```text
//! Key / Mouse / Pipe → Event → handle_event → SelectionController → Actions
//!                                     │
//!                                     └→ AppState::compute_viewmodel → ui
//! ```
//!
//! # Modules
//!
//! - [`controller`]: selection state machine, independent of Zellij
//! - [`filter`]: candidate filtering predicates
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`handler`]: event processing and focus bookkeeping
//! - [`modes`]: interaction mode, dropdown focus, presentation classes
//! - [`state`]: state container and view model computation

pub mod actions;
pub mod controller;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::{ControllerSettings, HitTest, SelectionChanged, SelectionController};
pub use filter::{FilterFn, FilterOption};
pub use handler::{handle_event, Event};
pub use modes::{DropdownFocus, InteractionMode, StyleClasses};
pub use state::{AppState, DEFAULT_PLACEHOLDER};
