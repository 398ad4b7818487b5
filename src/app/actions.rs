//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after every event. Actions are
//! the boundary between pure state transitions and Zellij calls; the plugin
//! shim in `main.rs` executes them in order.
//!
//! # Example
//!
//! ```rust
//! use tagpick::app::Action;
//! use tagpick::TagOption;
//!
//! let actions = vec![Action::NotifyChange {
//!     selected: vec![TagOption::new("Rust", "rust")],
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::domain::TagOption;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when `Esc` is pressed while the dropdown is already closed.
    CloseFocus,

    /// Tells the host about a new selection (the `onChange` contract).
    ///
    /// Broadcast as a plugin message and written to every subscribed CLI
    /// pipe.
    NotifyChange {
        /// Full selection in selection order.
        selected: Vec<TagOption>,
    },

    /// Writes a payload to a CLI pipe and releases it.
    ReplyToPipe {
        /// Zellij CLI pipe identifier.
        pipe_id: String,
        /// Text written to the pipe's stdout.
        payload: String,
    },

    /// Releases a CLI pipe without writing anything.
    ReleasePipe {
        /// Zellij CLI pipe identifier.
        pipe_id: String,
    },
}
