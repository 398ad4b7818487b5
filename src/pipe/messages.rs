//! Host protocol carried over Zellij pipes.
//!
//! The host application owns the authoritative selection and talks to the
//! picker through named pipes. Every pipe name is namespaced with
//! [`PIPE_PREFIX`]; payloads are JSON arrays of options:
//!
//! ```json
//! [{ "label": "Rust", "value": "rust", "emoji": "🦀" }]
//! ```
//!
//! | pipe | payload | effect |
//! |---|---|---|
//! | `tagpick::set_value` | options | overwrite the selection |
//! | `tagpick::set_options` | options | replace the catalog |
//! | `tagpick::get_value` | none | reply with the selection |
//! | `tagpick::subscribe` | none | stream every change to this CLI pipe |
//! | `tagpick::open` / `tagpick::close` | none | dropdown visibility |
//!
//! Change notifications go out on [`CHANGED_MESSAGE`].

use crate::domain::error::{Result, TagpickError};
use crate::domain::TagOption;

/// Namespace shared by every pipe the picker understands.
pub const PIPE_PREFIX: &str = "tagpick::";

/// Name of the plugin message broadcast after every selection change.
pub const CHANGED_MESSAGE: &str = "tagpick::changed";

/// A decoded host request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipeCommand {
    /// Overwrite the selection with the host's value.
    SetValue(Vec<TagOption>),
    /// Replace the catalog.
    SetOptions(Vec<TagOption>),
    /// Reply with the current selection.
    GetValue,
    /// Register the calling CLI pipe for change notifications.
    Subscribe,
    /// Show the option list.
    Open,
    /// Hide the option list.
    Close,
}

impl PipeCommand {
    /// Decodes a pipe message.
    ///
    /// Returns `Ok(None)` for messages outside the picker namespace or with
    /// an unknown command, so other plugins' traffic passes through quietly.
    ///
    /// # Errors
    ///
    /// Returns [`TagpickError::Payload`] if a command that needs options
    /// carries a missing or malformed JSON payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tagpick::pipe::PipeCommand;
    ///
    /// let command = PipeCommand::parse("tagpick::set_value", Some(r#"[{"label":"Go","value":"go"}]"#))
    ///     .unwrap()
    ///     .unwrap();
    /// assert!(matches!(command, PipeCommand::SetValue(ref options) if options.len() == 1));
    ///
    /// assert!(PipeCommand::parse("other::thing", None).unwrap().is_none());
    /// ```
    pub fn parse(name: &str, payload: Option<&str>) -> Result<Option<Self>> {
        let Some(command) = name.strip_prefix(PIPE_PREFIX) else {
            return Ok(None);
        };

        let parsed = match command {
            "set_value" => Self::SetValue(decode_options(name, payload)?),
            "set_options" => Self::SetOptions(decode_options(name, payload)?),
            "get_value" => Self::GetValue,
            "subscribe" => Self::Subscribe,
            "open" => Self::Open,
            "close" => Self::Close,
            other => {
                tracing::debug!(command = %other, "unknown pipe command");
                return Ok(None);
            }
        };

        Ok(Some(parsed))
    }
}

/// Serialises a selection for notifications and replies.
///
/// # Errors
///
/// Serialising plain strings cannot fail in practice; the error is surfaced
/// rather than unwrapped.
pub fn encode_selection(selected: &[TagOption]) -> Result<String> {
    serde_json::to_string(selected).map_err(|source| TagpickError::Payload {
        pipe: CHANGED_MESSAGE.to_string(),
        source,
    })
}

fn decode_options(pipe: &str, payload: Option<&str>) -> Result<Vec<TagOption>> {
    let raw = payload.map_or("", str::trim);
    let raw = if raw.is_empty() { "[]" } else { raw };
    serde_json::from_str(raw).map_err(|source| TagpickError::Payload {
        pipe: pipe.to_string(),
        source,
    })
}
