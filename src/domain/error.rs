//! Error types for the tag picker plugin.
//!
//! Selection operations never fail; errors only arise at the edges where the
//! plugin touches configuration, files or pipe payloads. All of them are
//! collected in [`TagpickError`], implemented with `thiserror`.

use thiserror::Error;

/// The main error type for tag picker operations.
///
/// # Examples
///
/// ```
/// use tagpick::TagpickError;
///
/// fn validate_cap(raw: &str) -> Result<usize, TagpickError> {
///     raw.parse()
///         .map_err(|_| TagpickError::Config(format!("invalid max_selections: {raw}")))
/// }
///
/// assert!(validate_cap("three").is_err());
/// ```
#[derive(Debug, Error)]
pub enum TagpickError {
    /// Plugin configuration is malformed.
    ///
    /// The string names the offending key and value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog source (inline list or TOML file) could not be parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A pipe message carried a payload that is not a valid option list.
    #[error("Invalid pipe payload for '{pipe}': {source}")]
    Payload {
        /// Name of the pipe the payload arrived on.
        pipe: String,
        /// Underlying JSON decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for tag picker operations.
pub type Result<T> = std::result::Result<T, TagpickError>;
