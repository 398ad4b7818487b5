//! Domain layer for the tag picker.
//!
//! Core types independent of Zellij APIs: the option model, catalog loading,
//! and error types.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`option`]: `TagOption` model and value derivation
//! - [`catalog`]: Catalog parsing from inline config and TOML files
//!
//! # Examples
//!
//! ```
//! use tagpick::domain::{catalog, Result, TagOption};
//!
//! fn load() -> Result<Vec<TagOption>> {
//!     catalog::parse_toml("[[options]]\nlabel = \"Rust\"\n")
//! }
//!
//! assert_eq!(load().unwrap()[0].value, "rust");
//! ```

pub mod catalog;
pub mod error;
pub mod option;

pub use error::{Result, TagpickError};
pub use option::{slugify, TagOption};
