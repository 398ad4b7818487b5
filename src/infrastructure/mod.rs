//! Sandbox filesystem helpers.
//!
//! Zellij mounts the host filesystem under `/host`; configured paths are
//! written the way users see them and translated here.

pub mod paths;

pub use paths::{display_path, get_data_dir, resolve_host_path};
