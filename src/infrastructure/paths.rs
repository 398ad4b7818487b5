//! Path translation for the Zellij plugin sandbox.
//!
//! Inside the sandbox `/host` is the cwd of the last focused terminal (or
//! where Zellij was started), which is usually the user's home directory.

use std::path::PathBuf;

/// Directory holding the picker's trace output.
///
/// # Examples
///
/// ```
/// use tagpick::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/tagpick"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("tagpick")
}

/// Maps a configured path into the sandbox.
///
/// `~` and `~/…` resolve under `/host`, as do relative paths. Absolute
/// paths are kept, so `/host/...` and `/tmp/...` pass through.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use tagpick::infrastructure::resolve_host_path;
///
/// assert_eq!(resolve_host_path("~/tags.toml"), PathBuf::from("/host/tags.toml"));
/// assert_eq!(resolve_host_path("tags.toml"), PathBuf::from("/host/tags.toml"));
/// assert_eq!(resolve_host_path("/etc/tags.toml"), PathBuf::from("/etc/tags.toml"));
/// ```
#[must_use]
pub fn resolve_host_path(path: &str) -> PathBuf {
    let path = path.trim();
    if path == "~" {
        return PathBuf::from("/host");
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return PathBuf::from("/host").join(rest);
    }
    if path.starts_with('/') {
        return PathBuf::from(path);
    }
    PathBuf::from("/host").join(path)
}

/// Renders a sandbox path the way the user wrote it, for log messages.
///
/// # Examples
///
/// ```
/// use tagpick::infrastructure::display_path;
///
/// assert_eq!(display_path("/host/tags.toml"), "~/tags.toml");
/// assert_eq!(display_path("/etc/tags.toml"), "/etc/tags.toml");
/// ```
#[must_use]
pub fn display_path(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_forms() {
        assert_eq!(resolve_host_path("~"), PathBuf::from("/host"));
        assert_eq!(resolve_host_path(" ~/a/b "), PathBuf::from("/host/a/b"));
    }

    #[test]
    fn display_round_trip() {
        let resolved = resolve_host_path("~/catalogs/tags.toml");
        assert_eq!(
            display_path(&resolved.to_string_lossy()),
            "~/catalogs/tags.toml"
        );
        assert_eq!(display_path("/hostile"), "/hostile");
        assert_eq!(display_path("/host"), "~");
    }
}
