//! Catalog loading from plugin configuration and TOML files.
//!
//! The catalog is the seed list of selectable options. It can be given inline
//! in the Zellij layout:
//!
//! ```kdl
//! plugin location="file:/path/to/tagpick.wasm" {
//!     options "React|react|⚛️,TypeScript|typescript|📘,Go"
//! }
//! ```
//!
//! or as a TOML file referenced by `catalog_file`:
//!
//! ```toml
//! [[options]]
//! label = "Rust"
//! value = "rust"
//! emoji = "🦀"
//!
//! [[options]]
//! label = "Site Reliability"   # value derived: "site-reliability"
//! ```
//!
//! Duplicate values are not rejected; the first occurrence wins wherever the
//! controller checks containment.

use crate::domain::error::{Result, TagpickError};
use crate::domain::option::{slugify, TagOption};
use serde::Deserialize;
use std::path::Path;

/// Separator between catalog entries in the inline form.
const ENTRY_SEPARATOR: char = ',';

/// Separator between label, value and emoji within one inline entry.
const FIELD_SEPARATOR: char = '|';

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    options: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    label: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    emoji: Option<String>,
}

impl From<CatalogEntry> for TagOption {
    fn from(entry: CatalogEntry) -> Self {
        let value = entry
            .value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| slugify(&entry.label));
        Self {
            label: entry.label,
            value,
            emoji: entry.emoji.filter(|e| !e.is_empty()),
        }
    }
}

/// Parses the inline `options` configuration string.
///
/// Each comma separated entry is `label`, `label|value` or
/// `label|value|emoji`. Blank entries are skipped; a blank value falls back
/// to the slug of the label.
///
/// # Examples
///
/// ```
/// use tagpick::domain::catalog::parse_inline;
///
/// let options = parse_inline("Rust|rust|🦀, Site Reliability");
/// assert_eq!(options.len(), 2);
/// assert_eq!(options[0].emoji.as_deref(), Some("🦀"));
/// assert_eq!(options[1].value, "site-reliability");
/// ```
#[must_use]
pub fn parse_inline(raw: &str) -> Vec<TagOption> {
    raw.split(ENTRY_SEPARATOR)
        .filter_map(|entry| {
            let mut fields = entry.split(FIELD_SEPARATOR).map(str::trim);
            let label = fields.next().filter(|l| !l.is_empty())?;
            let value = fields.next().map(str::to_string);
            let emoji = fields.next().map(str::to_string);
            Some(TagOption::from(CatalogEntry {
                label: label.to_string(),
                value,
                emoji,
            }))
        })
        .collect()
}

/// Parses a TOML catalog document.
///
/// # Errors
///
/// Returns [`TagpickError::Catalog`] if the document is not valid TOML or an
/// entry lacks a `label`.
pub fn parse_toml(contents: &str) -> Result<Vec<TagOption>> {
    let file: CatalogFile = toml::from_str(contents)
        .map_err(|e| TagpickError::Catalog(format!("failed to parse catalog TOML: {e}")))?;
    Ok(file.options.into_iter().map(TagOption::from).collect())
}

/// Loads a TOML catalog from disk.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a catalog error if
/// its contents do not parse.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<TagOption>> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("load_catalog_file", path = ?path).entered();

    let contents = std::fs::read_to_string(path)?;
    let options = parse_toml(&contents)?;

    tracing::debug!(option_count = options.len(), "catalog file loaded");
    Ok(options)
}

/// Resolves a comma separated list of values against the catalog.
///
/// Known values map to their catalog option (first occurrence). Unknown
/// values become ad-hoc options labelled with the value itself, mirroring
/// how hosts may hand over selections that predate the current catalog.
/// Duplicates in `raw` are dropped.
#[must_use]
pub fn resolve_values(catalog: &[TagOption], raw: &str) -> Vec<TagOption> {
    let mut resolved: Vec<TagOption> = Vec::new();

    for value in raw.split(ENTRY_SEPARATOR).map(str::trim).filter(|v| !v.is_empty()) {
        if resolved.iter().any(|o| o.value == value) {
            continue;
        }
        let option = catalog
            .iter()
            .find(|o| o.value == value)
            .cloned()
            .unwrap_or_else(|| {
                tracing::debug!(value = %value, "initial value not in catalog, using ad-hoc option");
                TagOption::new(value, value)
            });
        resolved.push(option);
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn inline_supports_all_three_forms() {
        let options = parse_inline("Go, Node.js|nodejs, Docker|docker|🐳");
        assert_eq!(
            options,
            vec![
                TagOption::new("Go", "go"),
                TagOption::new("Node.js", "nodejs"),
                TagOption::new("Docker", "docker").with_emoji("🐳"),
            ]
        );
    }

    #[test]
    fn inline_skips_blank_entries_and_blank_values() {
        let options = parse_inline(" , Python||🐍 ,,");
        assert_eq!(options, vec![TagOption::new("Python", "python").with_emoji("🐍")]);
    }

    #[test]
    fn toml_derives_missing_values() {
        let options = parse_toml(
            r#"
            [[options]]
            label = "Rust"
            value = "rust"
            emoji = "🦀"

            [[options]]
            label = "Site Reliability"
            "#,
        )
        .unwrap();

        assert_eq!(options[0], TagOption::new("Rust", "rust").with_emoji("🦀"));
        assert_eq!(options[1], TagOption::new("Site Reliability", "site-reliability"));
    }

    #[test]
    fn toml_without_label_is_rejected() {
        let err = parse_toml("[[options]]\nvalue = \"x\"\n").unwrap_err();
        assert!(matches!(err, TagpickError::Catalog(_)));
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[options]]\nlabel = \"AWS\"\nemoji = \"☁️\"").unwrap();

        let options = load_file(file.path()).unwrap();
        assert_eq!(options, vec![TagOption::new("AWS", "aws").with_emoji("☁️")]);
    }

    #[test]
    fn load_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, TagpickError::Io(_)));
    }

    #[test]
    fn resolve_values_prefers_catalog_entries() {
        let catalog = parse_inline("React|react|⚛️,Rust|rust|🦀");
        let resolved = resolve_values(&catalog, "rust, legacy-tag, rust");

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].emoji.as_deref(), Some("🦀"));
        assert_eq!(resolved[1], TagOption::new("legacy-tag", "legacy-tag"));
    }
}
