//! Filter pattern resolution
//!
//! Expands a user-supplied glob pattern beneath the root folder and
//! returns the matching files in natural order. Every call re-scans the
//! filesystem; nothing is cached.

use glob::MatchOptions;
use std::path::{Component, Path, PathBuf};

use crate::logic::natural::natural_key;

/// Resolve a glob pattern against the root folder.
///
/// # Pattern Rules
/// - Shell-style wildcards: `*`, `?`, `[...]`
/// - Matched relative to `root`; only regular files are returned
/// - Hidden files (leading dot) only match patterns that spell the dot
///   out, shell-style
/// - Results come back in natural order (`img2.jpg` before `img10.jpg`)
///
/// Empty, whitespace-only, and malformed patterns resolve to no matches
/// rather than an error. Patterns that would reach outside the root
/// (absolute paths or `..` components) also resolve to no matches.
pub fn resolve_pattern(root: &Path, pattern: &str) -> Vec<PathBuf> {
    let pattern = pattern.trim();
    if pattern.is_empty() || !stays_under_root(pattern) {
        return Vec::new();
    }

    // The root is literal text: a folder named "shots [raw]" must not
    // become a character class
    let root_str = root.to_string_lossy();
    let escaped_root =
        glob::Pattern::escape(root_str.trim_end_matches(std::path::MAIN_SEPARATOR));
    let full_pattern = format!("{}{}{}", escaped_root, std::path::MAIN_SEPARATOR, pattern);

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let entries = match glob::glob_with(&full_pattern, options) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();
    files.sort_by_key(|path| natural_key(&path.to_string_lossy()));
    files
}

/// A pattern is confined when joining it to the root cannot step outside:
/// no absolute form, no drive prefix, no `..` component anywhere.
fn stays_under_root(pattern: &str) -> bool {
    !Path::new(pattern).components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}
