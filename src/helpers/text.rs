//! Slug and title helpers

use std::path::Path;

/// Source extension of content documents
pub const MARKDOWN_EXT: &str = ".md";

/// Check if a directory entry name is a markdown document
pub fn is_markdown_name(name: &str) -> bool {
    name.ends_with(MARKDOWN_EXT)
}

/// Derive the slug from a file name (`about.md` -> `about`)
pub fn slug_from_name(name: &str) -> String {
    name.strip_suffix(MARKDOWN_EXT).unwrap_or(name).to_string()
}

/// Derive the slug from a path's file name
pub fn slug_from_path(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(slug_from_name)
        .unwrap_or_default()
}

/// Uppercase the first character of a slug (`about` -> `About`)
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
