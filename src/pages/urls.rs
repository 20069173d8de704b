//! Site-absolute URL paths of every page family and their output files.
//!
//! URLs are built from raw ids and slugs. They are escaped at the point
//! where they are embedded, like any other value.

use crate::data::{Comparison, Difficulty};
use std::path::PathBuf;

pub const HOME: &str = "/";
pub const PATTERNS_INDEX: &str = "/patterns/";
pub const CHEATSHEETS_INDEX: &str = "/cheatsheets/";
pub const COMPARE_INDEX: &str = "/compare/";
pub const HTML_SITEMAP: &str = "/sitemap.html";

pub fn hub(category_id: &str) -> String {
    format!("/patterns/{category_id}/")
}

pub fn difficulty(category_id: &str, difficulty: Difficulty) -> String {
    format!("/patterns/{category_id}/{difficulty}.html")
}

pub fn problem(category_id: &str, slug: &str) -> String {
    format!("/problems/{category_id}/{slug}.html")
}

pub fn cheatsheet(category_id: &str) -> String {
    format!("/cheatsheets/{category_id}.html")
}

pub fn comparison(comparison: &Comparison) -> String {
    format!("/compare/{}.html", comparison.slug())
}

/// Output file for a URL path: directories get `index.html`.
pub fn output_path(url: &str) -> PathBuf {
    let relative = url.trim_start_matches('/');
    if relative.is_empty() || relative.ends_with('/') {
        PathBuf::from(relative).join("index.html")
    } else {
        PathBuf::from(relative)
    }
}

/// Directories between the output root and the page's file.
pub fn depth(url: &str) -> usize {
    output_path(url).components().count().saturating_sub(1)
}

/// Relative path from a page at `depth` to a top-level directory.
pub fn relative_dir(depth: usize, dir: &str) -> String {
    format!("{}{dir}", "../".repeat(depth))
}
