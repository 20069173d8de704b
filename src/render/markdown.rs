//! Inline markdown for problem statements and step explanations.
//!
//! Only three constructs appear in the data: `` `code` ``, `**bold**` and
//! hard line breaks. Code runs first so `**` inside backticks stays literal.

use super::{
    escape::Html,
    placeholder::{Pass, substitute},
};
use std::sync::LazyLock;

static INLINE_PASSES: LazyLock<Vec<Pass>> = LazyLock::new(|| {
    vec![
        Pass::element(r"`([^`\n]+)`", "code").unwrap(),
        Pass::element(r"\*\*(.+?)\*\*", "strong").unwrap(),
        Pass::literal(r"\r?\n", "<br>").unwrap(),
    ]
});

/// Escape `raw` and render its inline markdown.
pub fn markdown_to_html<'a>(raw: impl Into<Option<&'a str>>) -> Html {
    substitute(raw, &INLINE_PASSES)
}
