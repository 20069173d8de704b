//! Deferred substitution across multiple matching passes.
//!
//! Each [`Pass`] scans the current text and replaces every match with an
//! opaque token that points into a per-call [`Arena`]. Later passes only see
//! tokens, never the markup an earlier pass produced, so they cannot match
//! inside it. One final sweep swaps the tokens for their markup.
//!
//! ```text
//! raw ──escape──► text ──pass 1──► text' ──pass 2──► ... ──resolve──► Html
//!                            │               │
//!                            └──► arena ◄────┘
//! ```
//!
//! # Token alphabet
//!
//! A token looks like `<ph12>`. Input is HTML-escaped before the first pass,
//! so it never contains `<` and cannot collide with a token. Passes must not
//! match `<`, `>` or a bare `ph` prefix glued to digits; word-bounded
//! patterns satisfy this because `ph12` is a single word.

use super::escape::{Html, escape_html};
use regex::{Captures, Regex};
use std::{borrow::Cow, fmt, sync::LazyLock};

// ============================================================================
// Tokens
// ============================================================================

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<ph(\d+)>").unwrap());

#[inline]
fn token(id: usize) -> String {
    format!("<ph{id}>")
}

// ============================================================================
// Pass
// ============================================================================

type Wrap = Box<dyn Fn(&Captures) -> String + Send + Sync>;

/// One matching pass: a pattern plus the markup produced for each match.
///
/// The wrapper receives captures over HTML-escaped text and must return
/// safe markup.
pub struct Pass {
    pattern: Regex,
    wrap: Wrap,
}

impl Pass {
    pub fn new<F>(pattern: &str, wrap: F) -> Result<Self, regex::Error>
    where
        F: Fn(&Captures) -> String + Send + Sync + 'static,
    {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            wrap: Box::new(wrap),
        })
    }

    /// Wrap the whole match in `<span class="{class}">`.
    pub fn span(pattern: &str, class: &'static str) -> Result<Self, regex::Error> {
        Self::new(pattern, move |caps| {
            format!(r#"<span class="{class}">{}</span>"#, &caps[0])
        })
    }

    /// Wrap the first capture group (or the whole match) in `<{tag}>`.
    pub fn element(pattern: &str, tag: &'static str) -> Result<Self, regex::Error> {
        Self::new(pattern, move |caps| {
            let inner = caps.get(1).map_or(&caps[0], |m| m.as_str());
            format!("<{tag}>{inner}</{tag}>")
        })
    }

    /// Replace every match with a fixed piece of markup.
    pub fn literal(pattern: &str, markup: &'static str) -> Result<Self, regex::Error> {
        Self::new(pattern, move |_| markup.to_owned())
    }
}

impl fmt::Debug for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pass")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Arena
// ============================================================================

/// Finished markup for one substitution call, indexed by token id.
///
/// Entries are stored fully resolved: if a match spans tokens from an
/// earlier pass, they are expanded when the entry is stashed. The final
/// sweep therefore never has to look inside an entry.
#[derive(Debug, Default)]
struct Arena {
    entries: Vec<String>,
}

impl Arena {
    fn stash(&mut self, markup: &str) -> String {
        let resolved = self.expand(markup).into_owned();
        let id = self.entries.len();
        self.entries.push(resolved);
        token(id)
    }

    fn apply<'t>(&mut self, pass: &Pass, text: &'t str) -> Cow<'t, str> {
        pass.pattern.replace_all(text, |caps: &Captures| {
            if caps[0].is_empty() {
                return String::new();
            }
            let markup = (pass.wrap)(caps);
            self.stash(&markup)
        })
    }

    fn expand<'t>(&self, text: &'t str) -> Cow<'t, str> {
        TOKEN_RE.replace_all(text, |caps: &Captures| {
            let entry = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|id| self.entries.get(id));
            debug_assert!(entry.is_some(), "dangling token {}", &caps[0]);
            entry.map_or_else(|| caps[0].to_owned(), Clone::clone)
        })
    }

    /// Single sweep replacing every token with its entry.
    fn resolve(self, text: &str) -> String {
        self.expand(text).into_owned()
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Escape `raw` and run `passes` over it in order.
///
/// A pass never sees text claimed by an earlier pass. Absent or empty input
/// yields an empty fragment; input with no matches comes back escaped and
/// otherwise unchanged.
pub fn substitute<'a>(raw: impl Into<Option<&'a str>>, passes: &[Pass]) -> Html {
    let escaped = escape_html(raw);
    if escaped.is_empty() || passes.is_empty() {
        return escaped;
    }

    let mut arena = Arena::default();
    let mut text = escaped.into_string();
    debug_assert!(!TOKEN_RE.is_match(&text));

    for pass in passes {
        let replaced = match arena.apply(pass, &text) {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        };
        if let Some(next) = replaced {
            text = next;
        }
    }

    Html::markup(arena.resolve(&text))
}

// ============================================================================
// Tests
// ============================================================================
