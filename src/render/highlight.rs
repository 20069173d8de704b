//! Best-effort syntax highlighting for solution snippets.
//!
//! A [`Lexicon`] describes one source language by its comment marker and two
//! word lists. [`Highlighter`] turns it into five substitution passes that run
//! in a fixed order over the escaped snippet:
//!
//! | # | Category | Class          | Pattern                                 |
//! |---|----------|----------------|-----------------------------------------|
//! | 1 | comment  | `code-comment` | comment marker to end of line           |
//! | 2 | string   | `code-string`  | single- or double-quoted run, one line  |
//! | 3 | keyword  | `code-keyword` | reserved words, whole word              |
//! | 4 | builtin  | `code-func`    | built-in names, whole word              |
//! | 5 | number   | `code-number`  | digit runs, whole word                  |
//!
//! Comments and strings claim their text first, so a keyword inside either
//! stays part of that span. There is no grammar: a `#` inside a string still
//! starts a comment.

use super::{
    escape::Html,
    placeholder::{Pass, substitute},
};
use regex::escape;
use std::sync::LazyLock;

// ============================================================================
// Lexicon
// ============================================================================

/// Lexical categories a span can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Comment,
    String,
    Keyword,
    Builtin,
    Number,
}

impl Category {
    /// CSS class on the wrapping `<span>`.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Comment => "code-comment",
            Self::String => "code-string",
            Self::Keyword => "code-keyword",
            Self::Builtin => "code-func",
            Self::Number => "code-number",
        }
    }
}

/// Word lists and comment syntax for one language.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub line_comment: &'static str,
    pub keywords: &'static [&'static str],
    pub builtins: &'static [&'static str],
}

/// Python, as used by every solution snippet in the data set.
///
/// The word lists match the site's existing highlighting, which leaves
/// `class` unmarked.
pub const PYTHON: Lexicon = Lexicon {
    line_comment: "#",
    keywords: &[
        "def", "return", "if", "else", "elif", "for", "while", "in", "not", "and", "or", "True",
        "False", "None", "import", "from", "as", "try", "except", "finally", "with", "lambda",
        "yield", "break", "continue", "pass", "raise", "global", "nonlocal", "assert", "del",
    ],
    builtins: &[
        "len", "range", "enumerate", "zip", "map", "filter", "sorted", "reversed", "list", "dict",
        "set", "tuple", "str", "int", "float", "bool", "print", "input", "open", "abs", "min",
        "max", "sum", "any", "all", "isinstance", "type", "append", "pop", "add", "remove", "get",
        "keys", "values", "items",
    ],
};

// ============================================================================
// Highlighter
// ============================================================================

/// Compiled passes for one lexicon.
#[derive(Debug)]
pub struct Highlighter {
    passes: Vec<Pass>,
}

impl Highlighter {
    pub fn new(lexicon: Lexicon) -> Result<Self, regex::Error> {
        let passes = vec![
            Pass::span(&comment_pattern(lexicon.line_comment), Category::Comment.class())?,
            Pass::span(STRING_PATTERN, Category::String.class())?,
            Pass::span(&word_pattern(lexicon.keywords), Category::Keyword.class())?,
            Pass::span(&word_pattern(lexicon.builtins), Category::Builtin.class())?,
            Pass::span(r"\b\d+\b", Category::Number.class())?,
        ];
        Ok(Self { passes })
    }

    /// Escape and highlight a snippet.
    pub fn highlight<'a>(&self, code: impl Into<Option<&'a str>>) -> Html {
        substitute(code, &self.passes)
    }
}

static PYTHON_HIGHLIGHTER: LazyLock<Highlighter> =
    LazyLock::new(|| Highlighter::new(PYTHON).unwrap());

/// Highlight a Python snippet with the shared highlighter.
pub fn highlight_python<'a>(code: impl Into<Option<&'a str>>) -> Html {
    PYTHON_HIGHLIGHTER.highlight(code)
}

// ============================================================================
// Patterns
// ============================================================================

/// Quoted runs over escaped text, limited to one line.
///
/// The entity forms are what `escape_html` produces; the bare quote forms
/// never occur after escaping and are kept for lexicons fed pre-escaped text.
/// Other entities may appear inside a string, its own quote entity may not.
const STRING_PATTERN: &str = concat!(
    r"&quot;(?:[^&\n]|&(?:amp|lt|gt|apos);)*?&quot;",
    r"|&apos;(?:[^&\n]|&(?:amp|lt|gt|quot);)*?&apos;",
    r#"|"[^"\n]*"|'[^'\n]*'"#,
);

fn comment_pattern(marker: &str) -> String {
    format!("(?m){}.*$", escape(marker))
}

/// Whole-word alternation; an empty list yields a pattern that never matches.
fn word_pattern(words: &[&str]) -> String {
    if words.is_empty() {
        return r"\b\B".to_owned();
    }
    let alternatives: Vec<String> = words.iter().map(|w| escape(w)).collect();
    format!(r"\b(?:{})\b", alternatives.join("|"))
}

// ============================================================================
// Tests
// ============================================================================
