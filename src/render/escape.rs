//! Context-tagged escaping.
//!
//! Raw strings from the data set never reach a page directly. They pass
//! through exactly one of two escapers, each producing its own fragment type:
//!
//! | Type     | Embedding site                       | Produced by          |
//! |----------|--------------------------------------|----------------------|
//! | [`Html`] | HTML body text and attribute values  | [`escape_html`]      |
//! | [`JsonLd`] | string literals inside JSON-LD     | [`escape_json_ld`]   |
//!
//! The two types do not convert into each other, and a template rejects a
//! fragment placed in the other context at render time.

use std::fmt;

// ============================================================================
// HTML Fragments
// ============================================================================

/// Text that is safe to embed in an HTML body or a quoted attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Html(String);

impl Html {
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Wrap markup that is already safe.
    ///
    /// Only for literal markup written in this crate, or for markup assembled
    /// exclusively from other `Html` values. Never pass a raw data field here.
    pub fn markup(trusted: impl Into<String>) -> Self {
        Self(trusted.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append another safe fragment.
    pub fn push(&mut self, other: &Html) {
        self.0.push_str(&other.0);
    }

    /// Append literal markup.
    pub fn push_markup(&mut self, trusted: &str) {
        self.0.push_str(trusted);
    }

    /// Concatenate fragments with a literal separator.
    pub fn join<I>(fragments: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = Html>,
    {
        let mut out = Self::new();
        for (i, fragment) in fragments.into_iter().enumerate() {
            if i > 0 {
                out.push_markup(separator);
            }
            out.push(&fragment);
        }
        out
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Html> for Html {
    fn from_iter<T: IntoIterator<Item = Html>>(iter: T) -> Self {
        Self::join(iter, "")
    }
}

// ============================================================================
// JSON-LD Fragments
// ============================================================================

/// Text that is safe inside a double-quoted JSON string literal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonLd(String);

impl JsonLd {
    /// Wrap JSON built only from literal text and other `JsonLd` values.
    pub fn markup(trusted: impl Into<String>) -> Self {
        Self(trusted.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Concatenate JSON fragments with a literal separator.
    pub fn join<I>(fragments: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = JsonLd>,
    {
        let parts: Vec<String> = fragments.into_iter().map(JsonLd::into_string).collect();
        Self(parts.join(separator))
    }
}

impl fmt::Display for JsonLd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Escapers
// ============================================================================

/// Escape raw text for HTML.
///
/// `&` is handled as an ordinary character of the single pass, so entities
/// produced for the other four characters are never escaped again.
/// Absent input yields an empty fragment.
pub fn escape_html<'a>(raw: impl Into<Option<&'a str>>) -> Html {
    let Some(raw) = raw.into() else {
        return Html::new();
    };
    let mut out = String::with_capacity(raw.len() + raw.len() / 8);
    push_escaped_html(&mut out, raw);
    Html(out)
}

/// Escape raw text for a JSON string literal embedded in a `<script>` block.
///
/// Backslash goes first so the escapes added for quotes and control
/// characters are not doubled. `<` becomes `\u003c` so a value can never
/// close the surrounding script element.
pub fn escape_json_ld<'a>(raw: impl Into<Option<&'a str>>) -> JsonLd {
    let Some(raw) = raw.into() else {
        return JsonLd::default();
    };
    let mut out = String::with_capacity(raw.len() + raw.len() / 8);
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\u003c"),
            c => out.push(c),
        }
    }
    JsonLd(out)
}

fn push_escaped_html(out: &mut String, raw: &str) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverse the five entities produced by `escape_html`.
    fn unescape_html(s: &str) -> String {
        s.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_escape_html_each_character() {
        assert_eq!(escape_html("&").as_str(), "&amp;");
        assert_eq!(escape_html("<").as_str(), "&lt;");
        assert_eq!(escape_html(">").as_str(), "&gt;");
        assert_eq!(escape_html("\"").as_str(), "&quot;");
        assert_eq!(escape_html("'").as_str(), "&apos;");
    }

    #[test]
    fn test_escape_html_does_not_double_escape() {
        assert_eq!(escape_html("<a>").as_str(), "&lt;a&gt;");
        assert_eq!(escape_html("&lt;").as_str(), "&amp;lt;");
    }

    #[test]
    fn test_escape_html_empty_and_absent() {
        assert_eq!(escape_html("").as_str(), "");
        assert_eq!(escape_html(None::<&str>).as_str(), "");
    }

    #[test]
    fn test_escape_html_no_markup_characters_remain() {
        let raw = r#"if a < b && c > d: print("x's")"#;
        let escaped = escape_html(raw);
        let s = escaped.as_str();
        assert!(!s.contains('<'));
        assert!(!s.contains('>'));
        assert!(!s.contains('"'));
        assert!(!s.contains('\''));
        // every remaining `&` starts an entity
        for (i, _) in s.match_indices('&') {
            let rest = &s[i..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"]
                    .iter()
                    .any(|e| rest.starts_with(e)),
                "bare ampersand at {i} in {s}"
            );
        }
    }

    #[test]
    fn test_escape_html_round_trip() {
        let inputs = [
            "plain",
            "Two Sum & Three Sum",
            "<script>alert('x')</script>",
            "a \"quoted\" 'word'",
            "&amp; already escaped",
            "nums[i] + nums[j] == target\n  -> O(n)",
            "你好 <世界>",
        ];
        for raw in inputs {
            assert_eq!(unescape_html(escape_html(raw).as_str()), raw);
        }
    }

    #[test]
    fn test_escape_json_ld() {
        assert_eq!(escape_json_ld(r#"say "hi""#).as_str(), r#"say \"hi\""#);
        assert_eq!(escape_json_ld("a\\b").as_str(), "a\\\\b");
        assert_eq!(escape_json_ld("a\nb\rc\td").as_str(), "a\\nb\\rc\\td");
        assert_eq!(escape_json_ld("</script>").as_str(), "\\u003c/script>");
        assert_eq!(escape_json_ld(None::<&str>).as_str(), "");
    }

    #[test]
    fn test_escape_json_ld_backslash_before_quote() {
        // `\"` must become `\\\"`, not `\\\\"` or `\\"`
        assert_eq!(escape_json_ld("\\\"").as_str(), "\\\\\\\"");
    }

    #[test]
    fn test_escape_json_ld_parses_back() {
        let raw = "Use a \"hash map\" \\ set\n\tthen <return>";
        let json = format!("\"{}\"", escape_json_ld(raw));
        let parsed: String = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, raw);
    }

    #[test]
    fn test_html_join_and_collect() {
        let joined = Html::join([escape_html("a<"), escape_html("b")], ", ");
        assert_eq!(joined.as_str(), "a&lt;, b");

        let collected: Html = ["x", "&"].into_iter().map(|s| escape_html(s)).collect();
        assert_eq!(collected.as_str(), "x&amp;");
    }
}
