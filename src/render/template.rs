//! Page templates with named placeholders and conditional regions.
//!
//! # Syntax
//!
//! | Marker                         | Meaning                                   |
//! |--------------------------------|-------------------------------------------|
//! | `{{name}}`                     | replaced by the context value for `name`  |
//! | `{{#if name}} ... {{/if}}`     | region, included or omitted               |
//!
//! Rendering is a single, non-recursive pass over the template text: values
//! inserted from the context are never scanned for further markers. A region
//! the context says nothing about is omitted, and a dangling `{{#if}}` or
//! `{{/if}}` is dropped. Regions do not nest.
//!
//! A placeholder without a context value is an error; the page is not
//! produced with the marker left in it. So is a value escaped for the other
//! context: JSON-LD script bodies take [`JsonLd`], everything else [`Html`].

use super::escape::{Html, JsonLd, escape_html};
use parking_lot::RwLock;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{
    collections::BTreeSet,
    fs,
    ops::Range,
    path::{Path, PathBuf},
    sync::{Arc, LazyLock},
};
use thiserror::Error;

// ============================================================================
// Embedded Templates
// ============================================================================

/// Default templates compiled into the binary, keyed by name.
///
/// A file `<templates>/<name>.html` overrides the embedded copy.
pub const EMBEDDED: &[(&str, &str)] = &[
    ("head", include_str!("../../templates/head.html")),
    ("problem", include_str!("../../templates/problem.html")),
    ("pattern-hub", include_str!("../../templates/pattern-hub.html")),
    ("difficulty", include_str!("../../templates/difficulty.html")),
    ("cheatsheet", include_str!("../../templates/cheatsheet.html")),
    ("comparison", include_str!("../../templates/comparison.html")),
    ("patterns-index", include_str!("../../templates/patterns-index.html")),
    ("cheatsheets-index", include_str!("../../templates/cheatsheets-index.html")),
    ("compare-index", include_str!("../../templates/compare-index.html")),
    ("sitemap", include_str!("../../templates/sitemap.html")),
];

fn embedded(name: &str) -> Option<&'static str> {
    EMBEDDED
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, source)| *source)
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template `{template}` has no value for {}", .names.join(", "))]
    Unresolved { template: String, names: Vec<String> },

    #[error("template `{template}` got a value escaped for the wrong context in `{name}`")]
    ContextMismatch { template: String, name: String },

    #[error("template `{0}` not found")]
    UnknownTemplate(String),

    #[error("IO error when reading template `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),
}

// ============================================================================
// Render Context
// ============================================================================

/// A context value, tagged with the escaper that produced it.
#[derive(Debug, Clone)]
enum Slot {
    Html(Html),
    Json(JsonLd),
}

/// Values and region decisions for a single render.
///
/// Built fresh for each page and consumed by [`Template::render`].
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: FxHashMap<&'static str, Slot>,
    regions: FxHashSet<&'static str>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a placeholder in HTML body or attribute position.
    pub fn html(mut self, name: &'static str, value: Html) -> Self {
        self.values.insert(name, Slot::Html(value));
        self
    }

    /// Set a placeholder to raw text, escaping it for HTML.
    pub fn text(self, name: &'static str, raw: &str) -> Self {
        self.html(name, escape_html(raw))
    }

    /// Set a placeholder that sits inside a JSON-LD script block.
    pub fn json(mut self, name: &'static str, value: JsonLd) -> Self {
        self.values.insert(name, Slot::Json(value));
        self
    }

    /// Include the region's body when `flag` is true, omit it otherwise.
    pub fn when(mut self, name: &'static str, flag: bool) -> Self {
        if flag {
            self.regions.insert(name);
        } else {
            self.regions.remove(name);
        }
        self
    }

    /// Set `name` and include the region of the same name, but only when
    /// `raw` has content.
    pub fn optional_text(self, name: &'static str, raw: Option<&str>) -> Self {
        match raw.filter(|s| !s.is_empty()) {
            Some(raw) => self.text(name, raw).when(name, true),
            None => self.when(name, false),
        }
    }
}

// ============================================================================
// Template
// ============================================================================

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)\{\{#if\s+([A-Za-z_][A-Za-z0-9_]*)\s*\}\}(.*?)\{\{/if\}\}",
        r"|\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}",
        r"|\{\{#if[^}]*\}\}|\{\{/if\}\}",
    ))
    .unwrap()
});

/// Body of a `<script type="application/ld+json">` element.
static JSON_LD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script\b[^>]*\btype\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script\s*>"#)
        .unwrap()
});

/// A document skeleton. Immutable once loaded.
///
/// Placeholders inside JSON-LD script blocks take [`JsonLd`] values, every
/// other placeholder takes [`Html`].
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    source: String,
    json_ld: Vec<Range<usize>>,
}

/// Outcome of one render, collected across nested regions.
#[derive(Default)]
struct Expansion<'t> {
    out: String,
    missing: BTreeSet<&'t str>,
    mismatched: BTreeSet<&'t str>,
}

impl Template {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let json_ld = JSON_LD_RE
            .captures_iter(&source)
            .filter_map(|caps| caps.get(1).map(|m| m.range()))
            .collect();
        Self {
            name: name.into(),
            source,
            json_ld,
        }
    }

    /// Render with `ctx`.
    ///
    /// Fails if a reached placeholder has no value, or has a value escaped
    /// for the other context.
    pub fn render(&self, ctx: RenderContext) -> Result<Html, RenderError> {
        let mut exp = Expansion {
            out: String::with_capacity(self.source.len() * 2),
            ..Expansion::default()
        };
        self.expand(0..self.source.len(), &ctx, &mut exp);

        if let Some(name) = exp.mismatched.first() {
            return Err(RenderError::ContextMismatch {
                template: self.name.clone(),
                name: (*name).to_owned(),
            });
        }
        if !exp.missing.is_empty() {
            return Err(RenderError::Unresolved {
                template: self.name.clone(),
                names: exp.missing.into_iter().map(str::to_owned).collect(),
            });
        }
        Ok(Html::markup(exp.out))
    }

    fn in_json_ld(&self, pos: usize) -> bool {
        self.json_ld.iter().any(|r| r.contains(&pos))
    }

    /// One sweep over `span` of the source. Region bodies are template text,
    /// so they are expanded with the same rules; inserted values are copied
    /// verbatim.
    fn expand<'t>(&'t self, span: Range<usize>, ctx: &RenderContext, exp: &mut Expansion<'t>) {
        let base = span.start;
        let text = &self.source[span];
        let mut last = 0;

        for caps in MARKER_RE.captures_iter(text) {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            exp.out.push_str(&text[last..whole.start]);
            last = whole.end;

            if let (Some(name), Some(body)) = (caps.get(1), caps.get(2)) {
                if ctx.regions.contains(name.as_str()) {
                    self.expand(base + body.start()..base + body.end(), ctx, exp);
                }
            } else if let Some(name) = caps.get(3) {
                let in_json = self.in_json_ld(base + name.start());
                match (ctx.values.get(name.as_str()), in_json) {
                    (Some(Slot::Html(value)), false) => exp.out.push_str(value.as_str()),
                    (Some(Slot::Json(value)), true) => exp.out.push_str(value.as_str()),
                    (Some(_), _) => {
                        exp.mismatched.insert(name.as_str());
                    }
                    (None, _) => {
                        exp.missing.insert(name.as_str());
                    }
                }
            }
            // anything else is a dangling region marker and renders as nothing
        }

        exp.out.push_str(&text[last..]);
    }
}

// ============================================================================
// Template Cache
// ============================================================================

/// Load-once template store shared by every page render.
///
/// Reads take the read lock only; the first request for a name takes the
/// write lock, re-checks, and loads. Entries are never replaced.
#[derive(Debug, Default)]
pub struct TemplateCache {
    dir: Option<PathBuf>,
    templates: RwLock<FxHashMap<String, Arc<Template>>>,
}

impl TemplateCache {
    /// Look up overrides in `dir` before falling back to embedded templates.
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir,
            templates: RwLock::new(FxHashMap::default()),
        }
    }

    /// Cache backed by the embedded templates only.
    #[cfg(test)]
    pub fn embedded() -> Self {
        Self::new(None)
    }

    pub fn get(&self, name: &str) -> Result<Arc<Template>, RenderError> {
        // Fast path: already loaded
        if let Some(template) = self.templates.read().get(name) {
            return Ok(Arc::clone(template));
        }

        let mut templates = self.templates.write();
        if let Some(template) = templates.get(name) {
            return Ok(Arc::clone(template));
        }

        let template = Arc::new(self.load(name)?);
        templates.insert(name.to_owned(), Arc::clone(&template));
        Ok(template)
    }

    /// Fetch and render in one step.
    pub fn render(&self, name: &str, ctx: RenderContext) -> Result<Html, RenderError> {
        self.get(name)?.render(ctx)
    }

    fn load(&self, name: &str) -> Result<Template, RenderError> {
        if let Some(path) = self.override_path(name)
            && path.is_file()
        {
            let source =
                fs::read_to_string(&path).map_err(|err| RenderError::Io(path.clone(), err))?;
            return Ok(Template::new(name, source));
        }

        embedded(name)
            .map(|source| Template::new(name, source))
            .ok_or_else(|| RenderError::UnknownTemplate(name.to_owned()))
    }

    fn override_path(&self, name: &str) -> Option<PathBuf> {
        self.dir
            .as_deref()
            .map(|dir: &Path| dir.join(format!("{name}.html")))
    }
}

// ============================================================================
// Tests
// ============================================================================
