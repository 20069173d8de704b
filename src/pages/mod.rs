//! Page assembly: turns the record set into complete HTML documents.
//!
//! # Architecture
//!
//! ```text
//! Site::jobs()            one PageJob per output document
//!     │
//!     └── Site::render_all()   (rayon, first error aborts)
//!             │
//!             ├── head::render()       shared <head> partial
//!             └── <family>::render()   page template + fragments
//! ```
//!
//! Every family module builds its values from raw data fields and escapes
//! each one exactly once, either through [`RenderContext::text`] or through
//! the fragment helpers. Templates only ever receive finished fragments.

mod cheatsheet;
mod compare;
mod fragments;
mod head;
mod html_sitemap;
mod index;
mod pattern;
mod problem;
pub mod urls;

pub use head::Head;

use crate::{
    config::SiteConfig,
    data::{Category, Comparison, Difficulty, Problem, SiteData},
    log,
    render::{Html, RenderContext, RenderError, TemplateCache},
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fmt,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

// ============================================================================
// Site
// ============================================================================

/// Everything a page render reads. Shared by reference across workers.
#[derive(Clone, Copy)]
pub struct Site<'a> {
    pub config: &'a SiteConfig,
    pub data: &'a SiteData,
    pub templates: &'a TemplateCache,
}

/// A rendered document and where it goes.
#[derive(Debug)]
pub struct Page {
    /// Output file, relative to the output directory.
    pub path: PathBuf,
    pub html: Html,
}

impl<'a> Site<'a> {
    pub const fn new(config: &'a SiteConfig, data: &'a SiteData, templates: &'a TemplateCache) -> Self {
        Self {
            config,
            data,
            templates,
        }
    }

    /// Every page the record set produces, in a stable order.
    ///
    /// Problems filed under a category id that has no category record are
    /// skipped with a warning.
    pub fn jobs(&self) -> Vec<PageJob<'a>> {
        let data = self.data;
        let mut jobs = Vec::new();

        for category in &data.categories {
            jobs.push(PageJob::Hub(category));
            jobs.extend(
                Difficulty::ALL
                    .iter()
                    .map(|&difficulty| PageJob::Difficulty(category, difficulty)),
            );
        }

        for (category_id, problems) in &data.problems {
            let Ok(category) = data.require_category(category_id) else {
                log!("warn"; "skipping {} problems of unknown category `{category_id}`", problems.len());
                continue;
            };
            jobs.extend(problems.iter().map(|p| PageJob::Problem(category, p)));
        }

        jobs.extend(data.categories.iter().map(PageJob::Cheatsheet));
        jobs.extend(data.comparisons.iter().map(PageJob::Comparison));
        jobs.extend([
            PageJob::PatternsIndex,
            PageJob::CheatsheetsIndex,
            PageJob::CompareIndex,
            PageJob::HtmlSitemap,
        ]);
        jobs
    }

    /// Render every job in parallel.
    ///
    /// The first failure is logged with the page it belongs to and aborts the
    /// remaining work. Calls `on_progress` after each rendered page.
    pub fn render_all(&self, on_progress: impl Fn() + Sync) -> Result<Vec<Page>> {
        let has_error = AtomicBool::new(false);

        self.jobs()
            .par_iter()
            .map(|job| {
                if has_error.load(Ordering::Relaxed) {
                    return Err(anyhow!("Aborted"));
                }
                match self.render(job) {
                    Ok(page) => {
                        on_progress();
                        Ok(page)
                    }
                    Err(e) => {
                        if !has_error.swap(true, Ordering::Relaxed) {
                            log!("error"; "{:#}", e);
                        }
                        Err(anyhow!("Build failed"))
                    }
                }
            })
            .collect()
    }

    /// Render one job into a [`Page`].
    pub fn render(&self, job: &PageJob<'_>) -> Result<Page> {
        let html = match *job {
            PageJob::Hub(category) => pattern::render_hub(self, category),
            PageJob::Difficulty(category, difficulty) => {
                pattern::render_difficulty(self, category, difficulty)
            }
            PageJob::Problem(category, problem) => problem::render(self, category, problem),
            PageJob::Cheatsheet(category) => cheatsheet::render(self, category),
            PageJob::Comparison(comparison) => compare::render(self, comparison),
            PageJob::PatternsIndex => index::render_patterns(self),
            PageJob::CheatsheetsIndex => index::render_cheatsheets(self),
            PageJob::CompareIndex => index::render_comparisons(self),
            PageJob::HtmlSitemap => html_sitemap::render(self),
        }
        .with_context(|| format!("failed to render {job}"))?;

        Ok(Page {
            path: urls::output_path(&job.url()),
            html,
        })
    }

    /// Render the shared head and preset the values every page template uses.
    fn context(&self, head: &Head) -> Result<RenderContext, RenderError> {
        let base = &self.config.base;
        let depth = urls::depth(head.url);
        Ok(RenderContext::new()
            .html("head", head::render(self, head)?)
            .text("site_name", &base.name)
            .text("app_url", &base.app_url)
            .text("copyright", &base.copyright)
            .text("tagline", &base.tagline)
            .text("assets_path", &urls::relative_dir(depth, "assets")))
    }

    /// Call-to-action link tagged with campaign parameters. Raw, escape on use.
    fn cta_url(&self, medium: &str, campaign: &str) -> String {
        let app_url = &self.config.base.app_url;
        let sep = if app_url.contains('?') { '&' } else { '?' };
        format!("{app_url}{sep}utm_source=website&utm_medium={medium}&utm_campaign={campaign}")
    }

    /// `"{title} | {site name}"`
    fn branded(&self, title: &str) -> String {
        format!("{title} | {}", self.config.base.name)
    }
}

/// `value`, or `fallback` when the data left it empty.
fn non_empty<'s>(value: &'s str, fallback: &'s str) -> &'s str {
    if value.trim().is_empty() { fallback } else { value }
}

// ============================================================================
// Page Jobs
// ============================================================================

/// One output document, borrowing the records it is built from.
#[derive(Debug, Clone, Copy)]
pub enum PageJob<'a> {
    Hub(&'a Category),
    Difficulty(&'a Category, Difficulty),
    Problem(&'a Category, &'a Problem),
    Cheatsheet(&'a Category),
    Comparison(&'a Comparison),
    PatternsIndex,
    CheatsheetsIndex,
    CompareIndex,
    HtmlSitemap,
}

impl PageJob<'_> {
    pub fn url(&self) -> String {
        match *self {
            Self::Hub(category) => urls::hub(&category.id),
            Self::Difficulty(category, difficulty) => urls::difficulty(&category.id, difficulty),
            Self::Problem(category, problem) => urls::problem(&category.id, &problem.slug),
            Self::Cheatsheet(category) => urls::cheatsheet(&category.id),
            Self::Comparison(comparison) => urls::comparison(comparison),
            Self::PatternsIndex => urls::PATTERNS_INDEX.to_owned(),
            Self::CheatsheetsIndex => urls::CHEATSHEETS_INDEX.to_owned(),
            Self::CompareIndex => urls::COMPARE_INDEX.to_owned(),
            Self::HtmlSitemap => urls::HTML_SITEMAP.to_owned(),
        }
    }
}

impl fmt::Display for PageJob<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Hub(c) => write!(f, "pattern hub `{}`", c.id),
            Self::Difficulty(c, d) => write!(f, "{d} page of `{}`", c.id),
            Self::Problem(c, p) => write!(f, "problem `{}/{}` ({})", c.id, p.slug, p.id),
            Self::Cheatsheet(c) => write!(f, "cheat sheet `{}`", c.id),
            Self::Comparison(c) => write!(f, "comparison `{}`", c.slug()),
            Self::PatternsIndex => f.write_str("patterns index"),
            Self::CheatsheetsIndex => f.write_str("cheat sheets index"),
            Self::CompareIndex => f.write_str("comparisons index"),
            Self::HtmlSitemap => f.write_str("HTML sitemap"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
