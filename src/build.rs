//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()    clear the output directory if `clean`
//!     │
//!     ├── Site::render_all()  every page in memory (rayon)
//!     │
//!     ├── write_pages()       minify + write (rayon)
//!     │
//!     └── build_sitemap()     sitemap-pseo.xml
//! ```
//!
//! Nothing is written until every page has rendered, so a broken template
//! or record leaves the previous output untouched (unless `clean` is set).

use crate::{
    config::SiteConfig,
    data::SiteData,
    generator::sitemap::build_sitemap,
    log,
    pages::{Page, Site},
    render::TemplateCache,
    utils::{
        log::ProgressBars,
        minify::{MinifyType, minify},
    },
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicBool, Ordering},
};

/// Render every page and write it, plus the XML sitemap, to `[build].output`.
///
/// Returns the number of pages written.
pub fn build_site(config: &SiteConfig) -> Result<usize> {
    let output = &config.build.output;
    let data = load_data(config)?;
    let templates = TemplateCache::new(Some(config.build.templates.clone()));
    let site = Site::new(config, &data, &templates);

    let pages = render_pages(&site)?;

    prepare_output(output, config.build.clean)?;
    write_pages(&pages, config)?;
    build_sitemap(config, &data)?;

    log!("build"; "done: {} pages in {}", pages.len(), output.display());
    Ok(pages.len())
}

/// Render every page in memory and discard the result.
///
/// Surfaces the same template and data errors as a build without touching
/// the output directory.
pub fn check_site(config: &SiteConfig) -> Result<usize> {
    let data = load_data(config)?;
    let templates = TemplateCache::new(Some(config.build.templates.clone()));
    let site = Site::new(config, &data, &templates);

    let pages = render_pages(&site)?;
    log!("check"; "{} pages render cleanly", pages.len());
    Ok(pages.len())
}

fn load_data(config: &SiteConfig) -> Result<SiteData> {
    let data = SiteData::load(&config.build.data)?;
    log!(
        "build";
        "{} patterns, {} problems, {} comparisons",
        data.categories.len(),
        data.problem_count(),
        data.comparisons.len()
    );
    Ok(data)
}

fn render_pages(site: &Site<'_>) -> Result<Vec<Page>> {
    let total = site.jobs().len();
    let progress = ProgressBars::new(&[("render", total)]);
    let pages = site.render_all(|| progress.inc(0));
    progress.finish();
    pages
}

/// Create the output directory, removing any previous content first when
/// `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

fn write_pages(pages: &[Page], config: &SiteConfig) -> Result<()> {
    let progress = ProgressBars::new(&[("write", pages.len())]);
    let has_error = AtomicBool::new(false);

    let result = pages.par_iter().try_for_each(|page| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = write_page(page, config) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", page.path.display(), e);
            }
            return Err(anyhow!("Build failed"));
        }
        progress.inc(0);
        Ok(())
    });

    progress.finish();
    result
}

fn write_page(page: &Page, config: &SiteConfig) -> Result<()> {
    let path = config.build.output.join(&page.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let html = minify(MinifyType::Html(page.html.as_str().as_bytes()), config);
    fs::write(&path, &*html).with_context(|| format!("Failed to write {}", path.display()))
}

// ============================================================================
// Tests
// ============================================================================
