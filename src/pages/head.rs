//! The `<head>` partial shared by every page.

use super::{Site, urls};
use crate::render::{Html, RenderContext, RenderError};

/// Per-page head values. All raw; escaped when rendered.
#[derive(Debug, Clone, Default)]
pub struct Head<'h> {
    /// Site-absolute URL of the page. Drives the canonical link and the
    /// relative asset paths.
    pub url: &'h str,
    pub description: String,
    /// Open Graph and Twitter title.
    pub og_title: String,
    /// `<title>` text.
    pub title: String,
    /// Ask crawlers not to index the page.
    pub noindex: bool,
}

pub(super) fn render(site: &Site<'_>, head: &Head<'_>) -> Result<Html, RenderError> {
    let base = &site.config.base;
    let depth = urls::depth(head.url);

    let ctx = RenderContext::new()
        .optional_text("analytics_id", base.analytics_id.as_deref())
        .when("noindex", head.noindex)
        .text("meta_description", &head.description)
        .text("canonical_url", &base.absolute(head.url))
        .text("og_title", &head.og_title)
        .text("og_image", &base.absolute(&base.og_image))
        .text("site_name", &base.name)
        .text("page_title", &head.title)
        .text("assets_path", &urls::relative_dir(depth, "assets"))
        .text("css_path", &urls::relative_dir(depth, "css"));

    site.templates.render("head", ctx)
}
