//! Output minification for pages and the XML sitemap.
//!
//! Both go through [`minify`], which is a no-op unless `[build].minify` is on.

use crate::config::SiteConfig;
use std::borrow::Cow;

pub enum MinifyType<'a> {
    Html(&'a [u8]),
    Xml(&'a [u8]),
}

/// Minify `content` when the config asks for it.
///
/// Returns the input untouched (`Cow::Borrowed`) when minification is off.
pub fn minify<'a>(content: MinifyType<'a>, config: &SiteConfig) -> Cow<'a, [u8]> {
    match (config.build.minify, content) {
        (false, MinifyType::Html(bytes) | MinifyType::Xml(bytes)) => Cow::Borrowed(bytes),
        (true, MinifyType::Html(html)) => Cow::Owned(minify_html_bytes(html)),
        (true, MinifyType::Xml(xml)) => Cow::Owned(minify_xml_bytes(xml)),
    }
}

fn minify_html_bytes(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    minify_html::minify(html, &cfg)
}

/// Join trimmed, non-empty lines. Sitemap text never spans lines.
fn minify_xml_bytes(xml: &[u8]) -> Vec<u8> {
    String::from_utf8_lossy(xml)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<String>()
        .into_bytes()
}
