//! `[build]` section configuration.
//!
//! Input and output locations plus post-processing switches.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in pseo.toml.
///
/// # Example
/// ```toml
/// [build]
/// data = "data/pseo-data.json"
/// templates = "templates"
/// output = "public"
/// minify = true
///
/// [build.sitemap]
/// path = "sitemap-pseo.xml"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(
        default = "defaults::build::root",
        skip_serializing_if = "Option::is_none"
    )]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Extracted record set (JSON).
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Template overrides. Names not found here use the built-in templates.
    #[serde(default = "defaults::build::templates")]
    #[educe(Default = defaults::build::templates())]
    pub templates: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify HTML output.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// Remove the output directory before writing.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Related problems listed on each problem page.
    #[serde(default = "defaults::build::related_limit")]
    #[educe(Default = defaults::build::related_limit())]
    pub related_limit: usize,

    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// `[build.sitemap]` section - XML sitemap generation.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path, relative to `[build].output`.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}
