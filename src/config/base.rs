//! `[base]` section configuration.
//!
//! Site identity used by the shared page head and footers.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in pseo.toml.
///
/// # Example
/// ```toml
/// [base]
/// name = "LeetEye"
/// url = "https://leeteye.com"
/// analytics_id = "G-XXXXXXX"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Brand name appended to page titles.
    #[serde(default = "defaults::base::name")]
    #[educe(Default = defaults::base::name())]
    pub name: String,

    /// Absolute origin for canonical links, Open Graph and the sitemap.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: String,

    /// Google Analytics measurement id. No tracking snippet when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,

    /// Call-to-action link target.
    #[serde(default = "defaults::base::app_url")]
    #[educe(Default = defaults::base::app_url())]
    pub app_url: String,

    #[serde(default = "defaults::base::copyright")]
    #[educe(Default = defaults::base::copyright())]
    pub copyright: String,

    /// Footer line after the copyright.
    #[serde(default = "defaults::base::tagline")]
    #[educe(Default = defaults::base::tagline())]
    pub tagline: String,

    /// Social preview image, relative to `url` or absolute.
    #[serde(default = "defaults::base::og_image")]
    #[educe(Default = defaults::base::og_image())]
    pub og_image: String,
}

impl BaseConfig {
    /// `url` joined with a site-absolute path.
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        let origin = self.url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{origin}{path}")
        } else {
            format!("{origin}/{path}")
        }
    }
}
