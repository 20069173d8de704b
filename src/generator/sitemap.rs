//! XML sitemap generation.
//!
//! Lists every indexable page with its crawl hints. Difficulty pages are
//! `noindex` and left out.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://leeteye.com/patterns/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.9</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::{BaseConfig, SiteConfig},
    data::SiteData,
    log,
    pages::urls,
    render::escape_html,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use std::{fmt::Write as _, fs};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Write the XML sitemap if enabled in config.
pub fn build_sitemap(config: &SiteConfig, data: &SiteData) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::from_data(&config.base, data);
        sitemap.write(config)?;
    }
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeFreq {
    Weekly,
    Monthly,
}

impl ChangeFreq {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Absolute URL, unescaped
    loc: String,
    priority: &'static str,
    changefreq: Option<ChangeFreq>,
}

impl Sitemap {
    fn from_data(base: &BaseConfig, data: &SiteData) -> Self {
        let mut entries = Vec::with_capacity(data.problem_count() + data.categories.len() * 2 + 8);
        let mut push = |path: &str, priority, changefreq| {
            entries.push(UrlEntry {
                loc: base.absolute(path),
                priority,
                changefreq,
            });
        };

        push(urls::HOME, "1.0", Some(ChangeFreq::Weekly));
        push(urls::PATTERNS_INDEX, "0.9", Some(ChangeFreq::Weekly));
        for category in &data.categories {
            push(&urls::hub(&category.id), "0.8", Some(ChangeFreq::Monthly));
        }

        for (category_id, problems) in &data.problems {
            if data.category(category_id).is_none() {
                continue;
            }
            for problem in problems {
                push(&urls::problem(category_id, &problem.slug), "0.7", Some(ChangeFreq::Monthly));
            }
        }

        push(urls::CHEATSHEETS_INDEX, "0.8", Some(ChangeFreq::Monthly));
        for category in &data.categories {
            push(&urls::cheatsheet(&category.id), "0.7", Some(ChangeFreq::Monthly));
        }

        push(urls::COMPARE_INDEX, "0.8", None);
        for comparison in &data.comparisons {
            push(&urls::comparison(comparison), "0.7", None);
        }

        Self { urls: entries }
    }

    /// Generate sitemap XML, stamping every entry with `lastmod`.
    fn into_xml(self, lastmod: &str) -> String {
        let mut xml = String::with_capacity(self.urls.len() * 160 + 128);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        let _ = writeln!(xml, r#"<urlset xmlns="{SITEMAP_NS}">"#);

        for entry in self.urls {
            xml.push_str("  <url>\n");
            let _ = writeln!(xml, "    <loc>{}</loc>", escape_html(entry.loc.as_str()));
            let _ = writeln!(xml, "    <lastmod>{lastmod}</lastmod>");
            if let Some(changefreq) = entry.changefreq {
                let _ = writeln!(xml, "    <changefreq>{}</changefreq>", changefreq.as_str());
            }
            let _ = writeln!(xml, "    <priority>{}</priority>", entry.priority);
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.sitemap_path();
        let count = self.urls.len();
        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let xml = self.into_xml(&today);
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!(
            "sitemap";
            "{} ({count} urls)",
            sitemap_path.file_name().unwrap_or_default().to_string_lossy()
        );
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tests::fixture;

    fn sitemap_xml() -> String {
        let config = SiteConfig::default();
        Sitemap::from_data(&config.base, &fixture()).into_xml("2025-01-01")
    }

    /// The `<url>` block whose `<loc>` is `loc`.
    fn entry<'x>(xml: &'x str, loc: &str) -> &'x str {
        let needle = format!("<loc>{loc}</loc>");
        let start = xml.find(&needle).unwrap_or_else(|| panic!("{loc} not listed"));
        let end = start + xml[start..].find("</url>").unwrap();
        &xml[start..end]
    }

    #[test]
    fn test_sitemap_loc_is_escaped() {
        let mut base = BaseConfig::default();
        base.url = "https://example.com/a&b".into();
        let xml = Sitemap::from_data(&base, &SiteData::default()).into_xml("2025-01-01");
        assert!(xml.contains("<loc>https://example.com/a&amp;b/patterns/</loc>"));
        assert!(!xml.contains("a&b"));
    }

    #[test]
    fn test_sitemap_lists_indexable_pages() {
        let xml = sitemap_xml();

        // home, 3 section indexes, 3 hubs, 4 problems, 3 cheat sheets, 3 comparisons
        assert_eq!(xml.matches("<url>").count(), 1 + 3 + 3 + 4 + 3 + 3);
        assert!(xml.contains("<loc>https://leeteye.com/problems/arrays-and-hashing/two-sum.html</loc>"));
        assert!(xml.contains("<loc>https://leeteye.com/cheatsheets/stack.html</loc>"));
        assert!(xml.contains("<loc>https://leeteye.com/compare/stack-vs-queue.html</loc>"));
        assert!(!xml.contains("easy.html"));
        assert!(!xml.contains("ghost-category"));
        assert!(!xml.contains("sitemap.html"));
    }

    #[test]
    fn test_sitemap_priorities() {
        let xml = sitemap_xml();

        let home = entry(&xml, "https://leeteye.com/");
        assert!(home.contains("<changefreq>weekly</changefreq>"));
        assert!(home.contains("<priority>1.0</priority>"));

        let index = entry(&xml, "https://leeteye.com/patterns/");
        assert!(index.contains("<priority>0.9</priority>"));

        let hub = entry(&xml, "https://leeteye.com/patterns/stack/");
        assert!(hub.contains("<changefreq>monthly</changefreq>"));
        assert!(hub.contains("<priority>0.8</priority>"));

        let comparison = entry(&xml, "https://leeteye.com/compare/hash-map-vs-hash-set.html");
        assert!(!comparison.contains("<changefreq>"));
        assert!(comparison.contains("<priority>0.7</priority>"));
        assert!(comparison.contains("<lastmod>2025-01-01</lastmod>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let xml = Sitemap::from_data(&BaseConfig::default(), &SiteData::default()).into_xml("2025-01-01");

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert_eq!(lines[1], format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
        // fixed entries only
        assert_eq!(xml.matches("<url>").count(), 4);
    }

    #[test]
    fn test_build_sitemap_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().join("public");
        config.build.minify = true;

        build_sitemap(&config, &fixture()).unwrap();

        let written = fs::read_to_string(config.sitemap_path()).unwrap();
        assert!(written.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><urlset"#));
        assert!(!written.contains('\n'));
        assert!(written.contains("<loc>https://leeteye.com/patterns/two-pointers/</loc>"));
    }

    #[test]
    fn test_build_sitemap_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();
        config.build.sitemap.enable = false;

        build_sitemap(&config, &fixture()).unwrap();
        assert!(!config.sitemap_path().exists());
    }
}
