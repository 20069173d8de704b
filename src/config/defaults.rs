//! Default values for configuration fields.
//!
//! Used both by serde (`#[serde(default = "...")]`) and by `educe(Default)`.

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn name() -> String {
        "LeetEye".into()
    }

    pub fn url() -> String {
        "https://leeteye.com".into()
    }

    pub fn app_url() -> String {
        "https://apps.apple.com/us/app/leeteye/id6756695234".into()
    }

    pub fn copyright() -> String {
        "2025 LeetEye".into()
    }

    pub fn tagline() -> String {
        "Pattern recognition for coding interviews.".into()
    }

    pub fn og_image() -> String {
        "/assets/og-image.png".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn data() -> PathBuf {
        "data/pseo-data.json".into()
    }

    pub fn templates() -> PathBuf {
        "templates".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn related_limit() -> usize {
        5
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap-pseo.xml".into()
        }
    }
}
