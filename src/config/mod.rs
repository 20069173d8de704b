//! Project configuration management for `pseo.toml`.
//!
//! # Sections
//!
//! | Section           | Purpose                                         |
//! |-------------------|-------------------------------------------------|
//! | `[base]`          | Site identity (name, url, analytics, footer)    |
//! | `[build]`         | Data, template and output paths, minification   |
//! | `[build.sitemap]` | XML sitemap generation                          |
//!
//! # Example
//!
//! ```toml
//! [base]
//! name = "LeetEye"
//! url = "https://leeteye.com"
//!
//! [build]
//! data = "data/pseo-data.json"
//! output = "public"
//! minify = true
//! ```

mod base;
mod build;
pub mod defaults;
mod error;

pub use base::BaseConfig;
pub use build::BuildConfig;
pub use error::ConfigError;

use crate::cli::{BuildArgs, Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing pseo.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Absolute path of the XML sitemap inside the output directory.
    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.build.sitemap.path)
    }

    /// Apply CLI arguments, then resolve every path against the project root.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let base = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };

        if let Some(args) = cli.build_args() {
            self.apply_build_args(args);
        }
        self.update_path_with_root(&root, &cli.config);
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.build.data, args.data.as_ref());
        Self::update_option(&mut self.build.templates, args.templates.as_ref());
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());
        Self::update_option(&mut self.base.url, args.base_url.as_ref());
        self.build.clean |= args.clean;
    }

    /// Update config option if a CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize the root and every configured path to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_file: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_file));
        self.build.data = Self::normalize_path(&root.join(&self.build.data));
        self.build.templates = Self::normalize_path(&root.join(&self.build.templates));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Check the loaded configuration before a build or check run
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if !self.base.url.starts_with("http") {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        // The id is spliced into an inline <script>, where entities are not decoded
        if let Some(id) = &self.base.analytics_id
            && !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            bail!(ConfigError::Validation(format!(
                "[base.analytics_id] `{id}` may only contain ASCII letters, digits and `-`"
            )));
        }

        if !self.build.data.is_file() {
            bail!(ConfigError::Validation(format!(
                "[build.data] `{}` not found",
                self.build.data.display()
            )));
        }

        if self.build.templates.exists() && !self.build.templates.is_dir() {
            bail!(ConfigError::Validation(
                "[build.templates] is not a directory".into()
            ));
        }

        if self.build.sitemap.enable && self.build.sitemap.path.is_absolute() {
            bail!(ConfigError::Validation(
                "[build.sitemap.path] must be relative to [build.output]".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pseo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            name = "Acme"

            [build]
            output = "dist"
        "#,
        )
        .unwrap();
        assert_eq!(config.base.name, "Acme");
        assert_eq!(config.build.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[base\nname = \"x\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(SiteConfig::from_str("[serve]\nport = 80").is_err());
    }

    #[test]
    fn test_from_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = SiteConfig::from_path(&dir.path().join("pseo.toml"));
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_update_with_cli_resolves_paths() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&["--root", root, "build", "--output", "dist"]));

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.get_root(), root);
        assert_eq!(config.config_path, root.join("pseo.toml"));
        assert_eq!(config.build.output, root.join("dist"));
        assert_eq!(config.build.data, root.join("data/pseo-data.json"));
        assert_eq!(config.sitemap_path(), root.join("dist/sitemap-pseo.xml"));
    }

    #[test]
    fn test_update_with_cli_overrides() {
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&[
            "check",
            "--minify",
            "--clean",
            "--sitemap=false",
            "--base-url",
            "https://staging.example.com",
        ]));
        assert!(config.build.minify);
        assert!(config.build.clean);
        assert!(!config.build.sitemap.enable);
        assert_eq!(config.base.url, "https://staging.example.com");
    }

    #[test]
    fn test_update_with_cli_init_name() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&["--root", root, "init", "mysite"]));
        assert!(config.get_root().ends_with("mysite"));
    }

    #[test]
    fn test_validate() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pseo.toml"), "").unwrap();
        let root = dir.path().to_str().unwrap();

        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&["--root", root, "build"]));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[build.data]"));

        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/pseo-data.json"), "{}").unwrap();
        assert!(config.validate().is_ok());

        config.base.analytics_id = Some("G-58WNFTH58D".into());
        assert!(config.validate().is_ok());
        config.base.analytics_id = Some("G-1');alert(1);//".into());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[base.analytics_id]"));
        config.base.analytics_id = None;

        config.base.url = "leeteye.com".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[base.url]"));
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&SiteConfig::default()).unwrap();
        let parsed = SiteConfig::from_str(&text).unwrap();
        assert_eq!(parsed.base.url, SiteConfig::default().base.url);
        assert_eq!(parsed.build.related_limit, 5);
        assert!(!text.contains("root"));
    }
}
