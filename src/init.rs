//! Project initialization.
//!
//! Writes a default `pseo.toml`, the built-in templates (ready to edit) and
//! a small sample data set that builds out of the box.

use crate::{config::SiteConfig, log, render::template::EMBEDDED};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

const SAMPLE_DATA: &str = include_str!("../data/sample-data.json");

/// Create a new project at the configured root.
///
/// Without a `name` the current directory is used and must be empty.
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    if !has_name && !is_dir_empty(root)? {
        bail!("Current directory is not empty. Use `pseo init <NAME>` to create in a subdirectory.");
    }

    let defaults = SiteConfig::default();
    init_default_config(root, &config.config_path, &defaults)?;
    init_templates(&root.join(&defaults.build.templates))?;
    init_sample_data(&root.join(&defaults.build.data))?;
    init_ignored_files(root, &[defaults.build.output.as_path()])?;

    log!("init"; "created project in {}", root.display());
    Ok(())
}

fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

fn init_default_config(root: &Path, config_path: &Path, defaults: &SiteConfig) -> Result<()> {
    if config_path.exists() {
        bail!(
            "Config file `{}` already exists. Remove it manually or init in a different path.",
            config_path.display()
        );
    }
    fs::create_dir_all(root).with_context(|| format!("Failed to create {}", root.display()))?;

    let content = toml::to_string_pretty(defaults)?;
    fs::write(config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}

/// Copy every embedded template into `dir` for editing.
fn init_templates(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    for (name, source) in EMBEDDED {
        let path = dir.join(format!("{name}.html"));
        if path.exists() {
            bail!("Template `{}` already exists", path.display());
        }
        fs::write(&path, source).with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

fn init_sample_data(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, SAMPLE_DATA).with_context(|| format!("Failed to write {}", path.display()))
}

fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .filter_map(|p| p.to_str())
        .map(|p| format!("/{p}\n"))
        .collect::<String>();

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
