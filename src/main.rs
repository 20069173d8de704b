//! pseo - programmatic SEO page generator.
//!
//! Renders pattern hubs, problem walkthroughs, cheat sheets and comparison
//! pages from one extracted data file.

mod build;
mod cli;
mod config;
mod data;
mod generator;
mod init;
mod pages;
mod render;
mod utils;

use anyhow::{Result, bail};
use build::{build_site, check_site};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use init::new_site;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Init { name } => new_site(&config, name.is_some()),
        Commands::Build { .. } => build_site(&config).map(|_| ()),
        Commands::Check { .. } => check_site(&config).map(|_| ()),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if !cli.is_init() && config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    let config_exists = config.config_path.exists();
    match (cli.is_init(), config_exists) {
        (true, true) => {
            bail!("Config file already exists. Remove it manually or init in a different path.")
        }
        (false, false) => bail!("Config file not found."),
        _ => {}
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}
