//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Programmatic SEO page generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: pseo.toml)
    #[arg(short = 'C', long, default_value = "pseo.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides shared by `build` and `check`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Data file path (relative to project root)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Template override directory (relative to project root)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Remove the output directory before writing
    #[arg(long)]
    pub clean: bool,

    /// Minify the html output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable XML sitemap generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override `[base].url`, e.g. for a staging deployment:
    ///   pseo build --base-url "https://staging.example.com"
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a project with a default config, templates and sample data
    Init {
        /// the name(path) of project directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Render every page and write it to the output directory
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Render every page in memory without writing anything
    Check {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }

    pub fn build_args(&self) -> Option<&BuildArgs> {
        match &self.command {
            Commands::Build { build_args } | Commands::Check { build_args } => Some(build_args),
            Commands::Init { .. } => None,
        }
    }
}
