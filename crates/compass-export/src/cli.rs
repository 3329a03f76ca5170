//! Command line arguments for `fix-web-export`.
//!
//! Values given on the command line take precedence over the config file,
//! which takes precedence over [`ExportConfig::default`].

use std::path::PathBuf;

use clap::Parser;

use crate::Result;
use crate::config::ExportConfig;

/// Arguments of the `fix-web-export` binary.
#[derive(Debug, Parser)]
#[command(
    name = "fix-web-export",
    version,
    about = "Mark entry scripts in a static web export as ES modules",
    long_about = None
)]
pub struct Cli {
    /// Export directory [default: dist]
    pub dist_dir: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File extension to rewrite (repeatable)
    #[arg(short, long = "ext")]
    pub extensions: Vec<String>,

    /// Skip hidden files and directories
    #[arg(long)]
    pub skip_hidden: bool,

    /// Log each file examined
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Build the effective config.
    pub fn into_config(self) -> Result<ExportConfig> {
        let mut config = match &self.config {
            Some(path) => ExportConfig::load(path)?,
            None => ExportConfig::default(),
        };
        if let Some(dist_dir) = self.dist_dir {
            config = config.with_dist_dir(dist_dir);
        }
        if !self.extensions.is_empty() {
            config = config.with_extensions(self.extensions);
        }
        if self.skip_hidden {
            config = config.skip_hidden(true);
        }
        Ok(config)
    }
}
