//! `acadex init` — Write a default portal configuration file.

use anyhow::bail;
use clap::Args;
use std::path::PathBuf;

use acadex_core::PortalConfig;

use crate::config;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path for the configuration file.
    #[arg(short, long, default_value = "acadex.toml")]
    pub config: PathBuf,

    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &InitArgs) -> anyhow::Result<()> {
    if args.config.exists() && !args.force {
        bail!(
            "config file {} already exists (use --force to overwrite)",
            args.config.display()
        );
    }

    let default = PortalConfig::default();
    config::save(&default, &args.config)?;
    tracing::info!(path = %args.config.display(), "wrote default config");
    println!("Wrote default configuration to {}", args.config.display());
    Ok(())
}
