//! uideploy CLI - deploy UI dist artifacts
//!
//! Usage: uideploy
//!
//! Clears and repopulates the static directories for shared CSS, client CSS
//! and client JS, in that order. Takes no arguments; changing file ownership
//! normally requires running as root.

use anyhow::Result;
use clap::Parser;

use uideploy::{deploy_all, DeployConfig, SystemOwnership};

/// Deploy UI build artifacts (CSS/JS) from ui/dist into the application,
/// project and web-server static directories
#[derive(Parser, Debug)]
#[command(name = "uideploy")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let config = DeployConfig::default();
    deploy_all(&config, &SystemOwnership)?;

    Ok(())
}
