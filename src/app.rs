pub mod cli;
pub mod config;
pub mod formatter;
pub mod logging;
pub mod models;
pub mod renamer;
pub mod slug;

use anyhow::{bail, Result};
use clap::Parser;

use self::cli::Cli;
use self::config::resolve_config;
use self::renamer::Renamer;

/// Parses the command line and renames every input path in order.
pub fn run() -> Result<()> {
    let args = Cli::parse();
    let config = resolve_config(args)?;

    logging::init(config.debug)?;
    log::debug!("{:?}", config);

    if config.dry_run {
        log::info!("dry run");
    }

    let mut renamer = Renamer::new(&config)?;
    for path in &config.paths {
        renamer.process(path);
    }

    match renamer.failures() {
        0 => Ok(()),
        1 => bail!("1 entry could not be renamed"),
        n => bail!("{} entries could not be renamed", n),
    }
}
