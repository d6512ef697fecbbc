use crate::app::cli::Cli;
use crate::app::models::{CharFilter, CompressMode, RunConfig};
use anyhow::{bail, Result};

pub fn resolve_config(cli: Cli) -> Result<RunConfig> {
    if cli.paths.is_empty() {
        bail!("at least one path is required");
    }

    // Strict wins over posix, posix over standard; clap keeps them exclusive anyway.
    let filter = if cli.strict {
        CharFilter::Strict
    } else if cli.posix {
        CharFilter::Posix
    } else {
        CharFilter::Standard
    };

    let compress = if cli.force_compress {
        CompressMode::Force
    } else if cli.compress {
        CompressMode::Standard
    } else {
        CompressMode::None
    };

    Ok(RunConfig {
        recursive: cli.recursive,
        files_only: cli.files,
        dirs_only: cli.dirs,
        compress,
        filter,
        lowercase: !cli.posix,
        dry_run: cli.dry_run,
        debug: cli.debug,
        paths: cli.paths,
    })
}
