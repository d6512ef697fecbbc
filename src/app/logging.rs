use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Installs the stdout logger. Lines look like `info: move ./A to a`.
pub fn init(debug: bool) -> Result<()> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .filter_level(level)
        .target(Target::Stdout)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let level = record.level().as_str().to_ascii_lowercase();
            writeln!(buf, "{style}{level}:{style:#} {}", record.args())
        })
        .try_init()
        .context("Failed to initialise logger")
}
