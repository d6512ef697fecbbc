use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "slug",
    version = "1.0",
    about = "Slugify file and directory names",
    after_help = "example: slug -rn \"File with Spaces.txt\" \"DIRECTORY\"",
    disable_version_flag = true,
    group(ArgGroup::new("targets").args(["files", "dirs"])),
    group(ArgGroup::new("compression").args(["compress", "force_compress"])),
    group(ArgGroup::new("filter").args(["standard", "posix", "strict"])),
)]
pub struct Cli {
    /// Recurse into directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Rename files only
    #[arg(short, long)]
    pub files: bool,

    /// Rename directories only
    #[arg(short = 'F', long)]
    pub dirs: bool,

    /// Try to deduplicate path name (race condition)
    #[arg(short = 'z', long)]
    pub compress: bool,

    /// Try to deduplicate entire path name
    #[arg(short = 'Z', long)]
    pub force_compress: bool,

    /// Enable standard filter (default)
    #[arg(short, long)]
    pub standard: bool,

    /// Enable posix filter
    #[arg(short = 'x', long)]
    pub posix: bool,

    /// Enable strict filter
    #[arg(short = 'c', long)]
    pub strict: bool,

    /// Perform a trial run with no changes made
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Paths to files and directories
    #[arg(value_name = "path", required = true)]
    pub paths: Vec<PathBuf>,
}
