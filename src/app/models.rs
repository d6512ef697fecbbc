use std::fs;
use std::path::{Path, PathBuf};

/// Where stopwords for an entry are taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressMode {
    None,
    /// Words of the immediate parent directory's name.
    Standard,
    /// Words of the whole parent path.
    Force,
}

/// Character class that survives slugification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharFilter {
    Standard,
    Posix,
    Strict,
}

impl CharFilter {
    /// Pattern matching runs of characters to be replaced by the separator.
    pub fn pattern(self) -> Option<&'static str> {
        match self {
            CharFilter::Standard => Some(r"[^a-z0-9.-]+"),
            CharFilter::Posix => Some(r"[^a-zA-Z0-9_.-]+"),
            CharFilter::Strict => None,
        }
    }
}

/// Represents the final configuration resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub recursive: bool,
    pub files_only: bool,
    pub dirs_only: bool,
    pub compress: CompressMode,
    pub filter: CharFilter,
    pub lowercase: bool,
    pub dry_run: bool,
    pub debug: bool,
    pub paths: Vec<PathBuf>,
}

impl RunConfig {
    pub fn targets_files(&self) -> bool {
        !self.dirs_only
    }

    pub fn targets_dirs(&self) -> bool {
        !self.files_only
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

/// A path discovered during traversal.
#[derive(Debug)]
pub struct PathEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub is_symlink: bool,
}

impl PathEntry {
    /// Classifies `path` by what it points to. Broken links and special files are `Other`.
    pub fn probe(path: &Path) -> Self {
        let kind = match fs::metadata(path) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(meta) if meta.is_dir() => EntryKind::Dir,
            _ => EntryKind::Other,
        };
        let is_symlink = fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);

        Self {
            path: path.to_path_buf(),
            kind,
            is_symlink,
        }
    }
}
