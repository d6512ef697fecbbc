use crate::app::formatter::Messages;
use crate::app::models::{CompressMode, EntryKind, PathEntry, RunConfig};
use crate::app::slug::Slugifier;
use anyhow::{Context, Result};
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Walks the input paths and renames every targeted entry to its slug.
pub struct Renamer<'a> {
    config: &'a RunConfig,
    slugifier: Slugifier,
    failures: usize,
}

impl<'a> Renamer<'a> {
    pub fn new(config: &'a RunConfig) -> Result<Self> {
        Ok(Self {
            config,
            slugifier: Slugifier::from_config(config)?,
            failures: 0,
        })
    }

    /// Number of entries that hit a filesystem error so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Handles one command-line argument. A directory keeps its own name and has its
    /// contents processed; a file is renamed like any other file.
    pub fn process(&mut self, input: &Path) {
        let entry = PathEntry::probe(input);
        match entry.kind {
            EntryKind::Dir => self.traverse(&entry.path),
            EntryKind::File => {
                self.rename_file(&entry.path);
            }
            EntryKind::Other => log::warn!("{}", Messages::unknown(&entry.path)),
        }
    }

    fn traverse(&mut self, dir: &Path) {
        let children = match read_children(dir) {
            Ok(children) => children,
            Err(err) => {
                self.fail(dir, format!("{:#}", err));
                return;
            }
        };

        for child in children {
            let entry = PathEntry::probe(&child);
            match entry.kind {
                EntryKind::File => {
                    self.rename_file(&entry.path);
                }
                EntryKind::Dir => {
                    let current = self.rename_dir(&entry.path);
                    if !self.config.recursive {
                        continue;
                    }
                    if entry.is_symlink {
                        log::debug!("not following link {}", current.display());
                    } else {
                        self.traverse(&current);
                    }
                }
                EntryKind::Other => log::warn!("{}", Messages::unknown(&entry.path)),
            }
        }
    }

    fn rename_file(&mut self, file: &Path) -> PathBuf {
        if !self.config.targets_files() {
            return file.to_path_buf();
        }

        let stem = file
            .file_stem()
            .map(|stem| stem.to_string_lossy())
            .unwrap_or_default();
        let suffix = file
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default();
        let slug = self
            .slugifier
            .slug_without(&stem, &self.stopwords(file));

        self.apply(file, &format!("{}{}", slug, suffix))
    }

    fn rename_dir(&mut self, dir: &Path) -> PathBuf {
        if !self.config.targets_dirs() {
            return dir.to_path_buf();
        }

        let name = dir
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        let slug = self.slugifier.slug_without(&name, &self.stopwords(dir));

        self.apply(dir, &slug)
    }

    fn apply(&mut self, source: &Path, new_name: &str) -> PathBuf {
        // An empty or dot-only name would point at the parent itself, and a
        // name with separators would move the entry out of its directory.
        if matches!(new_name, "" | "." | "..") || Path::new(new_name).components().count() != 1
        {
            log::warn!("{}", Messages::conflict(source, new_name));
            return source.to_path_buf();
        }

        match self.rename(source, &source.with_file_name(new_name)) {
            Ok(path) => path,
            Err(err) => {
                self.fail(source, format!("{:#}", err));
                source.to_path_buf()
            }
        }
    }

    /// Moves `source` to `destination` unless that would clobber a different entry.
    /// Returns where the entry lives afterwards.
    pub fn rename(&self, source: &Path, destination: &Path) -> Result<PathBuf> {
        if source.as_os_str() == destination.as_os_str() {
            log::debug!("{}", Messages::skip(source));
            return Ok(source.to_path_buf());
        }

        let new_name = destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        // Case-only changes are allowed even when the filesystem reports the target as taken.
        let case_only = source.to_string_lossy().to_lowercase()
            == destination.to_string_lossy().to_lowercase();
        if occupied(destination) && !case_only {
            log::warn!("{}", Messages::conflict(source, &new_name));
            return Ok(source.to_path_buf());
        }

        log::info!("{}", Messages::moved(source, &new_name));
        if self.config.dry_run {
            return Ok(source.to_path_buf());
        }

        fs::rename(source, destination)
            .with_context(|| format!("Failed to rename to {}", new_name))?;
        Ok(destination.to_path_buf())
    }

    /// Words that must not be repeated in the new name of `path`.
    pub fn stopwords(&self, path: &Path) -> Vec<String> {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        match self.config.compress {
            CompressMode::None => Vec::new(),
            CompressMode::Standard => parent
                .file_name()
                .map(|name| Slugifier::words(&self.slugifier.slug(&name.to_string_lossy())))
                .unwrap_or_default(),
            CompressMode::Force => {
                let parent = parent.to_string_lossy().replace('\\', "/");
                Slugifier::words(&self.slugifier.slug(&parent))
            }
        }
    }

    fn fail(&mut self, path: &Path, err: impl Display) {
        self.failures += 1;
        log::warn!("{}", Messages::failed(path, err));
    }
}

/// Lists a directory's entries sorted by name.
fn read_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list directory {}", dir.display()))?;
    children.sort();
    Ok(children)
}

/// True for anything at `path`, dangling links included.
fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
