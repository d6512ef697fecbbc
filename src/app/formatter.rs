use std::fmt::Display;
use std::path::Path;

/// Builds the one-line log messages describing what happened to an entry.
pub struct Messages;

impl Messages {
    pub fn skip(source: &Path) -> String {
        format!("skip {}", location(source))
    }

    pub fn moved(source: &Path, new_name: &str) -> String {
        format!("move {} to {}", location(source), new_name)
    }

    pub fn conflict(source: &Path, new_name: &str) -> String {
        format!("conflict {} to {}", location(source), new_name)
    }

    pub fn unknown(path: &Path) -> String {
        format!("unknown or broken type {}", location(path))
    }

    pub fn failed(path: &Path, err: impl Display) -> String {
        format!("failed {}: {}", location(path), err)
    }
}

/// `parent/name`, with forward slashes and `.` for a bare relative name.
fn location(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return posix(path);
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => posix(parent),
        _ => ".".to_string(),
    };

    format!("{}/{}", parent, name.to_string_lossy())
}

fn posix(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parent_and_entry() {
        assert_eq!(
            Messages::moved(Path::new("photos/Paris Trip"), "paris-trip"),
            "move photos/Paris Trip to paris-trip"
        );
        assert_eq!(
            Messages::conflict(Path::new("docs/My File.txt"), "my-file.txt"),
            "conflict docs/My File.txt to my-file.txt"
        );
    }

    #[test]
    fn bare_names_live_in_current_dir() {
        assert_eq!(Messages::skip(Path::new("notes.txt")), "skip ./notes.txt");
        assert_eq!(
            Messages::unknown(Path::new("dangling")),
            "unknown or broken type ./dangling"
        );
    }

    #[test]
    fn paths_without_a_name_are_shown_whole() {
        assert_eq!(Messages::unknown(Path::new("..")), "unknown or broken type ..");
    }

    #[test]
    fn failures_carry_the_error() {
        assert_eq!(
            Messages::failed(Path::new("a/B"), "permission denied"),
            "failed a/B: permission denied"
        );
    }
}
