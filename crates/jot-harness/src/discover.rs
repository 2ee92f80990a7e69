use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::DiscoveryError;

/// Lazy stream of candidate files under a corpus root.
///
/// Yields every regular file whose final path component ends with one of
/// the configured suffixes (case-sensitive literal match). Directories
/// and other non-regular files are never yielded; symlinks are not
/// followed. An absent root is an empty corpus, not an error.
///
/// A traversal failure (e.g. an unreadable directory) propagates: the
/// iterator yields one `Err` and then terminates.
pub struct SourceFiles {
    walker: Option<walkdir::IntoIter>,
    suffixes: Vec<String>,
}

impl SourceFiles {
    pub fn new(root: impl AsRef<Path>, suffix: &str) -> Self {
        Self::with_suffixes(root, &[suffix])
    }

    pub fn with_suffixes(root: impl AsRef<Path>, suffixes: &[&str]) -> Self {
        let root = root.as_ref();
        let walker = root.exists().then(|| WalkDir::new(root).into_iter());
        Self {
            walker,
            suffixes: suffixes.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return false;
        };
        self.suffixes.iter().any(|suffix| name.ends_with(suffix))
    }
}

impl Iterator for SourceFiles {
    type Item = Result<PathBuf, DiscoveryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.walker.as_mut()?.next()? {
                Ok(entry) if entry.file_type().is_file() && self.matches(entry.path()) => {
                    tracing::debug!("discovered {}", entry.path().display());
                    return Some(Ok(entry.into_path()));
                }
                Ok(_) => continue,
                Err(err) => {
                    // Fuse on failure; candidates already yielded stand.
                    self.walker = None;
                    return Some(Err(DiscoveryError::from(err)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    fn collect(root: &Path, suffix: &str) -> Vec<PathBuf> {
        SourceFiles::new(root, suffix)
            .map(|candidate| candidate.unwrap())
            .collect()
    }

    #[test]
    fn finds_matching_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jot"));
        touch(&dir.path().join("b.jot"));
        touch(&dir.path().join("sub/c.jot"));
        touch(&dir.path().join("README.md"));

        let mut found = collect(dir.path(), ".jot");
        found.sort();
        let mut expected = vec![
            dir.path().join("a.jot"),
            dir.path().join("b.jot"),
            dir.path().join("sub/c.jot"),
        ];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect(&dir.path().join("no-such-corpus"), ".jot").is_empty());
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("upper.JOT"));
        assert!(collect(dir.path(), ".jot").is_empty());
    }

    #[test]
    fn directories_are_never_yielded() {
        let dir = tempfile::tempdir().unwrap();
        // A directory whose name matches the suffix must not count.
        touch(&dir.path().join("looks-like.jot/inner.txt"));
        assert!(collect(dir.path(), ".jot").is_empty());
    }

    #[test]
    fn multiple_suffixes_are_unioned() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("x.c"));
        touch(&dir.path().join("x.hpp"));
        touch(&dir.path().join("x.rs"));

        let found: Vec<_> = SourceFiles::with_suffixes(dir.path(), &[".c", ".hpp"])
            .map(|candidate| candidate.unwrap())
            .collect();
        assert_eq!(found.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn traversal_failure_yields_one_error_then_ends_the_walk() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        touch(&locked.join("hidden.jot"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // A privileged user reads the directory anyway; nothing to observe.
        if fs::read_dir(&locked).is_ok() {
            return;
        }

        let mut walk = SourceFiles::new(&locked, ".jot");
        let first = walk.next();
        let second = walk.next();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = first.unwrap().unwrap_err();
        assert_eq!(err.path(), locked.as_path());
        assert!(second.is_none());
    }

    #[test]
    fn walk_is_restartable() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jot"));

        assert_eq!(collect(dir.path(), ".jot").len(), 1);
        assert_eq!(collect(dir.path(), ".jot").len(), 1);
    }
}
