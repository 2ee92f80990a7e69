use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Directory the harness should execute from.
///
/// Appends `segment` once when `current` does not already end with it.
/// Pure and idempotent: callers apply the result with a single
/// `set_current_dir` at startup, with no retries.
pub fn resolve(current: impl Into<PathBuf>, segment: &str) -> PathBuf {
    let current = current.into();
    if current.file_name() == Some(OsStr::new(segment)) {
        current
    } else {
        current.join(segment)
    }
}

/// Executable location with the platform suffix (`.exe` on Windows,
/// nothing elsewhere).
pub fn platform_executable(base: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(format!("{base}.exe"))
    } else {
        Path::new(base).to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_segment_when_missing() {
        assert_eq!(resolve("/repo", "bin"), PathBuf::from("/repo/bin"));
    }

    #[test]
    fn is_idempotent() {
        let once = resolve("/repo", "bin");
        let twice = resolve(once.clone(), "bin");
        assert_eq!(once, twice);
    }

    #[test]
    fn only_the_final_component_counts() {
        assert_eq!(
            resolve("/bin/repo", "bin"),
            PathBuf::from("/bin/repo/bin")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn no_suffix_off_windows() {
        assert_eq!(platform_executable("./jot"), PathBuf::from("./jot"));
    }

    #[cfg(windows)]
    #[test]
    fn exe_suffix_on_windows() {
        assert_eq!(platform_executable("./jot"), PathBuf::from("./jot.exe"));
    }
}
