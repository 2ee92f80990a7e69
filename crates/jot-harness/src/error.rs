use std::path::{Path, PathBuf};

use thiserror::Error;

/// Traversal-level failure while enumerating the corpus.
///
/// Fatal to the run: candidates already handed out stay valid, but the
/// walk terminates and no further files are invoked.
#[derive(Debug, Error)]
#[error("failed to walk {}: {source}", path.display())]
pub struct DiscoveryError {
    path: PathBuf,
    #[source]
    source: walkdir::Error,
}

impl DiscoveryError {
    /// Path the traversal failed on, when the underlying error carried one.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl From<walkdir::Error> for DiscoveryError {
    fn from(source: walkdir::Error) -> Self {
        let path = source.path().map(Path::to_path_buf).unwrap_or_default();
        Self { path, source }
    }
}
