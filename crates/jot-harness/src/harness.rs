use std::{
    path::{Path, PathBuf},
    process::Command,
};

use crate::{discover::SourceFiles, error::DiscoveryError};

/// One external command line: executable, subcommand, candidate path.
///
/// The three pieces stay separate argument tokens; nothing is routed
/// through a shell, so paths with spaces or metacharacters are safe.
#[derive(Debug, Clone)]
pub struct InvocationSpec {
    executable: PathBuf,
    subcommand: String,
    path: PathBuf,
}

impl InvocationSpec {
    pub fn new(
        executable: impl Into<PathBuf>,
        subcommand: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            executable: executable.into(),
            subcommand: subcommand.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the child command. Stdio is inherited, so the external
    /// tool's output passes straight through to our own streams.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.executable);
        command.arg(&self.subcommand).arg(&self.path);
        command
    }
}

/// One recorded per-file failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationFailure {
    pub path: PathBuf,
    /// Child exit code; `None` when the process failed to start or was
    /// terminated by a signal.
    pub status: Option<i32>,
}

/// Tally of one harness run.
///
/// `attempted` counts every candidate consumed, whatever the child did;
/// failures are recorded alongside rather than gating the count.
#[derive(Debug, Default)]
pub struct RunSummary {
    attempted: usize,
    failures: Vec<InvocationFailure>,
}

impl RunSummary {
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn failures(&self) -> &[InvocationFailure] {
        &self.failures
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Batch invoker: runs one external tool over every matching file under
/// a corpus root, strictly sequentially and in discovery order.
///
/// Per-file failures never abort the run; they are recorded in the
/// [`RunSummary`] and the harness moves on to the next candidate.
pub struct Harness {
    executable: PathBuf,
    subcommand: String,
    root: PathBuf,
    suffixes: Vec<String>,
}

impl Harness {
    /// New harness for `<executable> <subcommand> <file>` over `.jot`
    /// files under `samples`. The executable location is resolved once
    /// per run, not per file.
    pub fn new(executable: impl Into<PathBuf>, subcommand: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            subcommand: subcommand.into(),
            root: PathBuf::from("samples"),
            suffixes: vec![".jot".to_owned()],
        }
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffixes = vec![suffix.into()];
        self
    }

    /// Drive discovery and invoke each candidate, blocking on every
    /// child before requesting the next.
    pub fn run(&self) -> Result<RunSummary, DiscoveryError> {
        let suffixes: Vec<&str> = self.suffixes.iter().map(String::as_str).collect();
        let mut summary = RunSummary::default();

        for candidate in SourceFiles::with_suffixes(&self.root, &suffixes) {
            let spec = InvocationSpec::new(&self.executable, &self.subcommand, candidate?);
            summary.attempted += 1;

            tracing::debug!(
                "invoking {} {} {}",
                self.executable.display(),
                self.subcommand,
                spec.path().display()
            );
            match spec.command().status() {
                Ok(status) if status.success() => {}
                Ok(status) => summary.failures.push(InvocationFailure {
                    path: spec.path().to_path_buf(),
                    status: status.code(),
                }),
                Err(err) => {
                    tracing::debug!("{} did not start: {err}", self.executable.display());
                    summary.failures.push(InvocationFailure {
                        path: spec.path().to_path_buf(),
                        status: None,
                    });
                }
            }
        }

        Ok(summary)
    }
}
