use std::process;

use clap::Parser;
use jot_harness::RunSummary;

/// Command line shared by the corpus binaries: at most one positional
/// argument, scoping discovery to a subdirectory of the corpus.
#[derive(Parser)]
pub struct CorpusArgs {
    /// Subdirectory of the samples corpus to restrict the run to.
    pub subdir: Option<String>,

    /// Exit non-zero if any invocation fails.
    #[arg(long)]
    pub deny_failures: bool,
}

/// Parse arguments, exiting with status 1 on a usage error.
///
/// Help and version output still exit 0.
pub fn parse_args<T: Parser>() -> T {
    T::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        process::exit(code);
    })
}

/// Log to stderr; stdout is reserved for the final count line.
pub fn init_tracing() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
}

/// Report the run outcome and return the process exit code.
///
/// Recorded failures go to stderr; the final count line goes to stdout.
pub fn report(action: &str, summary: &RunSummary, deny_failures: bool) -> i32 {
    for failure in summary.failures() {
        match failure.status {
            Some(code) => eprintln!("{}: exited with status {code}", failure.path.display()),
            None => eprintln!("{}: failed to start", failure.path.display()),
        }
    }
    println!("{action} {} sample file(s)", summary.attempted());

    if deny_failures && !summary.is_clean() { 1 } else { 0 }
}
