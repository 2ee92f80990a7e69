use anyhow::Result;
use clap::Parser;
use jot_harness::SourceFiles;
use jot_samples::common;
use xshell::{Shell, cmd};

/// Format every C/C++ source and header under the current directory.
#[derive(Parser)]
struct FormatArgs;

fn main() -> Result<()> {
    let _args: FormatArgs = common::parse_args();
    common::init_tracing();

    let sh = Shell::new()?;
    let mut formatted = 0usize;
    for path in SourceFiles::with_suffixes(".", &[".h", ".hpp", ".c", ".cpp"]) {
        let path = path?;
        cmd!(sh, "clang-format --verbose -i --style=file {path}").run()?;
        formatted += 1;
    }

    println!("formatted {formatted} file(s)");
    Ok(())
}
