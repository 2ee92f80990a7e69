use std::{path::PathBuf, process};

use anyhow::Result;
use jot_harness::{Harness, workdir};
use jot_samples::common::{self, CorpusArgs};

fn main() -> Result<()> {
    let args: CorpusArgs = common::parse_args();
    common::init_tracing();

    // Run from the repository root, where build/ and samples/ live.
    let mut root = PathBuf::from("samples");
    if let Some(subdir) = &args.subdir {
        root.push(subdir);
    }
    tracing::info!("compiling samples under {}", root.display());

    let summary = Harness::new(workdir::platform_executable("./build/jot"), "compile")
        .root(root)
        .run()?;

    process::exit(common::report("compiled", &summary, args.deny_failures));
}
