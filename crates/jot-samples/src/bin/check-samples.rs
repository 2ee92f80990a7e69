use std::{env, path::PathBuf, process};

use anyhow::{Context, Result};
use jot_harness::{Harness, workdir};
use jot_samples::common::{self, CorpusArgs};

fn main() -> Result<()> {
    let args: CorpusArgs = common::parse_args();
    common::init_tracing();

    // The jot executable lives in bin/; run from there.
    let cwd = workdir::resolve(env::current_dir()?, "bin");
    env::set_current_dir(&cwd).with_context(|| format!("failed to enter {}", cwd.display()))?;

    let mut root = PathBuf::from("../samples");
    if let Some(subdir) = &args.subdir {
        root.push(subdir);
    }
    tracing::info!("checking samples under {}", root.display());

    let summary = Harness::new(workdir::platform_executable("./jot"), "check")
        .root(root)
        .run()?;

    process::exit(common::report("checked", &summary, args.deny_failures));
}
