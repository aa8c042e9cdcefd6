//! Shell completions command

use clap::CommandFactory;
use std::io::Write;

use crate::cli::CompletionsArgs;
use crate::error::Result;

/// Generate shell completions
pub fn run(args: &CompletionsArgs) -> Result<()> {
    let mut out = std::io::stdout().lock();
    write_completions(args.shell, &mut out);
    out.flush()?;
    Ok(())
}

fn write_completions(shell: clap_complete::Shell, out: &mut dyn Write) {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "cfgmeta", out);
}
