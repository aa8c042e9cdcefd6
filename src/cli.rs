//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::marker::OPENAPI_FILE_ENV;

/// cfgmeta - configuration metadata reporter
///
/// Report setters and substitutions declared in configuration packages.
#[derive(Parser, Debug)]
#[command(
    name = "cfgmeta",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Report setters and substitutions in configuration packages",
    long_about = "cfgmeta finds every package (a directory holding a metadata file) below a \
                  directory and reports the setters and substitutions each package declares.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  cfgmeta list-setters ./pkg\n    \
                  cfgmeta list-setters ./pkg replicas\n    \
                  cfgmeta list-setters ./pkg --include-subst --markdown"
)]
pub struct Cli {
    /// Metadata file name that marks a package directory
    #[arg(long, global = true, value_name = "NAME", env = OPENAPI_FILE_ENV)]
    pub openapi_file: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List setters (and substitutions) for every package under a directory
    ListSetters(ListSettersArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the list-setters command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List setters for all packages:\n    cfgmeta list-setters ./pkg\n\n\
                  List one setter by name:\n    cfgmeta list-setters ./pkg replicas\n\n\
                  Include substitutions as a markdown table:\n    cfgmeta list-setters ./pkg --include-subst --markdown\n\n\
                  Fail when nothing matches:\n    cfgmeta list-setters ./pkg replicas --fail-on-empty")]
pub struct ListSettersArgs {
    /// Directory to search for packages
    pub dir: PathBuf,

    /// Only list setters and substitutions with exactly this name
    pub name: Option<String>,

    /// Output as github markdown
    #[arg(long)]
    pub markdown: bool,

    /// Include substitutions in the output
    #[arg(long = "include-subst")]
    pub include_subst: bool,

    /// Exit non-zero when no setters are listed
    #[arg(long, env = "CFGMETA_FAIL_ON_EMPTY")]
    pub fail_on_empty: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    cfgmeta completions --shell bash > ~/.bash_completion.d/cfgmeta\n\n\
                  Generate zsh completions:\n    cfgmeta completions --shell zsh > ~/.zfunc/_cfgmeta\n\n\
                  Generate fish completions:\n    cfgmeta completions --shell fish > ~/.config/fish/completions/cfgmeta.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(long, value_enum)]
    pub shell: clap_complete::Shell,
}
