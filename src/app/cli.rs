use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Flatten source files from several repositories into one directory"
)]
pub struct Cli {
    /// Directory the files are copied into; wiped at the start of every run
    #[arg(long, short = 'o', default_value = "project")]
    pub output: PathBuf,

    /// Directory containing the repositories (defaults to the current directory)
    #[arg(long, short = 'C')]
    pub workdir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress logs and the run summary, ignoring RUST_LOG
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}
