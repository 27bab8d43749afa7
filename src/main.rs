mod app;

use app::cli::Cli;
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.quiet, cli.verbose);

    if let Err(err) = app::run(cli) {
        log::debug!("Run aborted: {:?}", err);
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn setup_logging(quiet: bool, verbose: u8) {
    let log_level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level).format_timestamp(None);
    // --quiet wins over RUST_LOG.
    if !quiet {
        builder.parse_default_env();
    }
    builder.init();
}
