use clap::Parser;
use inbox::{cli, services};
use std::process;

fn main() {
    let args = cli::Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .format_timestamp_secs()
        .init();

    if let Err(e) = services::run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
