//! talegen CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, convert, and exit with
//! the status the runner reports. For programmatic use, prefer the library
//! API (`talegen::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    std::process::exit(cli::run(args));
}
