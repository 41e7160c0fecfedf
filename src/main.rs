//! paircalc CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! batch, and exit with appropriate status. For programmatic use, prefer
//! the library API (`paircalc::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();

    if let Err(e) = cli::run(args) {
        // One human-readable line on stdout, then a non-zero exit.
        println!("Error: {e}");
        std::process::exit(1);
    }
}
