//! tilecut CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run over the built-in
//! terrain sheets, and exit with an error status only when nothing can be
//! written. For programmatic use, prefer the library API (`tilecut::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
