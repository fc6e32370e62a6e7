//! This crate contains the source code for the binary for the game labyrintuine.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::process::ExitCode;

use color_eyre::{eyre::Result, install};
use labyrintuine::Cli;

fn main() -> Result<ExitCode> {
    install()?;

    let cli = match Cli::from_args() {
        Ok(cli) => cli,
        Err(status) => return Ok(status.into()),
    };

    Ok(labyrintuine::run(&cli)?.into())
}
