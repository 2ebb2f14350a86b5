// src/bin/cli.rs
use clap::Parser;
use cric_dash::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(log::LogTarget::File);

    cli::run(cli::Cli::parse())?;
    Ok(())
}
