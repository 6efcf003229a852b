// src/bin/fast_check.rs
use clap::Parser;
use subject_lookup::cli::{self, CheckArgs};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // report-only: a failing endpoint is printed, not an error exit
    cli::run_check(CheckArgs::parse())?;
    Ok(())
}
