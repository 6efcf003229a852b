// src/bin/subject_lookup.rs
use clap::Parser;
use subject_lookup::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(Args::parse())?;
    Ok(())
}
