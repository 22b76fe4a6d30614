// src/bin/cli.rs
use seed_convert::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    cli::run()?;
    Ok(())
}
