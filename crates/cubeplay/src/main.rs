//! Command-line Rubik's cube player.

mod cli;
mod net;

/// Title of the program, including the version.
pub const TITLE: &str = concat!("cubeplay v", env!("CARGO_PKG_VERSION"));

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    color_eyre::install()?;

    log::debug!("{TITLE} ({})", cubeplay_core::ENGINE_VERSION_STRING);
    cli::exec(args)
}
