/*!
 * Command-line interface for srcdump
 */

use std::io;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use srcdump::config::{Args, Config};

fn main() -> io::Result<()> {
    // Arguments are accepted and ignored
    let _args = Args::parse();

    // Warnings and errors only, so a normal run stays silent
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: Failed to install log subscriber: {}", e);
    }

    // Report on the directory holding this executable
    let config = Config::from_executable()?;

    srcdump::run(&config)?;

    Ok(())
}
