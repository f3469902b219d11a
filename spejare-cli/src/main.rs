//! ## spejare-cli
//! Command-line entrypoint for the Spejare packet sniffer: live capture on
//! a network interface with per-frame classification lines on stdout.

use clap::Parser;

use spejare_telemetry::EventLogger;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() {
    EventLogger::init();
    let args = Cli::parse();
    std::process::exit(cli::run(args).await);
}
