use clap::Parser;
use tracing::debug;

use spejare_config::{validate_interface, SpejareConfig};
use spejare_core::EventFormatter;
use spejare_engine::{run_live, LiveOptions};
use spejare_telemetry::MetricsRecorder;

/// Wireshark-like packet sniffer
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Network interface to sniff on (backend default when omitted)
    #[arg(short, long)]
    pub interface: Option<String>,

    /// BPF filter expression, passed to the capture backend verbatim
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Number of packets to capture (0 for unlimited)
    #[arg(short, long, default_value_t = 0)]
    pub count: u64,
}

/// Runs the capture and returns the process exit code: 0 for a normal stop
/// (limit reached or interrupted), 1 after a capture failure.
pub async fn run(cli: Cli) -> i32 {
    if let Some(name) = &cli.interface {
        if validate_interface(name).is_err() {
            eprintln!("Error: invalid interface name '{name}'");
            return 1;
        }
    }

    let config = match SpejareConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    debug!(?cli, "parsed command line");

    let opts = LiveOptions {
        interface: cli.interface,
        filter: cli.filter,
        count: cli.count,
    };

    match run_live(opts, config, MetricsRecorder::new()).await {
        Ok(report) => {
            println!("{}", EventFormatter::new().summary(report.frames_processed));
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}
