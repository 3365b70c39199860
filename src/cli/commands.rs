use clap::Parser;
use std::path::PathBuf;

/// Command-line flags for the wificheck daemon
/// Every flag is optional; unset flags fall back to the environment, the config file, then defaults
#[derive(Parser, Debug, Default)]
#[command(version)] // Automatically uses version from Cargo.toml
#[command(about = "Sample wireless link metrics and report them to statsd")]
#[command(long_about = "Runs a diagnostic command (iwconfig by default) against a wireless interface on a fixed \
interval, extracts the bit rate and link quality, and reports them as statsd gauges over UDP. \
Each cycle also reports wificheck.run.ok or wificheck.run.failed.\n\n\
Examples:\n  \
wificheck                                   # Poll wlan0 every 10s, report to 127.0.0.1:8125\n  \
wificheck --iface wlp3s0 --sleep 30s        # Different interface and interval\n  \
wificheck --statsd metrics.lan:8125         # Remote collector\n  \
wificheck --config /etc/wificheck.toml      # Load settings from a file")]
pub struct Cli {
    /// Wireless network interface
    #[arg(long, help = "Wireless network interface [default: wlan0]")]
    pub iface: Option<String>,

    /// Remote statsd address; a bare `:port` targets the loopback address
    #[arg(long, help = "UDP statsd address, host:port or :port [default: 127.0.0.1:8125]")]
    pub statsd: Option<String>,

    /// Delay between checks, e.g. 10s, 500ms, 1m30s, or bare seconds
    /// Fractional values such as 1.5s are not accepted; use 1s 500ms
    #[arg(long, help = "Sleep duration between checks, e.g. 10s, 500ms, 1m30s [default: 10s]")]
    pub sleep: Option<String>,

    /// Diagnostic program invoked as `<command> <iface>`
    #[arg(long, help = "Diagnostic command to run [default: iwconfig]")]
    pub command: Option<String>,

    /// Optional settings file; format is picked from the extension
    #[arg(short, long, help = "Path to a TOML/YAML/JSON settings file")]
    pub config: Option<PathBuf>,
}
