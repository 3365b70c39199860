use anyhow::{Context, Result};
use clap::Parser;

use wificheck::cli::{Cli, Settings};
use wificheck::collectors::wireless::{CommandProbe, LinkPoller};
use wificheck::reporting::StatsdReporter;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli)?;

    let reporter = StatsdReporter::open(&settings.statsd)
        .await
        .context("Failed to open statsd reporter")?;

    let probe = CommandProbe::new(settings.command);
    let poller = LinkPoller::new(probe, reporter, settings.iface).with_sleep(settings.sleep);
    poller.run().await;

    Ok(())
}
