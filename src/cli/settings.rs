//! Runtime settings
//!
//! Settings are layered, lowest precedence first: built-in defaults, an optional
//! settings file, `WIFICHECK_*` environment variables, then command-line flags.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use log::debug;
use serde::Deserialize;
use std::time::Duration;

use crate::cli::Cli;
use crate::collectors::wireless::probe::DEFAULT_COMMAND;
use crate::reporting::statsd::DEFAULT_STATSD_ADDRESS;

pub const ENV_PREFIX: &str = "WIFICHECK";

const DEFAULT_IFACE: &str = "wlan0";
const DEFAULT_SLEEP: &str = "10s";

#[derive(Debug, Deserialize)]
struct RawSettings {
    iface: String,
    statsd: String,
    sleep: String,
    command: String,
}

/// Fully resolved daemon settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Interface passed to the diagnostic command
    pub iface: String,
    /// Remote statsd address
    pub statsd: String,
    /// Delay between poll cycles
    pub sleep: Duration,
    /// Diagnostic program
    pub command: String,
}

impl Settings {
    /// Loads settings using the process environment
    pub fn load(cli: &Cli) -> Result<Self> {
        Self::load_with_env(cli, Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads settings with an explicit environment source
    pub fn load_with_env(cli: &Cli, env: Environment) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("iface", DEFAULT_IFACE)?
            .set_default("statsd", DEFAULT_STATSD_ADDRESS)?
            .set_default("sleep", DEFAULT_SLEEP)?
            .set_default("command", DEFAULT_COMMAND)?;

        if let Some(path) = &cli.config {
            debug!("Loading settings from {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        let raw: RawSettings = builder
            .add_source(env)
            .set_override_option("iface", cli.iface.clone())?
            .set_override_option("statsd", cli.statsd.clone())?
            .set_override_option("sleep", cli.sleep.clone())?
            .set_override_option("command", cli.command.clone())?
            .build()
            .context("Failed to load settings")?
            .try_deserialize()
            .context("Invalid settings")?;

        let sleep = parse_duration(&raw.sleep)
            .with_context(|| format!("Invalid sleep duration {:?}", raw.sleep))?;

        if raw.iface.trim().is_empty() {
            return Err(anyhow::anyhow!("Interface name must not be empty"));
        }

        Ok(Self {
            iface: raw.iface,
            statsd: raw.statsd,
            sleep,
            command: raw.command,
        })
    }
}

/// Parses a humantime duration (`10s`, `500ms`, `1m30s`, `250us`) or a bare number of seconds
pub fn parse_duration(duration_str: &str) -> Result<Duration> {
    let duration_str = duration_str.trim();

    // Assume seconds if no unit
    if !duration_str.is_empty() && duration_str.bytes().all(|b| b.is_ascii_digit()) {
        let seconds: u64 = duration_str.parse().context("Invalid duration format")?;
        return Ok(Duration::from_secs(seconds));
    }

    humantime::parse_duration(duration_str).context("Invalid duration format")
}
