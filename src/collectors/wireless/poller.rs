//! Periodic link polling loop
//!
//! Each cycle invokes the probe, extracts a [`Sample`] and reports either the
//! gauges or a failure indicator. Failures are logged and reported, never
//! retried, and never stop the loop.

use log::{info, warn};
use std::time::Duration;
use thiserror::Error;

use crate::collectors::wireless::extractor::{self, ExtractError, Sample};
use crate::collectors::wireless::probe::{LinkProbe, ProbeError};
use crate::reporting::StatsdReporter;

/// Default delay between poll cycles
pub const DEFAULT_SLEEP: Duration = Duration::from_secs(10);

/// Reason a single poll cycle failed
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Result of one poll cycle
#[derive(Debug)]
pub enum CycleOutcome {
    Ok(Sample),
    Failed(CycleError),
}

impl CycleOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, CycleOutcome::Ok(_))
    }
}

/// Polls one wireless interface forever and reports every cycle
pub struct LinkPoller<P: LinkProbe> {
    probe: P,
    reporter: StatsdReporter,
    interface_name: String,
    sleep: Duration,
}

impl<P: LinkProbe> LinkPoller<P> {
    pub fn new(probe: P, reporter: StatsdReporter, interface_name: impl Into<String>) -> Self {
        Self {
            probe,
            reporter,
            interface_name: interface_name.into(),
            sleep: DEFAULT_SLEEP,
        }
    }

    /// Sets the delay between cycles
    pub fn with_sleep(mut self, sleep: Duration) -> Self {
        self.sleep = sleep;
        self
    }

    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    /// Probes, extracts and reports once
    pub async fn run_cycle(&self) -> CycleOutcome {
        match self.sample().await {
            Ok(sample) => {
                info!(
                    "OK bit rate: {:.3}, quality: {:.3}",
                    sample.bit_rate, sample.link_quality
                );
                self.reporter.report_sample(&sample).await;
                CycleOutcome::Ok(sample)
            }
            Err(e) => {
                warn!("FAILED {}", e);
                self.reporter.report_failure().await;
                CycleOutcome::Failed(e)
            }
        }
    }

    /// Runs cycles separated by the configured sleep. Never returns.
    pub async fn run(&self) {
        info!("Polling {} every {:?}", self.interface_name, self.sleep);

        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.sleep).await;
        }
    }

    async fn sample(&self) -> Result<Sample, CycleError> {
        let output = self.probe.probe(&self.interface_name).await?;
        Ok(extractor::extract_bytes(&output)?)
    }
}
