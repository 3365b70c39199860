//! Wireless link collection
//!
//! ## Module Organization
//!
//! - `extractor`: parses diagnostic output into a [`Sample`]
//! - `probe`: runs the diagnostic command behind the [`LinkProbe`] trait
//! - `poller`: the poll-report-sleep loop

pub mod extractor;
pub mod poller;
pub mod probe;

pub use extractor::{ExtractError, NumeralError, Sample, extract, extract_bytes};
pub use poller::{CycleError, CycleOutcome, LinkPoller};
pub use probe::{CommandProbe, LinkProbe, ProbeError};

#[cfg(test)]
pub mod tests;
