//! Metric delivery to the statsd collector

pub mod statsd;

pub use statsd::{OpenError, StatsdReporter};
