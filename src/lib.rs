//! Wireless link monitor that reports bit rate and link quality to statsd

pub mod cli;
pub mod collectors;
pub mod reporting;
