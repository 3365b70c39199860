//! Fire-and-forget statsd gauge reporting over UDP
//!
//! The reporter owns a single unconnected UDP socket bound to an ephemeral local
//! port. Every metric line goes out as its own datagram. Send failures are
//! discarded so that reporting can never stall or abort the poll loop.

use log::{debug, info};
use std::borrow::Cow;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use thiserror::Error;
use tokio::net::{UdpSocket, lookup_host};

use crate::collectors::wireless::Sample;

/// Default collector address
pub const DEFAULT_STATSD_ADDRESS: &str = "127.0.0.1:8125";

/// Prefix prepended to every metric name
pub const METRIC_PREFIX: &str = "wificheck";

/// Errors raised while opening the reporter endpoint
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Couldn't resolve {address:?}, {source}")]
    ResolveFailed {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("Couldn't listen for {address}, {source}")]
    BindFailed {
        address: SocketAddr,
        #[source]
        source: io::Error,
    },
}

/// Renders a gauge line with three decimals, e.g. `wificheck.quality:0.729|g\n`
pub fn gauge_line(name: &str, value: f64) -> String {
    format!("{METRIC_PREFIX}.{name}:{value:.3}|g\n")
}

/// Renders an indicator gauge with the fixed value 1, e.g. `wificheck.run.ok:1|g\n`
pub fn flag_line(name: &str) -> String {
    format!("{METRIC_PREFIX}.{name}:1|g\n")
}

/// Fills in the loopback host for a bare `:port` address
fn with_default_host(address: &str) -> Cow<'_, str> {
    match address.strip_prefix(':') {
        Some(port) => Cow::Owned(format!("{}:{port}", Ipv4Addr::LOCALHOST)),
        None => Cow::Borrowed(address),
    }
}

/// UDP endpoint for statsd gauges
#[derive(Debug)]
pub struct StatsdReporter {
    remote: SocketAddr,
    socket: UdpSocket,
}

impl StatsdReporter {
    /// Resolves `remote_address` and binds an ephemeral local socket of the same family
    pub async fn open(remote_address: &str) -> Result<Self, OpenError> {
        let remote = lookup_host(with_default_host(remote_address).as_ref())
            .await
            .and_then(|mut addrs| {
                addrs.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, "no addresses found")
                })
            })
            .map_err(|source| OpenError::ResolveFailed {
                address: remote_address.to_string(),
                source,
            })?;

        let bind: SocketAddr = if remote.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind)
            .await
            .map_err(|source| OpenError::BindFailed {
                address: remote,
                source,
            })?;

        match socket.local_addr() {
            Ok(local) => debug!("Statsd socket bound to {}", local),
            Err(e) => debug!("Statsd socket bound, local address unavailable: {}", e),
        }
        info!("Reporting metrics to {}", remote);

        Ok(Self { remote, socket })
    }

    /// Address every datagram is sent to
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote
    }

    /// Sends one line as a single datagram, ignoring any transmission error
    pub async fn report(&self, line: &str) {
        let _ = self.socket.send_to(line.as_bytes(), self.remote).await;
    }

    /// Sends `wificheck.<name>:1|g`
    pub async fn flag(&self, name: &str) {
        self.report(&flag_line(name)).await;
    }

    /// Sends `wificheck.<name>:<value>|g`
    pub async fn gauge(&self, name: &str, value: f64) {
        self.report(&gauge_line(name, value)).await;
    }

    /// Reports a failed poll cycle
    pub async fn report_failure(&self) {
        self.flag("run.failed").await;
    }

    /// Reports a successful poll cycle together with its gauges
    pub async fn report_sample(&self, sample: &Sample) {
        self.flag("run.ok").await;
        self.gauge("bit_rate", sample.bit_rate).await;
        self.gauge("quality", sample.link_quality).await;
    }
}
