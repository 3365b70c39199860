//! Tests for the diagnostic command probe
//!
//! These use standard unix utilities in place of `iwconfig`.

#[cfg(all(test, unix))]
mod tests {
    use crate::collectors::wireless::probe::{CommandProbe, LinkProbe, ProbeError};
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_probe_captures_stdout() {
        let probe = CommandProbe::new("echo");
        let output = probe.probe("Bit Rate=65 Mb/s").await.unwrap();
        assert_eq!(output, b"Bit Rate=65 Mb/s\n");
    }

    #[tokio::test]
    async fn test_probe_nonzero_exit() {
        let probe = CommandProbe::new("false");
        let err = probe.probe("wlan0").await.unwrap_err();
        match err {
            ProbeError::Exited { command, status, .. } => {
                assert_eq!(command, "false wlan0");
                assert!(!status.success());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_probe_missing_program() {
        let probe = CommandProbe::new("/nonexistent/wificheck-diagnostic");
        let err = probe.probe("wlan0").await.unwrap_err();
        assert!(matches!(err, ProbeError::Launch { .. }));
    }

    #[tokio::test]
    async fn test_probe_timeout_is_bounded() {
        let probe = CommandProbe::new("sleep").with_timeout(Duration::from_millis(200));
        let started = Instant::now();

        let err = probe.probe("30").await.unwrap_err();

        assert!(matches!(err, ProbeError::TimedOut { .. }));
        assert!(
            started.elapsed() < Duration::from_secs(5),
            "timed out probe took {:?}",
            started.elapsed()
        );
    }
}
