use std::time::Duration;
use tokio::net::UdpSocket;
use wificheck::collectors::wireless::Sample;
use wificheck::reporting::{OpenError, StatsdReporter};

/// Reporter behaviour against live and absent collectors

#[tokio::test]
async fn test_report_sends_one_datagram_per_line() {
    let collector = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let reporter = StatsdReporter::open(&collector.local_addr().unwrap().to_string())
        .await
        .expect("Reporter should open");

    reporter
        .report_sample(&Sample {
            bit_rate: 144.4,
            link_quality: 0.5,
        })
        .await;

    let mut buf = [0u8; 512];
    let mut received = Vec::new();
    for _ in 0..3 {
        let (len, from) = tokio::time::timeout(Duration::from_secs(2), collector.recv_from(&mut buf))
            .await
            .expect("Datagram should arrive")
            .unwrap();
        assert_ne!(from.port(), 0, "Reporter should use an ephemeral port");
        received.push(String::from_utf8(buf[..len].to_vec()).unwrap());
    }

    assert_eq!(
        received,
        vec![
            "wificheck.run.ok:1|g\n",
            "wificheck.bit_rate:144.400|g\n",
            "wificheck.quality:0.500|g\n",
        ]
    );
}

#[tokio::test]
async fn test_report_never_fails_without_collector() {
    // Reserve a port, then release it so nothing is listening there
    let address = {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        socket.local_addr().unwrap().to_string()
    };

    let reporter = StatsdReporter::open(&address).await.unwrap();
    for _ in 0..10 {
        reporter.report_failure().await;
        reporter.gauge("quality", 1.0).await;
    }
}

#[tokio::test]
async fn test_report_to_unroutable_address_returns() {
    // TEST-NET-1 is never routed
    let reporter = StatsdReporter::open("192.0.2.1:8125").await.unwrap();
    tokio::time::timeout(Duration::from_secs(2), reporter.report("wificheck.run.ok:1|g\n"))
        .await
        .expect("Report should not block");
}

#[tokio::test]
async fn test_open_ipv6_collector() {
    let Ok(collector) = UdpSocket::bind("[::1]:0").await else {
        // IPv6 loopback unavailable in this environment
        return;
    };
    let reporter = StatsdReporter::open(&collector.local_addr().unwrap().to_string())
        .await
        .unwrap();
    assert!(reporter.remote_addr().is_ipv6());
}

#[tokio::test]
async fn test_open_failures_are_resolve_errors() {
    for address in ["", "127.0.0.1", "no-such-host.invalid:8125"] {
        match StatsdReporter::open(address).await {
            Err(OpenError::ResolveFailed { address: a, .. }) => assert_eq!(a, address),
            other => panic!("Expected resolve failure for {address:?}, got {other:?}"),
        }
    }
}
