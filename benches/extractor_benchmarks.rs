use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wificheck::collectors::wireless::extract;

const IWCONFIG_OUTPUT: &str = "\
wlan0     IEEE 802.11  ESSID:\"home\"
          Mode:Managed  Frequency:2.437 GHz  Access Point: 00:11:22:33:44:55
          Bit Rate=65 Mb/s   Tx-Power=20 dBm
          Retry short limit:7   RTS thr:off   Fragment thr:off
          Power Management:on
          Link Quality=51/70  Signal level=-59 dBm
          Rx invalid nwid:0  Rx invalid crypt:0  Rx invalid frag:0
          Tx excessive retries:0  Invalid misc:0   Missed beacon:0
";

/// Benchmark extraction of a typical iwconfig block
fn benchmark_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    group.bench_function("iwconfig_block", |b| {
        b.iter(|| {
            let sample = extract(black_box(IWCONFIG_OUTPUT)).expect("Extraction should work");
            black_box(sample);
        });
    });

    group.bench_function("no_matches", |b| {
        let text = "lo        no wireless extensions.\n".repeat(16);
        b.iter(|| {
            let sample = extract(black_box(&text)).expect("Extraction should work");
            black_box(sample);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_extraction);
criterion_main!(benches);
