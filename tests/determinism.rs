use std::collections::HashSet;

use blake3::hash;
use mallocstat::{analyze_lines, render_report};

const LOG: &[&str] = &[
    "MALLOC CALL: block of size 0x10",
    "MALLOC CALL: block of size 0x80",
    "DL FREE CALL: 0xff00",
    "MALLOC CALL: block of size 0x10",
    "DL REALLOC CALL: 0xff40",
    "arena trimmed",
];

#[test]
fn repeated_scans_produce_identical_reports() {
    let mut fingerprints = HashSet::new();
    for _ in 0..5 {
        let stats = analyze_lines(LOG).expect("scan succeeds");
        let report = render_report(&stats).expect("rendering succeeds");
        fingerprints.insert(hash(report.as_bytes()));
    }

    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}

#[test]
fn line_order_does_not_change_counters_or_histogram() {
    let forward = analyze_lines(LOG).expect("scan succeeds");
    let reversed = analyze_lines(LOG.iter().rev()).expect("scan succeeds");

    assert_eq!(forward, reversed, "all updates are commutative increments");
}
