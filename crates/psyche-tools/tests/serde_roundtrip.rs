#![cfg(feature = "serde")]

use psyche_tools::{DecisionTrace, TraceLog};

#[test]
fn trace_log_roundtrips_via_serde() {
    let mut log = TraceLog::default();
    log.push(
        DecisionTrace::new(3, 7, "nap_or_play", "generic")
            .with_utilities(vec![0.25, 0.5])
            .with_chosen(vec![1]),
    );

    let json = serde_json::to_string(&log).expect("serialize trace log");
    let back: TraceLog = serde_json::from_str(&json).expect("deserialize trace log");

    assert_eq!(log, back);
}
