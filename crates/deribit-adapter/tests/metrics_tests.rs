/*
[INPUT]:  Recorded durations and concurrent writer scenarios
[OUTPUT]: Test results for the metrics collector invariants
[POS]:    Integration tests - metrics
[UPDATE]: When recording or aggregation policy changes
*/

use std::sync::Arc;
use std::thread;

use deribit_adapter::MetricsCollector;
use rstest::rstest;

#[rstest]
#[case(&[10.0, 20.0, 30.0], 10.0, 30.0, 60.0, 20.0)]
#[case(&[5.0], 5.0, 5.0, 5.0, 5.0)]
#[case(&[2.5, 2.5, 2.5, 2.5], 2.5, 2.5, 10.0, 2.5)]
#[case(&[100.0, 1.0, 50.0], 1.0, 100.0, 151.0, 151.0 / 3.0)]
fn test_aggregate_invariants(
    #[case] durations: &[f64],
    #[case] min: f64,
    #[case] max: f64,
    #[case] total: f64,
    #[case] average: f64,
) {
    let metrics = MetricsCollector::new();
    for duration in durations {
        metrics.record("Order Creation", *duration);
    }

    let stats = metrics.stats("Order Creation").unwrap();
    assert_eq!(stats.count, durations.len() as u64);
    assert_eq!(stats.min_ms, min);
    assert_eq!(stats.max_ms, max);
    assert_eq!(stats.total_ms, total);
    assert_eq!(metrics.average("Order Creation"), average);
}

#[test]
fn test_unrecorded_operation_averages_zero() {
    let metrics = MetricsCollector::new();
    assert_eq!(metrics.average("Order Creation"), 0.0);
    assert!(metrics.snapshot().is_empty());
}

#[test]
fn test_snapshot_covers_every_operation_seen() {
    let metrics = MetricsCollector::new();
    metrics.record("Order Creation", 10.0);
    metrics.record("Order Creation", 30.0);
    metrics.record("Position Query", 7.0);

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot["Order Creation"], 20.0);
    assert_eq!(snapshot["Position Query"], 7.0);
}

#[test]
fn test_reset_drops_everything_at_once() {
    let metrics = MetricsCollector::new();
    metrics.record("Order Creation", 10.0);
    metrics.record("Position Query", 7.0);

    metrics.reset();

    assert!(metrics.snapshot().is_empty());
    assert_eq!(metrics.history_len(), 0);
    assert_eq!(metrics.average("Order Creation"), 0.0);
    assert_eq!(metrics.average("Position Query"), 0.0);
}

#[test]
fn test_history_evicts_oldest_past_capacity() {
    let metrics = MetricsCollector::new();
    for i in 0..=1000u32 {
        metrics.record("Order Book Query", f64::from(i));
    }

    // 1001 inserts: the very first sample is gone, the rest keep their order
    assert_eq!(metrics.history_len(), 1000);
    let history = metrics.history();
    assert_eq!(history.first().unwrap().duration_ms, 1.0);
    assert_eq!(history.last().unwrap().duration_ms, 1000.0);
    for window in history.windows(2) {
        assert_eq!(window[1].duration_ms, window[0].duration_ms + 1.0);
    }

    // eviction only bounds the history; aggregates keep counting
    assert_eq!(metrics.stats("Order Book Query").unwrap().count, 1001);
}

#[test]
fn test_concurrent_recording_keeps_invariants() {
    let metrics = Arc::new(MetricsCollector::new());
    let threads: Vec<_> = (0..8)
        .map(|t| {
            let metrics = metrics.clone();
            thread::spawn(move || {
                for i in 0..250u32 {
                    metrics.record("Order Creation", f64::from(t * 250 + i + 1));
                }
            })
        })
        .collect();
    for handle in threads {
        handle.join().unwrap();
    }

    let stats = metrics.stats("Order Creation").unwrap();
    assert_eq!(stats.count, 2000);
    assert_eq!(stats.min_ms, 1.0);
    assert_eq!(stats.max_ms, 2000.0);
    assert_eq!(stats.total_ms, (1..=2000u32).map(f64::from).sum::<f64>());
    assert_eq!(metrics.history_len(), 1000);
}

#[test]
fn test_stop_measures_wall_time() {
    let metrics = MetricsCollector::new();
    let checkpoint = metrics.start_labeled("Order Creation");
    thread::sleep(std::time::Duration::from_millis(5));
    let elapsed = metrics.stop(checkpoint, "Order Creation");

    assert!(elapsed >= 5.0);
    let stats = metrics.stats("Order Creation").unwrap();
    assert_eq!(stats.count, 1);
    assert!(stats.min_ms >= 5.0);
    assert_eq!(stats.min_ms, stats.max_ms);
}
