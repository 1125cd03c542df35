/*
[INPUT]:  Operation names and monotonic checkpoints
[OUTPUT]: Bounded latency history and per-operation aggregates
[POS]:    Metrics layer - latency recording and aggregation
[UPDATE]: When recording policy or aggregate shape changes
*/

pub mod collector;

pub use collector::{Checkpoint, LatencyRecord, MetricsCollector, OperationStats};
