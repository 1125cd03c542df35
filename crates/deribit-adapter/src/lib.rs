/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Deribit adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod error;
pub mod metrics;
pub mod rpc;
pub mod types;
pub mod ws;

// Re-export commonly used types from error
pub use error::{DeribitError, Result};

// Re-export the metrics subsystem
pub use metrics::{Checkpoint, LatencyRecord, MetricsCollector, OperationStats};

// Re-export commonly used types from rpc
pub use rpc::{ClientConfig, Credentials, DeribitClient, PushHandler};

// Re-export all wire types
pub use types::*;

// Re-export commonly used types from ws
pub use ws::{ConnectionState, TransportChannel};
