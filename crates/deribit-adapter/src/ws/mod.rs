/*
[INPUT]:  WebSocket endpoint configuration
[OUTPUT]: One secure full-duplex text channel to the exchange
[POS]:    WebSocket layer - transport beneath the RPC dispatcher
[UPDATE]: When connection handling or framing changes
*/

pub mod transport;

pub use transport::{ConnectionState, TransportChannel};
