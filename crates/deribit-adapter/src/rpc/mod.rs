/*
[INPUT]:  Domain operations and client configuration
[OUTPUT]: JSON-RPC round trips and typed results
[POS]:    RPC layer - request dispatch over the WebSocket transport
[UPDATE]: When adding new operations or changing dispatch behavior
*/

pub mod account;
pub mod client;
pub mod public;
pub mod subscriptions;
pub mod trade;

pub use client::{ClientConfig, Credentials, DeribitClient};
pub use subscriptions::PushHandler;
