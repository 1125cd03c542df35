/*
[INPUT]:  Instrument names and push handlers
[OUTPUT]: Channel subscription requests and the handler registry
[POS]:    RPC layer - market data subscription contract
[UPDATE]: When adding new channel kinds or changing the registry
*/

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::rpc::client::DeribitClient;
use crate::types::{JsonRpcResponse, SubscribeRequest};

const SUBSCRIBE_METHOD: &str = "public/subscribe";

const SUBSCRIBE_LABEL: &str = "Market Data Subscription";

/// Push interval of the book channel
const BOOK_CHANNEL_INTERVAL: &str = "100ms";

/// Handler for pushed book updates.
///
/// The adapter only keeps the registry; an external pump reads frames off
/// the channel and drives registered handlers. No delivery loop runs here.
#[async_trait]
pub trait PushHandler: Send + Sync {
    async fn on_push(&self, payload: &serde_json::Value);
}

impl DeribitClient {
    /// Register a handler for an instrument's book channel, then subscribe
    ///
    /// public/subscribe with channels=["book.<instrument>.100ms"]. The
    /// handler is stored before the envelope goes out so a pump started
    /// right after this call observes a complete registry.
    pub async fn subscribe_book(
        &self,
        instrument: &str,
        handler: Arc<dyn PushHandler>,
    ) -> Result<JsonRpcResponse> {
        self.lock_handlers().insert(instrument.to_string(), handler);
        debug!(instrument, "push handler registered");

        let channel = format!("book.{instrument}.{BOOK_CHANNEL_INTERVAL}");
        let params = SubscribeRequest {
            channels: vec![channel],
        };
        self.dispatch(
            SUBSCRIBE_METHOD,
            serde_json::to_value(&params)?,
            SUBSCRIBE_LABEL,
        )
        .await
    }

    /// Handler registered for an instrument, if any
    pub fn push_handler(&self, instrument: &str) -> Option<Arc<dyn PushHandler>> {
        self.lock_handlers().get(instrument).cloned()
    }

    /// Instruments that currently have a registered handler
    pub fn subscribed_instruments(&self) -> Vec<String> {
        self.lock_handlers().keys().cloned().collect()
    }

    fn lock_handlers(
        &self,
    ) -> std::sync::MutexGuard<'_, std::collections::HashMap<String, Arc<dyn PushHandler>>> {
        self.handlers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
