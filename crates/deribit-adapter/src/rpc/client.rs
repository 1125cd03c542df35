/*
[INPUT]:  Endpoint configuration, credentials, injected metrics collector
[OUTPUT]: Dispatched JSON-RPC envelopes with single-in-flight guarantee
[POS]:    RPC layer - core client implementation
[UPDATE]: When dispatch flow or connection options change
*/

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{DeribitError, Result};
use crate::metrics::MetricsCollector;
use crate::rpc::subscriptions::PushHandler;
use crate::types::{JsonRpcRequest, JsonRpcResponse};
use crate::ws::TransportChannel;

/// Deribit testnet endpoint
const DEFAULT_HOST: &str = "test.deribit.com";
const DEFAULT_RESOURCE_PATH: &str = "/ws/api/v2";

/// WebSocket endpoint configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub resource_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
        }
    }
}

/// API credentials for public/auth
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Load credentials from `DERIBIT_CLIENT_ID` / `DERIBIT_CLIENT_SECRET`
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("DERIBIT_CLIENT_ID")
            .map_err(|_| DeribitError::Config("DERIBIT_CLIENT_ID is not set".to_string()))?;
        let client_secret = std::env::var("DERIBIT_CLIENT_SECRET")
            .map_err(|_| DeribitError::Config("DERIBIT_CLIENT_SECRET is not set".to_string()))?;
        Ok(Self::new(client_id, client_secret))
    }
}

/// Main client for the Deribit JSON-RPC API.
///
/// Owns the transport channel behind an async mutex that is held across each
/// complete send/receive cycle, so a shared `Arc<DeribitClient>` serializes
/// concurrent callers instead of interleaving frames: at most one request is
/// ever in flight. Request ids are allocated atomically, strictly increasing
/// from 1, and never matched against inbound frames: single-flight makes
/// correlation unnecessary.
pub struct DeribitClient {
    config: ClientConfig,
    transport: Mutex<TransportChannel>,
    metrics: Arc<MetricsCollector>,
    request_id: AtomicU64,
    pub(crate) handlers: StdMutex<HashMap<String, Arc<dyn PushHandler>>>,
}

impl DeribitClient {
    /// Create a client against the default (testnet) endpoint
    pub fn new(metrics: Arc<MetricsCollector>) -> Self {
        Self::with_config(ClientConfig::default(), metrics)
    }

    /// Create a client with an explicit endpoint configuration
    pub fn with_config(config: ClientConfig, metrics: Arc<MetricsCollector>) -> Self {
        Self {
            config,
            transport: Mutex::new(TransportChannel::new(metrics.clone())),
            metrics,
            request_id: AtomicU64::new(1),
            handlers: StdMutex::new(HashMap::new()),
        }
    }

    /// The injected metrics collector
    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    /// Open the channel to the configured endpoint
    pub async fn connect(&self) -> Result<()> {
        self.transport
            .lock()
            .await
            .connect(&self.config.host, &self.config.resource_path)
            .await
    }

    /// Open the channel to an explicit URL (mock servers use `ws://`)
    pub async fn connect_url(&self, endpoint: &str) -> Result<()> {
        self.transport.lock().await.connect_url(endpoint).await
    }

    /// Close the channel; a no-op when already disconnected
    pub async fn disconnect(&self) {
        self.transport.lock().await.disconnect().await;
    }

    pub async fn is_connected(&self) -> bool {
        self.transport.lock().await.is_connected()
    }

    fn next_request_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Drive one complete request/response cycle.
    ///
    /// The transport lock is held from send through receive; this is what
    /// enforces the channel's single-in-flight contract. The round trip is
    /// bracketed by the metrics collector under `label`. An `error` member
    /// in the reply becomes `DeribitError::Operation` with the verbatim
    /// exchange message; transport-level failures propagate unmodified.
    pub(crate) async fn dispatch(
        &self,
        method: &str,
        params: serde_json::Value,
        label: &str,
    ) -> Result<JsonRpcResponse> {
        let id = self.next_request_id();
        let envelope = JsonRpcRequest::new(id, method, params);
        let frame = serde_json::to_string(&envelope)?;

        let mut transport = self.transport.lock().await;
        let checkpoint = self.metrics.start_labeled(label);
        transport.send(&frame).await?;
        let raw = transport.receive().await?;
        drop(transport);
        let elapsed_ms = self.metrics.stop(checkpoint, label);
        debug!(method, id, elapsed_ms, "round trip complete");

        let response: JsonRpcResponse = serde_json::from_str(&raw)
            .map_err(|e| DeribitError::Protocol(format!("unparseable response frame: {e}")))?;

        if let Some(error) = &response.error {
            warn!(method, id, code = error.code, message = %error.message, "request rejected");
            return Err(DeribitError::Operation {
                code: error.code,
                message: error.message.clone(),
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_testnet() {
        let config = ClientConfig::default();
        assert_eq!(config.host, "test.deribit.com");
        assert_eq!(config.resource_path, "/ws/api/v2");
    }

    #[test]
    fn test_request_ids_start_at_one_and_increment() {
        let client = DeribitClient::new(Arc::new(MetricsCollector::new()));
        assert_eq!(client.next_request_id(), 1);
        assert_eq!(client.next_request_id(), 2);
        assert_eq!(client.next_request_id(), 3);
    }

    #[test]
    fn test_credentials_from_env_reports_missing_vars() {
        unsafe {
            std::env::remove_var("DERIBIT_CLIENT_ID");
            std::env::remove_var("DERIBIT_CLIENT_SECRET");
        }
        let err = Credentials::from_env().unwrap_err();
        assert!(matches!(err, DeribitError::Config(_)));
    }
}
