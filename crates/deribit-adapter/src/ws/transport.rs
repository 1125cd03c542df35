/*
[INPUT]:  Host/resource path of the exchange WebSocket endpoint
[OUTPUT]: Complete text frames exchanged over one TLS connection
[POS]:    WebSocket layer - single-channel transport
[UPDATE]: When connection handling or framing changes
*/

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, error, info};
use url::Url;

use crate::error::{DeribitError, Result};
use crate::metrics::MetricsCollector;

/// Metric label for the connect handshake
const CONNECTION_METRIC: &str = "Connection Setup";

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connection state of the channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

/// One full-duplex text-message channel to the exchange.
///
/// TLS is negotiated with peer verification against the system trust store.
/// The channel does not serialize concurrent callers; the dispatcher above
/// it guarantees at most one in-flight request/response cycle.
#[derive(Debug)]
pub struct TransportChannel {
    metrics: Arc<MetricsCollector>,
    stream: Option<WsStream>,
    state: ConnectionState,
}

impl TransportChannel {
    pub fn new(metrics: Arc<MetricsCollector>) -> Self {
        Self {
            metrics,
            stream: None,
            state: ConnectionState::Disconnected,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// Open the channel to `wss://<host><resource_path>`.
    ///
    /// On success the channel transitions Disconnected -> Connected and the
    /// handshake duration lands in the metrics under "Connection Setup". On
    /// any failure the channel stays Disconnected and nothing is retained.
    pub async fn connect(&mut self, host: &str, resource_path: &str) -> Result<()> {
        let path = resource_path.strip_prefix('/').unwrap_or(resource_path);
        let endpoint = format!("wss://{host}/{path}");
        self.connect_url(&endpoint).await
    }

    /// Open the channel to an explicit URL (mock servers use `ws://`)
    pub async fn connect_url(&mut self, endpoint: &str) -> Result<()> {
        if self.is_connected() {
            return Err(DeribitError::Connection(
                "channel is already connected".to_string(),
            ));
        }

        let endpoint = Url::parse(endpoint)
            .map_err(|e| DeribitError::Connection(format!("invalid endpoint {endpoint}: {e}")))?;

        let checkpoint = self.metrics.start();
        match connect_async(endpoint.as_str()).await {
            Ok((stream, _response)) => {
                self.stream = Some(stream);
                self.state = ConnectionState::Connected;
                self.metrics.stop(checkpoint, CONNECTION_METRIC);
                info!(endpoint = %endpoint, "connected to exchange");
                Ok(())
            }
            Err(e) => {
                error!(endpoint = %endpoint, error = %e, "connection failed");
                Err(DeribitError::Connection(e.to_string()))
            }
        }
    }

    /// Write one complete text frame
    pub async fn send(&mut self, text: &str) -> Result<()> {
        if !self.is_connected() {
            return Err(DeribitError::NotConnected);
        }
        let stream = self.stream.as_mut().ok_or(DeribitError::NotConnected)?;

        stream
            .send(Message::Text(text.into()))
            .await
            .map_err(|e| {
                error!(error = %e, "frame write failed");
                DeribitError::Transport(e.to_string())
            })?;

        debug!(bytes = text.len(), "frame transmitted");
        Ok(())
    }

    /// Block until one complete text frame arrives.
    ///
    /// Ping frames are answered transparently; a read failure or the peer
    /// ending the stream surfaces as a transport error with the state left
    /// Connected so the caller decides whether to disconnect.
    pub async fn receive(&mut self) -> Result<String> {
        if !self.is_connected() {
            return Err(DeribitError::NotConnected);
        }
        let stream = self.stream.as_mut().ok_or(DeribitError::NotConnected)?;

        loop {
            match stream.next().await {
                Some(Ok(Message::Text(text))) => {
                    debug!(bytes = text.len(), "frame received");
                    return Ok(text.to_string());
                }
                Some(Ok(Message::Binary(bytes))) => {
                    return String::from_utf8(bytes.to_vec()).map_err(|e| {
                        DeribitError::Protocol(format!("binary frame is not valid UTF-8: {e}"))
                    });
                }
                Some(Ok(Message::Ping(payload))) => {
                    stream
                        .send(Message::Pong(payload))
                        .await
                        .map_err(|e| DeribitError::Transport(e.to_string()))?;
                }
                Some(Ok(Message::Close(_))) => {
                    return Err(DeribitError::Transport(
                        "connection closed by peer".to_string(),
                    ));
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    error!(error = %e, "frame read failed");
                    return Err(DeribitError::Transport(e.to_string()));
                }
                None => {
                    return Err(DeribitError::Transport(
                        "connection closed by peer".to_string(),
                    ));
                }
            }
        }
    }

    /// Send a close frame and drop the connection; a no-op when already disconnected
    pub async fn disconnect(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            let _ = stream.close(None).await;
            info!("disconnected from exchange");
        }
        self.state = ConnectionState::Disconnected;
    }
}
