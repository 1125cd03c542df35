/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities and an in-process mock exchange
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for deribit-adapter tests

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

/// Spawn a one-connection WebSocket exchange that answers every inbound
/// request through `respond`. Returns the `ws://` URL to connect to.
pub async fn spawn_mock_exchange<F>(mut respond: F) -> String
where
    F: FnMut(Value) -> String + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let Ok((socket, _)) = listener.accept().await else {
            return;
        };
        let mut ws = accept_async(socket).await.unwrap();
        while let Some(Ok(message)) = ws.next().await {
            match message {
                Message::Text(text) => {
                    let request: Value = serde_json::from_str(&text).unwrap();
                    if ws.send(Message::Text(respond(request).into())).await.is_err() {
                        break;
                    }
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    format!("ws://{addr}")
}

/// Like `spawn_mock_exchange`, but replies `{"result":{}}` to everything and
/// hands each received envelope back over a channel for assertions.
#[allow(dead_code)]
pub async fn spawn_recording_exchange() -> (String, mpsc::UnboundedReceiver<Value>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let url = spawn_mock_exchange(move |request| {
        let reply = result_frame(&request, serde_json::json!({}));
        tx.send(request).unwrap();
        reply
    })
    .await;
    (url, rx)
}

/// Success frame echoing the request's id
#[allow(dead_code)]
pub fn result_frame(request: &Value, result: Value) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": request["id"],
        "result": result,
    })
    .to_string()
}

/// Failure frame echoing the request's id
#[allow(dead_code)]
pub fn error_frame(request: &Value, code: i64, message: &str) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": request["id"],
        "error": {"code": code, "message": message},
    })
    .to_string()
}
