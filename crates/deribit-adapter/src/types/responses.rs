/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DeribitError, Result};

/// One JSON-RPC response frame as received from the exchange.
///
/// Exactly one of `result` and `error` is populated on a well-formed frame;
/// the dispatcher converts `error` into `DeribitError::Operation` and hands
/// everything else back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

/// The `error` member of a failure response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Decode the `result` member into a typed model
    pub fn result_as<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self
            .result
            .clone()
            .ok_or_else(|| DeribitError::Protocol("response has no result field".to_string()))?;
        serde_json::from_value(value).map_err(|e| {
            DeribitError::Protocol(format!("result does not match expected shape: {e}"))
        })
    }
}
