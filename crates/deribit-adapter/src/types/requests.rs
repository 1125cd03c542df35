/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{GrantType, InstrumentKind, OrderType};

/// Protocol version carried by every envelope
pub const JSONRPC_VERSION: &str = "2.0";

/// Default number of order-book levels per side
pub const DEFAULT_BOOK_DEPTH: u32 = 10;

/// One JSON-RPC request envelope, built fresh per dispatched call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: serde_json::Value,
}

impl JsonRpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub grant_type: GrantType,
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyRequest {
    pub instrument_name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelRequest {
    pub order_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRequest {
    pub order_id: String,
    pub price: f64,
    pub amount: f64,
    pub post_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookRequest {
    pub instrument_name: String,
    pub depth: u32,
}

impl OrderBookRequest {
    /// Snapshot request at the default depth
    pub fn new(instrument: impl Into<String>) -> Self {
        Self {
            instrument_name: instrument.into(),
            depth: DEFAULT_BOOK_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionsRequest {
    pub kind: InstrumentKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub channels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_carries_protocol_version() {
        let envelope = JsonRpcRequest::new(7, "public/auth", json!({}));
        let encoded = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            encoded,
            json!({"jsonrpc": "2.0", "id": 7, "method": "public/auth", "params": {}})
        );
    }

    #[test]
    fn test_buy_request_wire_shape() {
        let params = BuyRequest {
            instrument_name: "BTC-PERPETUAL".to_string(),
            amount: 40.0,
            order_type: OrderType::Limit,
            price: 61250.5,
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "instrument_name": "BTC-PERPETUAL",
                "amount": 40.0,
                "type": "limit",
                "price": 61250.5,
            })
        );
    }

    #[test]
    fn test_edit_request_is_post_only() {
        let params = EditRequest {
            order_id: "ETH-349249".to_string(),
            price: 3120.0,
            amount: 2.0,
            post_only: true,
        };
        let encoded = serde_json::to_value(&params).unwrap();
        assert_eq!(encoded["post_only"], json!(true));
    }

    #[test]
    fn test_order_book_request_defaults_to_ten_levels() {
        let params = OrderBookRequest::new("BTC-PERPETUAL");
        assert_eq!(params.depth, 10);
    }
}
