/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - typed decode targets for response payloads
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{Direction, InstrumentKind, OrderState, OrderType};

/// Result payload of public/auth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResult {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
}

/// One side of the book is a list of [price, amount] levels
pub type BookLevel = [f64; 2];

/// Result payload of public/get_order_book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub instrument_name: String,
    #[serde(default)]
    pub timestamp: i64,
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
    #[serde(default)]
    pub best_bid_price: f64,
    #[serde(default)]
    pub best_ask_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark_price: Option<f64>,
}

impl OrderBook {
    /// Best-bid/best-ask spread, when both sides are quoted
    pub fn spread(&self) -> Option<f64> {
        if self.best_bid_price > 0.0 && self.best_ask_price > 0.0 {
            Some(self.best_ask_price - self.best_bid_price)
        } else {
            None
        }
    }
}

/// Order as echoed back by private/buy, private/edit and private/cancel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub instrument_name: String,
    pub direction: Direction,
    #[serde(default)]
    pub price: f64,
    pub amount: f64,
    #[serde(default)]
    pub filled_amount: f64,
    pub order_state: OrderState,
    pub order_type: OrderType,
    #[serde(default)]
    pub post_only: bool,
}

/// Fill reported alongside an order confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: String,
    pub price: f64,
    pub amount: f64,
    pub direction: Direction,
    #[serde(default)]
    pub fee: f64,
}

/// Result payload of private/buy and private/edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order: Order,
    #[serde(default)]
    pub trades: Vec<Trade>,
}

/// One entry of the private/get_positions result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub instrument_name: String,
    pub kind: InstrumentKind,
    pub direction: Direction,
    pub size: f64,
    #[serde(default)]
    pub average_price: f64,
    #[serde(default)]
    pub mark_price: f64,
    #[serde(default)]
    pub floating_profit_loss: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leverage: Option<f64>,
}
