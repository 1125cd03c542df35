/*
[INPUT]:  Order parameters (instrument, amount, price, order id)
[OUTPUT]: Order placement/cancellation/modification confirmations
[POS]:    RPC layer - private trading operations
[UPDATE]: When adding new trading operations or changing order flow
*/

use crate::error::Result;
use crate::rpc::client::DeribitClient;
use crate::types::{BuyRequest, CancelRequest, EditRequest, JsonRpcResponse, OrderType};

const BUY_METHOD: &str = "private/buy";
const CANCEL_METHOD: &str = "private/cancel";
const EDIT_METHOD: &str = "private/edit";

const PLACE_LABEL: &str = "Order Creation";
const CANCEL_LABEL: &str = "Order Cancellation";
const MODIFY_LABEL: &str = "Order Modification";

impl DeribitClient {
    /// Place a limit buy order
    ///
    /// private/buy with type=limit
    pub async fn place_order(
        &self,
        instrument: &str,
        amount: f64,
        price: f64,
    ) -> Result<JsonRpcResponse> {
        let params = BuyRequest {
            instrument_name: instrument.to_string(),
            amount,
            order_type: OrderType::Limit,
            price,
        };
        self.dispatch(BUY_METHOD, serde_json::to_value(&params)?, PLACE_LABEL)
            .await
    }

    /// Cancel an open order
    ///
    /// private/cancel
    pub async fn cancel_order(&self, order_id: &str) -> Result<JsonRpcResponse> {
        let params = CancelRequest {
            order_id: order_id.to_string(),
        };
        self.dispatch(CANCEL_METHOD, serde_json::to_value(&params)?, CANCEL_LABEL)
            .await
    }

    /// Move an open order to a new price and amount
    ///
    /// private/edit, always post-only
    pub async fn modify_order(
        &self,
        order_id: &str,
        price: f64,
        amount: f64,
    ) -> Result<JsonRpcResponse> {
        let params = EditRequest {
            order_id: order_id.to_string(),
            price,
            amount,
            post_only: true,
        };
        self.dispatch(EDIT_METHOD, serde_json::to_value(&params)?, MODIFY_LABEL)
            .await
    }
}
