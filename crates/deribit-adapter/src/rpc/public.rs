/*
[INPUT]:  Credentials and market data query parameters
[OUTPUT]: Session authentication and order-book snapshots
[POS]:    RPC layer - public namespace operations
[UPDATE]: When adding new public operations or changing parameters
*/

use crate::error::Result;
use crate::rpc::client::{Credentials, DeribitClient};
use crate::types::{AuthRequest, DEFAULT_BOOK_DEPTH, GrantType, JsonRpcResponse, OrderBookRequest};

const AUTH_METHOD: &str = "public/auth";
const ORDER_BOOK_METHOD: &str = "public/get_order_book";

const AUTH_LABEL: &str = "Authentication";
const ORDER_BOOK_LABEL: &str = "Order Book Query";

impl DeribitClient {
    /// Authenticate the session
    ///
    /// public/auth with grant_type=client_credentials
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<JsonRpcResponse> {
        let params = AuthRequest {
            grant_type: GrantType::ClientCredentials,
            client_id: credentials.client_id.clone(),
            client_secret: credentials.client_secret.clone(),
        };
        self.dispatch(AUTH_METHOD, serde_json::to_value(&params)?, AUTH_LABEL)
            .await
    }

    /// Fetch an order-book snapshot at the default depth (10 levels per side)
    ///
    /// public/get_order_book
    pub async fn order_book(&self, instrument: &str) -> Result<JsonRpcResponse> {
        self.order_book_with_depth(instrument, DEFAULT_BOOK_DEPTH)
            .await
    }

    /// Fetch an order-book snapshot at an explicit depth
    pub async fn order_book_with_depth(
        &self,
        instrument: &str,
        depth: u32,
    ) -> Result<JsonRpcResponse> {
        let params = OrderBookRequest {
            instrument_name: instrument.to_string(),
            depth,
        };
        self.dispatch(
            ORDER_BOOK_METHOD,
            serde_json::to_value(&params)?,
            ORDER_BOOK_LABEL,
        )
        .await
    }
}
