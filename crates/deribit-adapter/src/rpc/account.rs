/*
[INPUT]:  Instrument kind filters
[OUTPUT]: Open positions for the authenticated account
[POS]:    RPC layer - private account operations
[UPDATE]: When adding new account operations or changing query parameters
*/

use crate::error::Result;
use crate::rpc::client::DeribitClient;
use crate::types::{InstrumentKind, JsonRpcResponse, PositionsRequest};

const POSITIONS_METHOD: &str = "private/get_positions";

const POSITIONS_LABEL: &str = "Position Query";

impl DeribitClient {
    /// Query open futures positions
    ///
    /// private/get_positions with kind=future
    pub async fn positions(&self) -> Result<JsonRpcResponse> {
        self.positions_by_kind(InstrumentKind::Future).await
    }

    /// Query open positions for an explicit instrument kind
    pub async fn positions_by_kind(&self, kind: InstrumentKind) -> Result<JsonRpcResponse> {
        let params = PositionsRequest { kind };
        self.dispatch(
            POSITIONS_METHOD,
            serde_json::to_value(&params)?,
            POSITIONS_LABEL,
        )
        .await
    }
}
