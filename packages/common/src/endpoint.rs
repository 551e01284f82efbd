//! Transport endpoint interface
//!
//! The messages a router sends to, and the query it makes of, the
//! cross-chain endpoint contract. The endpoint is trusted to deliver each
//! message once and to authenticate its source; it calls the receiving
//! router with an [`Origin`] and the raw message bytes.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

/// Delivery cost quoted by the endpoint
#[cw_serde]
#[derive(Default)]
pub struct MessagingFee {
    pub native_fee: Uint128,
    pub lz_token_fee: Uint128,
}

/// Authenticated source of a delivered message
#[cw_serde]
pub struct Origin {
    pub src_eid: u32,
    /// Sending router as bytes32
    pub sender: Binary,
    pub nonce: u64,
}

#[cw_serde]
pub enum EndpointExecuteMsg {
    /// Send `message` to `receiver` on `dst_eid`; attached funds pay the fee.
    Send {
        dst_eid: u32,
        receiver: Binary,
        message: Binary,
        options: Binary,
        refund_address: String,
    },
    /// Set the address allowed to configure the calling app on the endpoint.
    SetDelegate { delegate: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum EndpointQueryMsg {
    #[returns(MessagingFee)]
    Quote {
        dst_eid: u32,
        sender: String,
        receiver: Binary,
        message: Binary,
        options: Binary,
        pay_in_lz_token: bool,
    },
}
