//! Message types for the escrow contract

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::{Order, Stats};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// Router allowed to execute orders (can be set later)
    pub router: Option<String>,
    pub escrow_fee_bps: u16,
    pub protocol_fee_bps: u16,
    pub treasury_escrow: String,
    pub treasury_protocol: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Lock `amount_in` of `token_in` as a new order.
    /// Native input must be attached exactly; CW20 input is pulled from a
    /// prior allowance.
    CreateOrder {
        token_in: AssetInfo,
        token_out: AssetInfo,
        amount_in: Uint128,
        min_amount_out: Uint128,
        dst_eid: u32,
    },

    /// Maker-only refund of the net amount
    CancelOrder { order_id: u64 },

    /// Router-only release of the net amount to `recipient`
    ExecuteFromRemote {
        order_id: u64,
        recipient: String,
        extra_min_out: Uint128,
    },

    // ========================================================================
    // Admin
    // ========================================================================
    SetRouter { router: String },

    SetFees {
        escrow_fee_bps: u16,
        protocol_fee_bps: u16,
        treasury_escrow: String,
        treasury_protocol: String,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(Order)]
    Order { order_id: u64 },

    #[returns(NextOrderIdResponse)]
    NextOrderId {},

    #[returns(OrdersResponse)]
    Orders {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(Stats)]
    Stats {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub router: Option<Addr>,
    pub escrow_fee_bps: u16,
    pub protocol_fee_bps: u16,
    pub treasury_escrow: Addr,
    pub treasury_protocol: Addr,
}

#[cw_serde]
pub struct NextOrderIdResponse {
    pub next_order_id: u64,
}

#[cw_serde]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}
