//! Message types for the router contract

use common::{MessagingFee, Origin};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub endpoint: String,
    pub escrow: String,
    /// Forwarded to the endpoint when set
    pub delegate: Option<String>,
    /// Bech32 prefix of this chain (e.g. "terra")
    pub address_prefix: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Send `payload` to the peer on `dst_eid`; attached funds pay the fee.
    /// Permissionless: the peer trusts this router, not the caller.
    SendSwapMessage {
        dst_eid: u32,
        payload: Binary,
        options: Binary,
    },

    /// Delivery entry point, callable by the endpoint only
    LzReceive { origin: Origin, message: Binary },

    // ========================================================================
    // Admin
    // ========================================================================
    /// Register the trusted router for `eid` (32 bytes); all zeros removes it
    SetPeer { eid: u32, peer: Binary },

    SetDelegate { delegate: String },

    SetEscrow { escrow: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Delivery fee for sending `payload` to `dst_eid`
    #[returns(MessagingFee)]
    Quote {
        dst_eid: u32,
        payload: Binary,
        options: Binary,
    },

    #[returns(PeerResponse)]
    Peer { eid: u32 },

    #[returns(PeersResponse)]
    Peers {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    #[returns(EndpointResponse)]
    Endpoint {},

    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct PeerResponse {
    pub eid: u32,
    /// All zeros when no peer is registered
    pub peer: Binary,
}

#[cw_serde]
pub struct PeersResponse {
    pub peers: Vec<PeerResponse>,
}

#[cw_serde]
pub struct EndpointResponse {
    pub endpoint: Addr,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub endpoint: Addr,
    pub escrow: Addr,
    pub delegate: Option<Addr>,
    pub address_prefix: String,
}
