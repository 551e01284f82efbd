//! State definitions for the router contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Transport endpoint; the only caller allowed to deliver messages
    pub endpoint: Addr,
    /// Escrow whose orders incoming messages execute
    pub escrow: Addr,
    pub delegate: Option<Addr>,
    /// Bech32 prefix used to render payload recipients
    pub address_prefix: String,
}

pub const CONTRACT_NAME: &str = "crates.io:xswap-router";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Remote eid -> trusted router on that chain, as bytes32
pub const PEERS: Map<u32, [u8; 32]> = Map::new("peers");
