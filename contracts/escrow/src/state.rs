//! State definitions for the escrow contract

use std::fmt;

use common::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    /// Owner allowed to set the router and fees
    pub owner: Addr,
    /// Router allowed to execute orders; unset until configured
    pub router: Option<Addr>,
}

// ============================================================================
// Orders
// ============================================================================

#[cw_serde]
#[derive(Copy)]
pub enum OrderStatus {
    Created,
    Cancelled,
    Executed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Created => write!(f, "Created"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
            OrderStatus::Executed => write!(f, "Executed"),
        }
    }
}

#[cw_serde]
pub struct Order {
    pub id: u64,
    pub maker: Addr,
    pub token_in: AssetInfo,
    pub token_out: AssetInfo,
    /// Gross amount supplied at creation
    pub amount_in: Uint128,
    /// Stored for reconciliation; enforced at the AMM, not here
    pub min_amount_out: Uint128,
    pub dst_eid: u32,
    pub escrow_fee: Uint128,
    pub protocol_fee: Uint128,
    /// `amount_in - escrow_fee - protocol_fee`, fixed at creation
    pub net_amount: Uint128,
    pub created_at: Timestamp,
    pub status: OrderStatus,
}

#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub orders_created: u64,
    pub orders_cancelled: u64,
    pub orders_executed: u64,
    /// Number of escrow fee slices actually transferred
    pub escrow_fee_transfers: u64,
    /// Number of protocol fee slices actually transferred
    pub protocol_fee_transfers: u64,
}

// ============================================================================
// Constants
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:xswap-escrow";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");
pub const NEXT_ORDER_ID: Item<u64> = Item::new("next_order_id");
pub const ORDERS: Map<u64, Order> = Map::new("orders");
pub const STATS: Item<Stats> = Item::new("stats");
