//! State definitions for the AMM pool contract

use common::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

// ============================================================================
// Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub asset0: AssetInfo,
    pub asset1: AssetInfo,
}

#[cw_serde]
pub struct FeeParams {
    /// Swap fee taken from the input (30 = 0.3%)
    pub swap_fee_bps: u16,
    /// Share of the swap fee paid to `fee_recipient` (5000 = half)
    pub protocol_fee_bps: u16,
    pub fee_recipient: Addr,
}

// ============================================================================
// Pool
// ============================================================================

#[cw_serde]
pub struct PoolState {
    pub reserve0: Uint128,
    pub reserve1: Uint128,
    /// Outstanding LP shares
    pub total_supply: Uint128,
    pub last_update_time: Timestamp,
}

impl Config {
    /// Index (0 or 1) of `asset` in the pair
    pub fn side_of(&self, asset: &AssetInfo) -> Result<usize, ContractError> {
        if *asset == self.asset0 {
            Ok(0)
        } else if *asset == self.asset1 {
            Ok(1)
        } else {
            Err(ContractError::UnsupportedAsset {
                asset: asset.to_string(),
            })
        }
    }

    pub fn asset(&self, side: usize) -> &AssetInfo {
        if side == 0 {
            &self.asset0
        } else {
            &self.asset1
        }
    }
}

// ============================================================================
// Constants
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:xswap-amm";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const FEE_DENOMINATOR: u128 = 10_000;
pub const DEFAULT_SWAP_FEE_BPS: u16 = 30;
pub const MAX_SWAP_FEE_BPS: u16 = 1_000;
pub const MAX_PROTOCOL_FEE_BPS: u16 = 5_000;

/// Reply id attached to the last outgoing transfer of a guarded call
pub const RELEASE_LOCK_REPLY_ID: u64 = 1;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");
pub const FEES: Item<FeeParams> = Item::new("fees");
pub const POOL: Item<PoolState> = Item::new("pool");
pub const LP_BALANCES: Map<&Addr, Uint128> = Map::new("lp_balances");

/// Set while a swap or liquidity change has transfers in flight
pub const LOCK: Item<bool> = Item::new("lock");

pub fn acquire_lock(storage: &mut dyn Storage) -> Result<(), ContractError> {
    if LOCK.may_load(storage)?.unwrap_or(false) {
        return Err(ContractError::Reentrancy);
    }
    LOCK.save(storage, &true)?;
    Ok(())
}

pub fn release_lock(storage: &mut dyn Storage) -> Result<(), ContractError> {
    LOCK.save(storage, &false)?;
    Ok(())
}
