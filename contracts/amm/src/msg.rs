//! Message types for the AMM pool contract

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub asset0: AssetInfo,
    pub asset1: AssetInfo,
    /// Defaults to 30 bps
    pub swap_fee_bps: Option<u16>,
    /// Defaults to 0
    pub protocol_fee_bps: Option<u16>,
    /// Defaults to the owner
    pub fee_recipient: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit up to `amount0` / `amount1`. Native sides must be attached in
    /// full; the unused part of a native side is refunded, the unused part of
    /// a CW20 side is never pulled.
    AddLiquidity { amount0: Uint128, amount1: Uint128 },

    /// Burn `shares` and withdraw the proportional reserves
    RemoveLiquidity { shares: Uint128 },

    /// Swap exactly `amount_in` of `offer_asset` for the other side
    SwapExactIn {
        offer_asset: AssetInfo,
        amount_in: Uint128,
        min_amount_out: Uint128,
    },

    SetFees {
        swap_fee_bps: u16,
        protocol_fee_bps: u16,
        fee_recipient: Option<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PoolResponse)]
    Pool {},

    #[returns(ReservesResponse)]
    Reserves {},

    #[returns(LpBalanceResponse)]
    LpBalance { address: String },

    #[returns(FeeConfigResponse)]
    FeeConfig {},

    #[returns(SimulateSwapResponse)]
    SimulateSwap {
        offer_asset: AssetInfo,
        amount_in: Uint128,
    },
}

#[cw_serde]
pub struct PoolResponse {
    pub asset0: AssetInfo,
    pub asset1: AssetInfo,
    pub reserve0: Uint128,
    pub reserve1: Uint128,
    pub total_supply: Uint128,
    pub last_update_time: Timestamp,
}

#[cw_serde]
pub struct ReservesResponse {
    pub reserve0: Uint128,
    pub reserve1: Uint128,
}

#[cw_serde]
pub struct LpBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct FeeConfigResponse {
    pub fee_denominator: u128,
    pub swap_fee_bps: u16,
    pub protocol_fee_bps: u16,
    pub fee_recipient: Addr,
}

#[cw_serde]
pub struct SimulateSwapResponse {
    pub amount_out: Uint128,
    pub fee_amount: Uint128,
    pub protocol_fee: Uint128,
}
