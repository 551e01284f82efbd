//! Query handlers for the AMM pool contract.

use common::AssetInfo;
use cosmwasm_std::{Deps, StdError, StdResult, Uint128};

use crate::math::quote_swap;
use crate::msg::{
    FeeConfigResponse, LpBalanceResponse, PoolResponse, ReservesResponse, SimulateSwapResponse,
};
use crate::state::{CONFIG, FEES, FEE_DENOMINATOR, LP_BALANCES, POOL};

pub fn query_pool(deps: Deps) -> StdResult<PoolResponse> {
    let config = CONFIG.load(deps.storage)?;
    let pool = POOL.load(deps.storage)?;
    Ok(PoolResponse {
        asset0: config.asset0,
        asset1: config.asset1,
        reserve0: pool.reserve0,
        reserve1: pool.reserve1,
        total_supply: pool.total_supply,
        last_update_time: pool.last_update_time,
    })
}

pub fn query_reserves(deps: Deps) -> StdResult<ReservesResponse> {
    let pool = POOL.load(deps.storage)?;
    Ok(ReservesResponse {
        reserve0: pool.reserve0,
        reserve1: pool.reserve1,
    })
}

pub fn query_lp_balance(deps: Deps, address: String) -> StdResult<LpBalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(LpBalanceResponse {
        balance: LP_BALANCES
            .may_load(deps.storage, &address)?
            .unwrap_or_default(),
    })
}

pub fn query_fee_config(deps: Deps) -> StdResult<FeeConfigResponse> {
    let fees = FEES.load(deps.storage)?;
    Ok(FeeConfigResponse {
        fee_denominator: FEE_DENOMINATOR,
        swap_fee_bps: fees.swap_fee_bps,
        protocol_fee_bps: fees.protocol_fee_bps,
        fee_recipient: fees.fee_recipient,
    })
}

/// Same arithmetic as `SwapExactIn`, without touching state
pub fn query_simulate_swap(
    deps: Deps,
    offer_asset: AssetInfo,
    amount_in: Uint128,
) -> StdResult<SimulateSwapResponse> {
    let config = CONFIG.load(deps.storage)?;
    let fees = FEES.load(deps.storage)?;
    let pool = POOL.load(deps.storage)?;

    let side_in = config
        .side_of(&offer_asset)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let (reserve_in, reserve_out) = if side_in == 0 {
        (pool.reserve0, pool.reserve1)
    } else {
        (pool.reserve1, pool.reserve0)
    };

    let quote = quote_swap(
        reserve_in,
        reserve_out,
        amount_in,
        fees.swap_fee_bps,
        fees.protocol_fee_bps,
    )
    .map_err(|e| StdError::generic_err(e.to_string()))?;

    Ok(SimulateSwapResponse {
        amount_out: quote.amount_out,
        fee_amount: quote.fee_amount,
        protocol_fee: quote.protocol_fee,
    })
}
