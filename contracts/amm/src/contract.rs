//! XSwap AMM Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_liquidity, execute_remove_liquidity, execute_set_fees, execute_swap_exact_in,
    validate_fees,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_fee_config, query_lp_balance, query_pool, query_reserves, query_simulate_swap,
};
use crate::state::{
    release_lock, Config, FeeParams, PoolState, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    DEFAULT_SWAP_FEE_BPS, FEES, LOCK, POOL, RELEASE_LOCK_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let asset0 = msg.asset0.validate(deps.api)?;
    let asset1 = msg.asset1.validate(deps.api)?;
    if asset0 == asset1 {
        return Err(ContractError::Std(StdError::generic_err(
            "Pool assets must differ",
        )));
    }

    let swap_fee_bps = msg.swap_fee_bps.unwrap_or(DEFAULT_SWAP_FEE_BPS);
    let protocol_fee_bps = msg.protocol_fee_bps.unwrap_or(0);
    validate_fees(swap_fee_bps, protocol_fee_bps)?;
    let fee_recipient = match msg.fee_recipient {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => owner.clone(),
    };

    CONFIG.save(
        deps.storage,
        &Config {
            owner: owner.clone(),
            asset0: asset0.clone(),
            asset1: asset1.clone(),
        },
    )?;
    FEES.save(
        deps.storage,
        &FeeParams {
            swap_fee_bps,
            protocol_fee_bps,
            fee_recipient,
        },
    )?;
    POOL.save(
        deps.storage,
        &PoolState {
            reserve0: Uint128::zero(),
            reserve1: Uint128::zero(),
            total_supply: Uint128::zero(),
            last_update_time: env.block.time,
        },
    )?;
    LOCK.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("asset0", asset0.to_string())
        .add_attribute("asset1", asset1.to_string())
        .add_attribute("swap_fee_bps", swap_fee_bps.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddLiquidity { amount0, amount1 } => {
            execute_add_liquidity(deps, env, info, amount0, amount1)
        }
        ExecuteMsg::RemoveLiquidity { shares } => execute_remove_liquidity(deps, env, info, shares),
        ExecuteMsg::SwapExactIn {
            offer_asset,
            amount_in,
            min_amount_out,
        } => execute_swap_exact_in(deps, env, info, offer_asset, amount_in, min_amount_out),
        ExecuteMsg::SetFees {
            swap_fee_bps,
            protocol_fee_bps,
            fee_recipient,
        } => execute_set_fees(deps, info, swap_fee_bps, protocol_fee_bps, fee_recipient),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        RELEASE_LOCK_REPLY_ID => {
            release_lock(deps.storage)?;
            Ok(Response::new().add_attribute("method", "release_lock"))
        }
        id => Err(ContractError::Std(StdError::generic_err(format!(
            "Unknown reply id: {}",
            id
        )))),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Pool {} => to_json_binary(&query_pool(deps)?),
        QueryMsg::Reserves {} => to_json_binary(&query_reserves(deps)?),
        QueryMsg::LpBalance { address } => to_json_binary(&query_lp_balance(deps, address)?),
        QueryMsg::FeeConfig {} => to_json_binary(&query_fee_config(deps)?),
        QueryMsg::SimulateSwap {
            offer_asset,
            amount_in,
        } => to_json_binary(&query_simulate_swap(deps, offer_asset, amount_in)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if LOCK.may_load(deps.storage)?.is_none() {
        LOCK.save(deps.storage, &false)?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
