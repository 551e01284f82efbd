//! XSwap Escrow Contract - Entry Points
//!
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_cancel_order, execute_create_order, execute_from_remote, execute_set_fees,
    execute_set_router,
};
use crate::fee_manager::{FeeConfig, FEE_CONFIG};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_next_order_id, query_order, query_orders, query_stats};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, NEXT_ORDER_ID, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let router = msg
        .router
        .map(|r| deps.api.addr_validate(&r))
        .transpose()?;

    let fee_config = FeeConfig {
        escrow_fee_bps: msg.escrow_fee_bps,
        protocol_fee_bps: msg.protocol_fee_bps,
        treasury_escrow: deps.api.addr_validate(&msg.treasury_escrow)?,
        treasury_protocol: deps.api.addr_validate(&msg.treasury_protocol)?,
    };
    fee_config.validate()?;

    CONFIG.save(
        deps.storage,
        &Config {
            owner: owner.clone(),
            router: router.clone(),
        },
    )?;
    FEE_CONFIG.save(deps.storage, &fee_config)?;
    NEXT_ORDER_ID.save(deps.storage, &0u64)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute(
            "router",
            router.map(|r| r.to_string()).unwrap_or_else(|| "none".to_string()),
        )
        .add_attribute("escrow_fee_bps", msg.escrow_fee_bps.to_string())
        .add_attribute("protocol_fee_bps", msg.protocol_fee_bps.to_string()))
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
        ExecuteMsg::CreateOrder {
            token_in,
            token_out,
            amount_in,
            min_amount_out,
            dst_eid,
        } => execute_create_order(
            deps,
            env,
            info,
            token_in,
            token_out,
            amount_in,
            min_amount_out,
            dst_eid,
        ),
        ExecuteMsg::CancelOrder { order_id } => execute_cancel_order(deps, info, order_id),
        ExecuteMsg::ExecuteFromRemote {
            order_id,
            recipient,
            extra_min_out,
        } => execute_from_remote(deps, info, order_id, recipient, extra_min_out),

        // Admin
        ExecuteMsg::SetRouter { router } => execute_set_router(deps, info, router),
        ExecuteMsg::SetFees {
            escrow_fee_bps,
            protocol_fee_bps,
            treasury_escrow,
            treasury_protocol,
        } => execute_set_fees(
            deps,
            info,
            escrow_fee_bps,
            protocol_fee_bps,
            treasury_escrow,
            treasury_protocol,
        ),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Order { order_id } => to_json_binary(&query_order(deps, order_id)?),
        QueryMsg::NextOrderId {} => to_json_binary(&query_next_order_id(deps)?),
        QueryMsg::Orders { start_after, limit } => {
            to_json_binary(&query_orders(deps, start_after, limit)?)
        }
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
