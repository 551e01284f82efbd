//! Query handlers for the escrow contract.

use cosmwasm_std::{Deps, Order as StorageOrder, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::fee_manager::FEE_CONFIG;
use crate::msg::{ConfigResponse, NextOrderIdResponse, OrdersResponse};
use crate::state::{Order, Stats, CONFIG, NEXT_ORDER_ID, ORDERS, STATS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let fees = FEE_CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        router: config.router,
        escrow_fee_bps: fees.escrow_fee_bps,
        protocol_fee_bps: fees.protocol_fee_bps,
        treasury_escrow: fees.treasury_escrow,
        treasury_protocol: fees.treasury_protocol,
    })
}

pub fn query_order(deps: Deps, order_id: u64) -> StdResult<Order> {
    ORDERS
        .may_load(deps.storage, order_id)?
        .ok_or_else(|| StdError::not_found(format!("order {}", order_id)))
}

pub fn query_next_order_id(deps: Deps) -> StdResult<NextOrderIdResponse> {
    Ok(NextOrderIdResponse {
        next_order_id: NEXT_ORDER_ID.load(deps.storage)?,
    })
}

pub fn query_orders(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<OrdersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let orders = ORDERS
        .range(deps.storage, start, None, StorageOrder::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, order)| order))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(OrdersResponse { orders })
}

pub fn query_stats(deps: Deps) -> StdResult<Stats> {
    STATS.load(deps.storage)
}
