//! Order lifecycle handlers (create, cancel, execute from remote).

use common::AssetInfo;
use cosmwasm_std::{
    Addr, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, Storage, Uint128,
};

use crate::error::ContractError;
use crate::fee_manager::FEE_CONFIG;
use crate::state::{Order, OrderStatus, CONFIG, NEXT_ORDER_ID, ORDERS, STATS};

/// Lock funds as a new order and pay out both fee slices.
#[allow(clippy::too_many_arguments)]
pub fn execute_create_order(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_in: AssetInfo,
    token_out: AssetInfo,
    amount_in: Uint128,
    min_amount_out: Uint128,
    dst_eid: u32,
) -> Result<Response, ContractError> {
    if amount_in.is_zero() {
        return Err(ContractError::invalid_amount("amount_in must be greater than zero"));
    }

    let token_in = token_in.validate(deps.api)?;
    let token_out = token_out.validate(deps.api)?;

    let mut messages: Vec<CosmosMsg> = vec![];
    match &token_in {
        AssetInfo::Native { denom } => {
            if info.funds.len() != 1 {
                return Err(ContractError::invalid_amount(format!(
                    "Expected exactly one coin of {}, got {}",
                    denom,
                    info.funds.len()
                )));
            }
            let coin = &info.funds[0];
            if &coin.denom != denom || coin.amount != amount_in {
                return Err(ContractError::invalid_amount(format!(
                    "Attached {}{} does not match amount_in {}{}",
                    coin.amount, coin.denom, amount_in, denom
                )));
            }
        }
        AssetInfo::Cw20 { .. } => {
            if !info.funds.is_empty() {
                return Err(ContractError::invalid_amount(
                    "Native funds attached to a token order",
                ));
            }
            messages.push(token_in.transfer_from_msg(
                info.sender.as_str(),
                env.contract.address.as_str(),
                amount_in,
            )?);
        }
    }

    let fee_config = FEE_CONFIG.load(deps.storage)?;
    let split = fee_config.split(amount_in)?;

    let mut stats = STATS.load(deps.storage)?;
    if !split.escrow_fee.is_zero() {
        messages.push(token_in.transfer_msg(fee_config.treasury_escrow.as_str(), split.escrow_fee)?);
        stats.escrow_fee_transfers += 1;
    }
    if !split.protocol_fee.is_zero() {
        messages.push(
            token_in.transfer_msg(fee_config.treasury_protocol.as_str(), split.protocol_fee)?,
        );
        stats.protocol_fee_transfers += 1;
    }

    let order_id = NEXT_ORDER_ID.load(deps.storage)?;
    NEXT_ORDER_ID.save(deps.storage, &(order_id + 1))?;

    let order = Order {
        id: order_id,
        maker: info.sender,
        token_in,
        token_out,
        amount_in,
        min_amount_out,
        dst_eid,
        escrow_fee: split.escrow_fee,
        protocol_fee: split.protocol_fee,
        net_amount: split.net_amount,
        created_at: env.block.time,
        status: OrderStatus::Created,
    };
    ORDERS.save(deps.storage, order_id, &order)?;

    stats.orders_created += 1;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_event(order_event("order_created", &order))
        .add_attribute("method", "create_order")
        .add_attribute("order_id", order_id.to_string()))
}

/// Refund the net amount of a `Created` order to its maker.
pub fn execute_cancel_order(
    deps: DepsMut,
    info: MessageInfo,
    order_id: u64,
) -> Result<Response, ContractError> {
    let mut order = load_order(deps.storage, order_id)?;

    if info.sender != order.maker {
        return Err(ContractError::unauthorized("maker", info.sender));
    }
    ensure_created(&order)?;

    order.status = OrderStatus::Cancelled;
    ORDERS.save(deps.storage, order_id, &order)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.orders_cancelled += 1;
        Ok(stats)
    })?;

    let mut response = Response::new();
    if !order.net_amount.is_zero() {
        response = response.add_message(
            order
                .token_in
                .transfer_msg(order.maker.as_str(), order.net_amount)?,
        );
    }

    Ok(response
        .add_event(order_event("order_cancelled", &order))
        .add_attribute("method", "cancel_order")
        .add_attribute("order_id", order_id.to_string())
        .add_attribute("refund", order.net_amount))
}

/// Release the net amount of a `Created` order to `recipient`.
/// Only the configured router may call this.
pub fn execute_from_remote(
    deps: DepsMut,
    info: MessageInfo,
    order_id: u64,
    recipient: String,
    extra_min_out: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    match &config.router {
        Some(router) if *router == info.sender => {}
        _ => return Err(ContractError::unauthorized("router", info.sender)),
    }

    let mut order = load_order(deps.storage, order_id)?;
    ensure_created(&order)?;

    let recipient: Addr = deps.api.addr_validate(&recipient)?;

    order.status = OrderStatus::Executed;
    ORDERS.save(deps.storage, order_id, &order)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.orders_executed += 1;
        Ok(stats)
    })?;

    let mut response = Response::new();
    if !order.net_amount.is_zero() {
        response = response.add_message(
            order
                .token_in
                .transfer_msg(recipient.as_str(), order.net_amount)?,
        );
    }

    Ok(response
        .add_event(
            order_event("order_executed", &order)
                .add_attribute("recipient", recipient.as_str())
                .add_attribute("extra_min_out", extra_min_out),
        )
        .add_attribute("method", "execute_from_remote")
        .add_attribute("order_id", order_id.to_string()))
}

fn load_order(storage: &dyn Storage, order_id: u64) -> Result<Order, ContractError> {
    ORDERS
        .may_load(storage, order_id)?
        .ok_or(ContractError::NotFound { order_id })
}

fn ensure_created(order: &Order) -> Result<(), ContractError> {
    if order.status != OrderStatus::Created {
        return Err(ContractError::InvalidState {
            order_id: order.id,
            status: order.status,
        });
    }
    Ok(())
}

/// Full order snapshot for off-chain reconciliation
fn order_event(kind: &str, order: &Order) -> Event {
    Event::new(kind)
        .add_attribute("order_id", order.id.to_string())
        .add_attribute("maker", order.maker.as_str())
        .add_attribute("token_in", order.token_in.to_string())
        .add_attribute("token_out", order.token_out.to_string())
        .add_attribute("amount_in", order.amount_in)
        .add_attribute("min_amount_out", order.min_amount_out)
        .add_attribute("dst_eid", order.dst_eid.to_string())
        .add_attribute("escrow_fee", order.escrow_fee)
        .add_attribute("protocol_fee", order.protocol_fee)
        .add_attribute("net_amount", order.net_amount)
        .add_attribute("created_at", order.created_at.seconds().to_string())
        .add_attribute("status", order.status.to_string())
}
