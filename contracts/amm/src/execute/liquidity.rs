//! Liquidity handlers.

use cosmwasm_std::{CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128};

use super::{assert_native_funds, finish_guarded};
use crate::error::ContractError;
use crate::math::{quote_add_liquidity, quote_remove_liquidity};
use crate::state::{acquire_lock, CONFIG, LP_BALANCES, POOL};

pub fn execute_add_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount0: Uint128,
    amount1: Uint128,
) -> Result<Response, ContractError> {
    acquire_lock(deps.storage)?;

    let config = CONFIG.load(deps.storage)?;
    let mut pool = POOL.load(deps.storage)?;

    assert_native_funds(
        &info.funds,
        &[(&config.asset0, amount0), (&config.asset1, amount1)],
    )?;

    let quote = quote_add_liquidity(
        pool.reserve0,
        pool.reserve1,
        pool.total_supply,
        amount0,
        amount1,
    )?;

    let mut messages: Vec<CosmosMsg> = vec![];
    let mut refunds = [Uint128::zero(); 2];
    for (side, (supplied, used)) in [(amount0, quote.used0), (amount1, quote.used1)]
        .into_iter()
        .enumerate()
    {
        let asset = config.asset(side);
        if asset.is_native() {
            let refund = supplied - used;
            if !refund.is_zero() {
                messages.push(asset.transfer_msg(info.sender.as_str(), refund)?);
                refunds[side] = refund;
            }
        } else {
            messages.push(asset.transfer_from_msg(
                info.sender.as_str(),
                env.contract.address.as_str(),
                used,
            )?);
        }
    }

    pool.reserve0 += quote.used0;
    pool.reserve1 += quote.used1;
    pool.total_supply += quote.shares;
    pool.last_update_time = env.block.time;
    POOL.save(deps.storage, &pool)?;

    LP_BALANCES.update(deps.storage, &info.sender, |balance| -> Result<_, ContractError> {
        Ok(balance.unwrap_or_default() + quote.shares)
    })?;

    let response = finish_guarded(deps.storage, messages)?;
    Ok(response
        .add_event(
            Event::new("add_liquidity")
                .add_attribute("provider", info.sender.as_str())
                .add_attribute("amount0", quote.used0)
                .add_attribute("amount1", quote.used1)
                .add_attribute("refund0", refunds[0])
                .add_attribute("refund1", refunds[1])
                .add_attribute("shares", quote.shares),
        )
        .add_attribute("method", "add_liquidity")
        .add_attribute("shares", quote.shares))
}

pub fn execute_remove_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    shares: Uint128,
) -> Result<Response, ContractError> {
    acquire_lock(deps.storage)?;

    if shares.is_zero() {
        return Err(ContractError::invalid_amount("shares must be greater than zero"));
    }
    if !info.funds.is_empty() {
        return Err(ContractError::invalid_amount("no funds expected"));
    }

    let available = LP_BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if shares > available {
        return Err(ContractError::invalid_amount(format!(
            "insufficient shares: requested {}, available {}",
            shares, available
        )));
    }

    let config = CONFIG.load(deps.storage)?;
    let mut pool = POOL.load(deps.storage)?;
    let (amount0, amount1) =
        quote_remove_liquidity(pool.reserve0, pool.reserve1, pool.total_supply, shares)?;

    pool.reserve0 -= amount0;
    pool.reserve1 -= amount1;
    pool.total_supply -= shares;
    pool.last_update_time = env.block.time;
    POOL.save(deps.storage, &pool)?;

    let remaining = available - shares;
    if remaining.is_zero() {
        LP_BALANCES.remove(deps.storage, &info.sender);
    } else {
        LP_BALANCES.save(deps.storage, &info.sender, &remaining)?;
    }

    let mut messages: Vec<CosmosMsg> = vec![];
    if !amount0.is_zero() {
        messages.push(config.asset0.transfer_msg(info.sender.as_str(), amount0)?);
    }
    if !amount1.is_zero() {
        messages.push(config.asset1.transfer_msg(info.sender.as_str(), amount1)?);
    }

    let response = finish_guarded(deps.storage, messages)?;
    Ok(response
        .add_event(
            Event::new("remove_liquidity")
                .add_attribute("provider", info.sender.as_str())
                .add_attribute("shares", shares)
                .add_attribute("amount0", amount0)
                .add_attribute("amount1", amount1),
        )
        .add_attribute("method", "remove_liquidity"))
}
