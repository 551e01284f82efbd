//! Exact-in swap handler.

use common::AssetInfo;
use cosmwasm_std::{CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128};

use super::{assert_native_funds, finish_guarded};
use crate::error::ContractError;
use crate::math::quote_swap;
use crate::state::{acquire_lock, CONFIG, FEES, POOL};

pub fn execute_swap_exact_in(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    offer_asset: AssetInfo,
    amount_in: Uint128,
    min_amount_out: Uint128,
) -> Result<Response, ContractError> {
    acquire_lock(deps.storage)?;

    let config = CONFIG.load(deps.storage)?;
    let fees = FEES.load(deps.storage)?;
    let mut pool = POOL.load(deps.storage)?;

    let side_in = config.side_of(&offer_asset)?;
    let ask_asset = config.asset(1 - side_in).clone();

    if offer_asset.is_native() {
        assert_native_funds(&info.funds, &[(&offer_asset, amount_in)])?;
    } else {
        assert_native_funds(&info.funds, &[])?;
    }

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
    )?;

    if quote.amount_out.is_zero() {
        return Err(ContractError::invalid_amount("swap output rounds to zero"));
    }
    if quote.amount_out < min_amount_out {
        return Err(ContractError::SlippageExceeded {
            min_amount_out,
            amount_out: quote.amount_out,
        });
    }

    let new_in = reserve_in + quote.credited_in;
    let new_out = reserve_out - quote.amount_out;
    if side_in == 0 {
        pool.reserve0 = new_in;
        pool.reserve1 = new_out;
    } else {
        pool.reserve1 = new_in;
        pool.reserve0 = new_out;
    }
    pool.last_update_time = env.block.time;
    POOL.save(deps.storage, &pool)?;

    let mut messages: Vec<CosmosMsg> = vec![];
    if !offer_asset.is_native() {
        messages.push(offer_asset.transfer_from_msg(
            info.sender.as_str(),
            env.contract.address.as_str(),
            amount_in,
        )?);
    }
    messages.push(ask_asset.transfer_msg(info.sender.as_str(), quote.amount_out)?);
    if !quote.protocol_fee.is_zero() {
        messages.push(offer_asset.transfer_msg(fees.fee_recipient.as_str(), quote.protocol_fee)?);
    }

    let response = finish_guarded(deps.storage, messages)?;
    Ok(response
        .add_event(
            Event::new("swap")
                .add_attribute("sender", info.sender.as_str())
                .add_attribute("token_in", offer_asset.to_string())
                .add_attribute("token_out", ask_asset.to_string())
                .add_attribute("amount_in", amount_in)
                .add_attribute("amount_out", quote.amount_out)
                .add_attribute("fee", quote.fee_amount)
                .add_attribute("protocol_fee", quote.protocol_fee),
        )
        .add_attribute("method", "swap_exact_in")
        .add_attribute("amount_out", quote.amount_out))
}
