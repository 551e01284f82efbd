//! Execute handlers for the AMM pool contract.
//!
//! - `liquidity` - add / remove liquidity
//! - `swap` - exact-in swaps
//! - `admin` - fee configuration
//!
//! Swaps and liquidity changes run under the pool lock. The lock is released
//! by the reply to the call's last outgoing transfer, or immediately when
//! nothing is sent.

mod admin;
mod liquidity;
mod swap;

pub use admin::*;
pub use liquidity::*;
pub use swap::*;

use common::AssetInfo;
use cosmwasm_std::{Coin, CosmosMsg, Response, Storage, SubMsg, Uint128};

use crate::error::ContractError;
use crate::state::{release_lock, RELEASE_LOCK_REPLY_ID};

/// Check attached funds against the native amounts a call declares.
///
/// Every attached denom must belong to a declared native asset, and each
/// declared native asset must be attached in exactly its declared amount.
pub(crate) fn assert_native_funds(
    funds: &[Coin],
    expected: &[(&AssetInfo, Uint128)],
) -> Result<(), ContractError> {
    for coin in funds {
        let declared = expected.iter().any(|(asset, _)| match asset {
            AssetInfo::Native { denom } => *denom == coin.denom,
            AssetInfo::Cw20 { .. } => false,
        });
        if !declared {
            return Err(ContractError::UnsupportedAsset {
                asset: format!("native:{}", coin.denom),
            });
        }
    }

    for (asset, amount) in expected {
        if let AssetInfo::Native { denom } = asset {
            let attached = funds
                .iter()
                .filter(|c| c.denom == *denom)
                .fold(Uint128::zero(), |acc, c| acc + c.amount);
            if attached != *amount {
                return Err(ContractError::invalid_amount(format!(
                    "attached {}{} but declared {}{}",
                    attached, denom, amount, denom
                )));
            }
        }
    }
    Ok(())
}

/// Build the response of a guarded call, tying lock release to the reply of
/// the last message.
pub(crate) fn finish_guarded(
    storage: &mut dyn Storage,
    mut messages: Vec<CosmosMsg>,
) -> Result<Response, ContractError> {
    match messages.pop() {
        Some(last) => Ok(Response::new()
            .add_messages(messages)
            .add_submessage(SubMsg::reply_on_success(last, RELEASE_LOCK_REPLY_ID))),
        None => {
            release_lock(storage)?;
            Ok(Response::new())
        }
    }
}
