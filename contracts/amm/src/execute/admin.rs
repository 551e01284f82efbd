//! Owner-only fee configuration.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{FeeParams, CONFIG, FEES, MAX_PROTOCOL_FEE_BPS, MAX_SWAP_FEE_BPS};

pub fn validate_fees(swap_fee_bps: u16, protocol_fee_bps: u16) -> Result<(), ContractError> {
    if swap_fee_bps > MAX_SWAP_FEE_BPS {
        return Err(ContractError::InvalidFeeBps {
            bps: swap_fee_bps,
            max_bps: MAX_SWAP_FEE_BPS,
        });
    }
    if protocol_fee_bps > MAX_PROTOCOL_FEE_BPS {
        return Err(ContractError::InvalidFeeBps {
            bps: protocol_fee_bps,
            max_bps: MAX_PROTOCOL_FEE_BPS,
        });
    }
    Ok(())
}

pub fn execute_set_fees(
    deps: DepsMut,
    info: MessageInfo,
    swap_fee_bps: u16,
    protocol_fee_bps: u16,
    fee_recipient: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    validate_fees(swap_fee_bps, protocol_fee_bps)?;

    let current = FEES.load(deps.storage)?;
    let fee_recipient = match fee_recipient {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => current.fee_recipient,
    };

    FEES.save(
        deps.storage,
        &FeeParams {
            swap_fee_bps,
            protocol_fee_bps,
            fee_recipient: fee_recipient.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "set_fees")
        .add_attribute("swap_fee_bps", swap_fee_bps.to_string())
        .add_attribute("protocol_fee_bps", protocol_fee_bps.to_string())
        .add_attribute("fee_recipient", fee_recipient))
}
