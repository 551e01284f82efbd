//! Owner-only configuration handlers.
//!
//! Changes apply to orders created afterwards; stored orders keep the fee
//! split computed at their creation.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::fee_manager::{FeeConfig, FEE_CONFIG};
use crate::state::CONFIG;

pub fn execute_set_router(
    deps: DepsMut,
    info: MessageInfo,
    router: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::unauthorized("owner", info.sender));
    }

    let router = deps.api.addr_validate(&router)?;
    config.router = Some(router.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_router")
        .add_attribute("router", router))
}

pub fn execute_set_fees(
    deps: DepsMut,
    info: MessageInfo,
    escrow_fee_bps: u16,
    protocol_fee_bps: u16,
    treasury_escrow: String,
    treasury_protocol: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::unauthorized("owner", info.sender));
    }

    let fee_config = FeeConfig {
        escrow_fee_bps,
        protocol_fee_bps,
        treasury_escrow: deps.api.addr_validate(&treasury_escrow)?,
        treasury_protocol: deps.api.addr_validate(&treasury_protocol)?,
    };
    fee_config.validate()?;
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fees")
        .add_attribute("escrow_fee_bps", escrow_fee_bps.to_string())
        .add_attribute("protocol_fee_bps", protocol_fee_bps.to_string())
        .add_attribute("treasury_escrow", fee_config.treasury_escrow)
        .add_attribute("treasury_protocol", fee_config.treasury_protocol))
}
