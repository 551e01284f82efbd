//! Owner-only configuration handlers.

use common::address::{bytes32_from_binary, bytes32_to_hex};
use common::endpoint::EndpointExecuteMsg;
use cosmwasm_std::{to_json_binary, Addr, Binary, DepsMut, MessageInfo, Response, WasmMsg};

use crate::error::ContractError;
use crate::state::{Config, CONFIG, PEERS};

fn ensure_owner(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {
            sender: info.sender.to_string(),
        });
    }
    Ok(())
}

/// Register the trusted router for `eid`. An all-zero peer removes it.
pub fn execute_set_peer(
    deps: DepsMut,
    info: MessageInfo,
    eid: u32,
    peer: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    let peer = bytes32_from_binary(&peer).map_err(|e| ContractError::InvalidPeer {
        reason: e.to_string(),
    })?;

    if peer == [0u8; 32] {
        PEERS.remove(deps.storage, eid);
    } else {
        PEERS.save(deps.storage, eid, &peer)?;
    }

    Ok(Response::new()
        .add_attribute("method", "set_peer")
        .add_attribute("eid", eid.to_string())
        .add_attribute("peer", bytes32_to_hex(&peer)))
}

/// Store the delegate and register it with the endpoint.
pub fn execute_set_delegate(
    deps: DepsMut,
    info: MessageInfo,
    delegate: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    let delegate = deps.api.addr_validate(&delegate)?;
    config.delegate = Some(delegate.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_message(set_delegate_msg(&config.endpoint, &delegate)?)
        .add_attribute("method", "set_delegate")
        .add_attribute("delegate", delegate))
}

pub fn execute_set_escrow(
    deps: DepsMut,
    info: MessageInfo,
    escrow: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info)?;

    config.escrow = deps.api.addr_validate(&escrow)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_escrow")
        .add_attribute("escrow", config.escrow))
}

pub fn set_delegate_msg(endpoint: &Addr, delegate: &Addr) -> Result<WasmMsg, ContractError> {
    Ok(WasmMsg::Execute {
        contract_addr: endpoint.to_string(),
        msg: to_json_binary(&EndpointExecuteMsg::SetDelegate {
            delegate: delegate.to_string(),
        })?,
        funds: vec![],
    })
}
