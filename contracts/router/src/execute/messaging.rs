//! Outgoing and incoming message handlers.

use common::address::{bytes32_to_hex, from_raw_address};
use common::endpoint::EndpointExecuteMsg;
use common::{OrderExecutionPayload, Origin};
use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, Event, MessageInfo, Response, WasmMsg,
};
use escrow::msg::ExecuteMsg as EscrowExecuteMsg;

use crate::error::ContractError;
use crate::state::{CONFIG, PEERS};

/// Forward `payload` to the endpoint, addressed to the peer on `dst_eid`.
/// The payload is not interpreted here.
///
/// Open to any caller. The peer router accepts whatever this router sends,
/// so anyone paying the fee can execute any `Created` order on the
/// destination escrow; order safety rests on the destination order's own
/// terms, not on who triggered the send.
pub fn execute_send_swap_message(
    deps: DepsMut,
    info: MessageInfo,
    dst_eid: u32,
    payload: Binary,
    options: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let peer = PEERS
        .may_load(deps.storage, dst_eid)?
        .ok_or(ContractError::PeerNotSet { eid: dst_eid })?;

    let send = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.endpoint.to_string(),
        msg: to_json_binary(&EndpointExecuteMsg::Send {
            dst_eid,
            receiver: Binary::from(peer.to_vec()),
            message: payload.clone(),
            options,
            refund_address: info.sender.to_string(),
        })?,
        funds: info.funds.clone(),
    });

    let fee_paid = info
        .funds
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",");

    Ok(Response::new()
        .add_message(send)
        .add_event(
            Event::new("send_swap_message")
                .add_attribute("dst_eid", dst_eid.to_string())
                .add_attribute("peer", bytes32_to_hex(&peer))
                .add_attribute("sender", info.sender.as_str())
                .add_attribute("payload", hex::encode(payload.as_slice()))
                .add_attribute("fee", fee_paid),
        )
        .add_attribute("method", "send_swap_message"))
}

/// Deliver a message from a peer router to the local escrow.
pub fn execute_lz_receive(
    deps: DepsMut,
    info: MessageInfo,
    origin: Origin,
    message: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.endpoint {
        return Err(ContractError::OnlyEndpoint {
            sender: info.sender.to_string(),
        });
    }

    let expected = PEERS
        .may_load(deps.storage, origin.src_eid)?
        .ok_or(ContractError::PeerNotSet {
            eid: origin.src_eid,
        })?;
    let got = origin.sender.as_slice();
    if got != expected.as_slice() {
        return Err(ContractError::UntrustedPeer {
            eid: origin.src_eid,
            expected: bytes32_to_hex(&expected),
            got: format!("0x{}", hex::encode(got)),
        });
    }

    let payload = OrderExecutionPayload::decode(message.as_slice()).map_err(|e| {
        ContractError::InvalidPayload {
            reason: e.to_string(),
        }
    })?;
    let recipient = from_raw_address(&payload.recipient, &config.address_prefix).map_err(|e| {
        ContractError::InvalidPayload {
            reason: e.to_string(),
        }
    })?;

    // plain message: an escrow failure fails the delivery
    let execute = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.escrow.to_string(),
        msg: to_json_binary(&EscrowExecuteMsg::ExecuteFromRemote {
            order_id: payload.order_id,
            recipient: recipient.clone(),
            extra_min_out: payload.extra,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(execute)
        .add_event(
            Event::new("lz_receive")
                .add_attribute("src_eid", origin.src_eid.to_string())
                .add_attribute("nonce", origin.nonce.to_string())
                .add_attribute("sender", bytes32_to_hex(&expected))
                .add_attribute("order_id", payload.order_id.to_string())
                .add_attribute("recipient", recipient)
                .add_attribute("extra_min_out", payload.extra),
        )
        .add_attribute("method", "lz_receive"))
}
