//! In-process stand-in for the transport endpoint.
//!
//! Each instance plays the endpoint of one chain. `Send` records a packet
//! with the caller as its bytes32 sender; `Deliver` is how a test plays the
//! executor on the destination chain, calling `LzReceive` on the receiver.
//! Addresses are mapped to bytes32 by left-padding their UTF-8 bytes.

#![allow(dead_code)]

use common::address::left_pad_bytes32;
use common::{MessagingFee, Origin};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError,
    StdResult, Uint128, WasmMsg,
};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use cw_storage_plus::{Item, Map};

pub const FEE_DENOM: &str = "uluna";

#[cw_serde]
pub struct MockInstantiateMsg {
    pub eid: u32,
    pub supported_eids: Vec<u32>,
    pub base_fee: Uint128,
    pub fee_per_byte: Uint128,
}

#[cw_serde]
pub enum MockExecuteMsg {
    Send {
        dst_eid: u32,
        receiver: Binary,
        message: Binary,
        options: Binary,
        refund_address: String,
    },
    SetDelegate {
        delegate: String,
    },
    Deliver {
        packet: Packet,
    },
}

#[cw_serde]
pub enum MockQueryMsg {
    Quote {
        dst_eid: u32,
        sender: String,
        receiver: Binary,
        message: Binary,
        options: Binary,
        pay_in_lz_token: bool,
    },
    Packet {
        nonce: u64,
    },
    Delegate {
        app: String,
    },
}

#[cw_serde]
pub struct Packet {
    pub src_eid: u32,
    pub sender: Binary,
    pub dst_eid: u32,
    pub receiver: Binary,
    pub message: Binary,
    pub options: Binary,
    pub nonce: u64,
}

#[cw_serde]
struct MockConfig {
    eid: u32,
    supported_eids: Vec<u32>,
    base_fee: Uint128,
    fee_per_byte: Uint128,
}

const CONFIG: Item<MockConfig> = Item::new("config");
const NONCE: Item<u64> = Item::new("nonce");
const PACKETS: Map<u64, Packet> = Map::new("packets");
const DELEGATES: Map<&Addr, Addr> = Map::new("delegates");

fn quote(config: &MockConfig, dst_eid: u32, message: &Binary) -> StdResult<MessagingFee> {
    if !config.supported_eids.contains(&dst_eid) {
        return Err(StdError::generic_err(format!(
            "Unsupported destination eid {}",
            dst_eid
        )));
    }
    Ok(MessagingFee {
        native_fee: config.base_fee + config.fee_per_byte * Uint128::from(message.len() as u128),
        lz_token_fee: Uint128::zero(),
    })
}

fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: MockInstantiateMsg,
) -> StdResult<Response> {
    CONFIG.save(
        deps.storage,
        &MockConfig {
            eid: msg.eid,
            supported_eids: msg.supported_eids,
            base_fee: msg.base_fee,
            fee_per_byte: msg.fee_per_byte,
        },
    )?;
    NONCE.save(deps.storage, &0)?;
    Ok(Response::new())
}

fn execute(deps: DepsMut, _env: Env, info: MessageInfo, msg: MockExecuteMsg) -> StdResult<Response> {
    match msg {
        MockExecuteMsg::Send {
            dst_eid,
            receiver,
            message,
            options,
            refund_address: _,
        } => {
            let config = CONFIG.load(deps.storage)?;
            let fee = quote(&config, dst_eid, &message)?;
            let paid = info
                .funds
                .iter()
                .find(|c| c.denom == FEE_DENOM)
                .map(|c| c.amount)
                .unwrap_or_default();
            if paid < fee.native_fee {
                return Err(StdError::generic_err(format!(
                    "Insufficient fee: required {}, paid {}",
                    fee.native_fee, paid
                )));
            }

            let nonce = NONCE.load(deps.storage)? + 1;
            NONCE.save(deps.storage, &nonce)?;
            PACKETS.save(
                deps.storage,
                nonce,
                &Packet {
                    src_eid: config.eid,
                    sender: Binary::from(left_pad_bytes32(info.sender.as_bytes())?.to_vec()),
                    dst_eid,
                    receiver,
                    message,
                    options,
                    nonce,
                },
            )?;
            Ok(Response::new().add_attribute("nonce", nonce.to_string()))
        }
        MockExecuteMsg::SetDelegate { delegate } => {
            let delegate = deps.api.addr_validate(&delegate)?;
            DELEGATES.save(deps.storage, &info.sender, &delegate)?;
            Ok(Response::new())
        }
        MockExecuteMsg::Deliver { packet } => {
            let receiver = address_of(&packet.receiver)?;
            Ok(Response::new().add_message(WasmMsg::Execute {
                contract_addr: receiver,
                msg: to_json_binary(&router::msg::ExecuteMsg::LzReceive {
                    origin: Origin {
                        src_eid: packet.src_eid,
                        sender: packet.sender,
                        nonce: packet.nonce,
                    },
                    message: packet.message,
                })?,
                funds: vec![],
            }))
        }
    }
}

fn query(deps: Deps, _env: Env, msg: MockQueryMsg) -> StdResult<Binary> {
    match msg {
        MockQueryMsg::Quote {
            dst_eid, message, ..
        } => to_json_binary(&quote(&CONFIG.load(deps.storage)?, dst_eid, &message)?),
        MockQueryMsg::Packet { nonce } => to_json_binary(&PACKETS.load(deps.storage, nonce)?),
        MockQueryMsg::Delegate { app } => {
            to_json_binary(&DELEGATES.may_load(deps.storage, &Addr::unchecked(app))?)
        }
    }
}

fn address_of(bytes32: &Binary) -> StdResult<String> {
    let trimmed: Vec<u8> = bytes32
        .as_slice()
        .iter()
        .skip_while(|b| **b == 0)
        .copied()
        .collect();
    String::from_utf8(trimmed).map_err(|e| StdError::generic_err(e.to_string()))
}

/// bytes32 identity the mock endpoint assigns to `addr`
pub fn bytes32_of(addr: &Addr) -> Binary {
    let mut out = [0u8; 32];
    let bytes = addr.as_bytes();
    out[32 - bytes.len()..].copy_from_slice(bytes);
    Binary::from(out.to_vec())
}

pub fn contract_endpoint() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}

pub fn contract_router() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        router::contract::execute,
        router::contract::instantiate,
        router::contract::query,
    ))
}

pub fn contract_escrow() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        escrow::contract::execute,
        escrow::contract::instantiate,
        escrow::contract::query,
    ))
}

pub fn packet(app: &App, endpoint: &Addr, nonce: u64) -> Packet {
    app.wrap()
        .query_wasm_smart(endpoint, &MockQueryMsg::Packet { nonce })
        .unwrap()
}

/// Play the executor: hand `packet` to its receiver on the endpoint's chain.
/// Errors carry the root cause message.
pub fn deliver(app: &mut App, endpoint: &Addr, packet: Packet) -> Result<AppResponse, String> {
    app.execute_contract(
        Addr::unchecked("terra1executor"),
        endpoint.clone(),
        &MockExecuteMsg::Deliver { packet },
        &[],
    )
    .map_err(|e| e.root_cause().to_string())
}
