//! XSwap Router Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_lz_receive, execute_send_swap_message, execute_set_delegate, execute_set_escrow,
    execute_set_peer, set_delegate_msg,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_endpoint, query_peer, query_peers, query_quote};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.address_prefix.is_empty() {
        return Err(ContractError::Std(StdError::generic_err(
            "address_prefix cannot be empty",
        )));
    }

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        endpoint: deps.api.addr_validate(&msg.endpoint)?,
        escrow: deps.api.addr_validate(&msg.escrow)?,
        delegate: msg
            .delegate
            .map(|d| deps.api.addr_validate(&d))
            .transpose()?,
        address_prefix: msg.address_prefix,
    };
    CONFIG.save(deps.storage, &config)?;

    let mut response = Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner.as_str())
        .add_attribute("endpoint", config.endpoint.as_str())
        .add_attribute("escrow", config.escrow.as_str());
    if let Some(delegate) = &config.delegate {
        response = response
            .add_message(set_delegate_msg(&config.endpoint, delegate)?)
            .add_attribute("delegate", delegate.as_str());
    }

    Ok(response)
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SendSwapMessage {
            dst_eid,
            payload,
            options,
        } => execute_send_swap_message(deps, info, dst_eid, payload, options),
        ExecuteMsg::LzReceive { origin, message } => {
            execute_lz_receive(deps, info, origin, message)
        }

        // Admin
        ExecuteMsg::SetPeer { eid, peer } => execute_set_peer(deps, info, eid, peer),
        ExecuteMsg::SetDelegate { delegate } => execute_set_delegate(deps, info, delegate),
        ExecuteMsg::SetEscrow { escrow } => execute_set_escrow(deps, info, escrow),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Quote {
            dst_eid,
            payload,
            options,
        } => to_json_binary(&query_quote(deps, env, dst_eid, payload, options)?),
        QueryMsg::Peer { eid } => to_json_binary(&query_peer(deps, eid)?),
        QueryMsg::Peers { start_after, limit } => {
            to_json_binary(&query_peers(deps, start_after, limit)?)
        }
        QueryMsg::Endpoint {} => to_json_binary(&query_endpoint(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{OrderExecutionPayload, Origin};
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{from_json, CosmosMsg, Uint128, WasmMsg};

    use crate::msg::PeerResponse;

    const ENDPOINT: &str = "terra1endpoint";
    const OWNER: &str = "terra1owner";

    fn setup() -> cosmwasm_std::OwnedDeps<
        cosmwasm_std::MemoryStorage,
        cosmwasm_std::testing::MockApi,
        cosmwasm_std::testing::MockQuerier,
    > {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1deployer", &[]),
            InstantiateMsg {
                owner: OWNER.to_string(),
                endpoint: ENDPOINT.to_string(),
                escrow: "terra1escrow".to_string(),
                delegate: None,
                address_prefix: "terra".to_string(),
            },
        )
        .unwrap();
        deps
    }

    fn set_peer(deps: DepsMut, eid: u32, peer: Vec<u8>) -> Result<Response, ContractError> {
        execute(
            deps,
            mock_env(),
            mock_info(OWNER, &[]),
            ExecuteMsg::SetPeer {
                eid,
                peer: Binary::from(peer),
            },
        )
    }

    fn receive(sender: &str, src_eid: u32, origin_sender: Vec<u8>) -> (MessageInfo, ExecuteMsg) {
        let payload = OrderExecutionPayload::new(7, [0x42; 20], Uint128::new(10));
        (
            mock_info(sender, &[]),
            ExecuteMsg::LzReceive {
                origin: Origin {
                    src_eid,
                    sender: Binary::from(origin_sender),
                    nonce: 1,
                },
                message: payload.to_binary(),
            },
        )
    }

    #[test]
    fn test_set_peer_validation() {
        let mut deps = setup();

        let err = set_peer(deps.as_mut(), 2, vec![1u8; 31]).unwrap_err();
        assert!(matches!(err, ContractError::InvalidPeer { .. }));

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1stranger", &[]),
            ExecuteMsg::SetPeer {
                eid: 2,
                peer: Binary::from(vec![1u8; 32]),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::Unauthorized {
                sender: "terra1stranger".to_string()
            }
        );

        set_peer(deps.as_mut(), 2, vec![1u8; 32]).unwrap();
        let peer: PeerResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Peer { eid: 2 }).unwrap())
                .unwrap();
        assert_eq!(peer.peer.as_slice(), &[1u8; 32]);

        // zero peer removes the registration
        set_peer(deps.as_mut(), 2, vec![0u8; 32]).unwrap();
        let peer: PeerResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Peer { eid: 2 }).unwrap())
                .unwrap();
        assert_eq!(peer.peer.as_slice(), &[0u8; 32]);
    }

    #[test]
    fn test_lz_receive_checks_order() {
        let mut deps = setup();
        set_peer(deps.as_mut(), 2, vec![9u8; 32]).unwrap();

        let (info, msg) = receive("terra1notendpoint", 2, vec![9u8; 32]);
        let err = execute(deps.as_mut(), mock_env(), info, msg).unwrap_err();
        assert!(matches!(err, ContractError::OnlyEndpoint { .. }));

        let (info, msg) = receive(ENDPOINT, 3, vec![9u8; 32]);
        let err = execute(deps.as_mut(), mock_env(), info, msg).unwrap_err();
        assert_eq!(err, ContractError::PeerNotSet { eid: 3 });

        let (info, msg) = receive(ENDPOINT, 2, vec![8u8; 32]);
        let err = execute(deps.as_mut(), mock_env(), info, msg).unwrap_err();
        assert!(matches!(err, ContractError::UntrustedPeer { eid: 2, .. }));

        let (info, msg) = receive(ENDPOINT, 2, vec![9u8; 32]);
        let res = execute(deps.as_mut(), mock_env(), info, msg).unwrap();
        assert_eq!(res.messages.len(), 1);
        match &res.messages[0].msg {
            CosmosMsg::Wasm(WasmMsg::Execute { contract_addr, .. }) => {
                assert_eq!(contract_addr, "terra1escrow")
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_lz_receive_rejects_malformed_payload() {
        let mut deps = setup();
        set_peer(deps.as_mut(), 2, vec![9u8; 32]).unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(ENDPOINT, &[]),
            ExecuteMsg::LzReceive {
                origin: Origin {
                    src_eid: 2,
                    sender: Binary::from(vec![9u8; 32]),
                    nonce: 1,
                },
                message: Binary::from(vec![0u8; 64]),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidPayload { .. }));
    }

    #[test]
    fn test_send_requires_peer() {
        let mut deps = setup();
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1user", &[]),
            ExecuteMsg::SendSwapMessage {
                dst_eid: 5,
                payload: Binary::from(vec![0u8; 96]),
                options: Binary::from(common::build_executor_options(200_000, None)),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::PeerNotSet { eid: 5 });
    }
}
