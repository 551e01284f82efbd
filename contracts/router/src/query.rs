//! Query handlers for the router contract.

use common::endpoint::EndpointQueryMsg;
use common::MessagingFee;
use cosmwasm_std::{Binary, Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{ConfigResponse, EndpointResponse, PeerResponse, PeersResponse};
use crate::state::{CONFIG, PEERS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

/// Ask the endpoint what delivering `payload` to `dst_eid` costs.
/// Without a registered peer the receiver is quoted as all zeros.
pub fn query_quote(
    deps: Deps,
    env: Env,
    dst_eid: u32,
    payload: Binary,
    options: Binary,
) -> StdResult<MessagingFee> {
    let config = CONFIG.load(deps.storage)?;
    let receiver = PEERS
        .may_load(deps.storage, dst_eid)?
        .unwrap_or([0u8; 32]);

    deps.querier.query_wasm_smart(
        config.endpoint,
        &EndpointQueryMsg::Quote {
            dst_eid,
            sender: env.contract.address.to_string(),
            receiver: Binary::from(receiver.to_vec()),
            message: payload,
            options,
            pay_in_lz_token: false,
        },
    )
}

pub fn query_peer(deps: Deps, eid: u32) -> StdResult<PeerResponse> {
    let peer = PEERS.may_load(deps.storage, eid)?.unwrap_or([0u8; 32]);
    Ok(PeerResponse {
        eid,
        peer: Binary::from(peer.to_vec()),
    })
}

pub fn query_peers(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<PeersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let peers = PEERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (eid, peer) = item?;
            Ok(PeerResponse {
                eid,
                peer: Binary::from(peer.to_vec()),
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PeersResponse { peers })
}

pub fn query_endpoint(deps: Deps) -> StdResult<EndpointResponse> {
    Ok(EndpointResponse {
        endpoint: CONFIG.load(deps.storage)?.endpoint,
    })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        endpoint: config.endpoint,
        escrow: config.escrow,
        delegate: config.delegate,
        address_prefix: config.address_prefix,
    })
}
