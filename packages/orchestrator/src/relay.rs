//! Direct delivery with hop fallback

use std::collections::HashMap;
use std::sync::Arc;

use common::address::to_raw_address;
use common::fee::fee_from_bps;
use common::{build_executor_options, MessagingFee, OrderExecutionPayload};
use cosmwasm_std::{Binary, Uint128};
use eyre::{eyre, Result as EyreResult};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::OrchestratorConfig;
use crate::retry::{with_retry, RetryPolicy};
use crate::transport::{
    classify, classify_submission, ChainClient, OrderRequest, SendReceipt, TransportError,
};

/// A swap to execute on `dst_eid`, triggered from `src_eid`
#[derive(Debug, Clone, PartialEq)]
pub struct SwapIntent {
    pub src_eid: u32,
    pub dst_eid: u32,
    pub order: OrderRequest,
    /// Raw address that receives the order proceeds on `dst_eid`
    pub recipient: [u8; 20],
    pub extra: Uint128,
}

/// One completed send: an order on `dst_eid` and the message executing it
#[derive(Debug, Clone, PartialEq)]
pub struct LegReceipt {
    pub src_eid: u32,
    pub dst_eid: u32,
    pub order_id: u64,
    pub fee: MessagingFee,
    pub send: SendReceipt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Direct,
    ViaHop { hop_eid: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub route: Route,
    pub legs: Vec<LegReceipt>,
}

#[derive(Error, Debug, PartialEq)]
pub enum RelayError {
    #[error("Unknown chain eid {0}")]
    UnknownChain(u32),

    #[error("No route from {src_eid} to {dst_eid} and no hop configured: {source}")]
    NoFallback {
        src_eid: u32,
        dst_eid: u32,
        source: TransportError,
    },

    /// Direct delivery failed. `order_id` is set when the destination
    /// order was opened before the failure.
    #[error("Delivery {src_eid} -> {dst_eid} failed{}: {source}", open_order(.order_id))]
    LegFailed {
        src_eid: u32,
        dst_eid: u32,
        order_id: Option<u64>,
        source: TransportError,
    },

    /// `order_id` is the hop-side order, when it was opened
    #[error("First leg {src_eid} -> {hop_eid} failed{}: {source}", open_order(.order_id))]
    FirstLegFailed {
        src_eid: u32,
        hop_eid: u32,
        order_id: Option<u64>,
        source: TransportError,
    },

    /// `order_id` is the destination order of the second leg, when it was opened
    #[error(
        "Second leg stranded: order {} on eid {} needs manual reconciliation{}: {source}",
        .leg1.order_id,
        .leg1.dst_eid,
        open_order(.order_id)
    )]
    SecondLegStranded {
        leg1: LegReceipt,
        order_id: Option<u64>,
        source: TransportError,
    },
}

fn open_order(order_id: &Option<u64>) -> String {
    match order_id {
        Some(id) => format!(" with order {} left open", id),
        None => String::new(),
    }
}

/// A leg that stopped part way
struct LegFailure {
    /// Set once the leg's order exists
    order_id: Option<u64>,
    source: TransportError,
}

impl From<TransportError> for LegFailure {
    fn from(source: TransportError) -> Self {
        Self {
            order_id: None,
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Hop {
    eid: u32,
    recipient: [u8; 20],
}

pub struct Orchestrator {
    clients: HashMap<u32, Arc<dyn ChainClient>>,
    policy: RetryPolicy,
    gas_limit: u128,
    hop: Option<Hop>,
    escrow_fee_bps: u16,
    protocol_fee_bps: u16,
}

impl Orchestrator {
    pub fn new(policy: RetryPolicy, gas_limit: u128) -> Self {
        Self {
            clients: HashMap::new(),
            policy,
            gas_limit,
            hop: None,
            escrow_fee_bps: 0,
            protocol_fee_bps: 0,
        }
    }

    /// Build from loaded configuration and one client per configured chain.
    pub fn from_config(
        config: &OrchestratorConfig,
        clients: Vec<Arc<dyn ChainClient>>,
    ) -> EyreResult<Self> {
        let mut orchestrator = Self::new(config.retry.clone(), config.executor_gas_limit)
            .with_escrow_fees(config.escrow_fee_bps, config.protocol_fee_bps);

        for client in clients {
            if config.chain(client.eid()).is_none() {
                return Err(eyre!("Client for unconfigured eid {}", client.eid()));
            }
            orchestrator = orchestrator.with_chain(client);
        }
        if let Some(chain) = config
            .chains
            .iter()
            .find(|c| !orchestrator.clients.contains_key(&c.eid))
        {
            return Err(eyre!("No client for chain {} (eid {})", chain.name, chain.eid));
        }

        if let Some(hop) = &config.hop {
            let recipient = to_raw_address(&hop.recipient)
                .map_err(|e| eyre!("Invalid hop recipient {}: {}", hop.recipient, e))?;
            orchestrator = orchestrator.with_hop(hop.eid, recipient);
        }

        Ok(orchestrator)
    }

    pub fn with_chain(mut self, client: Arc<dyn ChainClient>) -> Self {
        self.clients.insert(client.eid(), client);
        self
    }

    pub fn with_hop(mut self, eid: u32, recipient: [u8; 20]) -> Self {
        self.hop = Some(Hop { eid, recipient });
        self
    }

    pub fn with_escrow_fees(mut self, escrow_fee_bps: u16, protocol_fee_bps: u16) -> Self {
        self.escrow_fee_bps = escrow_fee_bps;
        self.protocol_fee_bps = protocol_fee_bps;
        self
    }

    /// Deliver `intent` directly, or through the hop when the direct route
    /// cannot be quoted.
    pub async fn deliver(&self, intent: &SwapIntent) -> Result<Delivery, RelayError> {
        let src = self.client(intent.src_eid)?;
        let dst = self.client(intent.dst_eid)?;
        let options = self.options();

        // fee depends on payload size only, so quote before the order exists
        let sizing = OrderExecutionPayload::new(0, intent.recipient, intent.extra).to_binary();
        let quoted = with_retry(&self.policy, "quote", classify, |_| {
            src.quote(intent.dst_eid, &sizing, &options)
        })
        .await;

        match quoted {
            Ok(fee) => {
                info!(
                    src_eid = intent.src_eid,
                    dst_eid = intent.dst_eid,
                    native_fee = %fee.native_fee,
                    "Direct route quoted"
                );
                let leg = self
                    .complete_leg(
                        src.as_ref(),
                        dst.as_ref(),
                        &intent.order,
                        intent.recipient,
                        intent.extra,
                        &options,
                        fee,
                    )
                    .await
                    .map_err(|failure| RelayError::LegFailed {
                        src_eid: intent.src_eid,
                        dst_eid: intent.dst_eid,
                        order_id: failure.order_id,
                        source: failure.source,
                    })?;
                Ok(Delivery {
                    route: Route::Direct,
                    legs: vec![leg],
                })
            }
            Err(source) => match &self.hop {
                Some(hop) if hop.eid != intent.src_eid && hop.eid != intent.dst_eid => {
                    warn!(
                        src_eid = intent.src_eid,
                        dst_eid = intent.dst_eid,
                        hop_eid = hop.eid,
                        error = %source,
                        "Direct route unavailable, relaying through hop"
                    );
                    self.relay(intent, hop, &options).await
                }
                _ => Err(RelayError::NoFallback {
                    src_eid: intent.src_eid,
                    dst_eid: intent.dst_eid,
                    source,
                }),
            },
        }
    }

    async fn relay(
        &self,
        intent: &SwapIntent,
        hop: &Hop,
        options: &Binary,
    ) -> Result<Delivery, RelayError> {
        let src = self.client(intent.src_eid)?;
        let via = self.client(hop.eid)?;
        let dst = self.client(intent.dst_eid)?;

        let first_order = OrderRequest {
            dst_eid: hop.eid,
            ..intent.order.clone()
        };
        let leg1 = self
            .run_leg(src.as_ref(), via.as_ref(), &first_order, hop.recipient, Uint128::zero(), options)
            .await
            .map_err(|failure| RelayError::FirstLegFailed {
                src_eid: intent.src_eid,
                hop_eid: hop.eid,
                order_id: failure.order_id,
                source: failure.source,
            })?;
        info!(
            src_eid = leg1.src_eid,
            hop_eid = leg1.dst_eid,
            order_id = leg1.order_id,
            "First leg sent"
        );

        // the hop recipient holds what is left after the first order's fees
        let second_order = OrderRequest {
            amount_in: self.net_after_fees(intent.order.amount_in),
            ..intent.order.clone()
        };
        let leg2 = match self
            .run_leg(via.as_ref(), dst.as_ref(), &second_order, intent.recipient, intent.extra, options)
            .await
        {
            Ok(leg) => leg,
            Err(LegFailure { order_id, source }) => {
                warn!(
                    hop_eid = hop.eid,
                    dst_eid = intent.dst_eid,
                    stranded_order_id = leg1.order_id,
                    error = %source,
                    "Second leg failed, first leg funds stranded on hop"
                );
                return Err(RelayError::SecondLegStranded {
                    leg1,
                    order_id,
                    source,
                });
            }
        };
        info!(
            hop_eid = leg2.src_eid,
            dst_eid = leg2.dst_eid,
            order_id = leg2.order_id,
            "Second leg sent"
        );

        Ok(Delivery {
            route: Route::ViaHop { hop_eid: hop.eid },
            legs: vec![leg1, leg2],
        })
    }

    async fn run_leg(
        &self,
        src: &dyn ChainClient,
        dst: &dyn ChainClient,
        order: &OrderRequest,
        recipient: [u8; 20],
        extra: Uint128,
        options: &Binary,
    ) -> Result<LegReceipt, LegFailure> {
        let sizing = OrderExecutionPayload::new(0, recipient, extra).to_binary();
        let fee = with_retry(&self.policy, "quote", classify, |_| {
            src.quote(dst.eid(), &sizing, options)
        })
        .await?;
        self.complete_leg(src, dst, order, recipient, extra, options, fee)
            .await
    }

    /// Open the order on `dst`, then send the message that executes it.
    ///
    /// Both calls broadcast transactions and are only retried on errors that
    /// prove the previous attempt was rejected.
    #[allow(clippy::too_many_arguments)]
    async fn complete_leg(
        &self,
        src: &dyn ChainClient,
        dst: &dyn ChainClient,
        order: &OrderRequest,
        recipient: [u8; 20],
        extra: Uint128,
        options: &Binary,
        fee: MessagingFee,
    ) -> Result<LegReceipt, LegFailure> {
        let order_id = with_retry(&self.policy, "create_order", classify_submission, |_| {
            dst.create_order(order)
        })
        .await?;

        let payload = OrderExecutionPayload::new(order_id, recipient, extra).to_binary();
        let send = with_retry(&self.policy, "send_swap_message", classify_submission, |_| {
            src.send_swap_message(dst.eid(), &payload, options, fee.native_fee)
        })
        .await
        .map_err(|source| {
            warn!(
                src_eid = src.eid(),
                dst_eid = dst.eid(),
                order_id,
                error = %source,
                "Send failed after order was opened; the order must be cancelled by its maker"
            );
            LegFailure {
                order_id: Some(order_id),
                source,
            }
        })?;

        info!(
            src_eid = src.eid(),
            dst_eid = dst.eid(),
            order_id,
            nonce = send.nonce,
            tx_hash = %send.tx_hash,
            "Swap message sent"
        );

        Ok(LegReceipt {
            src_eid: src.eid(),
            dst_eid: dst.eid(),
            order_id,
            fee,
            send,
        })
    }

    fn client(&self, eid: u32) -> Result<Arc<dyn ChainClient>, RelayError> {
        self.clients
            .get(&eid)
            .cloned()
            .ok_or(RelayError::UnknownChain(eid))
    }

    fn options(&self) -> Binary {
        Binary::from(build_executor_options(self.gas_limit, None))
    }

    fn net_after_fees(&self, amount: Uint128) -> Uint128 {
        amount
            .saturating_sub(fee_from_bps(amount, self.escrow_fee_bps))
            .saturating_sub(fee_from_bps(amount, self.protocol_fee_bps))
    }
}
