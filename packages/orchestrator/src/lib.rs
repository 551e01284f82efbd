//! XSwap Orchestrator
//!
//! Off-chain delivery of cross-chain orders. The orchestrator creates the
//! destination-side escrow order, encodes the execution payload and
//! executor options, and asks the source router to send it. Transport
//! calls are retried on transient failures; when no direct route can be
//! quoted it relays through a configured hop chain in two legs.
//!
//! The two-leg relay is not atomic: a failed second leg leaves the first
//! leg's funds with the hop recipient and is reported as
//! [`RelayError::SecondLegStranded`] for manual reconciliation. Any failure
//! after an escrow order was opened carries that order's id so its maker can
//! cancel it.

pub mod config;
pub mod relay;
pub mod retry;
pub mod transport;

pub use config::{ChainConfig, HopConfig, OrchestratorConfig};
pub use relay::{Delivery, LegReceipt, Orchestrator, RelayError, Route, SwapIntent};
pub use retry::{with_retry, RetryPolicy};
pub use transport::{
    classify, classify_message, classify_submission, ChainClient, ErrorClass, OrderRequest,
    SendReceipt, TransportError,
};
