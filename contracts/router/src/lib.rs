//! XSwap Router Contract - Cross-Chain Messaging for Swap Orders
//!
//! # Outgoing
//! `SendSwapMessage` hands an encoded order-execution payload to the
//! transport endpoint, addressed to the registered peer router on the
//! destination chain. Attached funds pay the delivery fee.
//!
//! # Incoming
//! The endpoint calls `LzReceive` with the authenticated origin. The
//! router accepts the message only if the origin matches the peer
//! registered for that source chain, decodes the payload and asks the local
//! escrow to execute the order. Escrow failures fail the whole delivery.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
