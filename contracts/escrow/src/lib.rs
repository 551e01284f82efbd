//! XSwap Escrow Contract - Order Custody for Cross-Chain Swaps
//!
//! Holds the funds of a swap order until it is either cancelled by its maker
//! or executed by the router on behalf of a verified remote instruction.
//!
//! # Order Lifecycle
//! 1. Maker calls `CreateOrder`, locking `amount_in` (native funds or a CW20
//!    allowance pull). Escrow and protocol fee slices go to their treasuries
//!    immediately; the net amount stays in the contract.
//! 2. Either the maker calls `CancelOrder` and gets the net amount back, or
//!    the router calls `ExecuteFromRemote` and the net amount goes to the
//!    recipient named in the cross-chain message.
//!
//! `Created` is the only non-terminal status.

pub mod contract;
pub mod error;
mod execute;
pub mod fee_manager;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::fee_manager::{FeeConfig, FeeSplit};
