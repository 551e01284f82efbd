//! XSwap AMM Contract - Constant-Product Pool
//!
//! A single pool for one asset pair. Each side is either a native denom or a
//! CW20 token, fixed at instantiation.
//!
//! # Pricing
//! Swaps take the fee from the input first, then price the remainder
//! against `reserve0 * reserve1`. The product never decreases across a swap.
//!
//! # Liquidity
//! LP shares are tracked internally. The first deposit mints the geometric
//! mean of both amounts; later deposits mint in proportion to the limiting
//! side at the current ratio.
//!
//! # Reentrancy
//! Every state-changing call holds a pool lock until its outgoing transfers
//! have completed (see `execute`).

pub mod contract;
pub mod error;
mod execute;
pub mod math;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
