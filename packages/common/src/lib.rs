//! Common - Shared Types and Utilities for XSwap Contracts
//!
//! This package provides the pieces every XSwap component must agree on
//! byte-for-byte or value-for-value:
//!
//! - `asset` - native / CW20 asset model and transfer message builders
//! - `fee` - basis-point fee arithmetic
//! - `options` - executor options encoding for the message transport
//! - `payload` - the order-execution wire payload carried between routers
//! - `address` - bech32 and bytes32 address helpers
//! - `endpoint` - the message contract expected from the transport endpoint

pub mod address;
pub mod asset;
pub mod endpoint;
pub mod fee;
pub mod options;
pub mod payload;

pub use asset::AssetInfo;
pub use endpoint::{MessagingFee, Origin};
pub use options::{build_executor_options, decode_executor_options, ExecutorOptions};
pub use payload::OrderExecutionPayload;
