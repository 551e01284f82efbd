//! Error types for the AMM pool contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Slippage exceeded: minimum {min_amount_out}, got {amount_out}")]
    SlippageExceeded {
        min_amount_out: Uint128,
        amount_out: Uint128,
    },

    #[error("Insufficient liquidity")]
    InsufficientLiquidity,

    #[error("Unsupported asset: {asset}")]
    UnsupportedAsset { asset: String },

    #[error("Reentrant call rejected: pool is busy")]
    Reentrancy,

    #[error("Invalid fee: {bps} bps exceeds max {max_bps} bps")]
    InvalidFeeBps { bps: u16, max_bps: u16 },
}

impl ContractError {
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        ContractError::InvalidAmount {
            reason: reason.into(),
        }
    }
}
