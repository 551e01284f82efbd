//! Error types for the escrow contract

use cosmwasm_std::StdError;
use thiserror::Error;

use crate::state::OrderStatus;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: {sender} is not the {role}")]
    Unauthorized { role: String, sender: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid state: order {order_id} is {status}, expected Created")]
    InvalidState { order_id: u64, status: OrderStatus },

    #[error("Order not found: {order_id}")]
    NotFound { order_id: u64 },

    #[error("Invalid fee: total {total_bps} bps exceeds max {max_bps} bps")]
    InvalidFeeBps { total_bps: u32, max_bps: u32 },
}

impl ContractError {
    pub fn unauthorized(role: &str, sender: impl ToString) -> Self {
        ContractError::Unauthorized {
            role: role.to_string(),
            sender: sender.to_string(),
        }
    }

    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        ContractError::InvalidAmount {
            reason: reason.into(),
        }
    }
}
