//! Error types for the router contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: {sender} is not the owner")]
    Unauthorized { sender: String },

    #[error("Only the endpoint may deliver messages, got {sender}")]
    OnlyEndpoint { sender: String },

    #[error("No peer set for eid {eid}")]
    PeerNotSet { eid: u32 },

    #[error("Untrusted peer for eid {eid}: expected {expected}, got {got}")]
    UntrustedPeer {
        eid: u32,
        expected: String,
        got: String,
    },

    #[error("Invalid peer: {reason}")]
    InvalidPeer { reason: String },

    #[error("Invalid payload: {reason}")]
    InvalidPayload { reason: String },
}
