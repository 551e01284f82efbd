//! Transport boundary
//!
//! [`ChainClient`] is everything the orchestrator needs from one chain:
//! a fee quote from its router, order creation on its escrow and a router
//! send. Implementations wrap an RPC client; tests use in-memory ones.

use async_trait::async_trait;
use common::{AssetInfo, MessagingFee};
use cosmwasm_std::{Binary, Uint128};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Replacement transaction underpriced: {0}")]
    Underpriced(String),

    #[error("Account sequence mismatch: {0}")]
    NonceConflict(String),

    #[error("No route to eid {0}")]
    NoRoute(u32),

    #[error("Execution reverted: {0}")]
    Reverted(String),

    /// Unclassified RPC failure, classified by its message
    #[error("RPC error: {0}")]
    Rpc(String),
}

/// Retry decision for a failed transport call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Worth retrying (rate limit, timeout, nonce race, ...)
    Transient,
    /// Retrying cannot help (revert, missing route, bad input)
    Permanent,
}

pub fn classify(error: &TransportError) -> ErrorClass {
    match error {
        TransportError::RateLimited(_)
        | TransportError::Timeout(_)
        | TransportError::MalformedResponse(_)
        | TransportError::Underpriced(_)
        | TransportError::NonceConflict(_) => ErrorClass::Transient,
        TransportError::NoRoute(_) | TransportError::Reverted(_) => ErrorClass::Permanent,
        TransportError::Rpc(message) => classify_message(message),
    }
}

/// Retry decision for a call that broadcasts a transaction.
///
/// A timeout or an unreadable response can arrive after the transaction was
/// accepted, so retrying could open a second order or send twice. Those are
/// surfaced instead; rejections that prove nothing was accepted (rate limit,
/// underpriced, sequence mismatch) are still retried.
pub fn classify_submission(error: &TransportError) -> ErrorClass {
    match error {
        TransportError::Timeout(_) | TransportError::MalformedResponse(_) => {
            ErrorClass::Permanent
        }
        TransportError::Rpc(message) if outcome_unknown(message) => ErrorClass::Permanent,
        other => classify(other),
    }
}

fn outcome_unknown(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("timeout")
        || message.contains("timed out")
        || message.contains("unexpected response")
        || message.contains("invalid json")
}

/// Classify a raw RPC error string by keyword.
pub fn classify_message(error: &str) -> ErrorClass {
    let error_lower = error.to_lowercase();

    // Reverts first: a revert message may quote a transient-looking reason
    if error_lower.contains("execution reverted")
        || error_lower.contains("failed to execute message")
        || error_lower.contains("insufficient funds")
        || error_lower.contains("unauthorized")
    {
        return ErrorClass::Permanent;
    }

    if error_lower.contains("timeout")
        || error_lower.contains("timed out")
        || error_lower.contains("rate limit")
        || error_lower.contains("too many requests")
        || error_lower.contains("429")
        || error_lower.contains("502")
        || error_lower.contains("503")
        || error_lower.contains("connection")
        || error_lower.contains("temporarily unavailable")
        || error_lower.contains("unexpected response")
        || error_lower.contains("invalid json")
        || error_lower.contains("underpriced")
        || error_lower.contains("replacement transaction")
        || error_lower.contains("nonce too low")
        || error_lower.contains("nonce too high")
        || error_lower.contains("account sequence mismatch")
    {
        return ErrorClass::Transient;
    }

    ErrorClass::Permanent
}

/// Escrow order to open on a chain
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub token_in: AssetInfo,
    pub token_out: AssetInfo,
    pub amount_in: Uint128,
    pub min_amount_out: Uint128,
    pub dst_eid: u32,
}

/// Router send accepted by the source chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub tx_hash: String,
    pub nonce: u64,
}

#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Endpoint id of this chain
    fn eid(&self) -> u32;

    /// Quote the router for delivering `payload` to `dst_eid`.
    async fn quote(
        &self,
        dst_eid: u32,
        payload: &Binary,
        options: &Binary,
    ) -> Result<MessagingFee, TransportError>;

    /// Open an escrow order on this chain and return its id.
    async fn create_order(&self, request: &OrderRequest) -> Result<u64, TransportError>;

    /// Send `payload` through this chain's router, paying `native_fee`.
    async fn send_swap_message(
        &self,
        dst_eid: u32,
        payload: &Binary,
        options: &Binary,
        native_fee: Uint128,
    ) -> Result<SendReceipt, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_classification() {
        assert_eq!(
            classify(&TransportError::Timeout("10s".into())),
            ErrorClass::Transient
        );
        assert_eq!(
            classify(&TransportError::Underpriced("bump".into())),
            ErrorClass::Transient
        );
        assert_eq!(classify(&TransportError::NoRoute(7)), ErrorClass::Permanent);
        assert_eq!(
            classify(&TransportError::Reverted("Invalid state".into())),
            ErrorClass::Permanent
        );
    }

    #[test]
    fn test_message_classification() {
        assert_eq!(
            classify_message("HTTP 429 Too Many Requests"),
            ErrorClass::Transient
        );
        assert_eq!(
            classify_message("account sequence mismatch, expected 12, got 11"),
            ErrorClass::Transient
        );
        assert_eq!(
            classify_message("unexpected response from node"),
            ErrorClass::Transient
        );
        assert_eq!(
            classify_message("failed to execute message; message index: 0: Slippage exceeded"),
            ErrorClass::Permanent
        );
        assert_eq!(
            classify_message("execution reverted: connection refused by peer"),
            ErrorClass::Permanent
        );
        assert_eq!(classify_message("something odd"), ErrorClass::Permanent);
        assert_eq!(
            classify(&TransportError::Rpc("connection reset by peer".into())),
            ErrorClass::Transient
        );
    }

    #[test]
    fn test_submission_classification() {
        // the transaction may have landed before the response was lost
        assert_eq!(
            classify_submission(&TransportError::Timeout("10s".into())),
            ErrorClass::Permanent
        );
        assert_eq!(
            classify_submission(&TransportError::MalformedResponse("eof".into())),
            ErrorClass::Permanent
        );
        assert_eq!(
            classify_submission(&TransportError::Rpc("broadcast timed out".into())),
            ErrorClass::Permanent
        );

        // rejected before acceptance
        assert_eq!(
            classify_submission(&TransportError::Underpriced("bump".into())),
            ErrorClass::Transient
        );
        assert_eq!(
            classify_submission(&TransportError::NonceConflict("seq 11".into())),
            ErrorClass::Transient
        );
        assert_eq!(
            classify_submission(&TransportError::Rpc("connection reset by peer".into())),
            ErrorClass::Transient
        );
        assert_eq!(
            classify_submission(&TransportError::Reverted("Invalid state".into())),
            ErrorClass::Permanent
        );
    }
}
