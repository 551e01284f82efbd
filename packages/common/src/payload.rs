//! Order-execution payload
//!
//! The message a router sends to its peer to execute an order on the
//! destination chain. Fixed 96-byte layout, three 32-byte big-endian slots:
//!
//! ```text
//! | order id (32) | recipient (12 zero + 20) | extra min out (32) |
//! ```
//!
//! Decoding is strict: padding must be zero and values must fit the Rust
//! types (`u64` id, `Uint128` extra).

use cosmwasm_std::{Binary, StdError, StdResult, Uint128};

pub const PAYLOAD_LEN: usize = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderExecutionPayload {
    pub order_id: u64,
    /// Raw 20-byte recipient on the destination chain
    pub recipient: [u8; 20],
    pub extra: Uint128,
}

impl OrderExecutionPayload {
    pub fn new(order_id: u64, recipient: [u8; 20], extra: Uint128) -> Self {
        Self {
            order_id,
            recipient,
            extra,
        }
    }

    pub fn encode(&self) -> [u8; PAYLOAD_LEN] {
        let mut out = [0u8; PAYLOAD_LEN];
        out[24..32].copy_from_slice(&self.order_id.to_be_bytes());
        out[44..64].copy_from_slice(&self.recipient);
        out[80..96].copy_from_slice(&self.extra.u128().to_be_bytes());
        out
    }

    pub fn to_binary(&self) -> Binary {
        Binary::from(self.encode().to_vec())
    }

    pub fn decode(bytes: &[u8]) -> StdResult<Self> {
        if bytes.len() != PAYLOAD_LEN {
            return Err(StdError::generic_err(format!(
                "Invalid payload length: expected {}, got {}",
                PAYLOAD_LEN,
                bytes.len()
            )));
        }

        if bytes[0..24].iter().any(|b| *b != 0) {
            return Err(StdError::generic_err("Order id exceeds u64"));
        }
        if bytes[32..44].iter().any(|b| *b != 0) {
            return Err(StdError::generic_err("Recipient padding must be zero"));
        }
        if bytes[64..80].iter().any(|b| *b != 0) {
            return Err(StdError::generic_err("Extra value exceeds u128"));
        }

        let mut id = [0u8; 8];
        id.copy_from_slice(&bytes[24..32]);
        let mut recipient = [0u8; 20];
        recipient.copy_from_slice(&bytes[44..64]);
        let mut extra = [0u8; 16];
        extra.copy_from_slice(&bytes[80..96]);

        Ok(Self {
            order_id: u64::from_be_bytes(id),
            recipient,
            extra: Uint128::new(u128::from_be_bytes(extra)),
        })
    }
}
