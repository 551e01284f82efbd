//! Address helpers
//!
//! Wire payloads carry 20-byte raw addresses and peers are registered as
//! 32-byte left-padded values. These helpers convert between those forms
//! and bech32 strings.

use bech32::{self, FromBase32, ToBase32, Variant};
use cosmwasm_std::{Binary, StdError, StdResult};

/// Decode a bech32 address to its raw 20 bytes.
pub fn to_raw_address(addr: &str) -> StdResult<[u8; 20]> {
    let (_hrp, data, _variant) = bech32::decode(addr)
        .map_err(|e| StdError::generic_err(format!("Invalid bech32 address: {}", e)))?;

    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| StdError::generic_err(format!("Invalid base32 data: {}", e)))?;

    if bytes.len() != 20 {
        return Err(StdError::generic_err(format!(
            "Invalid address length: expected 20 bytes, got {}",
            bytes.len()
        )));
    }

    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode raw 20 bytes as a bech32 address with the given prefix.
pub fn from_raw_address(bytes: &[u8; 20], hrp: &str) -> StdResult<String> {
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32)
        .map_err(|e| StdError::generic_err(format!("Failed to encode bech32: {}", e)))
}

/// Left-pad up to 32 bytes into a bytes32 value.
pub fn left_pad_bytes32(bytes: &[u8]) -> StdResult<[u8; 32]> {
    if bytes.len() > 32 {
        return Err(StdError::generic_err(format!(
            "Value too long for bytes32: {} bytes",
            bytes.len()
        )));
    }
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

/// Interpret a binary as an exact bytes32 value.
pub fn bytes32_from_binary(value: &Binary) -> StdResult<[u8; 32]> {
    let slice = value.as_slice();
    if slice.len() != 32 {
        return Err(StdError::generic_err(format!(
            "Expected 32 bytes, got {}",
            slice.len()
        )));
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(slice);
    Ok(out)
}

/// 0x-prefixed lowercase hex, used in errors and attributes
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
