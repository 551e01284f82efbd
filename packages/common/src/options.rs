//! Executor Options Encoding
//!
//! Builds the versioned byte string telling the remote executor how much
//! gas (and optionally native value) to supply when delivering a message.
//! The layout is fixed and must be reproduced byte-exactly so the
//! transport's executor accepts it.
//!
//! # Byte Layout
//! ```text
//! | version (2) | worker id (1) | size (2) | option type (1) | gas (16) | [value (16)] |
//! ```
//! - `version`: big-endian `u16`, always [`OPTIONS_TYPE_3`]
//! - `worker id`: [`EXECUTOR_WORKER_ID`]
//! - `size`: big-endian `u16`, byte length of option type + option payload
//!   (17 without native value, 33 with)
//! - `option type`: [`OPTION_TYPE_LZRECEIVE`]
//! - `gas` / `value`: big-endian `u128`

use cosmwasm_std::{StdError, StdResult};

/// Options format version
pub const OPTIONS_TYPE_3: u16 = 3;

/// Worker id of the executor
pub const EXECUTOR_WORKER_ID: u8 = 1;

/// Executor option: gas (and value) for the receive call
pub const OPTION_TYPE_LZRECEIVE: u8 = 1;

/// Header bytes preceding the option payload (version + worker + size + type)
const HEADER_LEN: usize = 2 + 1 + 2 + 1;

/// Decoded executor options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorOptions {
    pub worker_id: u8,
    pub option_type: u8,
    pub gas_limit: u128,
    pub native_value: Option<u128>,
}

/// Encode executor options for a receive call with `gas_limit` gas and an
/// optional native value drop on the remote chain.
pub fn build_executor_options(gas_limit: u128, native_value: Option<u128>) -> Vec<u8> {
    let payload_len = if native_value.is_some() { 32 } else { 16 };
    let mut out = Vec::with_capacity(HEADER_LEN + payload_len);

    out.extend_from_slice(&OPTIONS_TYPE_3.to_be_bytes());
    out.push(EXECUTOR_WORKER_ID);
    // size counts the option type byte plus its payload
    out.extend_from_slice(&((payload_len + 1) as u16).to_be_bytes());
    out.push(OPTION_TYPE_LZRECEIVE);
    out.extend_from_slice(&gas_limit.to_be_bytes());
    if let Some(value) = native_value {
        out.extend_from_slice(&value.to_be_bytes());
    }

    out
}

/// Decode options produced by [`build_executor_options`].
///
/// Only a single executor receive option is accepted; anything else is an
/// error rather than being skipped.
pub fn decode_executor_options(bytes: &[u8]) -> StdResult<ExecutorOptions> {
    if bytes.len() < HEADER_LEN {
        return Err(StdError::generic_err(format!(
            "Options too short: {} bytes",
            bytes.len()
        )));
    }

    let version = u16::from_be_bytes([bytes[0], bytes[1]]);
    if version != OPTIONS_TYPE_3 {
        return Err(StdError::generic_err(format!(
            "Unsupported options version: {}",
            version
        )));
    }

    let worker_id = bytes[2];
    if worker_id != EXECUTOR_WORKER_ID {
        return Err(StdError::generic_err(format!(
            "Unsupported worker id: {}",
            worker_id
        )));
    }

    let size = u16::from_be_bytes([bytes[3], bytes[4]]) as usize;
    if bytes.len() != 5 + size {
        return Err(StdError::generic_err(format!(
            "Options size mismatch: header says {}, found {}",
            size,
            bytes.len() - 5
        )));
    }

    let option_type = bytes[5];
    if option_type != OPTION_TYPE_LZRECEIVE {
        return Err(StdError::generic_err(format!(
            "Unsupported option type: {}",
            option_type
        )));
    }

    let body = &bytes[HEADER_LEN..];
    let (gas_limit, native_value) = match body.len() {
        16 => (read_u128(&body[0..16]), None),
        32 => (read_u128(&body[0..16]), Some(read_u128(&body[16..32]))),
        n => {
            return Err(StdError::generic_err(format!(
                "Invalid receive option length: {}",
                n
            )))
        }
    };

    Ok(ExecutorOptions {
        worker_id,
        option_type,
        gas_limit,
        native_value,
    })
}

fn read_u128(bytes: &[u8]) -> u128 {
    let mut buf = [0u8; 16];
    buf.copy_from_slice(bytes);
    u128::from_be_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_only_layout() {
        let options = build_executor_options(200_000, None);
        assert_eq!(
            hex::encode(&options),
            "00030100110100000000000000000000000000030d40"
        );
        assert_eq!(options.len(), 22);
    }

    #[test]
    fn test_gas_and_value_layout() {
        let options = build_executor_options(250_000, Some(1));
        assert_eq!(options.len(), 38);
        assert_eq!(&options[0..6], &[0x00, 0x03, 0x01, 0x00, 0x21, 0x01]);
        assert_eq!(options[37], 1);
    }

    #[test]
    fn test_decode_boundary_values() {
        for gas in [0u128, 1, 250_000, u64::MAX as u128, u128::MAX] {
            let decoded = decode_executor_options(&build_executor_options(gas, None)).unwrap();
            assert_eq!(decoded.gas_limit, gas);
            assert_eq!(decoded.worker_id, EXECUTOR_WORKER_ID);
            assert_eq!(decoded.option_type, OPTION_TYPE_LZRECEIVE);
            assert_eq!(decoded.native_value, None);
        }

        let decoded =
            decode_executor_options(&build_executor_options(u128::MAX, Some(u128::MAX))).unwrap();
        assert_eq!(decoded.native_value, Some(u128::MAX));
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(decode_executor_options(&[0x00, 0x03]).is_err());

        let mut wrong_version = build_executor_options(1, None);
        wrong_version[1] = 0x02;
        assert!(decode_executor_options(&wrong_version).is_err());

        let mut truncated = build_executor_options(1, None);
        truncated.pop();
        assert!(decode_executor_options(&truncated).is_err());

        let mut wrong_type = build_executor_options(1, None);
        wrong_type[5] = 0x02;
        assert!(decode_executor_options(&wrong_type).is_err());
    }
}
