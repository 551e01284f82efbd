//! Fee Manager Module
//!
//! Every order pays two fee slices at creation, each a fixed basis-point
//! share of the gross amount:
//!
//! | Slice    | Recipient           | Rate              |
//! |----------|---------------------|-------------------|
//! | Escrow   | `treasury_escrow`   | `escrow_fee_bps`  |
//! | Protocol | `treasury_protocol` | `protocol_fee_bps`|
//!
//! Both slices truncate independently, so the net amount absorbs the
//! rounding remainder. The combined rate is capped at [`MAX_TOTAL_FEE_BPS`].

use common::fee::fee_from_bps;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

use crate::error::ContractError;

/// Maximum combined fee (10% = 1000 bps)
pub const MAX_TOTAL_FEE_BPS: u32 = 1000;

pub const FEE_CONFIG: Item<FeeConfig> = Item::new("fee_config");

#[cw_serde]
pub struct FeeConfig {
    pub escrow_fee_bps: u16,
    pub protocol_fee_bps: u16,
    pub treasury_escrow: Addr,
    pub treasury_protocol: Addr,
}

/// Fee breakdown of a gross amount
#[cw_serde]
pub struct FeeSplit {
    pub escrow_fee: Uint128,
    pub protocol_fee: Uint128,
    pub net_amount: Uint128,
}

impl FeeConfig {
    pub fn validate(&self) -> Result<(), ContractError> {
        let total_bps = self.escrow_fee_bps as u32 + self.protocol_fee_bps as u32;
        if total_bps > MAX_TOTAL_FEE_BPS {
            return Err(ContractError::InvalidFeeBps {
                total_bps,
                max_bps: MAX_TOTAL_FEE_BPS,
            });
        }
        Ok(())
    }

    pub fn split(&self, amount: Uint128) -> Result<FeeSplit, ContractError> {
        let escrow_fee = fee_from_bps(amount, self.escrow_fee_bps);
        let protocol_fee = fee_from_bps(amount, self.protocol_fee_bps);
        let net_amount = amount
            .checked_sub(escrow_fee)
            .and_then(|rest| rest.checked_sub(protocol_fee))
            .map_err(|e| ContractError::Std(e.into()))?;

        Ok(FeeSplit {
            escrow_fee,
            protocol_fee,
            net_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(escrow_fee_bps: u16, protocol_fee_bps: u16) -> FeeConfig {
        FeeConfig {
            escrow_fee_bps,
            protocol_fee_bps,
            treasury_escrow: Addr::unchecked("terra1escrowtreasury"),
            treasury_protocol: Addr::unchecked("terra1protocoltreasury"),
        }
    }

    #[test]
    fn test_split_truncates_each_slice() {
        let split = config(30, 20).split(Uint128::new(999)).unwrap();
        assert_eq!(split.escrow_fee, Uint128::new(2));
        assert_eq!(split.protocol_fee, Uint128::new(1));
        assert_eq!(split.net_amount, Uint128::new(996));
    }

    #[test]
    fn test_split_zero_fees() {
        let split = config(0, 0).split(Uint128::new(1)).unwrap();
        assert_eq!(split.net_amount, Uint128::new(1));
        assert!(split.escrow_fee.is_zero());
    }

    #[test]
    fn test_validate_cap() {
        assert!(config(500, 500).validate().is_ok());
        assert_eq!(
            config(600, 401).validate().unwrap_err(),
            ContractError::InvalidFeeBps {
                total_bps: 1001,
                max_bps: 1000
            }
        );
    }
}
