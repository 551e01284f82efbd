//! Basis-point fee arithmetic.
//!
//! All fee math truncates toward zero, so the payer never owes more than the
//! exact proportional amount.

use cosmwasm_std::Uint128;

/// Basis points denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Calculate fee amount from amount and bps
pub fn fee_from_bps(amount: Uint128, fee_bps: u16) -> Uint128 {
    amount.multiply_ratio(fee_bps as u128, BPS_DENOMINATOR)
}

/// Amount left after removing `fee_bps`, truncated
pub fn amount_after_fee(amount: Uint128, fee_bps: u16) -> Uint128 {
    let keep_bps = BPS_DENOMINATOR.saturating_sub(fee_bps as u128);
    amount.multiply_ratio(keep_bps, BPS_DENOMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_from_bps() {
        // 0.5% of 1000 = 5
        assert_eq!(fee_from_bps(Uint128::new(1000), 50), Uint128::new(5));
        // 1% of 1000 = 10
        assert_eq!(fee_from_bps(Uint128::new(1000), 100), Uint128::new(10));
        // truncation: 0.3% of 999 = 2.997
        assert_eq!(fee_from_bps(Uint128::new(999), 30), Uint128::new(2));
        assert_eq!(fee_from_bps(Uint128::new(1000), 0), Uint128::zero());
    }

    #[test]
    fn test_amount_after_fee() {
        assert_eq!(amount_after_fee(Uint128::new(1000), 30), Uint128::new(997));
        // 1 * 9970 / 10000 truncates to zero
        assert_eq!(amount_after_fee(Uint128::new(1), 30), Uint128::zero());
        assert_eq!(amount_after_fee(Uint128::new(1000), 0), Uint128::new(1000));
    }
}
