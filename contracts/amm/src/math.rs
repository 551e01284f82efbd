//! Pool arithmetic.
//!
//! All products of two amounts are formed in `Uint256`; results are
//! narrowed back to `Uint128` with a checked conversion. Division always
//! truncates; swap outputs are checked against the reserve product so
//! rounding never costs the pool.

use common::fee::{amount_after_fee, fee_from_bps};
use cosmwasm_std::{StdError, Uint128, Uint256};

use crate::error::ContractError;

/// Amounts actually taken by a deposit and the shares minted for them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityQuote {
    pub used0: Uint128,
    pub used1: Uint128,
    pub shares: Uint128,
}

/// Outcome of an exact-in swap against `(reserve_in, reserve_out)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    pub amount_out: Uint128,
    /// Whole swap fee, `amount_in - amount_in_after_fee`
    pub fee_amount: Uint128,
    /// Part of the fee paid out to the fee recipient
    pub protocol_fee: Uint128,
    /// Amount added to the input reserve
    pub credited_in: Uint128,
}

/// Integer square root, rounded down.
pub fn isqrt(n: Uint256) -> Uint256 {
    if n.is_zero() {
        return n;
    }
    let two = Uint256::from(2u128);
    let mut x = n;
    // ceil(n / 2) without overflowing at n = MAX
    let mut y = n / two + n % two;
    while y < x {
        x = y;
        y = (x + n / x) / two;
    }
    x
}

fn narrow(value: Uint256) -> Result<Uint128, ContractError> {
    Uint128::try_from(value).map_err(|e| ContractError::Std(StdError::generic_err(e.to_string())))
}

/// `a * b / c` with a 256-bit intermediate
fn mul_div(a: Uint128, b: Uint128, c: Uint128) -> Result<Uint128, ContractError> {
    if c.is_zero() {
        return Err(ContractError::InsufficientLiquidity);
    }
    narrow(Uint256::from(a) * Uint256::from(b) / Uint256::from(c))
}

/// Shares minted by the first deposit: the geometric mean of both amounts.
pub fn initial_shares(amount0: Uint128, amount1: Uint128) -> Result<Uint128, ContractError> {
    narrow(isqrt(Uint256::from(amount0) * Uint256::from(amount1)))
}

/// Size a deposit of up to `(amount0, amount1)` against the current pool.
///
/// An empty pool takes both amounts as given. Otherwise the side that
/// limits the deposit at the current ratio is taken whole, the other side
/// is taken at `limiting * reserve_other / reserve_limiting`, and shares are
/// minted in proportion to the limiting side.
pub fn quote_add_liquidity(
    reserve0: Uint128,
    reserve1: Uint128,
    total_supply: Uint128,
    amount0: Uint128,
    amount1: Uint128,
) -> Result<LiquidityQuote, ContractError> {
    if amount0.is_zero() || amount1.is_zero() {
        return Err(ContractError::invalid_amount(
            "both deposit amounts must be greater than zero",
        ));
    }

    let quote = if total_supply.is_zero() {
        LiquidityQuote {
            used0: amount0,
            used1: amount1,
            shares: initial_shares(amount0, amount1)?,
        }
    } else {
        if reserve0.is_zero() || reserve1.is_zero() {
            return Err(ContractError::InsufficientLiquidity);
        }
        let required1 = mul_div(amount0, reserve1, reserve0)?;
        if required1 <= amount1 {
            LiquidityQuote {
                used0: amount0,
                used1: required1,
                shares: mul_div(total_supply, amount0, reserve0)?,
            }
        } else {
            LiquidityQuote {
                used0: mul_div(amount1, reserve0, reserve1)?,
                used1: amount1,
                shares: mul_div(total_supply, amount1, reserve1)?,
            }
        }
    };

    if quote.shares.is_zero() || quote.used0.is_zero() || quote.used1.is_zero() {
        return Err(ContractError::invalid_amount(
            "deposit too small to mint shares",
        ));
    }
    Ok(quote)
}

/// Reserve amounts paid out for burning `shares` of `total_supply`.
pub fn quote_remove_liquidity(
    reserve0: Uint128,
    reserve1: Uint128,
    total_supply: Uint128,
    shares: Uint128,
) -> Result<(Uint128, Uint128), ContractError> {
    if shares == total_supply {
        return Ok((reserve0, reserve1));
    }
    Ok((
        mul_div(reserve0, shares, total_supply)?,
        mul_div(reserve1, shares, total_supply)?,
    ))
}

/// Price an exact-in swap.
///
/// The fee is taken before the product formula and the output is
/// `reserve_out - floor(reserve_in * reserve_out / (reserve_in + in_after_fee))`.
/// Only the protocol share of the fee leaves the pool. When truncation of
/// that quotient would leave `reserve_in * reserve_out` lower than before
/// (or not strictly higher once a fee was charged), the output drops to
/// `floor(in_after_fee * reserve_out / (reserve_in + in_after_fee))`.
pub fn quote_swap(
    reserve_in: Uint128,
    reserve_out: Uint128,
    amount_in: Uint128,
    swap_fee_bps: u16,
    protocol_fee_bps: u16,
) -> Result<SwapQuote, ContractError> {
    if amount_in.is_zero() {
        return Err(ContractError::invalid_amount("amount_in must be greater than zero"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(ContractError::InsufficientLiquidity);
    }

    let in_after_fee = amount_after_fee(amount_in, swap_fee_bps);
    let fee_amount = amount_in - in_after_fee;
    let protocol_fee = fee_from_bps(fee_amount, protocol_fee_bps);

    let denominator = reserve_in
        .checked_add(in_after_fee)
        .map_err(|e| ContractError::Std(e.into()))?;
    let credited_in = amount_in - protocol_fee;

    let remaining_out = mul_div(reserve_in, reserve_out, denominator)?;
    let mut amount_out = reserve_out - remaining_out;
    if !keeps_k(reserve_in, reserve_out, credited_in, amount_out, fee_amount)? {
        amount_out = mul_div(in_after_fee, reserve_out, denominator)?;
    }

    Ok(SwapQuote {
        amount_out,
        fee_amount,
        protocol_fee,
        credited_in,
    })
}

/// Whether paying `amount_out` for `credited_in` leaves the reserve product
/// no lower than before, and strictly higher when a fee was charged
fn keeps_k(
    reserve_in: Uint128,
    reserve_out: Uint128,
    credited_in: Uint128,
    amount_out: Uint128,
    fee_amount: Uint128,
) -> Result<bool, ContractError> {
    let before = Uint256::from(reserve_in) * Uint256::from(reserve_out);
    let new_in = reserve_in
        .checked_add(credited_in)
        .map_err(|e| ContractError::Std(e.into()))?;
    let after = Uint256::from(new_in) * Uint256::from(reserve_out - amount_out);
    Ok(if fee_amount.is_zero() {
        after >= before
    } else {
        after > before
    })
}
