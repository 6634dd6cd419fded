//! Exact conversion between human-readable token amounts and base units.
//!
//! Amounts like `"2.01"`, `"1,000.50"` or `"1e-6"` are scaled by
//! `10^decimals` into an arbitrary-precision integer of base units (wei,
//! satoshis, ...), and base units are rendered back into the shortest
//! decimal string. All work happens on digit strings and [`BigUint`]; no
//! value ever passes through a float. Input that would need a finer
//! resolution than the token supports is rejected, never rounded.
//!
//! ```
//! use token_amount_mcp::amount::{format_units, parse_amount_to_base_units};
//!
//! let base = parse_amount_to_base_units("1,000.50", 6).unwrap();
//! assert_eq!(base.to_string(), "1000500000");
//! assert_eq!(format_units(&base, 6).unwrap(), "1000.5");
//! ```

mod convert;
mod error;
mod normalize;
mod scientific;

pub use error::{AmountError, ErrorCode};

use alloy::primitives::U256;
use normalize::Normalized;
use num_bigint::{BigInt, BigUint};
use tracing::trace;

/// Largest supported decimal-places count. `10^77` is the largest power of
/// ten that fits a `uint256`.
pub const MAX_DECIMALS: u32 = 77;

pub fn validate_decimals(decimals: u32) -> Result<u32, AmountError> {
    if decimals > MAX_DECIMALS {
        return Err(AmountError::InvalidDecimals {
            got: decimals.to_string(),
            max: MAX_DECIMALS,
        });
    }
    Ok(decimals)
}

/// Parses a decimal amount into base units for a token with `decimals`
/// decimal places.
///
/// Accepts surrounding whitespace, grouping commas and scientific notation.
/// The result is exactly `amount * 10^decimals`.
///
/// # Errors
///
/// Checked in this order: [`ErrorCode::InvalidDecimals`],
/// [`ErrorCode::EmptyString`], [`ErrorCode::NegativeAmount`],
/// [`ErrorCode::InvalidFormat`], then [`ErrorCode::ScientificNotationPrecision`]
/// or [`ErrorCode::ExcessivePrecision`] depending on notation.
pub fn parse_amount_to_base_units(amount: &str, decimals: u32) -> Result<BigUint, AmountError> {
    let decimals = validate_decimals(decimals)?;

    let plain = match normalize::normalize(amount)? {
        Normalized::Plain(value) => value,
        Normalized::Scientific(value) => {
            let expanded = scientific::expand(&value, decimals)?;
            trace!(%value, %expanded, "expanded scientific notation");
            expanded
        }
    };

    convert::to_base_units(&plain, decimals)
}

/// Formats a signed base-unit integer, rejecting negative values.
///
/// # Errors
///
/// [`ErrorCode::InvalidDecimals`] when `decimals` is out of range, then
/// [`ErrorCode::NegativeAmount`] when `base_units` is below zero.
pub fn format_base_units_to_amount(base_units: &BigInt, decimals: u32) -> Result<String, AmountError> {
    let decimals = validate_decimals(decimals)?;
    let unsigned = base_units.to_biguint().ok_or(AmountError::NegativeAmount)?;
    Ok(convert::from_base_units(&unsigned, decimals))
}

/// Formats base units as the canonical decimal string: no exponent, no
/// grouping, no trailing fractional zeros.
pub fn format_units(base_units: &BigUint, decimals: u32) -> Result<String, AmountError> {
    let decimals = validate_decimals(decimals)?;
    Ok(convert::from_base_units(base_units, decimals))
}

/// Converts base units into a `uint256`, or `None` if they do not fit.
pub fn to_u256(base_units: &BigUint) -> Option<U256> {
    let bytes = base_units.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }
    U256::try_from_be_slice(&bytes)
}

pub fn from_u256(value: U256) -> BigUint {
    BigUint::from_bytes_be(&value.to_be_bytes::<32>())
}
