use super::error::AmountError;
use super::normalize::split_decimal;
use num_bigint::BigUint;
use num_traits::Zero;

/// Scales a grammar-checked plain decimal string by `10^decimals`.
pub(crate) fn to_base_units(value: &str, decimals: u32) -> Result<BigUint, AmountError> {
    let (int_part, frac_part) = split_decimal(value);
    let width = decimals as usize;

    if frac_part.len() > width {
        return Err(AmountError::ExcessivePrecision {
            fractional_digits: frac_part.len(),
            decimals,
        });
    }

    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        stripped => stripped,
    };
    let combined = format!("{int_part}{frac_part:0<width$}");
    let combined = match combined.trim_start_matches('0') {
        "" => "0",
        stripped => stripped,
    };

    BigUint::parse_bytes(combined.as_bytes(), 10).ok_or_else(|| {
        AmountError::invalid_format(format!("'{}' is not a decimal integer", combined))
    })
}

/// Renders base units as a canonical decimal string: no exponent, no
/// grouping and no trailing fractional zeros.
pub(crate) fn from_base_units(base_units: &BigUint, decimals: u32) -> String {
    let digits = base_units.to_str_radix(10);
    if decimals == 0 {
        return digits;
    }

    let width = decimals as usize;
    if digits.len() <= width {
        if base_units.is_zero() {
            return "0".to_string();
        }
        let padded = format!("{digits:0>width$}");
        return format!("0.{}", padded.trim_end_matches('0'));
    }

    let (int_part, frac_part) = digits.split_at(digits.len() - width);
    match frac_part.trim_end_matches('0') {
        "" => int_part.to_string(),
        frac => format!("{int_part}.{frac}"),
    }
}
