use super::error::AmountError;
use regex::Regex;
use std::sync::LazyLock;

static SCIENTIFIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)(?:\.([0-9]+))?[eE]([+-]?[0-9]+)$")
        .expect("valid scientific notation pattern")
});

/// Rewrites `mantissa[eE]exponent` as a plain decimal string by moving the
/// decimal point over the mantissa digits.
///
/// The fractional length of the result is computed before anything is
/// allocated, so a huge negative exponent fails on precision. A positive
/// exponent is only refused when its expansion cannot be allocated at all.
pub(crate) fn expand(value: &str, max_decimals: u32) -> Result<String, AmountError> {
    let caps = SCIENTIFIC.captures(value).ok_or_else(|| {
        AmountError::invalid_format(format!("'{}' is not valid scientific notation", value))
    })?;

    let int_digits = caps.get(1).map_or("", |m| m.as_str());
    let frac_digits = caps.get(2).map_or("", |m| m.as_str());
    let exponent: i64 = caps[3]
        .parse()
        .map_err(|_| AmountError::invalid_format(format!("exponent '{}' is out of range", &caps[3])))?;

    let digits = format!("{int_digits}{frac_digits}");
    let len = digits.len() as i128;
    let position = int_digits.len() as i128 + i128::from(exponent);

    let (fractional_digits, total_digits) = if position <= 0 {
        (len - position, len - position + 1)
    } else if position >= len {
        (0, position)
    } else {
        (len - position, len)
    };

    if fractional_digits > i128::from(max_decimals) {
        return Err(AmountError::ScientificNotationPrecision {
            fractional_digits: usize::try_from(fractional_digits).unwrap_or(usize::MAX),
            decimals: max_decimals,
        });
    }
    let unallocatable = || {
        AmountError::invalid_format(format!("exponent in '{}' is out of range", value))
    };
    let capacity = usize::try_from(total_digits)
        .ok()
        .and_then(|total| total.checked_add(1))
        .ok_or_else(unallocatable)?;
    let mut expanded = String::new();
    expanded
        .try_reserve_exact(capacity)
        .map_err(|_| unallocatable())?;

    // The precision check keeps these conversions in range.
    if position <= 0 {
        expanded.push_str("0.");
        push_zeros(&mut expanded, (-position) as usize);
        expanded.push_str(&digits);
    } else if position >= len {
        expanded.push_str(&digits);
        push_zeros(&mut expanded, (position - len) as usize);
    } else {
        let (int_part, frac_part) = digits.split_at(position as usize);
        expanded.push_str(int_part);
        expanded.push('.');
        expanded.push_str(frac_part);
    }

    Ok(expanded)
}

fn push_zeros(out: &mut String, count: usize) {
    out.extend(std::iter::repeat('0').take(count));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::ErrorCode;

    #[test]
    fn moves_point_left() {
        assert_eq!(expand("1e-6", 6).unwrap(), "0.000001");
        assert_eq!(expand("1.5e-3", 18).unwrap(), "0.0015");
        assert_eq!(expand("12.5e-2", 3).unwrap(), "0.125");
    }

    #[test]
    fn moves_point_right() {
        assert_eq!(expand("1e3", 0).unwrap(), "1000");
        assert_eq!(expand("1.25E+2", 0).unwrap(), "125");
        assert_eq!(expand("1.2345e2", 2).unwrap(), "123.45");
        assert_eq!(expand("1.5e1", 1).unwrap(), "15");
    }

    #[test]
    fn zero_exponent_keeps_mantissa() {
        assert_eq!(expand("2.5e0", 1).unwrap(), "2.5");
    }

    #[test]
    fn counts_mantissa_trailing_zeros() {
        let err = expand("1.0e0", 0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ScientificNotationPrecision);
        let err = expand("1.50e-6", 7).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ScientificNotationPrecision);
    }

    #[test]
    fn rejects_excess_precision() {
        let err = expand("1e-7", 6).unwrap_err();
        assert_eq!(
            err,
            AmountError::ScientificNotationPrecision {
                fractional_digits: 7,
                decimals: 6
            }
        );
    }

    #[test]
    fn rejects_bad_grammar() {
        for input in ["e5", "1e", "1.e5", ".1e5", "1e5.5", "1e+-5", "1ee5", "abce"] {
            assert_eq!(
                expand(input, 18).unwrap_err().code(),
                ErrorCode::InvalidFormat,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn huge_exponents_do_not_allocate() {
        assert_eq!(
            expand("1e-9223372036854775808", 77).unwrap_err().code(),
            ErrorCode::ScientificNotationPrecision
        );
        assert_eq!(
            expand("1e9223372036854775807", 0).unwrap_err().code(),
            ErrorCode::InvalidFormat
        );
        assert_eq!(
            expand("1e99999999999999999999", 0).unwrap_err().code(),
            ErrorCode::InvalidFormat
        );
    }

    #[test]
    fn long_expansions_are_not_capped() {
        let expanded = expand("1e5000", 0).unwrap();
        assert_eq!(expanded.len(), 5001);
        assert_eq!(expanded, format!("1{}", "0".repeat(5000)));

        let expanded = expand("2.5e4999", 0).unwrap();
        assert_eq!(expanded, format!("25{}", "0".repeat(4998)));
    }
}
