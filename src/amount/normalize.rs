use super::error::AmountError;
use regex::Regex;
use std::sync::LazyLock;

// ASCII only: `\d` would also accept other Unicode digit classes.
static PLAIN_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("valid plain decimal pattern"));

/// Cleaned amount text, classified by notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Normalized {
    /// Matches `digits(.digits)?`.
    Plain(String),
    /// Contains an exponent marker; grammar is checked by the expander.
    Scientific(String),
}

/// Trims, rejects empty and negative input, drops grouping commas and
/// classifies what is left.
///
/// The sign check happens before commas are removed so that `-1,000` is
/// reported as negative rather than malformed. Comma positions are not
/// validated: `1,0,0` is read as `100`.
pub(crate) fn normalize(input: &str) -> Result<Normalized, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::EmptyString);
    }
    if trimmed.starts_with('-') {
        return Err(AmountError::NegativeAmount);
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();

    if cleaned.contains(['e', 'E']) {
        return Ok(Normalized::Scientific(cleaned));
    }

    if !PLAIN_DECIMAL.is_match(&cleaned) {
        return Err(AmountError::invalid_format(format!(
            "'{}' is not a plain decimal number",
            trimmed
        )));
    }

    Ok(Normalized::Plain(cleaned))
}

/// Splits a grammar-checked decimal string at its point. The fractional half
/// is empty when there is no point.
pub(crate) fn split_decimal(value: &str) -> (&str, &str) {
    value.split_once('.').unwrap_or((value, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::ErrorCode;

    fn code(input: &str) -> ErrorCode {
        normalize(input).unwrap_err().code()
    }

    #[test]
    fn strips_whitespace_and_commas() {
        assert_eq!(
            normalize("  1,000.50\t").unwrap(),
            Normalized::Plain("1000.50".into())
        );
        assert_eq!(normalize("1,0,0").unwrap(), Normalized::Plain("100".into()));
    }

    #[test]
    fn detects_scientific_notation() {
        assert_eq!(
            normalize("1.5E-3").unwrap(),
            Normalized::Scientific("1.5E-3".into())
        );
        // Grammar is left to the expander.
        assert_eq!(normalize("abce").unwrap(), Normalized::Scientific("abce".into()));
    }

    #[test]
    fn rejects_empty_and_negative() {
        assert_eq!(code(""), ErrorCode::EmptyString);
        assert_eq!(code(" \n "), ErrorCode::EmptyString);
        assert_eq!(code("-1"), ErrorCode::NegativeAmount);
        assert_eq!(code(" -1,000"), ErrorCode::NegativeAmount);
    }

    #[test]
    fn rejects_malformed_plain_input() {
        for input in ["1.2.3", "abc", "$100", ".5", "5.", "1 000", "+5", "١٢", ","] {
            assert_eq!(code(input), ErrorCode::InvalidFormat, "input {input:?}");
        }
    }

    #[test]
    fn splits_on_point() {
        assert_eq!(split_decimal("12.034"), ("12", "034"));
        assert_eq!(split_decimal("12"), ("12", ""));
    }
}
