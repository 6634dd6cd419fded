use serde::Serialize;
use std::fmt;

/// Stable, machine-matchable identifier for every [`AmountError`].
///
/// Callers branch on this rather than on the message text, which may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    EmptyString,
    InvalidFormat,
    NegativeAmount,
    ExcessivePrecision,
    InvalidDecimals,
    ScientificNotationPrecision,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EmptyString => "EMPTY_STRING",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::NegativeAmount => "NEGATIVE_AMOUNT",
            ErrorCode::ExcessivePrecision => "EXCESSIVE_PRECISION",
            ErrorCode::InvalidDecimals => "INVALID_DECIMALS",
            ErrorCode::ScientificNotationPrecision => "SCIENTIFIC_NOTATION_PRECISION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while converting between decimal amounts and base units.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount is empty")]
    EmptyString,
    #[error("Invalid amount format: {reason}")]
    InvalidFormat { reason: String },
    #[error("Negative amounts are not allowed")]
    NegativeAmount,
    #[error("Amount has {fractional_digits} decimal places but the token supports at most {decimals}")]
    ExcessivePrecision { fractional_digits: usize, decimals: u32 },
    #[error("Decimals must be an integer between 0 and {max}, got {got}")]
    InvalidDecimals { got: String, max: u32 },
    #[error("Scientific notation expands to {fractional_digits} decimal places but the token supports at most {decimals}")]
    ScientificNotationPrecision { fractional_digits: usize, decimals: u32 },
}

impl AmountError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AmountError::EmptyString => ErrorCode::EmptyString,
            AmountError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            AmountError::NegativeAmount => ErrorCode::NegativeAmount,
            AmountError::ExcessivePrecision { .. } => ErrorCode::ExcessivePrecision,
            AmountError::InvalidDecimals { .. } => ErrorCode::InvalidDecimals,
            AmountError::ScientificNotationPrecision { .. } => {
                ErrorCode::ScientificNotationPrecision
            }
        }
    }

    pub(crate) fn invalid_format(reason: impl Into<String>) -> Self {
        AmountError::InvalidFormat {
            reason: reason.into(),
        }
    }
}
