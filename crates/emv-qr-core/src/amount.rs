//! Transaction amount (tag 54) conversion.
//!
//! Amounts are written as minor units with an implied two decimal places
//! (`12.50` -> `"1250"`). Payloads produced by other issuers often carry the
//! EMVCo literal form with a decimal point (`"10.00"`), which is accepted on read.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Implied number of decimal places.
pub const MINOR_UNIT_SCALE: u32 = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Negative amount: {0}")]
    Negative(Decimal),

    #[error("Amount out of range: {0}")]
    OutOfRange(Decimal),

    #[error("Not a non-negative amount: {0:?}")]
    Malformed(String),
}

/// Formats `amount` as its minor-unit digit string.
///
/// Rounds half away from zero at the second decimal place. Zero is `"0"`.
pub fn to_minor_units(amount: Decimal) -> Result<String, AmountError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AmountError::Negative(amount));
    }

    let minor = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(AmountError::OutOfRange(amount))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    Ok(minor.abs().normalize().to_string())
}

/// Parses a tag 54 value.
pub fn parse_amount(value: &str) -> Result<Decimal, AmountError> {
    let malformed = || AmountError::Malformed(value.to_string());

    let mut amount = match value.split_once('.') {
        None => {
            if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            let minor: i128 = value.parse().map_err(|_| malformed())?;
            Decimal::try_from_i128_with_scale(minor, MINOR_UNIT_SCALE).map_err(|_| malformed())?
        }
        Some((units, fraction)) => {
            let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
            if units.is_empty()
                || !digits(units)
                || fraction.is_empty()
                || fraction.len() > MINOR_UNIT_SCALE as usize
                || !digits(fraction)
            {
                return Err(malformed());
            }
            value.parse::<Decimal>().map_err(|_| malformed())?
        }
    };

    if amount.scale() < MINOR_UNIT_SCALE {
        amount.rescale(MINOR_UNIT_SCALE);
    }
    Ok(amount)
}
