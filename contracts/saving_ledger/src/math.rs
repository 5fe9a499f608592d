//! Stateless yield estimate.

use saving_errors::SavingError;

/// Estimated yield: `(days / specified_year) * amount`.
///
/// Evaluated as `days * amount / specified_year` in integer base units so
/// the division truncates once, at the end.
pub fn yield_estimate(days: u32, amount: i128, specified_year: u32) -> Result<i128, SavingError> {
    if specified_year == 0 {
        return Err(SavingError::DivisionByZero);
    }
    if amount < 0 {
        return Err(SavingError::InvalidAmount);
    }
    let scaled = (days as i128)
        .checked_mul(amount)
        .ok_or(SavingError::Overflow)?;
    scaled
        .checked_div(specified_year as i128)
        .ok_or(SavingError::DivisionByZero)
}
