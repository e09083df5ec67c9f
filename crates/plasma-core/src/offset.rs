//! Proportional feedback primitive shared by the price and PoW policies.
//!
//! Moves a multiplier toward closing the gap between an observed quantity
//! and its target:
//!
//! ```text
//! delta = current * (actual - target) / (target * change_denominator)
//! next  = max(current + delta, 0)
//! ```
//!
//! The division truncates toward zero. The product `current * |actual - target|`
//! can need up to 128 bits, so the whole computation runs on u128 magnitudes
//! with the sign handled by branch. No floating point is involved: every node
//! derives the same integer from the same inputs.

use crate::error::PolicyError;

/// Compute the next value of a feedback multiplier.
///
/// Returns `current` unchanged when `actual == target`. The result is never
/// negative: a decrease larger than `current` yields 0. An increase past
/// `u64::MAX` saturates there.
///
/// # Errors
///
/// - [`PolicyError::ZeroTarget`] if `target == 0`
/// - [`PolicyError::ZeroChangeDenominator`] if `change_denominator == 0`
///
/// # Examples
///
/// ```
/// use plasma_core::offset::target_offset_multiplier;
/// // 12.5% over target with denominator 8 → +1/64 of current.
/// assert_eq!(target_offset_multiplier(800, 900, 6400, 8).unwrap(), 6500);
/// assert_eq!(target_offset_multiplier(800, 800, 6400, 8).unwrap(), 6400);
/// ```
pub fn target_offset_multiplier(
    target: u64,
    actual: u64,
    current: u64,
    change_denominator: u64,
) -> Result<u64, PolicyError> {
    if target == 0 {
        return Err(PolicyError::ZeroTarget);
    }
    if change_denominator == 0 {
        return Err(PolicyError::ZeroChangeDenominator);
    }
    if actual == target {
        return Ok(current);
    }

    // Both factors are < 2^64, so each product is < 2^128.
    let denominator = target as u128 * change_denominator as u128;
    let current_wide = current as u128;

    if actual > target {
        let delta = current_wide * (actual - target) as u128 / denominator;
        // delta <= (2^64 - 1)^2, so adding current < 2^64 cannot wrap u128.
        Ok(u64::try_from(current_wide + delta).unwrap_or(u64::MAX))
    } else {
        let delta = current_wide * (target - actual) as u128 / denominator;
        Ok(current_wide.saturating_sub(delta) as u64)
    }
}
