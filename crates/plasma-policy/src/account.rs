//! Per-account fused plasma accounting.
//!
//! An account's fused plasma is consumed ("confined") when it sends account
//! blocks and recharges every confirmation at the network recharge rate
//! scaled by the account's [`RechargeMultiplier`]. The confirmation momentum
//! of the account's frontier block fixes the rate used.

use plasma_core::constants::PlasmaParams;
use plasma_core::traits::PlasmaPolicy;
use serde::{Deserialize, Serialize};

/// Inputs describing one account chain at the current frontier momentum.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AccountPlasmaState {
    /// Plasma backed by the account's fused stake.
    pub fused_plasma: u64,
    /// Plasma confined by blocks sent since the last full recharge.
    pub confined_plasma: u64,
    /// Fusion recharge rate of the momentum that confirmed the account's frontier block.
    pub confirmation_recharge_rate: u64,
    /// Momentums elapsed since that confirmation.
    pub confirmations: u64,
}

/// Breakdown of an account's fused plasma.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PlasmaBalance {
    pub fused: u64,
    pub recharged: u64,
    pub confined: u64,
    pub available: u64,
}

/// Plasma backed by `fused_units` of fused stake. Saturates at `u64::MAX`.
pub fn fused_amount_to_plasma(fused_units: u64, params: &PlasmaParams) -> u64 {
    fused_units.saturating_mul(params.plasma_per_fusion_unit)
}

/// Plasma one base account block costs at `base_price`.
///
/// # Examples
///
/// ```
/// use plasma_core::constants::PlasmaParams;
/// use plasma_policy::account::account_block_plasma_cost;
/// let params = PlasmaParams::mainnet();
/// assert_eq!(account_block_plasma_cost(1000, &params), 21_000);
/// assert_eq!(account_block_plasma_cost(2500, &params), 52_500);
/// ```
pub fn account_block_plasma_cost(base_price: u64, params: &PlasmaParams) -> u64 {
    if params.base_price_denominator == 0 {
        return u64::MAX;
    }
    let cost = params.account_block_base_plasma as u128 * base_price as u128
        / params.base_price_denominator as u128;
    cost.min(u64::MAX as u128) as u64
}

/// Smallest number of fusion units whose plasma covers one base account block.
pub fn min_fusion_units_for_block(base_price: u64, params: &PlasmaParams) -> u64 {
    if params.plasma_per_fusion_unit == 0 {
        return u64::MAX;
    }
    account_block_plasma_cost(base_price, params).div_ceil(params.plasma_per_fusion_unit)
}

/// Compute an account's available fused plasma.
///
/// 1. `recharged = min(confirmations * multiplier.apply(rate), fused)`
/// 2. `confined = confined_plasma - recharged` (floored at 0)
/// 3. `available = fused - confined` (floored at 0)
pub fn available_plasma<P: PlasmaPolicy + ?Sized>(
    policy: &P,
    state: &AccountPlasmaState,
) -> PlasmaBalance {
    let multiplier = policy.address_recharge_multiplier(state.fused_plasma);
    let per_confirmation = multiplier.apply(state.confirmation_recharge_rate);
    let recharged = state
        .confirmations
        .saturating_mul(per_confirmation)
        .min(state.fused_plasma);
    let confined = state.confined_plasma.saturating_sub(recharged);
    let available = state.fused_plasma.saturating_sub(confined);

    PlasmaBalance {
        fused: state.fused_plasma,
        recharged,
        confined,
        available,
    }
}
