//! Policy engine implementing the [`PlasmaPolicy`] trait.
//!
//! Provides the production feedback controllers for base price, PoW
//! difficulty per plasma and fusion recharge rate. All arithmetic is
//! integer-only with u128 intermediates for overflow safety.

use plasma_core::constants::{NetworkType, PlasmaParams};
use plasma_core::error::{ParamsError, PolicyError};
use plasma_core::offset::target_offset_multiplier;
use plasma_core::traits::PlasmaPolicy;
use plasma_core::types::{Momentum, MomentumParams, RechargeMultiplier};
use tracing::{debug, trace};

use crate::power::{POWER_PRECISION, decay_factor};

/// The production policy engine.
///
/// Implements [`PlasmaPolicy`] with:
/// - Offset-multiplier feedback for base price and difficulty per plasma
/// - Congestion-dependent PoW target (full usage below target, a percentage above)
/// - Fixed-point exponential recharge target with bounded-step convergence
///
/// Holds only its parameter table; cloning or sharing across threads is free
/// of side effects.
#[derive(Debug, Clone, Default)]
pub struct PolicyEngine {
    params: PlasmaParams,
}

impl PolicyEngine {
    /// Create an engine over an explicit parameter table.
    ///
    /// The table must already satisfy [`PlasmaParams::validate`]; built-in
    /// network tables and [`PlasmaParams::from_json_str`] output always do.
    /// Use [`PolicyEngine::try_new`] for tables from anywhere else.
    pub fn new(params: PlasmaParams) -> Self {
        debug_assert!(params.validate().is_ok(), "unvalidated parameter table: {params:?}");
        Self { params }
    }

    /// Validate `params`, then create an engine over it.
    pub fn try_new(params: PlasmaParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Create an engine over a network's built-in table.
    pub fn for_network(network: NetworkType) -> Self {
        Self::new(network.params())
    }

    /// The plasma amount PoW is expected to cover for this frontier.
    ///
    /// At or above the base plasma target only
    /// `target_pow_plasma_percent_in_momentum` percent of used plasma; below
    /// it, all of it.
    pub fn pow_plasma_target(&self, frontier: &Momentum) -> u64 {
        if frontier.base_plasma >= self.params.target_base_plasma_in_momentum {
            // percent <= 100 for validated tables, so the result fits u64.
            let scaled = frontier.used_plasma as u128
                * self.params.target_pow_plasma_percent_in_momentum as u128
                / 100;
            scaled.min(u64::MAX as u128) as u64
        } else {
            frontier.used_plasma
        }
    }
}

impl PlasmaPolicy for PolicyEngine {
    fn params(&self) -> &PlasmaParams {
        &self.params
    }

    fn base_price(&self, frontier: &Momentum) -> Result<u64, PolicyError> {
        let price = target_offset_multiplier(
            self.params.target_base_plasma_in_momentum,
            frontier.base_plasma,
            frontier.base_price,
            self.params.base_price_change_denominator,
        )?;
        let price = price.max(self.params.min_base_price);
        trace!(
            base_plasma = frontier.base_plasma,
            from = frontier.base_price,
            to = price,
            "base price"
        );
        Ok(price)
    }

    fn difficulty_per_plasma(&self, frontier: &Momentum) -> Result<u64, PolicyError> {
        let current = frontier.difficulty_per_plasma;
        let actual = frontier
            .pow_plasma()
            .ok_or(PolicyError::ZeroDifficultyPerPlasma)?;
        let target = self.pow_plasma_target(frontier);

        // Nothing consumed: no feedback signal, keep the current difficulty.
        if target == 0 {
            return Ok(current.max(self.params.min_difficulty_per_plasma));
        }

        let next = target_offset_multiplier(
            target,
            actual,
            current,
            self.params.difficulty_per_plasma_change_denominator,
        )?;
        let next = next.max(self.params.min_difficulty_per_plasma);
        trace!(target, actual, from = current, to = next, "difficulty per plasma");
        Ok(next)
    }

    fn fusion_recharge_rate_target(&self, frontier: &Momentum) -> u64 {
        let factor = decay_factor(frontier.base_plasma, self.params.max_base_plasma_in_momentum);
        // max_fusion_recharge_rate * factor < 2^64 * 2^40, fits u128.
        (self.params.max_fusion_recharge_rate as u128 * factor as u128 / POWER_PRECISION as u128)
            as u64
    }

    fn fusion_recharge_rate(&self, frontier: &Momentum, target: u64) -> u64 {
        let current = frontier.fusion_recharge_rate;
        let step = self.params.plasma_recharge_rate_change_multiplier;
        if current > target {
            // A zero step cannot come from a validated table; hold the rate.
            current.checked_div(step).unwrap_or(current).max(target)
        } else if current < target {
            current.saturating_mul(step).min(target)
        } else {
            current
        }
    }

    fn address_recharge_multiplier(&self, fused_plasma: u64) -> RechargeMultiplier {
        RechargeMultiplier {
            fused_plasma,
            denominator: self.params.account_plasma_recharge_rate_denominator,
        }
    }

    fn next_params(&self, frontier: &Momentum) -> Result<MomentumParams, PolicyError> {
        let difficulty_per_plasma = self.difficulty_per_plasma(frontier)?;
        let base_price = self.base_price(frontier)?;
        let recharge_target = self.fusion_recharge_rate_target(frontier);
        let fusion_recharge_rate = self.fusion_recharge_rate(frontier, recharge_target);

        debug!(
            base_price,
            difficulty_per_plasma,
            fusion_recharge_rate,
            recharge_target,
            "computed next momentum params"
        );

        Ok(MomentumParams {
            base_price,
            difficulty_per_plasma,
            fusion_recharge_rate,
        })
    }
}
