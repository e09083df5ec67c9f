//! Core protocol types: the frontier snapshot and the parameters it yields.
//!
//! All numeric fields use u64 per protocol convention.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Read-only snapshot of a confirmed momentum.
///
/// Produced by the momentum intake once per confirmed momentum. Policies
/// consume it and never mutate it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Momentum {
    /// Fee floor in effect for this momentum.
    pub base_price: u64,
    /// Paid plasma consumed by the momentum.
    pub base_plasma: u64,
    /// Total plasma consumed (paid + PoW). Never below `base_plasma`.
    pub used_plasma: u64,
    /// Total PoW work expended in the momentum.
    pub difficulty: u64,
    /// PoW work required per unit of PoW-covered plasma.
    pub difficulty_per_plasma: u64,
    /// Live network-wide fusion recharge rate.
    pub fusion_recharge_rate: u64,
}

impl Momentum {
    /// Plasma actually paid for with PoW: `difficulty / difficulty_per_plasma`.
    ///
    /// Returns `None` when `difficulty_per_plasma` is zero.
    pub fn pow_plasma(&self) -> Option<u64> {
        self.difficulty.checked_div(self.difficulty_per_plasma)
    }

    /// The parameters this momentum declared.
    pub fn params(&self) -> MomentumParams {
        MomentumParams {
            base_price: self.base_price,
            difficulty_per_plasma: self.difficulty_per_plasma,
            fusion_recharge_rate: self.fusion_recharge_rate,
        }
    }
}

/// Parameters the next momentum must declare.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MomentumParams {
    pub base_price: u64,
    pub difficulty_per_plasma: u64,
    pub fusion_recharge_rate: u64,
}

impl fmt::Display for MomentumParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base_price={} difficulty_per_plasma={} fusion_recharge_rate={}",
            self.base_price, self.difficulty_per_plasma, self.fusion_recharge_rate
        )
    }
}

/// Per-account recharge multiplier `fused_plasma / denominator`.
///
/// Kept as an exact rational so the scaled rate is reproducible on every
/// node. Not capped: an account fusing `k` times the denominator recharges
/// at `k` times the network rate.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RechargeMultiplier {
    pub fused_plasma: u64,
    pub denominator: u64,
}

impl RechargeMultiplier {
    /// Scale a network recharge rate to this account: `rate * fused / denominator`.
    ///
    /// Uses a u128 intermediate and saturates at `u64::MAX`. A zero
    /// denominator yields 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use plasma_core::types::RechargeMultiplier;
    /// let half = RechargeMultiplier { fused_plasma: 105_000, denominator: 210_000 };
    /// assert_eq!(half.apply(2100), 1050);
    /// ```
    pub fn apply(&self, rate: u64) -> u64 {
        if self.denominator == 0 {
            return 0;
        }
        let scaled = rate as u128 * self.fused_plasma as u128 / self.denominator as u128;
        scaled.min(u64::MAX as u128) as u64
    }

    /// Whether the account recharges at least at the full network rate.
    pub fn is_full_rate(&self) -> bool {
        self.fused_plasma >= self.denominator
    }

    /// Approximate value for display only. Never feed this back into consensus math.
    pub fn approx(&self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        self.fused_plasma as f64 / self.denominator as f64
    }
}

impl fmt::Display for RechargeMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.fused_plasma, self.denominator)
    }
}
