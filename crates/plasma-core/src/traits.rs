//! Trait interface between the momentum pipeline and the policy engine.
//!
//! - [`PlasmaPolicy`]: per-momentum resource pricing (plasma-policy implements)

use crate::constants::PlasmaParams;
use crate::error::PolicyError;
use crate::types::{Momentum, MomentumParams, RechargeMultiplier};

/// Pure computation of the next momentum's resource parameters.
///
/// Every method is a deterministic function of the frontier snapshot and
/// the implementation's [`PlasmaParams`]. Implementations hold no mutable
/// state, so calls may run in any order or on any thread.
pub trait PlasmaPolicy: Send + Sync {
    /// The parameter table every policy reads.
    fn params(&self) -> &PlasmaParams;

    /// Fee floor for the next momentum. Never below `min_base_price`.
    fn base_price(&self, frontier: &Momentum) -> Result<u64, PolicyError>;

    /// PoW difficulty per plasma for the next momentum. Never below
    /// `min_difficulty_per_plasma`.
    fn difficulty_per_plasma(&self, frontier: &Momentum) -> Result<u64, PolicyError>;

    /// Desired recharge rate given the frontier's fullness.
    fn fusion_recharge_rate_target(&self, frontier: &Momentum) -> u64;

    /// Live recharge rate moved toward `target` by at most the change multiplier.
    fn fusion_recharge_rate(&self, frontier: &Momentum, target: u64) -> u64;

    /// Scale factor from the network recharge rate to an account's rate.
    fn address_recharge_multiplier(&self, fused_plasma: u64) -> RechargeMultiplier;

    /// All parameters the next momentum must declare.
    ///
    /// Default implementation evaluates the individual policies; the recharge
    /// rate is driven by [`fusion_recharge_rate_target`](Self::fusion_recharge_rate_target).
    fn next_params(&self, frontier: &Momentum) -> Result<MomentumParams, PolicyError> {
        let difficulty_per_plasma = self.difficulty_per_plasma(frontier)?;
        let base_price = self.base_price(frontier)?;
        let target = self.fusion_recharge_rate_target(frontier);
        let fusion_recharge_rate = self.fusion_recharge_rate(frontier, target);
        Ok(MomentumParams {
            base_price,
            difficulty_per_plasma,
            fusion_recharge_rate,
        })
    }
}
