//! Shared frontier builders for scenario and adversarial tests.

use plasma_core::constants::{
    ACCOUNT_BLOCK_BASE_PLASMA, MAX_BASE_PLASMA_IN_MOMENTUM, MIN_BASE_PRICE,
    MIN_DIFFICULTY_PER_PLASMA, TARGET_BASE_PLASMA_IN_MOMENTUM,
};
use plasma_core::types::{Momentum, MomentumParams};

/// A frontier sitting exactly on the base plasma target with no PoW.
pub fn steady_frontier() -> Momentum {
    Momentum {
        base_price: MIN_BASE_PRICE,
        base_plasma: TARGET_BASE_PLASMA_IN_MOMENTUM,
        used_plasma: TARGET_BASE_PLASMA_IN_MOMENTUM,
        difficulty: 0,
        difficulty_per_plasma: 1000,
        fusion_recharge_rate: 2100,
    }
}

/// A frontier whose paid plasma comes from `tx_count` base account blocks.
///
/// `pow_plasma` extra plasma is covered by PoW at the frontier's
/// difficulty per plasma.
pub fn frontier_with_load(tx_count: u64, pow_plasma: u64, previous: &MomentumParams) -> Momentum {
    let base_plasma = tx_count
        .saturating_mul(ACCOUNT_BLOCK_BASE_PLASMA)
        .min(MAX_BASE_PLASMA_IN_MOMENTUM);
    Momentum {
        base_price: previous.base_price,
        base_plasma,
        used_plasma: base_plasma.saturating_add(pow_plasma),
        difficulty: pow_plasma.saturating_mul(previous.difficulty_per_plasma),
        difficulty_per_plasma: previous.difficulty_per_plasma,
        fusion_recharge_rate: previous.fusion_recharge_rate,
    }
}

/// A completely full momentum: base plasma at the ceiling, no PoW.
pub fn full_frontier(previous: &MomentumParams) -> Momentum {
    frontier_with_load(u64::MAX, 0, previous)
}

/// An empty momentum at the given parameters.
pub fn empty_frontier(previous: &MomentumParams) -> Momentum {
    frontier_with_load(0, 0, previous)
}

/// Parameters at every floor, the genesis-like starting point.
pub fn floor_params() -> MomentumParams {
    MomentumParams {
        base_price: MIN_BASE_PRICE,
        difficulty_per_plasma: MIN_DIFFICULTY_PER_PLASMA,
        fusion_recharge_rate: 2100,
    }
}
