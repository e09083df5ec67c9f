//! Momentum intake checks.
//!
//! Two levels of validation, both run by the momentum pipeline rather than
//! by the policies themselves:
//!
//! - **Snapshot** ([`validate_snapshot`]): the frontier respects the
//!   parameter table's floors and ceilings before any policy reads it.
//! - **Declared parameters** ([`validate_next_params`]): a proposed
//!   momentum declares exactly the parameters recomputed from its parent.
//!   A mismatch rejects the momentum outright.

use crate::constants::PlasmaParams;
use crate::error::{MomentumError, SnapshotError};
use crate::traits::PlasmaPolicy;
use crate::types::{Momentum, MomentumParams};

/// Check a frontier snapshot against the parameter table.
///
/// Checks run in order: base price floor, base plasma ceiling, used plasma
/// covering base plasma, difficulty floor, recharge rate ceiling. The first
/// failure is returned.
pub fn validate_snapshot(frontier: &Momentum, params: &PlasmaParams) -> Result<(), SnapshotError> {
    if frontier.base_price < params.min_base_price {
        return Err(SnapshotError::BasePriceTooLow {
            got: frontier.base_price,
            min: params.min_base_price,
        });
    }
    if frontier.base_plasma > params.max_base_plasma_in_momentum {
        return Err(SnapshotError::BasePlasmaTooHigh {
            got: frontier.base_plasma,
            max: params.max_base_plasma_in_momentum,
        });
    }
    if frontier.used_plasma < frontier.base_plasma {
        return Err(SnapshotError::UsedPlasmaBelowBase {
            used: frontier.used_plasma,
            base: frontier.base_plasma,
        });
    }
    if frontier.difficulty_per_plasma < params.min_difficulty_per_plasma {
        return Err(SnapshotError::DifficultyPerPlasmaTooLow {
            got: frontier.difficulty_per_plasma,
            min: params.min_difficulty_per_plasma,
        });
    }
    if frontier.fusion_recharge_rate > params.max_fusion_recharge_rate {
        return Err(SnapshotError::RechargeRateTooHigh {
            got: frontier.fusion_recharge_rate,
            max: params.max_fusion_recharge_rate,
        });
    }
    Ok(())
}

/// Check that `declared` equals the deterministic recomputation from `frontier`.
///
/// The frontier is snapshot-validated first. Fields are compared in the
/// order base price, difficulty per plasma, fusion recharge rate.
pub fn validate_next_params<P: PlasmaPolicy + ?Sized>(
    policy: &P,
    frontier: &Momentum,
    declared: &MomentumParams,
) -> Result<(), MomentumError> {
    validate_snapshot(frontier, policy.params())?;
    let expected = policy.next_params(frontier)?;

    if declared.base_price != expected.base_price {
        return Err(MomentumError::InvalidBasePrice {
            got: declared.base_price,
            expected: expected.base_price,
        });
    }
    if declared.difficulty_per_plasma != expected.difficulty_per_plasma {
        return Err(MomentumError::InvalidDifficultyPerPlasma {
            got: declared.difficulty_per_plasma,
            expected: expected.difficulty_per_plasma,
        });
    }
    if declared.fusion_recharge_rate != expected.fusion_recharge_rate {
        return Err(MomentumError::InvalidFusionRechargeRate {
            got: declared.fusion_recharge_rate,
            expected: expected.fusion_recharge_rate,
        });
    }
    Ok(())
}
