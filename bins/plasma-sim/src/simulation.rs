//! Spam-attack simulation over the momentum policies.
//!
//! Each round the harness intake-validates the frontier, asks the policy
//! for the next parameters and decides whether the attacker can still
//! afford to fill the momentum. While admitted, the attacker fills every
//! momentum and recharges its addresses at their per-address multiplier.
//! Once the base price prices the attacker out, momentums stay empty and
//! the price decays back.
//!
//! The run ends when the attacker's transaction budget is spent while still
//! admitted, or after `rounds` momentums.

use plasma_core::error::PlasmaError;
use plasma_core::traits::PlasmaPolicy;
use plasma_core::types::{Momentum, MomentumParams};
use plasma_core::validation::validate_snapshot;
use plasma_policy::account::{account_block_plasma_cost, fused_amount_to_plasma};
use serde::Serialize;
use tracing::debug;

use crate::config::SimConfig;

/// Outcome of a simulation run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AttackReport {
    /// Momentums simulated.
    pub rounds: u64,
    /// Whether the attacker spent its whole budget.
    pub completed: bool,
    /// Momentums the attacker filled.
    pub attacker_filled_momentums: u64,
    /// Mean per-address recharge rate over filled momentums, in plasma.
    pub average_recharge_rate: u64,
    /// Minutes during which holders below the cutoff were blocked.
    pub blocking_minutes: f64,
    /// Minutes until an attacker address is recharged, if it recharges at all.
    pub cooldown_minutes: Option<f64>,
    /// `blocking_minutes / cooldown_minutes`.
    pub bandwidth_ratio: Option<f64>,
    /// Parameters computed in the last round.
    pub final_params: MomentumParams,
}

/// Drives a [`PlasmaPolicy`] through the attack scenario in a [`SimConfig`].
pub struct AttackSimulation<'a, P: PlasmaPolicy + ?Sized> {
    policy: &'a P,
    config: SimConfig,
}

impl<'a, P: PlasmaPolicy + ?Sized> AttackSimulation<'a, P> {
    pub fn new(policy: &'a P, config: SimConfig) -> Self {
        Self { policy, config }
    }

    /// The frontier momentum the simulation starts from.
    pub fn initial_frontier(&self) -> Momentum {
        let cfg = &self.config;
        let params = self.policy.params();
        let base_plasma = cfg
            .initial_tx_count
            .saturating_mul(params.account_block_base_plasma);
        let used_plasma = (base_plasma as u128 * cfg.initial_base_price as u128
            / params.base_price_denominator.max(1) as u128)
            .min(u64::MAX as u128) as u64;
        let difficulty = (used_plasma as u128
            * cfg.initial_difficulty_per_plasma as u128
            * cfg.initial_pow_percent as u128
            / 100)
            .min(u64::MAX as u128) as u64;

        Momentum {
            base_price: cfg.initial_base_price,
            base_plasma,
            used_plasma,
            difficulty,
            difficulty_per_plasma: cfg.initial_difficulty_per_plasma,
            fusion_recharge_rate: cfg.initial_fusion_recharge_rate,
        }
    }

    /// Run the scenario to completion or until the round limit.
    pub fn run(&self) -> Result<AttackReport, PlasmaError> {
        let cfg = &self.config;
        let params = self.policy.params();

        let cutoff_plasma = fused_amount_to_plasma(cfg.cutoff_fused_units, params);
        let address_plasma = fused_amount_to_plasma(cfg.attacker_units_per_address, params);
        let multiplier = self.policy.address_recharge_multiplier(address_plasma);

        let mut frontier = self.initial_frontier();
        let mut attacker_txs = cfg.attacker_tx_budget() as i128;
        let mut filled: u64 = 0;
        let mut recharge_total: u128 = 0;
        let mut last = frontier.params();

        for round in 0..cfg.rounds {
            validate_snapshot(&frontier, params)?;
            let next = self.policy.next_params(&frontier)?;
            last = next;

            // The attacker can still send while one block costs less than the cutoff stake.
            let admitted = account_block_plasma_cost(next.base_price, params) < cutoff_plasma;
            let mut tx_count = cfg.momentum_tx_count;
            if admitted {
                attacker_txs -= tx_count as i128;
                recharge_total += multiplier.apply(next.fusion_recharge_rate) as u128;
                filled += 1;
            } else {
                tx_count = 0;
            }

            debug!(
                round = round + 1,
                base_price = next.base_price,
                difficulty_per_plasma = next.difficulty_per_plasma,
                fusion_recharge_rate = next.fusion_recharge_rate,
                admitted,
                attacker_txs_left = attacker_txs as i64,
                "simulated momentum"
            );

            if admitted && attacker_txs <= 0 {
                return Ok(self.report(round + 1, true, filled, recharge_total, next));
            }

            let base_plasma = tx_count
                .saturating_mul(params.account_block_base_plasma)
                .min(params.max_base_plasma_in_momentum);
            frontier = Momentum {
                base_price: next.base_price,
                base_plasma,
                used_plasma: base_plasma,
                difficulty: 0,
                difficulty_per_plasma: next.difficulty_per_plasma,
                fusion_recharge_rate: next.fusion_recharge_rate,
            };
        }

        Ok(self.report(cfg.rounds, false, filled, recharge_total, last))
    }

    fn report(
        &self,
        rounds: u64,
        completed: bool,
        filled: u64,
        recharge_total: u128,
        final_params: MomentumParams,
    ) -> AttackReport {
        let cfg = &self.config;
        let average_recharge_rate = recharge_total
            .checked_div(filled as u128)
            .unwrap_or(0)
            .min(u64::MAX as u128) as u64;

        // The momentum that exhausts the attacker budget is not counted as blocked.
        let blocking_momentums = if completed { rounds - 1 } else { rounds };

        // Durations are reporting only; nothing here feeds back into policy math.
        let blocking_minutes =
            blocking_momentums.saturating_mul(cfg.momentum_time_secs) as f64 / 60.0;
        let cooldown_minutes = (completed && average_recharge_rate > 0).then(|| {
            let units_per_momentum =
                average_recharge_rate as f64 / self.policy.params().plasma_per_fusion_unit as f64;
            let momentums = cfg.attacker_units_per_address as f64 / units_per_momentum;
            momentums * cfg.momentum_time_secs as f64 / 60.0
        });
        let bandwidth_ratio = cooldown_minutes.map(|cooldown| blocking_minutes / cooldown);

        AttackReport {
            rounds,
            completed,
            attacker_filled_momentums: filled,
            average_recharge_rate,
            blocking_minutes,
            cooldown_minutes,
            bandwidth_ratio,
            final_params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasma_core::constants::{NetworkType, PlasmaParams};
    use plasma_core::error::{PolicyError, SnapshotError};
    use plasma_policy::engine::PolicyEngine;

    fn engine() -> PolicyEngine {
        PolicyEngine::new(PlasmaParams::mainnet())
    }

    #[test]
    fn initial_frontier_matches_config() {
        let e = engine();
        let sim = AttackSimulation::new(&e, SimConfig::default());
        let m = sim.initial_frontier();
        assert_eq!(m.base_price, 1000);
        assert_eq!(m.base_plasma, 2_100_000);
        assert_eq!(m.used_plasma, 2_100_000);
        assert_eq!(m.difficulty, 420_000_000);
        assert_eq!(m.difficulty_per_plasma, 1000);
        assert_eq!(m.fusion_recharge_rate, 2100);
    }

    #[test]
    fn reference_scenario_completes() {
        let e = engine();
        let report = AttackSimulation::new(&e, SimConfig::default()).run().unwrap();
        assert!(report.completed);
        // 20_000 attacker txs at 200 per momentum.
        assert_eq!(report.attacker_filled_momentums, 100);
        assert_eq!(report.rounds, 176);
        assert_eq!(report.average_recharge_rate, 38);
        assert_eq!(
            report.final_params,
            MomentumParams {
                base_price: 4527,
                difficulty_per_plasma: 500,
                fusion_recharge_rate: 42,
            }
        );
        // 175 completed momentums of 10 s.
        assert!((report.blocking_minutes - 175.0 * 10.0 / 60.0).abs() < 1e-9);
        let ratio = report.bandwidth_ratio.unwrap();
        assert!(ratio > 0.0 && ratio < 1.0, "ratio {ratio}");
    }

    #[test]
    fn price_keeps_attacker_below_cutoff() {
        // Every admitted momentum must have been priced below the cutoff:
        // the final price, computed in an admitted round, stays below 5000.
        let e = engine();
        let report = AttackSimulation::new(&e, SimConfig::default()).run().unwrap();
        assert!(report.final_params.base_price < 5000);
    }

    #[test]
    fn round_limit_reports_incomplete() {
        let e = engine();
        let cfg = SimConfig {
            rounds: 10,
            ..SimConfig::default()
        };
        let report = AttackSimulation::new(&e, cfg).run().unwrap();
        assert!(!report.completed);
        assert_eq!(report.rounds, 10);
        assert_eq!(report.attacker_filled_momentums, 10);
        assert_eq!(report.cooldown_minutes, None);
        assert_eq!(report.bandwidth_ratio, None);
    }

    #[test]
    fn zero_rounds_reports_initial_params() {
        let e = engine();
        let cfg = SimConfig {
            rounds: 0,
            ..SimConfig::default()
        };
        let sim = AttackSimulation::new(&e, cfg);
        let report = sim.run().unwrap();
        assert_eq!(report.rounds, 0);
        assert_eq!(report.final_params, sim.initial_frontier().params());
    }

    #[test]
    fn invalid_initial_frontier_is_rejected() {
        let e = engine();
        let cfg = SimConfig {
            initial_base_price: 10,
            ..SimConfig::default()
        };
        let err = AttackSimulation::new(&e, cfg).run().unwrap_err();
        assert!(matches!(
            err,
            PlasmaError::Snapshot(SnapshotError::BasePriceTooLow { got: 10, min: 1000 })
        ));
    }

    #[test]
    fn large_cutoff_never_prices_out() {
        // Cutoff of 1_000 units = 2_100_000 plasma; price would need to reach 100_000.
        let e = engine();
        let cfg = SimConfig {
            attacker_fused_units: 400_000,
            cutoff_fused_units: 1000,
            ..SimConfig::default()
        };
        let report = AttackSimulation::new(&e, cfg).run().unwrap();
        assert!(report.completed);
        // 400 txs → two full momentums, both admitted.
        assert_eq!(report.attacker_filled_momentums, 2);
        assert_eq!(report.rounds, 2);
    }

    #[test]
    fn runs_on_devnet_table() {
        // Devnet momentums hold 20 base transactions; 200 requested are clamped.
        let e = PolicyEngine::for_network(NetworkType::Devnet);
        let cfg = SimConfig {
            initial_tx_count: 10,
            rounds: 50,
            ..SimConfig::default()
        };
        let report = AttackSimulation::new(&e, cfg).run().unwrap();
        assert_eq!(report.rounds, 50);
        assert!(report.final_params.base_price >= e.params().min_base_price);
    }

    #[test]
    fn policy_errors_propagate() {
        struct Failing(PlasmaParams);
        impl PlasmaPolicy for Failing {
            fn params(&self) -> &PlasmaParams {
                &self.0
            }
            fn base_price(&self, _: &Momentum) -> Result<u64, PolicyError> {
                Err(PolicyError::ZeroTarget)
            }
            fn difficulty_per_plasma(&self, f: &Momentum) -> Result<u64, PolicyError> {
                Ok(f.difficulty_per_plasma)
            }
            fn fusion_recharge_rate_target(&self, f: &Momentum) -> u64 {
                f.fusion_recharge_rate
            }
            fn fusion_recharge_rate(&self, _: &Momentum, target: u64) -> u64 {
                target
            }
            fn address_recharge_multiplier(
                &self,
                fused_plasma: u64,
            ) -> plasma_core::types::RechargeMultiplier {
                plasma_core::types::RechargeMultiplier {
                    fused_plasma,
                    denominator: 1,
                }
            }
        }
        let policy = Failing(PlasmaParams::mainnet());
        let err = AttackSimulation::new(&policy, SimConfig::default())
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            PlasmaError::Policy(PolicyError::ZeroTarget)
        ));
    }
}
