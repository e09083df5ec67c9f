//! Simulation configuration.
//!
//! Provides [`SimConfig`] with defaults describing the reference spam
//! scenario: an attacker splitting 1,000,000 fused units into 50-unit
//! addresses, trying to price out everyone holding less than 50 units.

use std::path::Path;

use anyhow::{Context, Result};
use plasma_core::constants::PlasmaParams;
use serde::{Deserialize, Serialize};

/// Configuration for one attack simulation run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Transactions in the initial frontier momentum.
    pub initial_tx_count: u64,
    /// Base price of the initial frontier.
    pub initial_base_price: u64,
    /// Share of the initial frontier's plasma paid with PoW, in percent.
    pub initial_pow_percent: u64,
    /// Difficulty per plasma of the initial frontier.
    pub initial_difficulty_per_plasma: u64,
    /// Fusion recharge rate of the initial frontier.
    pub initial_fusion_recharge_rate: u64,
    /// Total fusion units the attacker controls.
    pub attacker_fused_units: u64,
    /// Fusion units the attacker keeps in each address.
    pub attacker_units_per_address: u64,
    /// Accounts with less than this many fused units should be priced out.
    pub cutoff_fused_units: u64,
    /// Transactions filling each momentum while the attacker is admitted.
    pub momentum_tx_count: u64,
    /// Upper bound on simulated momentums.
    pub rounds: u64,
    /// Seconds between momentums, for reporting durations.
    pub momentum_time_secs: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_tx_count: 100,
            initial_base_price: 1000,
            initial_pow_percent: 20,
            initial_difficulty_per_plasma: 1000,
            initial_fusion_recharge_rate: 2100,
            attacker_fused_units: 1_000_000,
            attacker_units_per_address: 50,
            cutoff_fused_units: 50,
            momentum_tx_count: 200,
            rounds: 5000,
            momentum_time_secs: 10,
        }
    }
}

impl SimConfig {
    /// Attacker transactions available: one per cutoff-sized slice of stake.
    pub fn attacker_tx_budget(&self) -> u64 {
        self.attacker_fused_units
            .checked_div(self.cutoff_fused_units)
            .unwrap_or(0)
    }
}

/// Load a custom parameter table from a JSON file.
pub fn load_params(path: &Path) -> Result<PlasmaParams> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read params file {}", path.display()))?;
    PlasmaParams::from_json_str(&json)
        .with_context(|| format!("invalid params file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_attack_budget() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.attacker_tx_budget(), 20_000);
    }

    #[test]
    fn zero_cutoff_has_no_budget() {
        let cfg = SimConfig {
            cutoff_fused_units: 0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.attacker_tx_budget(), 0);
    }

    #[test]
    fn load_params_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = PlasmaParams {
            min_base_price: 2000,
            ..PlasmaParams::mainnet()
        };
        write!(file, "{}", serde_json::to_string(&custom).unwrap()).unwrap();
        assert_eq!(load_params(file.path()).unwrap(), custom);
    }

    #[test]
    fn load_params_rejects_invalid_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let bad = PlasmaParams {
            target_base_plasma_in_momentum: 0,
            ..PlasmaParams::mainnet()
        };
        write!(file, "{}", serde_json::to_string(&bad).unwrap()).unwrap();
        let err = load_params(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("target_base_plasma_in_momentum"));
    }

    #[test]
    fn load_params_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_params(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read params file"));
    }
}
