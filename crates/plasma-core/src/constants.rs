//! Protocol constants and per-network parameter tables.
//!
//! All plasma quantities are integer plasma units. Prices are fixed-point
//! with [`BASE_PRICE_DENOMINATOR`] as the scale (1000 = 1.0×).
//!
//! The `pub const` items below are the mainnet values. Policies never read
//! them directly: every policy call receives a [`PlasmaParams`] table, so a
//! test network is just another instance of that table.

use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

pub const TARGET_BASE_PLASMA_ELASTICITY: u64 = 2;

/// Capacity ceiling for paid plasma in one momentum (200 base transactions).
pub const MAX_BASE_PLASMA_IN_MOMENTUM: u64 = 4_200_000;

/// Price feedback target: 50% of [`MAX_BASE_PLASMA_IN_MOMENTUM`].
pub const TARGET_BASE_PLASMA_IN_MOMENTUM: u64 =
    MAX_BASE_PLASMA_IN_MOMENTUM / TARGET_BASE_PLASMA_ELASTICITY;

/// Share of used plasma PoW may cover once paid demand reaches the target.
pub const TARGET_POW_PLASMA_PERCENT_IN_MOMENTUM: u64 = 20;

/// Ceiling of the network-wide fusion recharge rate (100 QSR/confirmation).
pub const MAX_FUSION_RECHARGE_RATE: u64 = 210_000;

pub const BASE_PRICE_CHANGE_DENOMINATOR: u64 = 8;
pub const DIFFICULTY_PER_PLASMA_CHANGE_DENOMINATOR: u64 = 8;

/// Maximum per-momentum change factor of the recharge rate (-50% / +100%).
pub const PLASMA_RECHARGE_RATE_CHANGE_MULTIPLIER: u64 = 2;

pub const ACCOUNT_PLASMA_RECHARGE_RATE_DENOMINATOR: u64 = 210_000;

/// Nominal plasma cost of one account block.
pub const ACCOUNT_BLOCK_BASE_PLASMA: u64 = 21_000;
pub const NUM_FUSION_UNITS_FOR_BASE_PLASMA: u64 = 10;
pub const PLASMA_PER_FUSION_UNIT: u64 =
    ACCOUNT_BLOCK_BASE_PLASMA / NUM_FUSION_UNITS_FOR_BASE_PLASMA;

pub const MIN_DIFFICULTY_PER_PLASMA: u64 = 500;
pub const MIN_BASE_PRICE: u64 = 1000;
pub const BASE_PRICE_DENOMINATOR: u64 = 1000;

/// Immutable parameter table injected into every policy call.
///
/// One instance per network. Field names mirror the constants above.
///
/// # Examples
///
/// ```
/// use plasma_core::constants::{PlasmaParams, MIN_BASE_PRICE};
/// let params = PlasmaParams::mainnet();
/// assert_eq!(params.min_base_price, MIN_BASE_PRICE);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlasmaParams {
    pub max_base_plasma_in_momentum: u64,
    pub target_base_plasma_in_momentum: u64,
    pub target_pow_plasma_percent_in_momentum: u64,
    pub max_fusion_recharge_rate: u64,
    pub base_price_change_denominator: u64,
    pub difficulty_per_plasma_change_denominator: u64,
    pub plasma_recharge_rate_change_multiplier: u64,
    pub account_plasma_recharge_rate_denominator: u64,
    pub account_block_base_plasma: u64,
    pub plasma_per_fusion_unit: u64,
    pub min_difficulty_per_plasma: u64,
    pub min_base_price: u64,
    pub base_price_denominator: u64,
}

impl PlasmaParams {
    /// The production parameter table.
    pub const fn mainnet() -> Self {
        Self {
            max_base_plasma_in_momentum: MAX_BASE_PLASMA_IN_MOMENTUM,
            target_base_plasma_in_momentum: TARGET_BASE_PLASMA_IN_MOMENTUM,
            target_pow_plasma_percent_in_momentum: TARGET_POW_PLASMA_PERCENT_IN_MOMENTUM,
            max_fusion_recharge_rate: MAX_FUSION_RECHARGE_RATE,
            base_price_change_denominator: BASE_PRICE_CHANGE_DENOMINATOR,
            difficulty_per_plasma_change_denominator: DIFFICULTY_PER_PLASMA_CHANGE_DENOMINATOR,
            plasma_recharge_rate_change_multiplier: PLASMA_RECHARGE_RATE_CHANGE_MULTIPLIER,
            account_plasma_recharge_rate_denominator: ACCOUNT_PLASMA_RECHARGE_RATE_DENOMINATOR,
            account_block_base_plasma: ACCOUNT_BLOCK_BASE_PLASMA,
            plasma_per_fusion_unit: PLASMA_PER_FUSION_UNIT,
            min_difficulty_per_plasma: MIN_DIFFICULTY_PER_PLASMA,
            min_base_price: MIN_BASE_PRICE,
            base_price_denominator: BASE_PRICE_DENOMINATOR,
        }
    }

    /// Parse a parameter table from JSON and validate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use plasma_core::constants::PlasmaParams;
    /// let json = serde_json::to_string(&PlasmaParams::mainnet()).unwrap();
    /// assert_eq!(PlasmaParams::from_json_str(&json).unwrap(), PlasmaParams::mainnet());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let params: Self =
            serde_json::from_str(json).map_err(|e| ParamsError::Parse(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Reject tables that would break a policy precondition.
    ///
    /// A table passing this check guarantees that no policy divides by zero
    /// for any snapshot accepted by
    /// [`validate_snapshot`](crate::validation::validate_snapshot).
    pub fn validate(&self) -> Result<(), ParamsError> {
        let non_zero = [
            ("max_base_plasma_in_momentum", self.max_base_plasma_in_momentum),
            ("target_base_plasma_in_momentum", self.target_base_plasma_in_momentum),
            ("base_price_change_denominator", self.base_price_change_denominator),
            (
                "difficulty_per_plasma_change_denominator",
                self.difficulty_per_plasma_change_denominator,
            ),
            (
                "account_plasma_recharge_rate_denominator",
                self.account_plasma_recharge_rate_denominator,
            ),
            ("plasma_per_fusion_unit", self.plasma_per_fusion_unit),
            ("min_difficulty_per_plasma", self.min_difficulty_per_plasma),
            ("min_base_price", self.min_base_price),
            ("base_price_denominator", self.base_price_denominator),
        ];
        if let Some((name, _)) = non_zero.iter().find(|(_, value)| *value == 0) {
            return Err(ParamsError::ZeroValue(*name));
        }
        if self.target_base_plasma_in_momentum > self.max_base_plasma_in_momentum {
            return Err(ParamsError::TargetExceedsMax {
                target: self.target_base_plasma_in_momentum,
                max: self.max_base_plasma_in_momentum,
            });
        }
        if self.target_pow_plasma_percent_in_momentum > 100 {
            return Err(ParamsError::PercentOutOfRange(
                self.target_pow_plasma_percent_in_momentum,
            ));
        }
        if self.plasma_recharge_rate_change_multiplier < 2 {
            return Err(ParamsError::ChangeMultiplierTooSmall(
                self.plasma_recharge_rate_change_multiplier,
            ));
        }
        Ok(())
    }
}

impl Default for PlasmaParams {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Network type: Mainnet, Testnet, or Devnet.
///
/// Selects the parameter table handed to the policies.
///
/// # Examples
///
/// ```
/// use plasma_core::constants::NetworkType;
/// let net = NetworkType::default();
/// assert_eq!(net, NetworkType::Mainnet);
/// assert_eq!(net.params().min_difficulty_per_plasma, 500);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Production network.
    #[default]
    Mainnet,
    /// Public test network with a lower PoW floor.
    Testnet,
    /// Local development network: tiny momentums, minimal PoW floor.
    Devnet,
}

impl NetworkType {
    /// Parameter table for this network.
    ///
    /// # Examples
    ///
    /// ```
    /// use plasma_core::constants::NetworkType;
    /// assert_eq!(NetworkType::Testnet.params().min_difficulty_per_plasma, 100);
    /// assert_eq!(NetworkType::Devnet.params().max_base_plasma_in_momentum, 420_000);
    /// ```
    pub fn params(&self) -> PlasmaParams {
        let mainnet = PlasmaParams::mainnet();
        match self {
            Self::Mainnet => mainnet,
            Self::Testnet => PlasmaParams {
                min_difficulty_per_plasma: 100,
                ..mainnet
            },
            Self::Devnet => PlasmaParams {
                max_base_plasma_in_momentum: 420_000,
                target_base_plasma_in_momentum: 420_000 / TARGET_BASE_PLASMA_ELASTICITY,
                min_difficulty_per_plasma: 1,
                ..mainnet
            },
        }
    }

    /// Lowercase network name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
        }
    }
}
