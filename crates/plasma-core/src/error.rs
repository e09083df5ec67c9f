//! Error types for the Plasma policies.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("offset target is zero")] ZeroTarget,
    #[error("change denominator is zero")] ZeroChangeDenominator,
    #[error("snapshot difficulty per plasma is zero")] ZeroDifficultyPerPlasma,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("base price too low: {got} < {min}")] BasePriceTooLow { got: u64, min: u64 },
    #[error("base plasma too high: {got} > {max}")] BasePlasmaTooHigh { got: u64, max: u64 },
    #[error("used plasma {used} below base plasma {base}")] UsedPlasmaBelowBase { used: u64, base: u64 },
    #[error("difficulty per plasma too low: {got} < {min}")] DifficultyPerPlasmaTooLow { got: u64, min: u64 },
    #[error("fusion recharge rate too high: {got} > {max}")] RechargeRateTooHigh { got: u64, max: u64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MomentumError {
    #[error("invalid base price: got {got}, expected {expected}")] InvalidBasePrice { got: u64, expected: u64 },
    #[error("invalid difficulty per plasma: got {got}, expected {expected}")] InvalidDifficultyPerPlasma { got: u64, expected: u64 },
    #[error("invalid fusion recharge rate: got {got}, expected {expected}")] InvalidFusionRechargeRate { got: u64, expected: u64 },
    #[error("invalid frontier: {0}")] Snapshot(#[from] SnapshotError),
    #[error("policy failure: {0}")] Policy(#[from] PolicyError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("{0} must be non-zero")] ZeroValue(&'static str),
    #[error("target base plasma {target} exceeds max {max}")] TargetExceedsMax { target: u64, max: u64 },
    #[error("pow plasma percent out of range: {0}")] PercentOutOfRange(u64),
    #[error("recharge rate change multiplier too small: {0}")] ChangeMultiplierTooSmall(u64),
    #[error("parse: {0}")] Parse(String),
}

#[derive(Error, Debug)]
pub enum PlasmaError {
    #[error(transparent)] Policy(#[from] PolicyError),
    #[error(transparent)] Snapshot(#[from] SnapshotError),
    #[error(transparent)] Momentum(#[from] MomentumError),
    #[error(transparent)] Params(#[from] ParamsError),
}
