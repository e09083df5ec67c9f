//! # plasma-policy: per-momentum resource pricing engine.
//!
//! All calculations use integer arithmetic only for determinism.
//!
//! This crate implements the feedback controllers that derive the next
//! momentum's parameters from its parent:
//! - **Base price**: proportional feedback toward half-full momentums,
//!   floored at `min_base_price`.
//! - **PoW difficulty per plasma**: proportional feedback toward a PoW share
//!   that shrinks to 20% of consumption once paid demand reaches the target.
//! - **Fusion recharge**: a target rate decaying as `10000^-fullness`
//!   (fixed-point table), approached by at most a factor of 2 per momentum.
//! - **Account plasma**: per-account recharge scaled by fused plasma.

pub mod account;
pub mod engine;
pub mod power;

pub use account::{AccountPlasmaState, PlasmaBalance, available_plasma};
pub use engine::PolicyEngine;
pub use power::POWER_PRECISION;
