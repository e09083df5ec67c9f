//! Adversarial test suite for the Plasma momentum policies.
//!
//! Integration tests that drive the policy engine the way the momentum
//! intake does, then try to break its invariants from an attacker's
//! perspective: price floors, bounded steps, monotonic feedback and
//! reproducibility across independent evaluators.

pub mod helpers;
