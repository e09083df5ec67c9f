//! # plasma-core
//! Foundation types and traits for the Plasma momentum fee policies.

pub mod constants;
pub mod error;
pub mod offset;
pub mod traits;
pub mod types;
pub mod validation;
