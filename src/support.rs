//! Crate-level utilities shared by the models.
//!
//! These modules are public because they are useful to callers building
//! inputs, but their APIs are not stable.

pub mod constraint;
pub mod units;
