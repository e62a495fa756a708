//! Helpers shared across indicator families.

pub mod math;
