//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (limits, defaults)
//! - CLI option types and parsing
//! - The injected scoring configuration (weights, thresholds, keyword and
//!   TLD sets) consumed by the risk scorer and insight generator

mod constants;
mod scoring;
mod types;

pub use constants::*;
pub use scoring::{FactorRule, ScoringConfig};
pub use types::{Config, LogFormat, LogLevel};
