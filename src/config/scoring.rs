//! Risk-scoring configuration.
//!
//! The weights, saturation thresholds, suspicious-keyword list, and high-risk
//! TLD set are plain data rather than hard-coded branches, so test suites can
//! substitute small fixed sets for deterministic assertions. The defaults
//! below are the published scoring table; composite scores are only
//! comparable across runs that share it.

use std::collections::{HashMap, HashSet};

use crate::scoring::RiskFactor;

/// Weight and normalization rule for a single risk factor.
///
/// A factor's raw value is divided by `saturation` and clamped to 1.0.
/// Factors without a saturation (e.g. TLD risk) score binary 0.0/1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorRule {
    /// Contribution of this factor to the weighted composite.
    pub weight: f64,
    /// Raw value at which the normalized factor saturates at 1.0.
    pub saturation: Option<f64>,
}

/// Injected configuration for the risk scorer and insight generator.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Per-factor weight and normalization rules.
    pub factors: HashMap<RiskFactor, FactorRule>,
    /// Keywords matched case-insensitively anywhere in the URL.
    pub suspicious_keywords: Vec<String>,
    /// Public suffixes commonly associated with malicious registrations.
    pub high_risk_tlds: HashSet<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let factors = HashMap::from([
            (
                RiskFactor::Length,
                FactorRule {
                    weight: 0.15,
                    saturation: Some(75.0),
                },
            ),
            (
                RiskFactor::SpecialChars,
                FactorRule {
                    weight: 0.20,
                    saturation: Some(10.0),
                },
            ),
            (
                RiskFactor::SubdomainDepth,
                FactorRule {
                    weight: 0.15,
                    saturation: Some(3.0),
                },
            ),
            (
                RiskFactor::PathDepth,
                FactorRule {
                    weight: 0.10,
                    saturation: Some(4.0),
                },
            ),
            (
                RiskFactor::SuspiciousKeywords,
                FactorRule {
                    weight: 0.25,
                    saturation: Some(3.0),
                },
            ),
            (
                RiskFactor::TldRisk,
                FactorRule {
                    weight: 0.15,
                    saturation: None,
                },
            ),
        ]);

        let suspicious_keywords = [
            "login",
            "signin",
            "verify",
            "security",
            "update",
            "account",
            "payment",
            "confirm",
            "password",
            "banking",
            "secure",
            "authenticate",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let high_risk_tlds = ["tk", "ml", "ga", "cf", "gq", "xyz", "work", "click", "bid"]
            .into_iter()
            .map(String::from)
            .collect();

        Self {
            factors,
            suspicious_keywords,
            high_risk_tlds,
        }
    }
}

impl ScoringConfig {
    /// Returns the rule for a factor, if configured.
    pub fn rule(&self, factor: RiskFactor) -> Option<&FactorRule> {
        self.factors.get(&factor)
    }

    /// Sum of all configured factor weights.
    ///
    /// The default table sums to 1.0, which is what keeps the composite
    /// score in [0,1].
    pub fn total_weight(&self) -> f64 {
        self.factors.values().map(|r| r.weight).sum()
    }
}
