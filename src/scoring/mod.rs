//! Weighted heuristic risk scoring.
//!
//! Maps a `StructuralAnalysis` to per-factor normalized scores in [0,1] and
//! a single weighted composite, driven entirely by the injected
//! `ScoringConfig`. With the default table the weights sum to 1.0 and every
//! factor is clamped, so the composite is in [0,1] by construction.
//!
//! This heuristic score is deliberately never fused with the external
//! classifier's probability; the two are surfaced side by side.

use std::collections::HashMap;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::config::{FactorRule, ScoringConfig};
use crate::structure::StructuralAnalysis;

/// The six structural risk factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum RiskFactor {
    /// Overall URL length.
    Length,
    /// Characters outside [a-zA-Z0-9./-].
    SpecialChars,
    /// Dot-separated subdomain labels.
    SubdomainDepth,
    /// Non-empty path segments.
    PathDepth,
    /// Suspicious keyword hits.
    SuspiciousKeywords,
    /// Membership of the TLD in the high-risk set.
    TldRisk,
}

impl RiskFactor {
    /// Short human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::Length => "URL Length",
            RiskFactor::SpecialChars => "Special Chars",
            RiskFactor::SubdomainDepth => "Subdomain",
            RiskFactor::PathDepth => "Path Depth",
            RiskFactor::SuspiciousKeywords => "Keywords",
            RiskFactor::TldRisk => "TLD Risk",
        }
    }
}

/// Normalized per-factor scores, each in [0,1].
pub type RiskFactorScores = HashMap<RiskFactor, f64>;

/// Computes per-factor scores and the weighted composite.
///
/// Returns `(composite_score, factor_scores)`. Factors absent from the
/// configuration contribute nothing.
pub fn calculate_risk_score(
    analysis: &StructuralAnalysis,
    config: &ScoringConfig,
) -> (f64, RiskFactorScores) {
    let mut scores = RiskFactorScores::new();
    let mut composite = 0.0;

    for factor in RiskFactor::iter() {
        let Some(rule) = config.rule(factor) else {
            continue;
        };
        let score = normalized_score(factor, analysis, rule, config);
        composite += rule.weight * score;
        scores.insert(factor, score);
    }

    (composite, scores)
}

/// Normalizes one factor's raw value to [0,1].
fn normalized_score(
    factor: RiskFactor,
    analysis: &StructuralAnalysis,
    rule: &FactorRule,
    config: &ScoringConfig,
) -> f64 {
    match factor {
        RiskFactor::Length => saturate(analysis.url_length as f64, rule.saturation),
        RiskFactor::SpecialChars => saturate(analysis.special_char_count as f64, rule.saturation),
        RiskFactor::SubdomainDepth => saturate(analysis.subdomain_depth as f64, rule.saturation),
        RiskFactor::PathDepth => saturate(analysis.path_depth as f64, rule.saturation),
        RiskFactor::SuspiciousKeywords => {
            saturate(analysis.found_keywords.len() as f64, rule.saturation)
        }
        RiskFactor::TldRisk => {
            if config.high_risk_tlds.contains(&analysis.tld) {
                1.0
            } else {
                0.0
            }
        }
    }
}

/// `min(value / saturation, 1.0)`; 0.0 when no saturation is configured.
fn saturate(value: f64, saturation: Option<f64>) -> f64 {
    match saturation {
        Some(s) if s > 0.0 => (value / s).min(1.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
