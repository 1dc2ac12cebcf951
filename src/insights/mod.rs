//! Human-readable security insights.
//!
//! Converts raw structural observations into categorized findings. These are
//! fixed threshold checks on raw values, independent of the weighted
//! composite score. Each check fires at most once; a non-firing check emits
//! nothing rather than a "low risk" placeholder.

use crate::config::ScoringConfig;
use crate::scoring::RiskFactor;
use crate::structure::StructuralAnalysis;

/// Findings bucketed by severity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightReport {
    /// High-risk findings.
    pub high: Vec<String>,
    /// Moderate-risk findings.
    pub moderate: Vec<String>,
    /// Positive observations.
    pub positive: Vec<String>,
}

impl InsightReport {
    /// True when no finding of any severity was produced.
    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.moderate.is_empty() && self.positive.is_empty()
    }
}

/// Threshold for a factor, taken from its configured saturation.
fn threshold(config: &ScoringConfig, factor: RiskFactor) -> Option<f64> {
    config.rule(factor).and_then(|r| r.saturation)
}

/// Generates categorized insights from a structural analysis.
pub fn generate_insights(analysis: &StructuralAnalysis, config: &ScoringConfig) -> InsightReport {
    let mut report = InsightReport::default();

    if let Some(limit) = threshold(config, RiskFactor::Length) {
        if analysis.url_length as f64 > limit {
            report.high.push(
                "Unusually long URL length which is often associated with phishing attempts"
                    .to_string(),
            );
        }
    }

    if let Some(limit) = threshold(config, RiskFactor::SpecialChars) {
        if analysis.special_char_count as f64 > limit {
            report.high.push(
                "High number of special characters which may be used to obfuscate malicious URLs"
                    .to_string(),
            );
        }
    }

    if let Some(limit) = threshold(config, RiskFactor::SubdomainDepth) {
        if analysis.subdomain_depth as f64 > limit {
            report
                .moderate
                .push("Multiple subdomain levels which could indicate URL manipulation".to_string());
        }
    }

    if !analysis.found_keywords.is_empty() {
        report.moderate.push(format!(
            "Contains suspicious keywords: {}",
            analysis.found_keywords.join(", ")
        ));
    }

    if config.high_risk_tlds.contains(&analysis.tld) {
        report.high.push(format!(
            "Uses a high-risk TLD ({}) commonly associated with malicious websites",
            analysis.tld
        ));
    }

    if analysis.has_ip_address {
        report.high.push(
            "Uses an IP address instead of a domain name, which is suspicious for legitimate websites"
                .to_string(),
        );
    }

    if analysis.uses_https {
        report
            .positive
            .push("Uses HTTPS protocol for secure communication".to_string());
    }

    if !analysis.excessive_dots {
        report
            .positive
            .push("Normal number of dots in the domain name".to_string());
    }

    report
}
