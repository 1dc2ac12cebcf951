//! Whole-URL risk assessment.
//!
//! Ties the pipeline together: structural analysis feeds the weighted
//! scorer and the insight generator, while the feature extractor feeds the
//! external classifier. The heuristic composite and the ML probability are
//! kept as two parallel outputs; they are never fused into one number.
//!
//! Precondition: the URL has passed `app::url::validate_and_normalize_url`.
//! Malformed components inside a minimally well-formed URL degrade to
//! defaults rather than failing.

use log::warn;

use crate::classifier::UrlClassifier;
use crate::config::ScoringConfig;
use crate::features::{extract_features, FeatureVector};
use crate::insights::{generate_insights, InsightReport};
use crate::scoring::{calculate_risk_score, RiskFactorScores};
use crate::structure::analyze_url_structure;

/// Heuristic risk assessment for one URL.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    /// Weighted composite score in [0,1], from structural heuristics only.
    pub composite_score: f64,
    /// Normalized per-factor scores.
    pub factor_scores: RiskFactorScores,
    /// Categorized human-readable findings.
    pub insights: InsightReport,
}

/// The full side-by-side output for one scanned URL.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlAssessment {
    /// The (normalized) URL that was assessed.
    pub url: String,
    /// Feature vector supplied to the classifier.
    pub features: FeatureVector,
    /// Heuristic assessment.
    pub assessment: RiskAssessment,
    /// Classifier probability; `None` when the classifier is unavailable.
    pub ml_probability: Option<f64>,
}

/// Produces the heuristic risk assessment for a URL.
///
/// Pure and deterministic: the same URL and configuration always yield an
/// identical assessment.
pub fn assess_url(url: &str, config: &ScoringConfig) -> RiskAssessment {
    let analysis = analyze_url_structure(url, config);
    let (composite_score, factor_scores) = calculate_risk_score(&analysis, config);
    let insights = generate_insights(&analysis, config);

    RiskAssessment {
        composite_score,
        factor_scores,
        insights,
    }
}

/// Assesses a URL and, when a classifier is available, obtains its
/// probability for the same URL's feature vector.
///
/// A classifier failure is logged and reported as `ml_probability: None`;
/// the heuristic assessment is always produced.
pub fn assess_url_with_classifier(
    url: &str,
    config: &ScoringConfig,
    classifier: Option<&dyn UrlClassifier>,
) -> UrlAssessment {
    let features = extract_features(url);
    let assessment = assess_url(url, config);

    let ml_probability = classifier.and_then(|c| match c.predict(&features) {
        Ok(p) => Some(p),
        Err(e) => {
            warn!("Prediction unavailable for {url}: {e}");
            None
        }
    });

    UrlAssessment {
        url: url.to_string(),
        features,
        assessment,
        ml_probability,
    }
}
