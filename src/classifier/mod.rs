//! External classifier boundary.
//!
//! The scoring core treats the pretrained malicious-URL model as an opaque
//! function from a feature vector to a probability. The only obligations on
//! this side of the boundary are to supply the inputs in the exact order and
//! count the model was trained on, and to surface "prediction unavailable"
//! instead of crashing when the model cannot be loaded or invoked.

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::config::FEATURE_VECTOR_LEN;
use crate::error_handling::ClassifierError;
use crate::features::FeatureVector;

/// A classifier that maps a feature vector to a malice probability in [0,1].
pub trait UrlClassifier: Send + Sync {
    /// Predicts the probability that the URL described by `features` is
    /// malicious.
    fn predict(&self, features: &FeatureVector) -> Result<f64, ClassifierError>;
}

/// A serialized linear model: logistic regression over the 5 URL features.
///
/// Loaded from a JSON weights file, e.g.:
///
/// ```json
/// { "weights": [0.02, 0.05, 0.01, 0.1, -0.8], "bias": -1.2 }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    weights: Vec<f64>,
    bias: f64,
}

impl LinearModel {
    /// Loads a model from a JSON weights file.
    pub fn from_file(path: &Path) -> Result<Self, ClassifierError> {
        let data = std::fs::read_to_string(path)?;
        let model: LinearModel = serde_json::from_str(&data)?;
        if model.weights.len() != FEATURE_VECTOR_LEN {
            return Err(ClassifierError::BadShape {
                expected: FEATURE_VECTOR_LEN,
                actual: model.weights.len(),
            });
        }
        debug!("Loaded linear model from {}", path.display());
        Ok(model)
    }

    /// Builds a model from raw weights, mainly for tests.
    pub fn new(weights: [f64; FEATURE_VECTOR_LEN], bias: f64) -> Self {
        Self {
            weights: weights.to_vec(),
            bias,
        }
    }
}

impl UrlClassifier for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let inputs = features.to_array();
        let z: f64 = self
            .weights
            .iter()
            .zip(inputs.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;

        let probability = sigmoid(z);
        if !probability.is_finite() {
            return Err(ClassifierError::NonFiniteOutput);
        }
        Ok(probability)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::features::extract_features;

    #[test]
    fn test_predict_in_unit_interval() {
        let model = LinearModel::new([0.02, 0.05, 0.01, 0.1, -0.8], -1.2);
        let features = extract_features("http://192.168.1.1/login");
        let p = model.predict(&features).unwrap();
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_ip_flag_moves_probability() {
        // With a negative weight on the IP flag, an IP literal (−1) must
        // score a higher probability than a plain domain (+1).
        let model = LinearModel::new([0.0, 0.0, 0.0, 0.0, -0.8], 0.0);
        let ip = model
            .predict(&extract_features("http://192.168.1.1/login"))
            .unwrap();
        let plain = model
            .predict(&extract_features("https://www.google.com"))
            .unwrap();
        assert!(ip > plain);
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "weights": [0.02, 0.05, 0.01, 0.1, -0.8], "bias": -1.2 }}"#
        )
        .unwrap();

        let model = LinearModel::from_file(file.path()).unwrap();
        let p = model
            .predict(&extract_features("https://example.com"))
            .unwrap();
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_from_file_missing() {
        let err = LinearModel::from_file(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ClassifierError::ModelRead(_)));
    }

    #[test]
    fn test_from_file_bad_shape() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "weights": [1.0, 2.0], "bias": 0.0 }}"#).unwrap();

        let err = LinearModel::from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::BadShape {
                expected: 5,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_from_file_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = LinearModel::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::ModelParse(_)));
    }

    #[test]
    fn test_sigmoid_extremes() {
        assert!(sigmoid(50.0) > 0.999);
        assert!(sigmoid(-50.0) < 0.001);
        assert_eq!(sigmoid(0.0), 0.5);
    }
}
