//! Configuration constants.

/// Maximum URL length (2048 characters) to reject pathological inputs before
/// analysis. This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default SQLite database path for scan history.
pub const DEFAULT_DB_PATH: &str = "./url_risk.db";

/// Classifier probability at or above which a URL is recorded as malicious.
pub const MALICIOUS_THRESHOLD: f64 = 0.5;

/// Number of elements in the feature vector consumed by the classifier.
///
/// The pretrained model expects exactly this many inputs, in the order
/// produced by `FeatureVector::to_array`. Not negotiable.
pub const FEATURE_VECTOR_LEN: usize = 5;
