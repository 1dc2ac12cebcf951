//! Storage row types.

use sqlx::FromRow;

/// One row of scan history.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ScanRecord {
    /// Content hash of the URL (the dedup key).
    pub id: String,
    /// The scanned URL.
    pub url: String,
    /// Scan time as milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Classifier probability in [0,1].
    pub prediction: f64,
    /// Whether the prediction met the malicious threshold.
    pub is_malicious: bool,
}
