//! Feature extraction for the external URL classifier.
//!
//! Turns a raw URL string into the fixed 5-element numeric vector the
//! pretrained model was trained on. The field order and value conventions
//! are a contract with the model and must not change:
//!
//! 1. hostname length (authority component)
//! 2. path length
//! 3. first directory length
//! 4. dot count over the whole URL
//! 5. IP-literal flag: −1 if the URL contains an IP literal, +1 otherwise
//!
//! The −1/+1 polarity is intentional; the model's training data used −1 to
//! signal "is an IP literal". Flipping it would silently break accuracy.
//!
//! Extraction never fails: any parse problem degrades the affected field to
//! its default instead of propagating an error.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Matches IPv4 dotted quads (0-255 per octet), hex-octet quads, and full
/// 8-group IPv6 literals anywhere in the URL.
static IP_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(([01]?\d\d?|2[0-4]\d|25[0-5])\.){3}([01]?\d\d?|2[0-4]\d|25[0-5])|((0x[0-9a-fA-F]{1,2}\.){3}0x[0-9a-fA-F]{1,2})|([a-fA-F0-9]{1,4}:){7}[a-fA-F0-9]{1,4}",
    )
    .expect("IP literal pattern is valid")
});

/// Fixed-order numeric feature vector consumed by the external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureVector {
    /// Character length of the authority (network-location) component.
    pub hostname_length: usize,
    /// Character length of the path component.
    pub path_length: usize,
    /// Character length of the first path segment after the leading slash.
    pub first_dir_length: usize,
    /// Count of literal '.' characters in the full URL string.
    pub dot_count: usize,
    /// −1 if the URL contains an IP literal, +1 otherwise.
    pub ip_literal_flag: i8,
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            hostname_length: 0,
            path_length: 0,
            first_dir_length: 0,
            dot_count: 0,
            ip_literal_flag: 1,
        }
    }
}

impl FeatureVector {
    /// Exports the vector as the ordered array the classifier expects.
    pub fn to_array(&self) -> [f64; 5] {
        [
            self.hostname_length as f64,
            self.path_length as f64,
            self.first_dir_length as f64,
            self.dot_count as f64,
            self.ip_literal_flag as f64,
        ]
    }
}

/// Extracts the classifier feature vector from a URL string.
///
/// A URL that fails to parse yields `FeatureVector::default()`, that is
/// (0, 0, 0, 0, +1), rather than an error.
pub fn extract_features(url: &str) -> FeatureVector {
    let Ok(parsed) = Url::parse(url) else {
        return FeatureVector::default();
    };

    FeatureVector {
        hostname_length: parsed.authority().len(),
        path_length: parsed.path().len(),
        first_dir_length: first_dir_length(parsed.path()),
        dot_count: url.matches('.').count(),
        ip_literal_flag: if IP_LITERAL_RE.is_match(url) { -1 } else { 1 },
    }
}

/// Length of the first path segment after the leading slash; 0 if absent.
fn first_dir_length(path: &str) -> usize {
    path.split('/').nth(1).map(str::len).unwrap_or(0)
}
