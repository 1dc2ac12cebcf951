//! URL validation and normalization.
//!
//! The assessment core assumes a minimally well-formed URL (scheme + host);
//! this is the caller-side gate that enforces that precondition. Inputs that
//! fail here are never scored.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a URL before assessment.
///
/// Adds an `https://` prefix if no scheme is present, then requires that the
/// result parses, uses http/https, and has a host component. URLs longer
/// than `MAX_URL_LENGTH` are rejected outright.
///
/// Returns `Some(normalized_url)` if the URL should be assessed, `None`
/// otherwise (with a logged warning).
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    if url.len() > MAX_URL_LENGTH {
        // Truncate the log preview on a character boundary; byte slicing
        // panics mid-codepoint on multibyte input.
        let preview: String = url.chars().take(50).collect();
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            preview
        );
        return None;
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!("Skipping URL exceeding maximum length after normalization: {url}");
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                warn!("Skipping unsupported scheme for URL: {url}");
                return None;
            }
            // The scoring core requires a host; scheme-only URLs are not
            // assessable.
            if parsed.host_str().map_or(true, str::is_empty) {
                warn!("Skipping URL without a host component: {url}");
                return None;
            }
            Some(normalized)
        }
        Err(_) => {
            warn!("Skipping invalid URL: {url}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;

    #[test]
    fn test_adds_https_prefix() {
        assert_eq!(
            validate_and_normalize_url("example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_preserves_existing_scheme() {
        assert_eq!(
            validate_and_normalize_url("http://example.com"),
            Some("http://example.com".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("https://example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            validate_and_normalize_url("  https://example.com  "),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert_eq!(validate_and_normalize_url(""), None);
        assert_eq!(validate_and_normalize_url("   "), None);
        assert_eq!(validate_and_normalize_url("not a url at all!!!"), None);
    }

    #[test]
    fn test_rejects_url_without_host() {
        assert_eq!(validate_and_normalize_url("https://"), None);
        assert_eq!(validate_and_normalize_url("http://"), None);
    }

    #[test]
    fn test_rejects_overlong_url() {
        let long = format!("https://example.com/{}", "a".repeat(2100));
        assert_eq!(validate_and_normalize_url(&long), None);
    }

    #[test]
    fn test_rejects_overlong_multibyte_url() {
        // 700 three-byte characters = 2100 bytes; byte 50 falls inside a
        // codepoint, so the rejection path must not slice by byte index.
        // Enable warn-level logging so the preview formatting actually runs.
        log::set_max_level(log::LevelFilter::Warn);
        let long = "\u{20ac}".repeat(700);
        assert_eq!(validate_and_normalize_url(&long), None);
    }

    #[test]
    fn test_rejects_overlong_after_normalization() {
        let long = format!("example.com/{}", "a".repeat(2045));
        assert_eq!(validate_and_normalize_url(&long), None);
    }

    #[test]
    fn test_accepts_ip_hosts() {
        assert_eq!(
            validate_and_normalize_url("http://192.168.1.1/login"),
            Some("http://192.168.1.1/login".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("[2001:db8::1]"),
            Some("https://[2001:db8::1]".to_string())
        );
    }

    #[test]
    fn test_preserves_path_and_query() {
        assert_eq!(
            validate_and_normalize_url("example.com/path?query=value"),
            Some("https://example.com/path?query=value".to_string())
        );
    }
}
