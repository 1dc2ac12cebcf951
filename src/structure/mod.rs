//! Structural URL analysis.
//!
//! Decomposes a URL into a descriptive record (lengths, depths, keyword hits,
//! TLD, protocol and addressing flags) used both by the risk scorer and by
//! the insight generator. Host splitting is public-suffix-aware via the
//! bundled PSL, so multi-part suffixes like `co.uk` are handled correctly.
//!
//! Analysis is pure and never fails: a URL that cannot be parsed degrades to
//! zeroed/empty component fields while the string-level fields (length,
//! special characters, keywords, dots) are still computed. Callers are
//! expected to have validated minimal well-formedness up front (see
//! `app::url::validate_and_normalize_url`).

use std::sync::LazyLock;

use psl::{List, Psl};
use regex::Regex;
use url::Url;

use crate::config::ScoringConfig;

/// Characters outside [a-zA-Z0-9./-], counted as "special".
static SPECIAL_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9./\-]").expect("special char pattern is valid"));

/// Loose dotted-quad heuristic, intentionally simpler than the feature
/// extractor's IP-literal check.
static DOTTED_QUAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\.\d+\.\d+").expect("dotted quad pattern is valid"));

/// Descriptive breakdown of a URL's composition.
///
/// Derived once per URL and read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralAnalysis {
    /// Character length of the full URL string.
    pub url_length: usize,
    /// Count of characters outside [a-zA-Z0-9./-].
    pub special_char_count: usize,
    /// Number of dot-separated labels in the subdomain part.
    ///
    /// An empty subdomain counts as depth 1: splitting the empty string on
    /// '.' yields one empty label. Preserved for score compatibility.
    pub subdomain_depth: usize,
    /// Count of non-empty path segments.
    pub path_depth: usize,
    /// Suspicious keywords found in the URL, in configuration order.
    pub found_keywords: Vec<String>,
    /// Public suffix of the host (e.g. "com", "co.uk"); empty if unknown.
    pub tld: String,
    /// Whether the scheme is exactly "https".
    pub uses_https: bool,
    /// Whether a dotted-quad numeric pattern appears anywhere in the URL.
    pub has_ip_address: bool,
    /// Whether the URL contains more than three dots in total.
    pub excessive_dots: bool,
    /// Whether the domain label contains at least one digit.
    pub numeric_domain: bool,
    /// Character length of the domain label.
    pub domain_length: usize,
    /// Character length of the path component.
    pub path_length: usize,
    /// Character length of the query component.
    pub query_length: usize,
}

/// Host split into subdomain / domain label / public suffix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct HostParts {
    /// Labels left of the registrable domain; `None` when absent.
    subdomain: Option<String>,
    /// The registrable domain's own label (e.g. "example").
    domain: String,
    /// Public suffix (e.g. "com", "co.uk").
    suffix: String,
}

/// Splits a host into subdomain, domain label, and public suffix.
///
/// IP-address hosts have no registrable domain; the whole host becomes the
/// domain label with an empty suffix, matching common extractor behavior.
fn split_host(host: &str) -> HostParts {
    if host.is_empty() {
        return HostParts::default();
    }

    // IP literals: no PSL lookup applies.
    if host.parse::<std::net::Ipv4Addr>().is_ok() || host.parse::<std::net::Ipv6Addr>().is_ok() {
        return HostParts {
            subdomain: None,
            domain: host.to_string(),
            suffix: String::new(),
        };
    }

    let Some(registrable) = List.domain(host.as_bytes()) else {
        // No registrable domain. A host that is itself a known public
        // suffix (e.g. a bare "xyz") still has a TLD and must keep its
        // risk attribution; anything else keeps the whole host as the
        // domain label.
        if let Some(suffix) = List.suffix(host.as_bytes()) {
            let suffix_str = String::from_utf8_lossy(suffix.as_bytes()).into_owned();
            if suffix.typ().is_some() && suffix_str == host {
                return HostParts {
                    subdomain: None,
                    domain: String::new(),
                    suffix: suffix_str,
                };
            }
        }
        return HostParts {
            subdomain: None,
            domain: host.to_string(),
            suffix: String::new(),
        };
    };

    let full = String::from_utf8_lossy(registrable.as_bytes()).into_owned();
    let suffix = String::from_utf8_lossy(registrable.suffix().as_bytes()).into_owned();

    let domain = full
        .strip_suffix(&suffix)
        .map(|d| d.trim_end_matches('.'))
        .unwrap_or("")
        .to_string();

    let subdomain = host
        .strip_suffix(&full)
        .map(|s| s.trim_end_matches('.'))
        .filter(|s| !s.is_empty())
        .map(String::from);

    HostParts {
        subdomain,
        domain,
        suffix,
    }
}

/// Analyzes the structure of a URL.
///
/// The keyword list comes from the injected `ScoringConfig`; matching is a
/// case-insensitive substring search over the whole URL.
pub fn analyze_url_structure(url: &str, config: &ScoringConfig) -> StructuralAnalysis {
    let parsed = Url::parse(url).ok();

    let (scheme, host, path, query) = match &parsed {
        Some(u) => (
            u.scheme().to_string(),
            u.host_str().unwrap_or("").to_string(),
            u.path().to_string(),
            u.query().unwrap_or("").to_string(),
        ),
        None => Default::default(),
    };

    let parts = split_host(&host);

    let lowered = url.to_lowercase();
    let found_keywords: Vec<String> = config
        .suspicious_keywords
        .iter()
        .filter(|kw| lowered.contains(kw.as_str()))
        .cloned()
        .collect();

    StructuralAnalysis {
        url_length: url.len(),
        special_char_count: SPECIAL_CHAR_RE.find_iter(url).count(),
        subdomain_depth: parts
            .subdomain
            .as_deref()
            .map(|s| s.split('.').count())
            .unwrap_or(1),
        path_depth: path.split('/').filter(|seg| !seg.is_empty()).count(),
        found_keywords,
        tld: parts.suffix,
        uses_https: scheme == "https",
        has_ip_address: DOTTED_QUAD_RE.is_match(url),
        excessive_dots: url.matches('.').count() > 3,
        numeric_domain: parts.domain.chars().any(|c| c.is_ascii_digit()),
        domain_length: parts.domain.len(),
        path_length: path.len(),
        query_length: query.len(),
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
