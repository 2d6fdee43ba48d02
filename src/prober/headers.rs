//! Response header collection and the security header checklist.

use crate::types::SecurityReport;
use reqwest::header::HeaderMap;
use std::collections::BTreeMap;

/// Tracked security headers and the risk reported when each is missing.
pub const SECURITY_HEADERS: [(&str, &str); 5] = [
    (
        "X-Frame-Options",
        "Missing - Clickjacking vulnerability possible",
    ),
    (
        "Content-Security-Policy",
        "Missing - XSS protection not configured",
    ),
    ("X-Content-Type-Options", "Missing - MIME sniffing possible"),
    (
        "Strict-Transport-Security",
        "Missing - No HTTPS enforcement",
    ),
    ("Referrer-Policy", "Missing - Referrer information may leak"),
];

/// Fallback for header-derived fields (`Server`, `Content-Type`) the
/// response did not send.
pub const UNKNOWN: &str = "Unknown";

/// Value of a header, with repeated occurrences joined by ", ".
///
/// Lookup is case-insensitive. Non UTF-8 bytes are replaced.
pub fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(name)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

/// Copy every response header into a plain map.
pub fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .filter_map(|name| header_value(headers, name.as_str()).map(|v| (name.to_string(), v)))
        .collect()
}

/// Check the response for each tracked security header.
pub fn check_security_headers(headers: &HeaderMap) -> SecurityReport {
    let report = SECURITY_HEADERS
        .iter()
        .map(|(name, warning)| {
            let verdict = match header_value(headers, name) {
                Some(value) => format!("Present: {}", value),
                None => warning.to_string(),
            };
            (name.to_string(), verdict)
        })
        .collect();

    SecurityReport(report)
}
