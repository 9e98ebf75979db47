use axum::http::HeaderMap;

const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";
const UNKNOWN_CLIENT: &str = "unknown";

/// Derive a stable client key from proxy-supplied origin headers.
///
/// Precedence: first entry of the `x-forwarded-for` chain, then
/// `x-real-ip`, then a literal `"unknown"`. The headers are trusted as
/// given, which is acceptable for abuse mitigation but is not a
/// security boundary; a deployment that needs one must strip or rewrite
/// these headers at a trusted edge.
pub fn identify_client(headers: &HeaderMap) -> String {
    if let Some(forwarded) = header_str(headers, FORWARDED_FOR) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = header_str(headers, REAL_IP) {
        return real_ip.to_string();
    }

    UNKNOWN_CLIENT.to_string()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
