//! Request metadata helpers

use actix_web::HttpRequest;
use uuid::Uuid;

/// Use the caller's `X-Request-ID` or generate a fresh one
pub fn extract_request_id(req: &HttpRequest) -> String {
    req.headers()
        .get("X-Request-ID")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Extract client IP address from request
pub fn extract_client_ip(req: &HttpRequest) -> Option<String> {
    // Try to get IP from X-Forwarded-For header (for reverse proxy scenarios)
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            // Take the first IP from the comma-separated list
            if let Some(ip) = forwarded_str.split(',').next().map(str::trim) {
                if !ip.is_empty() {
                    return Some(ip.to_string());
                }
            }
        }
    }

    // Try to get IP from X-Real-IP header
    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(ip_str) = real_ip.to_str() {
            return Some(ip_str.trim().to_string());
        }
    }

    // Fall back to the peer address, without its port
    req.peer_addr().map(|addr| addr.ip().to_string())
}
