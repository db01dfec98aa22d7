//! Cross-origin policy.
//!
//! Browsers may call the service from a private LAN address (10/8,
//! 172.16/12, 192.168/16) or from any subdomain of one configured suffix.
//! Other origins get a preflight answer without
//! `access-control-allow-origin`, which the browser treats as a refusal.

use axum::http::{header, HeaderValue, Method};
use regex::Regex;
use tower_http::cors::{AllowOrigin, CorsLayer};

const LAN_ORIGIN: &str = r"^https?://(10\.\d{1,3}\.\d{1,3}\.\d{1,3}|172\.(1[6-9]|2\d|3[01])\.\d{1,3}\.\d{1,3}|192\.168\.\d{1,3}\.\d{1,3})(:\d{1,5})?$";

#[derive(Debug, Clone)]
pub struct OriginPolicy {
    patterns: Vec<Regex>,
}

impl OriginPolicy {
    pub fn new(subdomain_suffix: &str) -> Result<Self, regex::Error> {
        let suffix = regex::escape(subdomain_suffix.trim_start_matches('.'));
        let subdomain = format!(r"^https?://([a-z0-9-]+\.)+{suffix}(:\d{{1,5}})?$");
        Ok(Self {
            patterns: vec![Regex::new(LAN_ORIGIN)?, Regex::new(&subdomain)?],
        })
    }

    pub fn allows(&self, origin: &str) -> bool {
        let origin = origin.to_ascii_lowercase();
        self.patterns.iter().any(|p| p.is_match(&origin))
    }

    pub fn into_layer(self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
                origin.to_str().is_ok_and(|o| self.allows(o))
            }))
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> OriginPolicy {
        OriginPolicy::new("home.arpa").unwrap()
    }

    #[test]
    fn allows_private_lan_addresses() {
        let policy = policy();
        assert!(policy.allows("http://192.168.1.20"));
        assert!(policy.allows("http://10.0.0.5:3000"));
        assert!(policy.allows("https://172.20.1.1"));
    }

    #[test]
    fn rejects_public_and_lookalike_addresses() {
        let policy = policy();
        assert!(!policy.allows("http://8.8.8.8"));
        assert!(!policy.allows("http://172.32.0.1"));
        assert!(!policy.allows("http://192.168.1.20.evil.com"));
        assert!(!policy.allows("ftp://192.168.1.20"));
    }

    #[test]
    fn allows_subdomains_of_suffix_only() {
        let policy = policy();
        assert!(policy.allows("https://todo.home.arpa"));
        assert!(policy.allows("http://a.b.home.arpa:8080"));
        assert!(policy.allows("https://Todo.Home.Arpa"));
        assert!(!policy.allows("https://home.arpa"));
        assert!(!policy.allows("https://todohome.arpa"));
        assert!(!policy.allows("https://todo.home.arpa.example.com"));
    }

    #[test]
    fn leading_dot_in_suffix_is_ignored() {
        let policy = OriginPolicy::new(".example.net").unwrap();
        assert!(policy.allows("https://app.example.net"));
    }
}
