//! Fixed request header set derived from a FetchConfig.

use crate::config::FetchConfig;

pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const ACCEPT_ENCODING: &str = "gzip, deflate, br";
pub const CONNECTION: &str = "keep-alive";

/// Ordered list of `(name, value)` pairs sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: Vec<(String, String)>,
}

impl RequestHeaders {
    pub fn from_config(config: &FetchConfig) -> Self {
        let entries = vec![
            ("User-Agent".to_string(), config.user_agent.clone()),
            ("Accept-Language".to_string(), ACCEPT_LANGUAGE.to_string()),
            ("Accept-Encoding".to_string(), ACCEPT_ENCODING.to_string()),
            ("Connection".to_string(), CONNECTION.to_string()),
        ];
        Self { entries }
    }

    /// Case-insensitive lookup by header name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
