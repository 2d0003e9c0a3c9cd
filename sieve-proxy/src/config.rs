use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ProxyError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProxyConfig {
    pub listen: ListenConfig,
    /// Header added to every forwarded request.
    pub inject: HeaderConfig,
    /// Forbidden `host+path` strings, matched verbatim against the request's
    /// Host header concatenated with its path.
    pub blocked: HashSet<String>,
    /// Applied to response bodies in order; entries are literal substrings.
    pub replacements: Vec<ReplacementRule>,
    /// Path to the static body served with the 403 rejection.
    pub error_page: String,
    pub read_chunk_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderConfig {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplacementRule {
    pub pattern: String,
    pub replacement: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen: ListenConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            inject: HeaderConfig {
                name: "X-Forwarded-By".to_string(),
                value: "sieve-proxy".to_string(),
            },
            blocked: HashSet::new(),
            replacements: Vec::new(),
            error_page: "forbidden.html".to_string(),
            read_chunk_size: sieve_net::DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

impl ProxyConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProxyError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            ProxyError::Config(format!("cannot read {}: {err}", path.display()))
        })?;
        serde_json::from_str(&raw)
            .map_err(|err| ProxyError::Config(format!("cannot parse {}: {err}", path.display())))
    }
}
