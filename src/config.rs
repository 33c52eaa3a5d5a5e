//! Runtime configuration for the validator and the HTTP host.
//!
//! Values come from the process environment; `main` loads a `.env` file
//! first through `dotenv`.

use std::collections::HashSet;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DISPOSABLE_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "guerrillamail.com",
    "mailinator.com",
    "tempmail.com",
    "yopmail.com",
];

pub const DEFAULT_RISKY_ADDRESSES: &[&str] =
    &["test@example.com", "fake@example.com", "noreply@example.com"];

pub const DEFAULT_COMMON_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "icloud.com",
    "aol.com",
];

pub const DEFAULT_DNS_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Lists and limits used by [`EmailValidator`].
///
/// All list entries are stored trimmed and lowercased. Empty entries are
/// dropped instead of rejected.
///
/// [`EmailValidator`]: crate::handlers::validation::validator::EmailValidator
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorConfig {
    pub disposable_domains: HashSet<String>,
    pub risky_addresses: HashSet<String>,
    /// Suggestion targets, in priority order.
    pub common_domains: Vec<String>,
    pub dns_timeout: Duration,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            disposable_domains: normalize(DEFAULT_DISPOSABLE_DOMAINS.iter().copied()).collect(),
            risky_addresses: normalize(DEFAULT_RISKY_ADDRESSES.iter().copied()).collect(),
            common_domains: dedup_ordered(normalize(DEFAULT_COMMON_DOMAINS.iter().copied())),
            dns_timeout: Duration::from_secs(DEFAULT_DNS_TIMEOUT_SECS),
        }
    }
}

impl ValidatorConfig {
    /// Builds the configuration from environment variables.
    ///
    /// - `DISPOSABLE_DOMAINS`, `RISKY_ADDRESSES`, `COMMON_DOMAINS`:
    ///   comma-separated lists replacing the defaults
    /// - `EXTRA_DISPOSABLE_DOMAINS`, `EXTRA_RISKY_ADDRESSES`:
    ///   comma-separated lists added to the active ones
    /// - `DNS_TIMEOUT_SECS`: per-query DNS timeout
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(list) = lookup("DISPOSABLE_DOMAINS") {
            config.disposable_domains = parse_list(&list).collect();
        }
        if let Some(list) = lookup("RISKY_ADDRESSES") {
            config.risky_addresses = parse_list(&list).collect();
        }
        if let Some(list) = lookup("COMMON_DOMAINS") {
            config.common_domains = dedup_ordered(parse_list(&list));
        }
        if let Some(list) = lookup("EXTRA_DISPOSABLE_DOMAINS") {
            config.disposable_domains.extend(parse_list(&list));
        }
        if let Some(list) = lookup("EXTRA_RISKY_ADDRESSES") {
            config.risky_addresses.extend(parse_list(&list));
        }
        if let Some(value) = lookup("DNS_TIMEOUT_SECS") {
            let secs = parse_positive("DNS_TIMEOUT_SECS", &value)?;
            config.dns_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Lets the host replace or extend the disposable domain list.
    pub fn filter_disposable_domains<F>(mut self, filter: F) -> Self
    where
        F: FnOnce(HashSet<String>) -> HashSet<String>,
    {
        self.disposable_domains = normalize_owned(filter(self.disposable_domains)).collect();
        self
    }

    /// Lets the host replace or extend the risky address list.
    pub fn filter_risky_addresses<F>(mut self, filter: F) -> Self
    where
        F: FnOnce(HashSet<String>) -> HashSet<String>,
    {
        self.risky_addresses = normalize_owned(filter(self.risky_addresses)).collect();
        self
    }

    /// Lets the host reorder, replace or extend the suggestion targets.
    pub fn filter_common_domains<F>(mut self, filter: F) -> Self
    where
        F: FnOnce(Vec<String>) -> Vec<String>,
    {
        self.common_domains = dedup_ordered(normalize_owned(filter(self.common_domains)));
        self
    }
}

/// Listener settings for the HTTP host.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDRESS` and `PORT`, falling back to `127.0.0.1:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(address) = lookup("BIND_ADDRESS").filter(|a| !a.trim().is_empty()) {
            config.bind_address = address.trim().to_string();
        }
        if let Some(value) = lookup("PORT") {
            config.port = value
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|port| *port > 0)
                .ok_or_else(|| ConfigError::InvalidNumber {
                    name: "PORT",
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }
}

fn parse_positive(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}

fn parse_list(list: &str) -> impl Iterator<Item = String> + '_ {
    normalize(list.split(','))
}

fn normalize<'a>(entries: impl Iterator<Item = &'a str>) -> impl Iterator<Item = String> {
    entries
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
}

fn normalize_owned(entries: impl IntoIterator<Item = String>) -> impl Iterator<Item = String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
}

fn dedup_ordered(entries: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries.filter(|entry| seen.insert(entry.clone())).collect()
}
