use log::debug;
use std::time::Duration;
use thiserror::Error;
use trust_dns_resolver::{
    Resolver,
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    system_conf::read_system_conf,
};

/// Failure raised by a DNS lookup that is not a plain "no records" answer.
#[derive(Debug, Error)]
pub enum DnsError {
    #[error("failed to build DNS resolver: {0}")]
    Setup(#[from] std::io::Error),
    #[error("DNS lookup failed: {0}")]
    Resolve(#[from] ResolveError),
}

/// Record lookups needed to decide whether a domain can receive mail.
///
/// `Ok(false)` means the domain answered with no records of that type
/// (including NXDOMAIN). Transport and timeout failures come back as `Err`.
#[cfg_attr(test, mockall::automock)]
pub trait DnsLookup: Send + Sync {
    fn has_mx(&self, domain: &str) -> Result<bool, DnsError>;
    fn has_a(&self, domain: &str) -> Result<bool, DnsError>;
}

/// Blocking resolver backed by `trust-dns-resolver`.
///
/// A fresh resolver is built per lookup so no runtime outlives the blocking
/// call that created it. Queries are bounded by `timeout` and never retried.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn create_resolver(&self) -> Result<Resolver, DnsError> {
        let (config, mut opts) =
            read_system_conf().unwrap_or_else(|_| (ResolverConfig::default(), ResolverOpts::default()));
        opts.timeout = self.timeout;
        opts.attempts = 1;

        Ok(Resolver::new(config, opts)?)
    }
}

impl DnsLookup for SystemResolver {
    fn has_mx(&self, domain: &str) -> Result<bool, DnsError> {
        let resolver = self.create_resolver()?;
        match resolver.mx_lookup(domain) {
            Ok(records) => Ok(records.iter().next().is_some()),
            Err(e) => no_records_or_error(e),
        }
    }

    fn has_a(&self, domain: &str) -> Result<bool, DnsError> {
        let resolver = self.create_resolver()?;
        match resolver.ipv4_lookup(domain) {
            Ok(records) => Ok(records.iter().next().is_some()),
            Err(e) => no_records_or_error(e),
        }
    }
}

fn no_records_or_error(error: ResolveError) -> Result<bool, DnsError> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => Ok(false),
        _ => Err(error.into()),
    }
}

/// Decides whether `domain` can receive mail.
///
/// 1. MX records are checked first
/// 2. A records are the fallback when no MX answer is found
///
/// Any lookup failure counts as "no records", so a broken resolver rejects
/// the address rather than letting it through.
pub fn has_mail_records(lookup: &dyn DnsLookup, domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }

    match lookup.has_mx(domain) {
        Ok(true) => return true,
        Ok(false) => debug!("No MX records for {}, trying A records", domain),
        Err(e) => debug!("MX lookup for {} failed: {}", domain, e),
    }

    match lookup.has_a(domain) {
        Ok(found) => found,
        Err(e) => {
            debug!("A lookup for {} failed: {}", domain, e);
            false
        }
    }
}

#[cfg(test)]
impl MockDnsLookup {
    /// Mock where only `domains` answer with MX records and nothing has A records.
    pub fn reachable(domains: &'static [&'static str]) -> Self {
        let mut lookup = Self::new();
        lookup
            .expect_has_mx()
            .returning(move |domain| Ok(domains.iter().any(|d| *d == domain)));
        lookup.expect_has_a().returning(|_| Ok(false));
        lookup
    }
}

#[cfg(test)]
#[path = "dnsmx_test.rs"]
mod dnsmx_test;
