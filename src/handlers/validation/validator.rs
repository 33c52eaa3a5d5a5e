use super::dnsmx::{DnsLookup, SystemResolver, has_mail_records};
use super::{disposable, risky, suggestion, syntax};
use crate::config::ValidatorConfig;
use log::debug;

/// Why an address was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmailRequired,
    InvalidSyntax,
    UnreachableDomain,
    DisposableDomain,
    RiskyAddress,
}

impl Rejection {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            Rejection::EmailRequired => "EMAIL_REQUIRED",
            Rejection::InvalidSyntax => "INVALID_SYNTAX",
            Rejection::UnreachableDomain => "INVALID_DOMAIN",
            Rejection::DisposableDomain => "DISPOSABLE_EMAIL",
            Rejection::RiskyAddress => "RISKY_EMAIL",
        }
    }

    /// Human-readable reason shown to the customer.
    pub fn message(self) -> &'static str {
        match self {
            Rejection::EmailRequired => "Email address is required.",
            Rejection::InvalidSyntax => "Please enter a valid email address.",
            Rejection::UnreachableDomain => {
                "The email domain cannot receive messages. Please use a different email address."
            }
            Rejection::DisposableDomain => {
                "Disposable email addresses are not allowed. Please provide a permanent address."
            }
            Rejection::RiskyAddress => {
                "This email address is flagged as high risk. Please use another email."
            }
        }
    }
}

/// Outcome of validating one address.
///
/// `suggestion` is only ever set for syntax and DNS failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    rejection: Option<Rejection>,
    suggestion: Option<String>,
}

impl Verdict {
    fn valid() -> Self {
        Self {
            rejection: None,
            suggestion: None,
        }
    }

    fn rejected(rejection: Rejection, suggestion: Option<String>) -> Self {
        Self {
            rejection: Some(rejection),
            suggestion,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }

    pub fn rejection(&self) -> Option<Rejection> {
        self.rejection
    }

    pub fn reason(&self) -> Option<&'static str> {
        self.rejection.map(Rejection::message)
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }
}

/// Layered email validation engine.
///
/// Checks run in a fixed order and the first failure decides the verdict:
/// 1. empty input
/// 2. syntax
/// 3. DNS reachability (MX, then A)
/// 4. disposable domain
/// 5. risky address
///
/// Local checks run before the network one, and policy lists run last so a
/// policy rejection never carries a typo suggestion. The validator holds no
/// mutable state and can be shared between threads.
pub struct EmailValidator {
    config: ValidatorConfig,
    resolver: Box<dyn DnsLookup>,
}

impl EmailValidator {
    /// Creates a validator that resolves through the system DNS configuration.
    pub fn new(config: ValidatorConfig) -> Self {
        let resolver = SystemResolver::new(config.dns_timeout);
        Self::with_resolver(config, Box::new(resolver))
    }

    pub fn with_resolver(config: ValidatorConfig, resolver: Box<dyn DnsLookup>) -> Self {
        Self { config, resolver }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates a raw, untrusted email string.
    ///
    /// Blocks on DNS for at most two bounded lookups. Call it from a blocking
    /// context when running inside an async runtime.
    pub fn validate(&self, raw_email: &str) -> Verdict {
        let email = raw_email.trim();

        if email.is_empty() {
            return Verdict::rejected(Rejection::EmailRequired, None);
        }

        if !syntax::is_valid_email(email) {
            debug!("Rejected {:?}: invalid syntax", email);
            return Verdict::rejected(Rejection::InvalidSyntax, self.suggest(email));
        }

        let domain = email
            .rsplit_once('@')
            .map(|(_, domain)| domain.to_lowercase())
            .unwrap_or_default();

        if !has_mail_records(self.resolver.as_ref(), &domain) {
            debug!("Rejected {:?}: {} cannot receive mail", email, domain);
            return Verdict::rejected(Rejection::UnreachableDomain, self.suggest(email));
        }

        if disposable::is_disposable_domain(&domain, &self.config.disposable_domains) {
            debug!("Rejected {:?}: disposable domain", email);
            return Verdict::rejected(Rejection::DisposableDomain, None);
        }

        if risky::is_risky_address(email, &self.config.risky_addresses) {
            debug!("Rejected {:?}: risky address", email);
            return Verdict::rejected(Rejection::RiskyAddress, None);
        }

        Verdict::valid()
    }

    fn suggest(&self, email: &str) -> Option<String> {
        suggestion::suggest(email, &self.config.common_domains)
    }
}

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;
