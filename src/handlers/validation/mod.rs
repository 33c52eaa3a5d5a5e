/// Checks an email address against an RFC 5322 style syntax rule.
///
/// # Examples
/// ```
/// use email_gate::handlers::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(!is_valid_email("invalid@ex_mple.com"));
/// ```
pub mod syntax;

/// Decides whether a domain can receive mail by checking DNS records.
///
/// 1. Checks for MX (Mail Exchange) records first
/// 2. Falls back to A records if no MX records are found
///
/// Lookups go through the [`dnsmx::DnsLookup`] trait so the resolver can be
/// swapped out; [`dnsmx::SystemResolver`] is the production implementation.
pub mod dnsmx;

/// Checks a domain against the configured disposable email providers.
pub mod disposable;

/// Checks a full address against the configured risky addresses.
pub mod risky;

/// "Did you mean" suggestions for mistyped provider domains.
pub mod suggestion;

/// The validation chain tying all checks together.
///
/// # Example
/// ```no_run
/// use email_gate::config::ValidatorConfig;
/// use email_gate::handlers::validation::validator::EmailValidator;
///
/// let validator = EmailValidator::new(ValidatorConfig::default());
/// let verdict = validator.validate("user@gmial.com");
/// if !verdict.is_valid() {
///     println!("{:?} (did you mean {:?}?)", verdict.reason(), verdict.suggestion());
/// }
/// ```
pub mod validator;
