use std::collections::HashSet;

/// Checks whether a domain belongs to a disposable email provider.
///
/// The comparison is case-insensitive; `disposable_domains` is expected to
/// hold lowercase entries (see [`ValidatorConfig`]).
///
/// # Example
/// ```
/// use std::collections::HashSet;
/// use email_gate::handlers::validation::disposable::is_disposable_domain;
///
/// let domains: HashSet<String> = ["mailinator.com".to_string()].into();
/// assert!(is_disposable_domain("Mailinator.com", &domains));
/// assert!(!is_disposable_domain("gmail.com", &domains));
/// ```
///
/// [`ValidatorConfig`]: crate::config::ValidatorConfig
pub fn is_disposable_domain(domain: &str, disposable_domains: &HashSet<String>) -> bool {
    disposable_domains.contains(&domain.to_lowercase())
}
