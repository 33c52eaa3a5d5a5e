use std::collections::HashSet;

/// Checks whether a full address is on the risky-address list.
///
/// Placeholder addresses such as `test@example.com` resolve fine but are
/// commonly used to skip real contact details. Matching is on the whole
/// lowercased address, not the domain.
pub fn is_risky_address(email: &str, risky_addresses: &HashSet<String>) -> bool {
    risky_addresses.contains(&email.to_lowercase())
}
