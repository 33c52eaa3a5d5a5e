use std::net::{Ipv4Addr, Ipv6Addr};

/// Maximum length of a full address (RFC 5321 path limit minus brackets).
const MAX_EMAIL_LEN: usize = 254;
/// Maximum length of the local part (RFC 5321).
const MAX_LOCAL_LEN: usize = 64;
/// Maximum length of a single domain label (RFC 1035).
const MAX_LABEL_LEN: usize = 63;

/// Checks an email address against an RFC 5322 style syntax rule.
///
/// This is the syntax gate of the validation chain, not a full RFC parser:
/// - dot-atom or quoted-string local parts
/// - hostname or domain literal (`[IPv4]`, `[IPv6:...]`) domains
/// - ASCII only, internationalized addresses are rejected
/// - RFC 5321 length limits
///
/// # Examples
/// ```
/// use email_gate::handlers::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(!is_valid_email("invalid@ex_mple.com"));
/// assert!(!is_valid_email("Pelé@example.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN || !email.is_ascii() {
        return false;
    }

    let Some(split_index) = find_separator(email) else {
        return false;
    };

    let (local_part, domain_part) = email.split_at(split_index);
    let domain_part = &domain_part[1..];

    if local_part.is_empty() || local_part.len() > MAX_LOCAL_LEN {
        return false;
    }

    is_valid_local_part(local_part) && is_valid_domain_part(domain_part)
}

/// Finds the first `@` that is not inside a quoted string.
fn find_separator(email: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut escape = false;

    for (i, c) in email.char_indices() {
        if escape {
            escape = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escape = true,
            '"' => in_quotes = !in_quotes,
            '@' if !in_quotes => return Some(i),
            _ => {}
        }
    }
    None
}

fn is_valid_local_part(local: &str) -> bool {
    if local.len() >= 2 && local.starts_with('"') && local.ends_with('"') {
        is_valid_quoted_string(&local[1..local.len() - 1])
    } else {
        is_valid_dot_atom(local)
    }
}

fn is_valid_domain_part(domain: &str) -> bool {
    if let Some(literal) = domain.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        is_valid_domain_literal(literal)
    } else {
        is_valid_hostname(domain)
    }
}

/// Quoted-string content from RFC 5322 section 3.4.1, quotes already stripped.
///
/// Spaces and tabs are rejected, folding whitespace is not supported.
fn is_valid_quoted_string(content: &str) -> bool {
    let mut escape = false;

    for c in content.chars() {
        if escape {
            if !matches!(c, '\\' | '"') {
                return false;
            }
            escape = false;
        } else if c == '\\' {
            escape = true;
        } else if c == '"' || c == ' ' || c.is_ascii_control() {
            return false;
        }
    }
    !escape
}

/// Dot-atom from RFC 5322 section 3.4.1.
fn is_valid_dot_atom(s: &str) -> bool {
    s.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c))
    })
}

fn is_valid_domain_literal(literal: &str) -> bool {
    match literal.strip_prefix("IPv6:") {
        Some(ip) => ip.parse::<Ipv6Addr>().is_ok(),
        None => literal.parse::<Ipv4Addr>().is_ok(),
    }
}

/// Needs at least two labels and a top-level label starting with a letter.
fn is_valid_hostname(domain: &str) -> bool {
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    tld.starts_with(|c: char| c.is_ascii_alphabetic())
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= MAX_LABEL_LEN
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}
