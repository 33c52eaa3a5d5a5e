use textdistance::str::levenshtein;

/// Candidates at this edit distance or further are never suggested.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Suggests a corrected address when the domain looks like a typo of a
/// common provider.
///
/// The email is ASCII-lowercased and split at its last `@`. Every entry of
/// `common_domains` is scored by Levenshtein distance against the domain;
/// the closest one under [`MAX_SUGGESTION_DISTANCE`] wins, and on equal
/// distance the earlier entry is kept.
///
/// # Examples
/// ```
/// use email_gate::handlers::validation::suggestion::suggest;
///
/// let common = vec!["gmail.com".to_string(), "yahoo.com".to_string()];
/// assert_eq!(suggest("User@gmial.com", &common), Some("user@gmail.com".to_string()));
/// assert_eq!(suggest("user@example.org", &common), None);
/// assert_eq!(suggest("no-at-sign", &common), None);
/// ```
pub fn suggest(email: &str, common_domains: &[String]) -> Option<String> {
    let email = email.to_ascii_lowercase();
    let (local, domain) = email.rsplit_once('@')?;

    if domain.is_empty() {
        return None;
    }

    let mut closest: Option<(&str, usize)> = None;
    for candidate in common_domains {
        let distance = levenshtein(domain, candidate);
        if distance >= MAX_SUGGESTION_DISTANCE {
            continue;
        }
        if closest.is_none_or(|(_, shortest)| distance < shortest) {
            closest = Some((candidate.as_str(), distance));
        }
    }

    closest.map(|(candidate, _)| format!("{}@{}", local, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common() -> Vec<String> {
        ["gmail.com", "yahoo.com", "outlook.com", "hotmail.com", "icloud.com", "aol.com"]
            .iter()
            .map(|d| d.to_string())
            .collect()
    }

    #[test]
    fn test_single_edit_typos() {
        assert_eq!(suggest("user@gmial.com", &common()), Some("user@gmail.com".into()));
        assert_eq!(suggest("user@yaho.com", &common()), Some("user@yahoo.com".into()));
        assert_eq!(suggest("user@outlok.com", &common()), Some("user@outlook.com".into()));
        assert_eq!(suggest("user@icloud.co", &common()), Some("user@icloud.com".into()));
    }

    #[test]
    fn test_two_edit_typo() {
        assert_eq!(suggest("jo@gmal.cm", &common()), Some("jo@gmail.com".into()));
    }

    #[test]
    fn test_exact_match_is_suggested() {
        assert_eq!(suggest("user@gmail.com", &common()), Some("user@gmail.com".into()));
    }

    #[test]
    fn test_distance_three_is_rejected() {
        // gmail.com -> gxxxl.com is three substitutions away
        assert_eq!(suggest("user@gxxxl.com", &common()), None);
        assert_eq!(suggest("user@example.org", &common()), None);
    }

    #[test]
    fn test_lowercases_input() {
        assert_eq!(suggest("John.Doe@GMIAL.COM", &common()), Some("john.doe@gmail.com".into()));
    }

    #[test]
    fn test_only_ascii_letters_are_lowercased() {
        assert_eq!(suggest("ÉLISE@GMIAL.COM", &common()), Some("ÉLISE@gmail.com".into()));
        assert_eq!(suggest("İlker@gmial.com", &common()), Some("İlker@gmail.com".into()));
    }

    #[test]
    fn test_missing_or_empty_domain() {
        assert_eq!(suggest("no-at-sign", &common()), None);
        assert_eq!(suggest("user@", &common()), None);
        assert_eq!(suggest("", &common()), None);
    }

    #[test]
    fn test_splits_at_last_at_sign() {
        assert_eq!(suggest("a@b@gmial.com", &common()), Some("a@b@gmail.com".into()));
    }

    #[test]
    fn test_malformed_domain_still_scored() {
        assert_eq!(suggest("user@gmail,com", &common()), Some("user@gmail.com".into()));
    }

    #[test]
    fn test_tie_keeps_first_candidate() {
        let domains = vec!["abc.com".to_string(), "abd.com".to_string()];
        // "abx.com" is one substitution from both
        assert_eq!(suggest("u@abx.com", &domains), Some("u@abc.com".into()));

        let reversed = vec!["abd.com".to_string(), "abc.com".to_string()];
        assert_eq!(suggest("u@abx.com", &reversed), Some("u@abd.com".into()));
    }

    #[test]
    fn test_closer_later_candidate_wins() {
        let domains = vec!["gmail.co".to_string(), "gmail.com".to_string()];
        assert_eq!(suggest("u@gmail.com", &domains), Some("u@gmail.com".into()));
    }

    #[test]
    fn test_empty_common_domains() {
        assert_eq!(suggest("user@gmial.com", &[]), None);
    }
}
