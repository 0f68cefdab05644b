//! Form Validation
//!
//! Client-side checks run before any auth request leaves the browser. The
//! email rule is stricter than a plain format check: near-miss spellings of
//! the big free-mail providers are treated as typos and rejected.

/// Minimum password length, aligned with the backend rule.
pub const MIN_PASSWORD_LENGTH: usize = 8;

const CORE_NAMES: [&str; 3] = ["gmail", "yahoo", "outlook"];
const CORE_DOMAINS: [&str; 3] = ["gmail.com", "yahoo.com", "outlook.com"];

/// Accept `local@domain.tld`, except likely-typo variants of
/// gmail.com / yahoo.com / outlook.com:
///
/// - exact matches of the three canonical domains are always valid;
/// - a `.com` domain whose base is an incomplete prefix of a provider name
///   (`gm.com`, `gmai.com`, `outloo.com`) is rejected;
/// - a `.com` domain one same-length typo away from a provider name
///   (`gmial.com`, `yahho.com`) is rejected;
/// - any other domain containing a provider name (`gmail.co`, `gmail.con`,
///   `yahoo.co.uk`) is rejected;
/// - everything else that matches the basic pattern is accepted.
pub fn is_plausible_email(value: &str) -> bool {
    let trimmed = value.trim().to_lowercase();

    let Some((_, domain)) = split_email(&trimmed) else {
        return false;
    };

    if CORE_DOMAINS.contains(&domain) {
        return true;
    }

    if let Some(base) = domain.strip_suffix(".com") {
        for core in CORE_NAMES {
            if core.starts_with(base) && base != core {
                return false;
            }
            if one_typo_apart(base, core) {
                return false;
            }
        }
    }

    if CORE_NAMES.iter().any(|core| domain.contains(core)) {
        return false;
    }

    true
}

/// Basic `local@domain.tld` shape: exactly one `@`, non-empty local part,
/// a dot in the domain with non-empty sides, no whitespace anywhere.
fn split_email(value: &str) -> Option<(&str, &str)> {
    if value.contains(char::is_whitespace) {
        return None;
    }

    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return None,
    };

    if local.is_empty() {
        return None;
    }

    let (head, tld) = domain.rsplit_once('.')?;
    if head.is_empty() || tld.is_empty() {
        return None;
    }

    Some((local, domain))
}

/// One substitution or one adjacent transposition. Length changes are not
/// treated as typos: incomplete spellings fall under the prefix rule, and a
/// shorter legitimate domain like `mail.com` must stay valid.
fn one_typo_apart(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();

    if a.len() != b.len() || a == b {
        return false;
    }

    let diffs: Vec<usize> = (0..a.len()).filter(|&i| a[i] != b[i]).collect();
    match diffs.as_slice() {
        [_] => true,
        [i, j] => j - i == 1 && a[*i] == b[*j] && a[*j] == b[*i],
        _ => false,
    }
}

// ============ Passwords ============

/// Cosmetic strength grade. Only `TooShort` blocks submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordStrength {
    TooShort,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn hint(&self) -> &'static str {
        match self {
            PasswordStrength::TooShort => "Too weak: use 8+ characters.",
            PasswordStrength::Weak => "Weak: add numbers.",
            PasswordStrength::Fair => "Fair: add symbols.",
            PasswordStrength::Good => "Good: add variety or length.",
            PasswordStrength::Strong => "Strong password.",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PasswordStrength::TooShort => "#ff6b6b",
            PasswordStrength::Weak => "#ff8c69",
            PasswordStrength::Fair => "#ffd166",
            PasswordStrength::Good => "#c1ff72",
            PasswordStrength::Strong => "#7dffb3",
        }
    }
}

/// Grade a password for the strength indicator. `Strong` requires 14+
/// characters plus all four character classes.
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.len() < MIN_PASSWORD_LENGTH {
        return PasswordStrength::TooShort;
    }

    let upper = password.chars().any(|c| c.is_uppercase());
    let lower = password.chars().any(|c| c.is_lowercase());
    let digit = password.chars().any(|c| c.is_ascii_digit());
    let symbol = password.chars().any(|c| !c.is_alphanumeric());
    let classes = [upper, lower, digit, symbol].iter().filter(|b| **b).count();

    if password.len() >= 14 && classes == 4 {
        PasswordStrength::Strong
    } else {
        match classes {
            0 | 1 => PasswordStrength::Weak,
            2 => PasswordStrength::Fair,
            _ => PasswordStrength::Good,
        }
    }
}

/// The only password rule that blocks submission.
pub fn password_meets_floor(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_canonical_and_other_providers() {
        assert!(is_plausible_email("trader@gmail.com"));
        assert!(is_plausible_email("trader@yahoo.com"));
        assert!(is_plausible_email("trader@outlook.com"));
        assert!(is_plausible_email("trader@protonmail.com"));
        assert!(is_plausible_email("trader@company.io"));
        assert!(is_plausible_email("  Trader@GMAIL.COM  "));
    }

    #[test]
    fn test_rejects_provider_typos() {
        assert!(!is_plausible_email("trader@gmial.com"));
        assert!(!is_plausible_email("trader@gmail.co"));
        assert!(!is_plausible_email("trader@gmail.con"));
        assert!(!is_plausible_email("trader@gm.com"));
        assert!(!is_plausible_email("trader@gmai.com"));
        assert!(!is_plausible_email("trader@yahho.com"));
        assert!(!is_plausible_email("trader@outloo.com"));
        assert!(!is_plausible_email("trader@gmail.com.ng"));
        assert!(!is_plausible_email("trader@yahoo.co.uk"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_plausible_email("not-an-email"));
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("@domain.com"));
        assert!(!is_plausible_email("two@at@signs.com"));
        assert!(!is_plausible_email("spaced name@site.com"));
        assert!(!is_plausible_email("trader@.com"));
    }

    #[test]
    fn test_one_typo_apart() {
        assert!(one_typo_apart("gmial", "gmail")); // transposition
        assert!(one_typo_apart("yahho", "yahoo")); // substitution
        assert!(!one_typo_apart("gmaail", "gmail")); // length change is not a typo
        assert!(!one_typo_apart("gmal", "gmail"));
        assert!(!one_typo_apart("gmail", "gmail"));
        assert!(!one_typo_apart("protonmail", "gmail"));
    }

    #[test]
    fn test_short_legitimate_domains_stay_valid() {
        assert!(is_plausible_email("trader@mail.com"));
        assert!(is_plausible_email("trader@aol.com"));
    }

    #[test]
    fn test_password_floor() {
        assert!(!password_meets_floor("short7!"));
        assert!(password_meets_floor("eightch8"));
        assert_eq!(password_strength("abc"), PasswordStrength::TooShort);
    }

    #[test]
    fn test_password_grades() {
        assert_eq!(password_strength("abcdefgh"), PasswordStrength::Weak);
        assert_eq!(password_strength("abcdefg1"), PasswordStrength::Fair);
        assert_eq!(password_strength("Abcdefg1"), PasswordStrength::Good);
        // All four classes but under 14 characters stays Good
        assert_eq!(password_strength("Abcdef1!"), PasswordStrength::Good);
        assert_eq!(password_strength("Abcdefghij1234!"), PasswordStrength::Strong);
    }
}
