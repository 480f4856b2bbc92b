//! Password candidate checks.
//!
//! Pure and total: no I/O, no panics, callable in any order.

/// Minimum accepted password length, matching the hosted auth provider's
/// default policy.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Reason a password candidate was refused locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordIssue {
    Empty,
    TooShort,
}

impl PasswordIssue {
    /// Inline message shown next to the password field.
    pub fn message(self) -> &'static str {
        match self {
            PasswordIssue::Empty => "Please enter a new password",
            PasswordIssue::TooShort => "Password must be at least 6 characters",
        }
    }
}

/// Check password strength. `Ok(())` means the candidate may be submitted.
pub fn validate_password(password: &str) -> Result<(), PasswordIssue> {
    if password.is_empty() {
        return Err(PasswordIssue::Empty);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordIssue::TooShort);
    }
    Ok(())
}

/// Confirmation-field equality check.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_refused() {
        assert_eq!(validate_password(""), Err(PasswordIssue::Empty));
    }

    #[test]
    fn short_passwords_are_refused() {
        for candidate in ["a", "ab", "abc", "abcd", "abcde"] {
            assert_eq!(validate_password(candidate), Err(PasswordIssue::TooShort));
        }
    }

    #[test]
    fn six_characters_is_the_boundary() {
        assert_eq!(validate_password("abcdef"), Ok(()));
        assert_eq!(validate_password("a much longer passphrase"), Ok(()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Six multi-byte characters pass even though the byte count differs.
        assert_eq!(validate_password("åäöåäö"), Ok(()));
    }

    #[test]
    fn match_check_is_plain_equality() {
        assert!(passwords_match("secret1", "secret1"));
        assert!(!passwords_match("secret1", "secret2"));
        assert!(passwords_match("", ""));
    }
}
