//! Password-reset flow: token discovery, credential checks, and the
//! processing/ready/error/success state machine.
//!
//! Everything in this module is shared between the server and the WASM
//! client and performs no I/O of its own; network effects go through the
//! [`flow::SessionGateway`] trait.

pub mod flow;
pub mod locate;
pub mod validate;

pub use flow::{begin, submit, GatewayError, ResetPhase, SessionGateway, SubmitOutcome};
pub use locate::{locate_recovery_token, RecoveryToken, TokenSource};
pub use validate::{passwords_match, validate_password, PasswordIssue, MIN_PASSWORD_LENGTH};

/// Shorten a credential for log output. Full token values never reach logs.
pub fn token_preview(value: &str) -> String {
    const VISIBLE: usize = 6;
    if value.chars().count() <= VISIBLE {
        "…".to_string()
    } else {
        let head: String = value.chars().take(VISIBLE).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_tokens() {
        assert_eq!(token_preview("abcdefghijklmnop"), "abcdef…");
    }

    #[test]
    fn preview_hides_short_tokens_entirely() {
        assert_eq!(token_preview("abc"), "…");
    }
}
