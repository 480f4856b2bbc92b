//! The password-reset flow controller.
//!
//! Owns the `Processing -> Error | Ready -> Success` progression. The two
//! network effects (session exchange, password update) sit behind the
//! [`SessionGateway`] trait so the transitions stay testable without a
//! rendering or network harness. Notification side effects are the caller's
//! concern; this module only decides.

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use super::locate::locate_recovery_token;
use super::token_preview;
use super::validate::{passwords_match, validate_password, PasswordIssue};

/// Human-readable failure from the auth service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Auth-service operations the flow depends on.
///
/// `?Send` because the WASM implementation drives browser futures.
#[async_trait(?Send)]
pub trait SessionGateway {
    /// Exchange a recovery token for an authenticated session. The refresh
    /// credential is empty: only the short-lived recovery grant exists.
    async fn establish_session(&self, access_token: &str) -> Result<(), GatewayError>;

    /// Set a new password against the established session.
    async fn update_password(&self, password: &str) -> Result<(), GatewayError>;

    /// Whether an authenticated session already exists (a signed-in user
    /// may open the reset page without a token in the URL).
    async fn has_session(&self) -> bool;
}

/// Progress of the reset flow. `Error` and `Success` are sticky for the
/// remainder of the page lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPhase {
    /// Validating the link and establishing a session.
    Processing,
    /// Awaiting password submission.
    Ready,
    /// No usable token; a fresh reset link is needed.
    Error,
    /// Password updated.
    Success,
}

impl ResetPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, ResetPhase::Error | ResetPhase::Success)
    }
}

/// Result of one form submission, for the caller to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local strength check failed; inline error, no network call made.
    Invalid(PasswordIssue),
    /// Confirmation differs; inline error, no network call made.
    Mismatch,
    /// The service rejected the update; the user may resubmit.
    Rejected(String),
    /// Password updated.
    Completed,
    /// Submission ignored: the flow is not awaiting a password.
    NotReady,
}

/// Entry transition, run once on page load.
///
/// Locates a token in `page_url` and exchanges it for a session. With no
/// token in the URL, an already-authenticated session still reaches
/// `Ready`; otherwise the flow lands in the terminal `Error`.
pub async fn begin<G: SessionGateway + ?Sized>(gateway: &G, page_url: &Url) -> ResetPhase {
    match locate_recovery_token(page_url) {
        Some(token) => {
            debug!(
                source = ?token.source,
                token = %token_preview(&token.value),
                "exchanging recovery token for a session"
            );
            match gateway.establish_session(&token.value).await {
                Ok(()) => ResetPhase::Ready,
                Err(err) => {
                    warn!(error = %err, "recovery token rejected by auth service");
                    ResetPhase::Error
                }
            }
        }
        None => {
            if gateway.has_session().await {
                debug!("no token in URL, continuing with the active session");
                ResetPhase::Ready
            } else {
                warn!("no recovery token in URL and no active session");
                ResetPhase::Error
            }
        }
    }
}

/// Form-submission transition.
///
/// Only acts from `Ready`; every other phase is returned unchanged. Local
/// validation failures never reach the network, and a rejected update keeps
/// the flow in `Ready` so the user can retry.
pub async fn submit<G: SessionGateway + ?Sized>(
    gateway: &G,
    phase: ResetPhase,
    password: &str,
    confirmation: &str,
) -> (ResetPhase, SubmitOutcome) {
    if phase != ResetPhase::Ready {
        return (phase, SubmitOutcome::NotReady);
    }

    if let Err(issue) = validate_password(password) {
        return (ResetPhase::Ready, SubmitOutcome::Invalid(issue));
    }
    if !passwords_match(password, confirmation) {
        return (ResetPhase::Ready, SubmitOutcome::Mismatch);
    }

    match gateway.update_password(password).await {
        Ok(()) => (ResetPhase::Success, SubmitOutcome::Completed),
        Err(err) => {
            warn!(error = %err, "password update rejected");
            (ResetPhase::Ready, SubmitOutcome::Rejected(err.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records gateway traffic and answers from canned outcomes.
    struct MockGateway {
        accept_token: bool,
        accept_password: bool,
        existing_session: bool,
        calls: RefCell<Vec<String>>,
    }

    impl MockGateway {
        fn new() -> Self {
            Self {
                accept_token: true,
                accept_password: true,
                existing_session: false,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl SessionGateway for MockGateway {
        async fn establish_session(&self, access_token: &str) -> Result<(), GatewayError> {
            self.calls
                .borrow_mut()
                .push(format!("establish:{access_token}"));
            if self.accept_token {
                Ok(())
            } else {
                Err(GatewayError::new("Invalid or expired reset link"))
            }
        }

        async fn update_password(&self, password: &str) -> Result<(), GatewayError> {
            self.calls.borrow_mut().push(format!("update:{password}"));
            if self.accept_password {
                Ok(())
            } else {
                Err(GatewayError::new("Password update rejected"))
            }
        }

        async fn has_session(&self) -> bool {
            self.calls.borrow_mut().push("has_session".to_string());
            self.existing_session
        }
    }

    fn url(s: &str) -> Url {
        Url::parse(s).expect("test URL parses")
    }

    #[tokio::test]
    async fn valid_fragment_token_reaches_ready_after_one_exchange() {
        let gateway = MockGateway::new();
        let phase = begin(
            &gateway,
            &url("https://app.example/reset#access_token=abc123&type=recovery"),
        )
        .await;

        assert_eq!(phase, ResetPhase::Ready);
        assert_eq!(gateway.calls(), vec!["establish:abc123"]);
    }

    #[tokio::test]
    async fn missing_token_reaches_error_without_an_exchange() {
        let gateway = MockGateway::new();
        let phase = begin(&gateway, &url("https://app.example/reset")).await;

        assert_eq!(phase, ResetPhase::Error);
        assert_eq!(gateway.calls(), vec!["has_session"]);
    }

    #[tokio::test]
    async fn missing_token_with_active_session_still_reaches_ready() {
        let mut gateway = MockGateway::new();
        gateway.existing_session = true;
        let phase = begin(&gateway, &url("https://app.example/reset")).await;

        assert_eq!(phase, ResetPhase::Ready);
    }

    #[tokio::test]
    async fn rejected_token_reaches_error() {
        let mut gateway = MockGateway::new();
        gateway.accept_token = false;
        let phase = begin(
            &gateway,
            &url("https://app.example/reset?token=expired00"),
        )
        .await;

        assert_eq!(phase, ResetPhase::Error);
    }

    #[tokio::test]
    async fn short_password_stays_ready_with_no_network_call() {
        let gateway = MockGateway::new();
        let (phase, outcome) = submit(&gateway, ResetPhase::Ready, "abc", "abc").await;

        assert_eq!(phase, ResetPhase::Ready);
        assert_eq!(outcome, SubmitOutcome::Invalid(PasswordIssue::TooShort));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn mismatched_confirmation_stays_ready_with_no_network_call() {
        let gateway = MockGateway::new();
        let (phase, outcome) = submit(&gateway, ResetPhase::Ready, "secret1", "secret2").await;

        assert_eq!(phase, ResetPhase::Ready);
        assert_eq!(outcome, SubmitOutcome::Mismatch);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn accepted_update_reaches_success() {
        let gateway = MockGateway::new();
        let (phase, outcome) = submit(&gateway, ResetPhase::Ready, "secret1", "secret1").await;

        assert_eq!(phase, ResetPhase::Success);
        assert_eq!(outcome, SubmitOutcome::Completed);
        assert_eq!(gateway.calls(), vec!["update:secret1"]);
    }

    #[tokio::test]
    async fn rejected_update_stays_ready_for_retry() {
        let mut gateway = MockGateway::new();
        gateway.accept_password = false;
        let (phase, outcome) = submit(&gateway, ResetPhase::Ready, "secret1", "secret1").await;

        assert_eq!(phase, ResetPhase::Ready);
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected("Password update rejected".to_string())
        );

        // Ready permits another attempt; each one hits the gateway.
        let (phase, _) = submit(&gateway, phase, "secret1", "secret1").await;
        assert_eq!(phase, ResetPhase::Ready);
        assert_eq!(gateway.calls(), vec!["update:secret1", "update:secret1"]);
    }

    #[tokio::test]
    async fn terminal_phases_ignore_submissions() {
        let gateway = MockGateway::new();

        for terminal in [ResetPhase::Error, ResetPhase::Success] {
            let (phase, outcome) = submit(&gateway, terminal, "secret1", "secret1").await;
            assert_eq!(phase, terminal);
            assert_eq!(outcome, SubmitOutcome::NotReady);
        }
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn processing_phase_ignores_submissions() {
        let gateway = MockGateway::new();
        let (phase, outcome) = submit(&gateway, ResetPhase::Processing, "secret1", "secret1").await;

        assert_eq!(phase, ResetPhase::Processing);
        assert_eq!(outcome, SubmitOutcome::NotReady);
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn only_error_and_success_are_terminal() {
        assert!(!ResetPhase::Processing.is_terminal());
        assert!(!ResetPhase::Ready.is_terminal());
        assert!(ResetPhase::Error.is_terminal());
        assert!(ResetPhase::Success.is_terminal());
    }
}
