//! Reset-password page.
//!
//! Drives the reset flow controller: discover the recovery token in the
//! current URL, exchange it for a session, then accept a new password.
//! The page only renders the current phase; all decisions live in
//! [`crate::reset::flow`].

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;
use url::Url;

use crate::app::api::{PasswordUpdate, SessionExchange};
use crate::app::components::Layout;
use crate::app::session::{use_session, SessionHandle};
use crate::app::toast::use_toast;
use crate::reset::{begin, submit, GatewayError, ResetPhase, SessionGateway, SubmitOutcome};

/// Gateway backed by the same-origin `/api/auth` endpoints.
///
/// A successful exchange keeps the recovery grant in memory; the password
/// update then rides on that grant (or on an already-active session).
struct ApiGateway {
    granted: Rc<RefCell<Option<String>>>,
    session: SessionHandle,
}

#[async_trait(?Send)]
impl SessionGateway for ApiGateway {
    async fn establish_session(&self, access_token: &str) -> Result<(), GatewayError> {
        let exchange = SessionExchange {
            access_token: access_token.to_string(),
            refresh_token: None,
        };
        crate::app::api::post_json_no_response("/api/auth/session", &exchange)
            .await
            .map_err(|err| GatewayError::new(err.to_string()))?;
        *self.granted.borrow_mut() = Some(access_token.to_string());
        Ok(())
    }

    async fn update_password(&self, password: &str) -> Result<(), GatewayError> {
        let token = self
            .granted
            .borrow()
            .clone()
            .or_else(|| self.session.token())
            .ok_or_else(|| GatewayError::new("No active session"))?;
        let update = PasswordUpdate {
            password: password.to_string(),
        };
        crate::app::api::put_json_no_response("/api/auth/password", Some(&token), &update)
            .await
            .map_err(|err| GatewayError::new(err.to_string()))
    }

    async fn has_session(&self) -> bool {
        self.session.signed_in()
    }
}

/// The URL the browser is actually showing, fragment included. The reset
/// token never survives a round trip through the router, so this reads the
/// real location instead of route parameters.
#[cfg(target_arch = "wasm32")]
fn current_page_url() -> Option<Url> {
    let href = web_sys::window()?.location().href().ok()?;
    Url::parse(&href).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_page_url() -> Option<Url> {
    None
}

#[component]
pub fn ResetPassword() -> Element {
    let session = use_session();
    let mut toast = use_toast();

    let mut phase = use_signal(|| ResetPhase::Processing);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut field_error = use_signal(|| None::<String>);
    // One update call outstanding at most; the submit button is disabled
    // while this is set.
    let mut busy = use_signal(|| false);

    let gateway = use_hook(|| {
        Rc::new(ApiGateway {
            granted: Rc::new(RefCell::new(None)),
            session,
        })
    });

    // Validate the link once, on the client.
    let begin_gateway = gateway.clone();
    use_future(move || {
        let gateway = begin_gateway.clone();
        async move {
            let Some(page_url) = current_page_url() else {
                return;
            };
            let next = begin(gateway.as_ref(), &page_url).await;
            if next == ResetPhase::Error {
                toast.error("This reset link is invalid or has expired");
            }
            phase.set(next);
        }
    });

    let submit_gateway = gateway.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        field_error.set(None);
        let gateway = submit_gateway.clone();
        spawn(async move {
            busy.set(true);
            let (next, outcome) =
                submit(gateway.as_ref(), phase(), &password(), &confirmation()).await;
            match outcome {
                SubmitOutcome::Invalid(issue) => {
                    field_error.set(Some(issue.message().to_string()));
                }
                SubmitOutcome::Mismatch => {
                    field_error.set(Some("Passwords do not match".to_string()));
                }
                SubmitOutcome::Rejected(message) => toast.error(message),
                SubmitOutcome::Completed => {
                    toast.success("Password updated. You can sign in now.");
                    password.set(String::new());
                    confirmation.set(String::new());
                }
                SubmitOutcome::NotReady => {}
            }
            phase.set(next);
            busy.set(false);
        });
    };

    rsx! {
        Layout {
            title: "Reset password".to_string(),
            nav_active: "signin".to_string(),

            article { class: "auth-card",
                h2 { "Set a new password" }
                match phase() {
                    ResetPhase::Processing => rsx! {
                        div { aria_busy: "true", "Validating your reset link..." }
                    },
                    ResetPhase::Error => rsx! {
                        p { class: "status-err",
                            "This reset link is invalid or has expired."
                        }
                        p {
                            a { href: "/forgot-password", "Request a new reset link" }
                        }
                    },
                    ResetPhase::Success => rsx! {
                        p { class: "auth-success", "Your password has been updated." }
                        p { a { href: "/signin", "Go to sign in" } }
                    },
                    ResetPhase::Ready => rsx! {
                        form { onsubmit: on_submit,
                            label { "New password"
                                input {
                                    r#type: "password",
                                    placeholder: "At least 6 characters",
                                    value: password(),
                                    oninput: move |evt| password.set(evt.value()),
                                }
                            }
                            label { "Confirm new password"
                                input {
                                    r#type: "password",
                                    value: confirmation(),
                                    oninput: move |evt| confirmation.set(evt.value()),
                                }
                            }
                            if let Some(message) = field_error() {
                                p { class: "auth-error", "{message}" }
                            }
                            button {
                                r#type: "submit",
                                disabled: busy(),
                                aria_busy: if busy() { "true" } else { "false" },
                                if busy() { "Updating..." } else { "Update password" }
                            }
                        }
                    },
                }
            }
        }
    }
}
