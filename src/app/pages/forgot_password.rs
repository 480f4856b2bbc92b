//! Forgot-password page: requests a recovery email.
//!
//! The redirect target is resolved server-side from the configured public
//! origin, so the emailed link lands on `/reset-password`.

use dioxus::prelude::*;

use crate::app::api::RecoverRequest;
use crate::app::components::Layout;
use crate::app::toast::use_toast;

#[component]
pub fn ForgotPassword() -> Element {
    let mut toast = use_toast();

    let mut email = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut sent = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            busy.set(true);
            let request = RecoverRequest { email: email() };
            match crate::app::api::post_json_no_response("/api/auth/recover", &request).await {
                Ok(()) => {
                    toast.success("Reset link sent");
                    sent.set(true);
                }
                Err(err) => toast.error(err.to_string()),
            }
            busy.set(false);
        });
    };

    rsx! {
        Layout {
            title: "Forgot password".to_string(),
            nav_active: "signin".to_string(),

            article { class: "auth-card",
                h2 { "Reset your password" }
                if sent() {
                    p { class: "auth-success",
                        "If an account exists for that address, a reset link is on its way. The link opens the reset page in this app."
                    }
                } else {
                    p { small { "Enter your email and we'll send you a reset link." } }
                    form { onsubmit: submit,
                        label { "Email"
                            input {
                                r#type: "email",
                                required: true,
                                value: email(),
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            disabled: busy(),
                            aria_busy: if busy() { "true" } else { "false" },
                            if busy() { "Sending..." } else { "Send reset link" }
                        }
                    }
                }
                p { small { a { href: "/signin", "Back to sign in" } } }
            }
        }
    }
}
