//! Sign-up page.
//!
//! Reuses the reset-flow credential checks so the strength rule stays in
//! one place.

use dioxus::prelude::*;

use crate::app::api::Credentials;
use crate::app::components::Layout;
use crate::app::toast::use_toast;
use crate::reset::{passwords_match, validate_password};

#[component]
pub fn SignUp() -> Element {
    let mut toast = use_toast();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut field_error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let mut registered = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        field_error.set(None);

        if let Err(issue) = validate_password(&password()) {
            field_error.set(Some(issue.message().to_string()));
            return;
        }
        if !passwords_match(&password(), &confirmation()) {
            field_error.set(Some("Passwords do not match".to_string()));
            return;
        }

        spawn(async move {
            busy.set(true);
            let credentials = Credentials {
                email: email(),
                password: password(),
            };
            match crate::app::api::post_json_no_response("/api/auth/signup", &credentials).await {
                Ok(()) => {
                    toast.success("Account created. Check your email to confirm.");
                    registered.set(true);
                }
                Err(err) => toast.error(err.to_string()),
            }
            busy.set(false);
        });
    };

    rsx! {
        Layout {
            title: "Sign up".to_string(),
            nav_active: "signup".to_string(),

            article { class: "auth-card",
                h2 { "Create your account" }
                if registered() {
                    p { class: "auth-success",
                        "Almost there - confirm your email, then "
                        a { href: "/signin", "sign in" }
                        "."
                    }
                } else {
                    form { onsubmit: submit,
                        label { "Email"
                            input {
                                r#type: "email",
                                required: true,
                                value: email(),
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                        label { "Password"
                            input {
                                r#type: "password",
                                placeholder: "At least 6 characters",
                                value: password(),
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }
                        label { "Confirm password"
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
                            if busy() { "Creating account..." } else { "Sign up" }
                        }
                    }
                }
            }
        }
    }
}
