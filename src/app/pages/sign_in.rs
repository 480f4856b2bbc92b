//! Sign-in page.

use dioxus::prelude::*;

use crate::app::api::{Credentials, SessionInfo};
use crate::app::components::Layout;
use crate::app::session::use_session;
use crate::app::toast::use_toast;
use crate::app::Route;

#[component]
pub fn SignIn() -> Element {
    let navigator = use_navigator();
    let mut session = use_session();
    let mut toast = use_toast();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            busy.set(true);
            let credentials = Credentials {
                email: email(),
                password: password(),
            };
            match crate::app::api::post_json::<SessionInfo, _>("/api/auth/signin", &credentials)
                .await
            {
                Ok(info) => {
                    session.sign_in(info);
                    toast.success("Signed in");
                    navigator.push(Route::Home {});
                }
                Err(err) => toast.error(err.to_string()),
            }
            busy.set(false);
        });
    };

    rsx! {
        Layout {
            title: "Sign in".to_string(),
            nav_active: "signin".to_string(),

            article { class: "auth-card",
                h2 { "Sign in" }
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
                            required: true,
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: busy(),
                        aria_busy: if busy() { "true" } else { "false" },
                        if busy() { "Signing in..." } else { "Sign in" }
                    }
                }
                p {
                    small {
                        a { href: "/forgot-password", "Forgot your password?" }
                        " · No account yet? "
                        a { href: "/signup", "Sign up" }
                    }
                }
            }
        }
    }
}
