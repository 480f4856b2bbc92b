//! Profile page: display name and phone, saved as one row.

use dioxus::prelude::*;

use crate::app::api::Profile as ProfileData;
use crate::app::components::Layout;
use crate::app::session::use_session;
use crate::app::toast::use_toast;

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let mut toast = use_toast();

    let mut display_name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let token = session.token();
    let profile = use_resource(use_reactive!(|(token,)| async move {
        let token = token?;
        crate::app::api::fetch_json_auth::<ProfileData>("/api/profile", &token)
            .await
            .ok()
    }));

    // Sync loaded profile into the form signals
    use_effect(move || {
        if let Some(Some(data)) = profile.read().as_ref() {
            display_name.set(data.display_name.clone().unwrap_or_default());
            phone.set(data.phone.clone().unwrap_or_default());
        }
    });

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let token = session.token();
        spawn(async move {
            let Some(token) = token else {
                return;
            };
            busy.set(true);
            let update = ProfileData {
                id: String::new(), // filled in server-side from the session
                display_name: Some(display_name()).filter(|name| !name.is_empty()),
                phone: Some(phone()).filter(|number| !number.is_empty()),
                updated_at: None,
            };
            match crate::app::api::put_json_no_response("/api/profile", Some(&token), &update).await
            {
                Ok(()) => toast.success("Profile saved"),
                Err(err) => toast.error(err.to_string()),
            }
            busy.set(false);
        });
    };

    rsx! {
        Layout {
            title: "Profile".to_string(),
            nav_active: "profile".to_string(),

            article { class: "auth-card",
                h2 { "Your profile" }
                if !session.signed_in() {
                    p { "Please " a { href: "/signin", "sign in" } " to edit your profile." }
                } else {
                    if let Some(email) = session.email() {
                        p { small { "Signed in as {email}" } }
                    }
                    form { onsubmit: save,
                        label { "Display name"
                            input {
                                value: display_name(),
                                oninput: move |evt| display_name.set(evt.value()),
                            }
                        }
                        label { "Phone"
                            input {
                                r#type: "tel",
                                value: phone(),
                                oninput: move |evt| phone.set(evt.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            disabled: busy(),
                            aria_busy: if busy() { "true" } else { "false" },
                            if busy() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }
    }
}
