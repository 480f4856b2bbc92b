//! Admin settings page.
//!
//! Three controlled forms, each writing whole rows back through the API:
//! system toggles, hero-banner slides, and notification templates. Access
//! control is enforced by the backend's row-level rules, not here.

use dioxus::prelude::*;

use crate::app::api::{BannerSlide, NotificationTemplate, SiteSettings};
use crate::app::components::Layout;
use crate::app::session::use_session;
use crate::app::toast::use_toast;

#[component]
pub fn AdminSettings() -> Element {
    let session = use_session();
    let mut toast = use_toast();

    // System toggle signals
    let mut booking_enabled = use_signal(|| true);
    let mut maintenance_mode = use_signal(|| false);
    let mut maintenance_message = use_signal(String::new);

    // Banner + template working copies
    let mut slides = use_signal(Vec::<BannerSlide>::new);
    let mut templates = use_signal(Vec::<NotificationTemplate>::new);

    // Load settings resources
    let settings = use_resource(|| async {
        crate::app::api::fetch_json::<SiteSettings>("/api/settings")
            .await
            .ok()
    });
    let loaded_slides = use_resource(|| async {
        crate::app::api::fetch_json::<Vec<BannerSlide>>("/api/banner")
            .await
            .ok()
    });
    let loaded_templates = use_resource(|| async {
        crate::app::api::fetch_json::<Vec<NotificationTemplate>>("/api/templates")
            .await
            .ok()
    });

    // Sync loaded values into the form signals
    use_effect(move || {
        if let Some(Some(s)) = settings.read().as_ref() {
            booking_enabled.set(s.booking_enabled);
            maintenance_mode.set(s.maintenance_mode);
            maintenance_message.set(s.maintenance_message.clone().unwrap_or_default());
        }
    });
    use_effect(move || {
        if let Some(Some(rows)) = loaded_slides.read().as_ref() {
            slides.set(rows.clone());
        }
    });
    use_effect(move || {
        if let Some(Some(rows)) = loaded_templates.read().as_ref() {
            templates.set(rows.clone());
        }
    });

    // Toggles save immediately, like flipping a switch
    let save_settings = move || {
        let token = session.token();
        let payload = SiteSettings {
            id: "default".to_string(),
            booking_enabled: booking_enabled(),
            maintenance_mode: maintenance_mode(),
            maintenance_message: Some(maintenance_message()).filter(|msg| !msg.is_empty()),
        };
        spawn(async move {
            let Some(token) = token else { return };
            if let Err(err) =
                crate::app::api::put_json_no_response("/api/settings", Some(&token), &payload).await
            {
                toast.error(err.to_string());
            }
        });
    };

    let save_banner = move |_| {
        let token = session.token();
        let payload = slides();
        spawn(async move {
            let Some(token) = token else { return };
            match crate::app::api::put_json_no_response("/api/banner", Some(&token), &payload).await
            {
                Ok(()) => toast.success("Banner saved"),
                Err(err) => toast.error(err.to_string()),
            }
        });
    };

    let save_templates = move |_| {
        let token = session.token();
        let payload = templates();
        spawn(async move {
            let Some(token) = token else { return };
            match crate::app::api::put_json_no_response("/api/templates", Some(&token), &payload)
                .await
            {
                Ok(()) => toast.success("Templates saved"),
                Err(err) => toast.error(err.to_string()),
            }
        });
    };

    let slide_count = slides().len();

    rsx! {
        Layout {
            title: "Admin".to_string(),
            nav_active: "admin".to_string(),

            h1 { "Admin settings" }

            if !session.signed_in() {
                p { "Please " a { href: "/signin", "sign in" } " with an admin account." }
            } else {
                // System toggles
                section { class: "mb-8",
                    div { class: "mb-4",
                        h2 { "System" }
                        p { small { "Changes take effect immediately" } }
                    }
                    article {
                        label {
                            input {
                                r#type: "checkbox",
                                role: "switch",
                                checked: booking_enabled(),
                                onchange: move |_| {
                                    booking_enabled.toggle();
                                    save_settings();
                                }
                            }
                            "Booking enabled"
                        }
                        label {
                            input {
                                r#type: "checkbox",
                                role: "switch",
                                checked: maintenance_mode(),
                                onchange: move |_| {
                                    maintenance_mode.toggle();
                                    save_settings();
                                }
                            }
                            "Maintenance mode"
                        }
                        label { "Maintenance message"
                            input {
                                value: maintenance_message(),
                                oninput: move |evt| maintenance_message.set(evt.value()),
                                onchange: move |_| save_settings(),
                            }
                        }
                    }
                }

                // Hero banner slides
                section { class: "mb-8",
                    div { class: "mb-4",
                        h2 { "Hero banner" }
                        p { small { "Slides shown on the home page carousel" } }
                    }
                    article {
                        for (index, slide) in slides().into_iter().enumerate() {
                            div {
                                key: "{index}",
                                style: "border-bottom:1px solid var(--pico-muted-border-color);padding-bottom:1rem;margin-bottom:1rem;",
                                div { class: "grid",
                                    label { "Title"
                                        input {
                                            value: "{slide.title}",
                                            oninput: move |evt| slides.write()[index].title = evt.value(),
                                        }
                                    }
                                    label { "Subtitle"
                                        input {
                                            value: slide.subtitle.clone().unwrap_or_default(),
                                            oninput: move |evt| {
                                                slides.write()[index].subtitle =
                                                    Some(evt.value()).filter(|text| !text.is_empty());
                                            },
                                        }
                                    }
                                }
                                div { class: "grid",
                                    label { "Image URL"
                                        input {
                                            value: "{slide.image_url}",
                                            oninput: move |evt| slides.write()[index].image_url = evt.value(),
                                        }
                                    }
                                    label { "Link URL"
                                        input {
                                            value: slide.link_url.clone().unwrap_or_default(),
                                            oninput: move |evt| {
                                                slides.write()[index].link_url =
                                                    Some(evt.value()).filter(|text| !text.is_empty());
                                            },
                                        }
                                    }
                                }
                                label {
                                    input {
                                        r#type: "checkbox",
                                        checked: slide.active,
                                        onchange: move |_| {
                                            let current = slides.read()[index].active;
                                            slides.write()[index].active = !current;
                                        }
                                    }
                                    "Active"
                                }
                            }
                        }
                        div { class: "controls",
                            button {
                                class: "outline",
                                onclick: move |_| {
                                    slides.write().push(BannerSlide {
                                        position: slide_count as i32 + 1,
                                        active: true,
                                        ..Default::default()
                                    });
                                },
                                "Add slide"
                            }
                            button { onclick: save_banner, "Save banner" }
                        }
                    }
                }

                // Notification templates
                section {
                    div { class: "mb-4",
                        h2 { "Notification templates" }
                        p { small { "Subject and body for outgoing emails" } }
                    }
                    article {
                        for (index, template) in templates().into_iter().enumerate() {
                            details { key: "{template.id}",
                                summary { "{template.name}" }
                                label { "Subject"
                                    input {
                                        value: "{template.subject}",
                                        oninput: move |evt| templates.write()[index].subject = evt.value(),
                                    }
                                }
                                label { "Body"
                                    textarea {
                                        rows: 6,
                                        value: "{template.body}",
                                        oninput: move |evt| templates.write()[index].body = evt.value(),
                                    }
                                }
                            }
                        }
                        button { onclick: save_templates, "Save templates" }
                    }
                }
            }
        }
    }
}
