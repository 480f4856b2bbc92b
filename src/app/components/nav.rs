//! Navigation bar with session-aware links and a mobile toggle.

use dioxus::prelude::*;

use crate::app::session::use_session;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "events")
    pub active: String,
}

#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut session = use_session();
    let mut menu_open = use_signal(|| false);

    let nav_link_class = |page: &str| {
        if props.active == page {
            "contrast"
        } else {
            "secondary"
        }
    };

    let signed_in = session.signed_in();
    let email = session.email();

    rsx! {
        nav {
            ul {
                li { a { class: "contrast", href: "/", strong { "Marquee" } } }
            }
            ul { class: if menu_open() { "" } else { "hide-mobile" },
                li { a { class: nav_link_class("home"), href: "/", "Home" } }
                li { a { class: nav_link_class("events"), href: "/events", "Events" } }
                if signed_in {
                    li { a { class: nav_link_class("bookings"), href: "/bookings", "My Bookings" } }
                    li { a { class: nav_link_class("profile"), href: "/profile", "Profile" } }
                    li { a { class: nav_link_class("admin"), href: "/admin", "Admin" } }
                    li {
                        button {
                            class: "outline secondary",
                            onclick: move |_| session.sign_out(),
                            if let Some(email) = email.clone() {
                                "Sign out ({email})"
                            } else {
                                "Sign out"
                            }
                        }
                    }
                } else {
                    li { a { class: nav_link_class("signin"), href: "/signin", "Sign in" } }
                    li { a { role: "button", href: "/signup", "Sign up" } }
                }
            }
            ul { class: "show-mobile",
                li {
                    button {
                        class: "outline secondary",
                        onclick: move |_| menu_open.toggle(),
                        "☰"
                    }
                }
            }
        }
    }
}
