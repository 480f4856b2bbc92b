//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::Nav;
use super::theme::{ThemeSwitcher, THEME_SCRIPT};
use crate::app::toast::Toasts;

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.status-ok { color: var(--pico-ins-color); }
.status-err { color: var(--pico-del-color); }
.event-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; }
.event-card { cursor: pointer; overflow: hidden; }
.event-card img { width: 100%; height: 160px; object-fit: cover; }
.event-card .category { font-size: 0.8rem; text-transform: uppercase; color: var(--pico-muted-color); }
.auth-card { max-width: 26rem; margin: 3rem auto; }
.auth-error { color: var(--pico-del-color); font-size: 0.9rem; margin-top: 0.25rem; }
.auth-success { color: var(--pico-ins-color); }
small { color: var(--pico-muted-color); }
/* Hero carousel */
.hero { position: relative; border-radius: var(--pico-border-radius); overflow: hidden; margin-bottom: 2rem; }
.hero-slide { min-height: 260px; display: flex; flex-direction: column; justify-content: flex-end; padding: 2rem; background-size: cover; background-position: center; color: #fff; }
.hero-controls { position: absolute; top: 50%; width: 100%; display: flex; justify-content: space-between; padding: 0 0.5rem; }
.hero-controls button { margin: 0; padding: 0.25rem 0.75rem; }
.hero-dots { position: absolute; bottom: 0.75rem; width: 100%; text-align: center; }
.hero-dots button { padding: 0; width: 0.6rem; height: 0.6rem; border-radius: 50%; margin: 0 0.2rem; }
/* Ticket counter */
.ticket-counter { display: inline-flex; align-items: center; gap: 0.75rem; }
.ticket-counter button { margin: 0; width: 2.5rem; padding: 0.25rem; }
/* Toasts */
.toast-stack { position: fixed; top: 1rem; right: 1rem; z-index: 100; display: flex; flex-direction: column; gap: 0.5rem; }
.toast { display: flex; align-items: center; gap: 0.75rem; padding: 0.6rem 0.9rem; border-radius: var(--pico-border-radius); background: var(--pico-card-background-color); box-shadow: var(--pico-card-box-shadow); }
.toast-success { border-left: 4px solid var(--pico-ins-color); }
.toast-error { border-left: 4px solid var(--pico-del-color); }
.toast-dismiss { margin: 0; padding: 0 0.4rem; background: none; border: none; color: var(--pico-muted-color); }
/* Mobile nav */
.show-mobile { display: none; }
@media (max-width: 768px) {
    .hide-mobile { display: none; }
    .show-mobile { display: block; }
}
/* Theme switcher */
.theme-switcher { display: flex; gap: 0.25rem; }
.theme-switcher button { padding: 0.25rem 0.5rem; font-size: 0.8rem; margin: 0; }
.theme-switcher button.active { background: var(--pico-primary-background); color: var(--pico-primary-inverse); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Marquee", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }
        // Theme init runs immediately (no DOM needed) to prevent flash
        document::Script { {THEME_SCRIPT} }

        // Body content
        header { class: "container",
            Nav { active: props.nav_active.clone() }
        }
        main { class: "container",
            {props.children}
        }
        Toasts {}
        footer {
            class: "container",
            style: "display:flex;justify-content:space-between;align-items:center;",
            small { "Marquee v{version}" }
            ThemeSwitcher {}
        }
    }
}
