//! Dioxus fullstack application entry point.
//!
//! This module provides the root App component with client-side hydration
//! plus the shared session and toast contexts every page pulls from.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod pages;
pub mod session;
pub mod toast;

use pages::{
    AdminSettings, Bookings, EventDetail, Events, ForgotPassword, Home, Profile, ResetPassword,
    SignIn, SignUp,
};
use session::use_session_provider;
use toast::use_toast_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Shared contexts live at the root so every route sees the same
    // session and toast state.
    use_session_provider();
    use_toast_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/events")]
    Events {},
    #[route("/events/:id")]
    EventDetail { id: String },
    #[route("/signin")]
    SignIn {},
    #[route("/signup")]
    SignUp {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password")]
    ResetPassword {},
    #[route("/profile")]
    Profile {},
    #[route("/bookings")]
    Bookings {},
    #[route("/admin")]
    AdminSettings {},
}
