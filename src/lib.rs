//! Marquee - event ticketing web app
//!
//! A Dioxus fullstack application backed by a hosted auth + table REST
//! service. This library provides:
//! - The browsing and booking UI (events, bookings, profile)
//! - Account flows, including the password-recovery token handling
//! - Same-origin `/api` handlers that proxy the hosted backend
//! - Admin forms for site settings, banner slides, and templates

#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Password-reset token discovery and flow control (pure, shared)
pub mod reset;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod backend;
#[cfg(feature = "server")]
pub mod config;
