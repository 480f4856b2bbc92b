//! Session context shared across pages.
//!
//! Holds the signed-in user's backend session in a root-level signal and
//! mirrors it to `localStorage` so a reload keeps the user signed in. The
//! token is sent as a bearer header on authenticated `/api` calls.

use dioxus::prelude::*;

use crate::app::api::SessionInfo;

const SESSION_KEY: &str = "marquee-session";

/// Handle to the ambient session, cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    session: Signal<Option<SessionInfo>>,
}

impl SessionHandle {
    pub fn current(&self) -> Option<SessionInfo> {
        (self.session)()
    }

    pub fn token(&self) -> Option<String> {
        self.current().map(|info| info.access_token)
    }

    pub fn email(&self) -> Option<String> {
        self.current().and_then(|info| info.email)
    }

    pub fn signed_in(&self) -> bool {
        self.current().is_some()
    }

    pub fn sign_in(&mut self, info: SessionInfo) {
        store_session(Some(&info));
        self.session.set(Some(info));
    }

    pub fn sign_out(&mut self) {
        store_session(None);
        self.session.set(None);
    }
}

/// Install the session context at the app root and restore any persisted
/// session once the client is up.
pub fn use_session_provider() -> SessionHandle {
    let mut session = use_signal(|| None::<SessionInfo>);

    // Restore from localStorage on mount (client only)
    use_effect(move || {
        if let Some(stored) = load_session() {
            session.set(Some(stored));
        }
    });

    use_context_provider(|| SessionHandle { session })
}

/// Access the ambient session from any page or component.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

#[cfg(target_arch = "wasm32")]
fn load_session() -> Option<SessionInfo> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_session() -> Option<SessionInfo> {
    None
}

#[cfg(target_arch = "wasm32")]
fn store_session(info: Option<&SessionInfo>) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            match info {
                Some(info) => {
                    if let Ok(raw) = serde_json::to_string(info) {
                        let _ = storage.set_item(SESSION_KEY, &raw);
                    }
                }
                None => {
                    let _ = storage.remove_item(SESSION_KEY);
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn store_session(_info: Option<&SessionInfo>) {}
