//! Transient notification context.
//!
//! Pages report backend outcomes (success and failure) here; the `Toasts`
//! overlay renders whatever is queued. Inline form validation deliberately
//! does not go through this channel.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Handle for queueing notifications, cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastHandle {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    fn push(&mut self, level: ToastLevel, message: String) {
        let id = (self.next_id)();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast { id, level, message });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }

    pub fn current(&self) -> Vec<Toast> {
        (self.toasts)()
    }
}

/// Install the toast context at the app root.
pub fn use_toast_provider() -> ToastHandle {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| ToastHandle { toasts, next_id })
}

/// Access the ambient toast queue from any page or component.
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>()
}

/// Fixed-position notification list, rendered once inside the layout.
#[component]
pub fn Toasts() -> Element {
    let mut handle = use_toast();
    let toasts = handle.current();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: if toast.level == ToastLevel::Success { "toast toast-success" } else { "toast toast-error" },
                    span { "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| handle.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
