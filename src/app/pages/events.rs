//! Catalog page: full event list with a category filter.

use dioxus::prelude::*;

use crate::app::api::EventSummary;
use crate::app::components::{EventCard, Layout};
use crate::app::Route;

#[component]
pub fn Events() -> Element {
    let navigator = use_navigator();
    let mut category = use_signal(|| "all".to_string());

    let events = use_resource(|| async {
        crate::app::api::fetch_json::<Vec<EventSummary>>("/api/events")
            .await
            .ok()
    });

    let events = events.read().clone().flatten();

    let mut categories: Vec<String> = events
        .clone()
        .unwrap_or_default()
        .iter()
        .map(|event| event.category.clone())
        .collect();
    categories.sort();
    categories.dedup();

    let selected = category();
    let visible: Vec<EventSummary> = events
        .clone()
        .unwrap_or_default()
        .into_iter()
        .filter(|event| selected == "all" || event.category == selected)
        .collect();

    rsx! {
        Layout {
            title: "Events".to_string(),
            nav_active: "events".to_string(),

            h1 { "Events" }

            select {
                style: "max-width:16rem;",
                onchange: move |evt| category.set(evt.value()),
                option { value: "all", selected: selected == "all", "All categories" }
                for name in categories {
                    option { value: "{name}", selected: selected == name, "{name}" }
                }
            }

            if events.is_none() {
                div { aria_busy: "true", "Loading events..." }
            } else if visible.is_empty() {
                p { "Nothing in this category right now." }
            } else {
                div { class: "event-grid",
                    for event in visible {
                        EventCard {
                            key: "{event.id}",
                            event: event.clone(),
                            on_select: move |id: String| {
                                navigator.push(Route::EventDetail { id });
                            },
                        }
                    }
                }
            }
        }
    }
}
