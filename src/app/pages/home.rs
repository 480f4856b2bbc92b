//! Home page: hero carousel plus a featured slice of the catalog.

use dioxus::prelude::*;

use crate::app::api::{BannerSlide, EventSummary, SiteSettings};
use crate::app::components::{EventCard, HeroCarousel, Layout};
use crate::app::Route;

/// How many events the home page features before pointing at the full list.
const FEATURED_COUNT: usize = 6;

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    let settings = use_resource(|| async {
        crate::app::api::fetch_json::<SiteSettings>("/api/settings")
            .await
            .ok()
    });
    let slides = use_resource(|| async {
        crate::app::api::fetch_json::<Vec<BannerSlide>>("/api/banner")
            .await
            .ok()
    });
    let events = use_resource(|| async {
        crate::app::api::fetch_json::<Vec<EventSummary>>("/api/events")
            .await
            .ok()
    });

    let settings = settings.read().clone().flatten().unwrap_or_default();
    let slides = slides.read().clone().flatten().unwrap_or_default();
    let events = events.read().clone().flatten();

    let featured: Vec<EventSummary> = events
        .clone()
        .unwrap_or_default()
        .into_iter()
        .take(FEATURED_COUNT)
        .collect();

    rsx! {
        Layout {
            title: "Home".to_string(),
            nav_active: "home".to_string(),

            if settings.maintenance_mode {
                article { class: "status-err",
                    strong { "We'll be right back. " }
                    {settings.maintenance_message.clone().unwrap_or_else(|| "Booking is paused for maintenance.".to_string())}
                }
            }

            HeroCarousel { slides: slides }

            section {
                div { class: "mb-4",
                    h2 { "What's on" }
                    p { small { "Tickets for concerts, films, and live shows" } }
                }
                if events.is_none() {
                    div { aria_busy: "true", "Loading events..." }
                } else if featured.is_empty() {
                    p { "No events on sale right now. Check back soon." }
                } else {
                    div { class: "event-grid",
                        for event in featured {
                            EventCard {
                                key: "{event.id}",
                                event: event.clone(),
                                on_select: move |id: String| {
                                    navigator.push(Route::EventDetail { id });
                                },
                            }
                        }
                    }
                    p { style: "margin-top:1rem;",
                        a { href: "/events", "Browse all events →" }
                    }
                }
            }
        }
    }
}
