//! "My bookings" page.

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::app::api::{Booking, EventSummary};
use crate::app::components::event_card::format_price;
use crate::app::components::Layout;
use crate::app::session::use_session;

#[component]
pub fn Bookings() -> Element {
    let session = use_session();

    let token = session.token();
    let bookings = use_resource(use_reactive!(|(token,)| async move {
        let token = token?;
        crate::app::api::fetch_json_auth::<Vec<Booking>>("/api/bookings", &token)
            .await
            .ok()
    }));
    // Event titles for labelling rows; bookings only carry the event id.
    let events = use_resource(|| async {
        crate::app::api::fetch_json::<Vec<EventSummary>>("/api/events")
            .await
            .ok()
    });

    let bookings = bookings.read().clone().flatten();
    let titles: HashMap<String, String> = events
        .read()
        .clone()
        .flatten()
        .unwrap_or_default()
        .into_iter()
        .map(|event| (event.id, event.title))
        .collect();

    rsx! {
        Layout {
            title: "My bookings".to_string(),
            nav_active: "bookings".to_string(),

            h1 { "My bookings" }

            if !session.signed_in() {
                p { "Please " a { href: "/signin", "sign in" } " to see your bookings." }
            } else if bookings.is_none() {
                div { aria_busy: "true", "Loading bookings..." }
            } else if bookings.clone().unwrap_or_default().is_empty() {
                p { "No bookings yet. " a { href: "/events", "Find something to see" } "." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Reference" }
                            th { "Event" }
                            th { "Tickets" }
                            th { "Total" }
                            th { "Status" }
                            th { "Booked" }
                        }
                    }
                    tbody {
                        for booking in bookings.unwrap_or_default() {
                            tr { key: "{booking.reference}",
                                td { code { "{booking.reference}" } }
                                td {
                                    {titles.get(&booking.event_id).cloned().unwrap_or_else(|| booking.event_id.clone())}
                                }
                                td { "{booking.quantity}" }
                                td { {format_price(booking.total_cents)} }
                                td { "{booking.status}" }
                                td {
                                    if let Some(created) = booking.created_at {
                                        {created.format("%Y-%m-%d %H:%M").to_string()}
                                    } else {
                                        "-"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
