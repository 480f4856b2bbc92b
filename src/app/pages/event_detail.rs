//! Event detail page with the booking form.

use dioxus::prelude::*;

use crate::app::api::{Booking, BookingRequest, EventSummary, SiteSettings};
use crate::app::components::event_card::format_price;
use crate::app::components::{Layout, TicketCounter};
use crate::app::session::use_session;
use crate::app::toast::use_toast;

#[component]
pub fn EventDetail(id: String) -> Element {
    let session = use_session();
    let mut toast = use_toast();

    let mut quantity = use_signal(|| 1u32);
    // Only one booking call may be outstanding; the button is disabled while
    // this is set.
    let mut busy = use_signal(|| false);
    let mut confirmed = use_signal(|| None::<Booking>);

    let event_id = id.clone();
    let event = use_resource(use_reactive!(|(event_id,)| async move {
        crate::app::api::fetch_json::<EventSummary>(&format!("/api/events/{event_id}"))
            .await
            .ok()
    }));
    let settings = use_resource(|| async {
        crate::app::api::fetch_json::<SiteSettings>("/api/settings")
            .await
            .ok()
    });

    let event = event.read().clone().flatten();
    let settings = settings.read().clone().flatten().unwrap_or_default();

    let book = move |event: EventSummary| {
        let token = session.token();
        spawn(async move {
            let Some(token) = token else {
                toast.error("Sign in to book tickets");
                return;
            };
            busy.set(true);
            let request = BookingRequest {
                event_id: event.id.clone(),
                quantity: quantity(),
            };
            match crate::app::api::post_json_auth::<Booking, _>("/api/bookings", &token, &request)
                .await
            {
                Ok(booking) => {
                    toast.success(format!("Booking confirmed: {}", booking.reference));
                    confirmed.set(Some(booking));
                }
                Err(err) => toast.error(err.to_string()),
            }
            busy.set(false);
        });
    };

    rsx! {
        Layout {
            title: event.as_ref().map(|e| e.title.clone()).unwrap_or_else(|| "Event".to_string()),
            nav_active: "events".to_string(),

            if let Some(event) = event {
                article {
                    if let Some(image) = event.image_url.clone() {
                        img { src: "{image}", alt: "{event.title}", style: "width:100%;max-height:320px;object-fit:cover;" }
                    }
                    div { class: "category", "{event.category}" }
                    h1 { style: "margin-bottom:0.25rem;", "{event.title}" }
                    p { "{event.venue} · {event.city}" }
                    small { {event.starts_at.format("%A %B %e, %Y at %H:%M").to_string()} }
                    p { style: "margin-top:1rem;", "{event.description}" }

                    if let Some(booking) = confirmed() {
                        div { class: "auth-success",
                            h3 { "You're in!" }
                            p { "Reference " strong { "{booking.reference}" } " · {booking.quantity} ticket(s) · " {format_price(booking.total_cents)} }
                            a { href: "/bookings", "View my bookings" }
                        }
                    } else if !settings.booking_enabled {
                        p { class: "status-err", "Booking is currently disabled." }
                    } else {
                        div { style: "display:flex;align-items:center;gap:1.5rem;margin-top:1rem;",
                            TicketCounter {
                                value: quantity(),
                                on_change: move |next| quantity.set(next),
                            }
                            strong { {format_price(event.price_cents * quantity() as i64)} }
                            button {
                                disabled: busy(),
                                aria_busy: if busy() { "true" } else { "false" },
                                onclick: {
                                    let event = event.clone();
                                    move |_| book(event.clone())
                                },
                                if busy() { "Booking..." } else { "Book tickets" }
                            }
                        }
                        if !session.signed_in() {
                            p { small { "You'll need to " a { href: "/signin", "sign in" } " to complete a booking." } }
                        }
                    }
                }
            } else {
                div { aria_busy: "true", "Loading event..." }
            }
        }
    }
}
