//! Event card for catalog grids.

use dioxus::prelude::*;

use crate::app::api::EventSummary;

/// Format a price stored in cents, e.g. `2450` -> `"$24.50"`.
pub fn format_price(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, (cents % 100).abs())
}

#[derive(Props, Clone, PartialEq)]
pub struct EventCardProps {
    pub event: EventSummary,
    pub on_select: EventHandler<String>,
}

/// Card showing one event: artwork, category, title, venue, date, price.
#[component]
pub fn EventCard(props: EventCardProps) -> Element {
    let event = props.event.clone();
    let id = event.id.clone();
    let date = event.starts_at.format("%a %b %e, %H:%M").to_string();

    rsx! {
        article {
            class: "event-card",
            onclick: move |_| props.on_select.call(id.clone()),
            if let Some(image) = event.image_url.clone() {
                img { src: "{image}", alt: "{event.title}" }
            }
            div { class: "category", "{event.category}" }
            h4 { style: "margin-bottom:0.25rem;", "{event.title}" }
            p { style: "margin-bottom:0.25rem;", "{event.venue} · {event.city}" }
            small { "{date}" }
            p { strong { {format_price(event.price_cents)} } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formatting_pads_cents() {
        assert_eq!(format_price(2450), "$24.50");
        assert_eq!(format_price(900), "$9.00");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(0), "$0.00");
    }
}
