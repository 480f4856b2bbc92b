//! Ticket-quantity counter with clamped +/- stepping.

use dioxus::prelude::*;

/// Apply a step to a quantity, clamped to `[min, max]`.
pub fn step(value: u32, delta: i32, min: u32, max: u32) -> u32 {
    let next = value as i64 + delta as i64;
    next.clamp(min as i64, max as i64) as u32
}

#[derive(Props, Clone, PartialEq)]
pub struct TicketCounterProps {
    pub value: u32,
    #[props(default = 1)]
    pub min: u32,
    #[props(default = 10)]
    pub max: u32,
    pub on_change: EventHandler<u32>,
}

/// Quantity stepper used on the booking form.
#[component]
pub fn TicketCounter(props: TicketCounterProps) -> Element {
    let TicketCounterProps {
        value,
        min,
        max,
        on_change,
    } = props;

    rsx! {
        div { class: "ticket-counter",
            button {
                class: "outline",
                disabled: value <= min,
                onclick: move |_| on_change.call(step(value, -1, min, max)),
                "−"
            }
            strong { "{value}" }
            button {
                class: "outline",
                disabled: value >= max,
                onclick: move |_| on_change.call(step(value, 1, min, max)),
                "+"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_clamps_at_both_ends() {
        assert_eq!(step(1, -1, 1, 10), 1);
        assert_eq!(step(10, 1, 1, 10), 10);
        assert_eq!(step(5, 1, 1, 10), 6);
        assert_eq!(step(5, -1, 1, 10), 4);
    }

    #[test]
    fn out_of_range_values_are_pulled_back() {
        assert_eq!(step(0, 0, 1, 10), 1);
        assert_eq!(step(99, 0, 1, 10), 10);
    }
}
