//! Shared UI components for the Dioxus fullstack web UI.

pub mod carousel;
pub mod counter;
pub mod event_card;
pub mod layout;
pub mod nav;
pub mod theme;

pub use carousel::HeroCarousel;
pub use counter::TicketCounter;
pub use event_card::EventCard;
pub use layout::Layout;
pub use nav::Nav;
