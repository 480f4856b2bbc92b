//! Dioxus fullstack page components.
//!
//! These pages use Dioxus signals and same-origin `/api` calls; all
//! persistence happens on the hosted backend behind those endpoints.

mod admin;
mod bookings;
mod event_detail;
mod events;
mod forgot_password;
mod home;
mod profile;
mod reset_password;
mod sign_in;
mod sign_up;

pub use admin::AdminSettings;
pub use bookings::Bookings;
pub use event_detail::EventDetail;
pub use events::Events;
pub use forgot_password::ForgotPassword;
pub use home::Home;
pub use profile::Profile;
pub use reset_password::ResetPassword;
pub use sign_in::SignIn;
pub use sign_up::SignUp;
