//! Page modules for each screen of the session.
//!
//! ARCHITECTURE
//! ============
//! `SessionView` picks the page from the session; each page owns its event
//! wiring and delegates section rendering to `components`.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod session_view;
