//! Client-side state.
//!
//! DESIGN
//! ======
//! State types are plain values with no Leptos dependency. The app wraps them
//! in signals and provides them through context.

pub mod session;
