//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers kept out of components so the display logic is testable
//! without a DOM.

pub mod format;
pub mod module_stats;
pub mod scroll;
