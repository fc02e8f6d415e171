//! Mock data backing every screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. `directory` holds the sample accounts the session
//! resolves role selections against; `catalog` holds the read-only content the
//! pages render.

pub mod catalog;
pub mod directory;
pub mod types;
