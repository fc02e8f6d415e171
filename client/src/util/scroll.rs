//! Viewport reset between screens.
//!
//! Screens swap in place without a navigation, so the browser keeps the old
//! scroll offset. Requires a browser environment; SSR paths no-op.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::session::Screen;

/// True when the screen moved since the last run. The first run only records
/// the initial screen.
pub fn screen_changed(previous: Option<Screen>, current: Screen) -> bool {
    previous.is_some_and(|previous| previous != current)
}

/// Scroll the window back to the top-left corner.
pub fn reset_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
