//! Horizontal percent bar.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use leptos::prelude::*;

/// Inline width for the fill; values above 100 are clamped.
pub fn fill_style(percent: u8) -> String {
    format!("width: {}%", percent.min(100))
}

#[component]
pub fn ProgressBar(percent: u8, #[prop(optional)] thin: bool) -> impl IntoView {
    view! {
        <div class="progress" class:progress--thin=thin>
            <div class="progress__fill" style=fill_style(percent)></div>
        </div>
    }
}
