//! Sticky top bar with the EcoLearn mark.
//!
//! Shared by the landing page and the dashboard layout; the right-hand side is
//! supplied by the caller.

use leptos::prelude::*;

use crate::components::icon::{IconGlyph, IconSize};
use crate::data::types::{Icon, Tone};

#[component]
pub fn BrandHeader(children: Children) -> impl IntoView {
    view! {
        <header class="brand-header">
            <div class="container brand-header__row">
                <div class="brand-header__mark">
                    <IconGlyph icon=Icon::Leaf tone=Tone::Green size=IconSize::Large/>
                    <span class="brand-header__name gradient-text">"EcoLearn"</span>
                </div>
                <div class="brand-header__actions">{children()}</div>
            </div>
        </header>
    }
}
