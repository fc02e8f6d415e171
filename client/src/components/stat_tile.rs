//! Headline figure tile used by the teacher and parent overviews.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::data::types::StatCard;

/// `accent` picks the caption colour (`green` on teacher, `purple` on parent).
#[component]
pub fn StatTile(card: StatCard, #[prop(default = "green")] accent: &'static str) -> impl IntoView {
    view! {
        <div class="card stat-tile">
            <div class="stat-tile__top">
                <IconGlyph icon=card.icon tone=card.tone/>
                <span class="stat-tile__value">{card.value}</span>
            </div>
            <h3 class="stat-tile__title">{card.title}</h3>
            <p class=format!("stat-tile__note accent--{accent}")>{card.note}</p>
        </div>
    }
}
