//! Badge tile; unearned badges render dimmed.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::data::types::Achievement;

#[component]
pub fn AchievementCard(achievement: Achievement) -> impl IntoView {
    let caption = achievement.earned_caption();
    view! {
        <div class="card achievement-card" class:achievement-card--earned=achievement.earned>
            <div class="achievement-card__icon">
                <IconGlyph icon=achievement.icon tone=achievement.tone/>
            </div>
            <h3 class="achievement-card__title">{achievement.title}</h3>
            <p class="achievement-card__description">{achievement.description}</p>
            {caption.map(|text| view! { <div class="achievement-card__date">{text}</div> })}
        </div>
    }
}
