//! Learning module card for the student dashboard.

use leptos::prelude::*;

use crate::components::difficulty_badge::DifficultyBadge;
use crate::components::icon::{IconGlyph, IconSize};
use crate::data::types::{Icon, LearningModule, Tone};

#[component]
pub fn ModuleCard(module: LearningModule) -> impl IntoView {
    let completed = module.completed;
    view! {
        <div class="card card--interactive module-card">
            <div class="module-card__top">
                <IconGlyph icon=module.icon tone=module.tone size=IconSize::Large/>
                <DifficultyBadge difficulty=module.difficulty/>
            </div>
            <h3 class="module-card__title">{module.title}</h3>
            <p class="module-card__description">{module.description}</p>
            <div class="module-card__footer">
                <span class="module-card__points">
                    <IconGlyph icon=Icon::Star tone=Tone::Yellow size=IconSize::Small/>
                    {format!("{} points", module.points)}
                </span>
                <Show
                    when=move || completed
                    fallback=|| view! { <button class="btn btn--primary btn--small">"Start"</button> }
                >
                    <span class="module-card__done">"✓ Completed"</span>
                </Show>
            </div>
        </div>
    }
}
