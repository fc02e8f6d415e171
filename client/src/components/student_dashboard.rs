//! Student dashboard body: progress banner, modules, achievements, leaderboard.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::achievement_card::AchievementCard;
use crate::components::icon::{IconGlyph, IconSize};
use crate::components::leaderboard::Leaderboard;
use crate::components::module_card::ModuleCard;
use crate::components::progress_bar::ProgressBar;
use crate::data::catalog::Catalog;
use crate::data::types::{Icon, Tone, User};

#[component]
pub fn StudentDashboard(user: User) -> impl IntoView {
    let catalog = expect_context::<Arc<Catalog>>();
    let progress = catalog.next_level_progress;

    let modules = catalog.modules.iter().cloned().map(|module| view! { <ModuleCard module=module/> }).collect::<Vec<_>>();
    let achievements = catalog
        .achievements
        .iter()
        .cloned()
        .map(|achievement| view! { <AchievementCard achievement=achievement/> })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard-body">
            <section class="banner banner--student">
                <div class="banner__row">
                    <div>
                        <h1 class="banner__title">{format!("Welcome back, {}!", user.name)}</h1>
                        <p class="banner__subtitle">"Ready for your next eco-adventure?"</p>
                    </div>
                    <div class="banner__score">
                        <div class="banner__points">{user.points.unwrap_or_default()}</div>
                        <div class="muted small">"Total Points"</div>
                        <div class="banner__level">{format!("Level {}", user.level.unwrap_or_default())}</div>
                    </div>
                </div>
                <div class="banner__progress">
                    <div class="banner__progress-label">
                        <span class="small">"Progress to next level"</span>
                        <span class="small accent--green">{format!("{progress}%")}</span>
                    </div>
                    <ProgressBar percent=progress/>
                </div>
            </section>

            <section>
                <h2 class="section-title">
                    <IconGlyph icon=Icon::Gamepad tone=Tone::Green size=IconSize::Large/>
                    "Recommended Learning Modules"
                </h2>
                <div class="grid grid--3">{modules}</div>
            </section>

            <section>
                <h2 class="section-title">
                    <IconGlyph icon=Icon::Award tone=Tone::Yellow size=IconSize::Large/>
                    "Your Achievements"
                </h2>
                <div class="grid grid--4">{achievements}</div>
            </section>

            <section>
                <h2 class="section-title">
                    <IconGlyph icon=Icon::Trophy tone=Tone::Yellow size=IconSize::Large/>
                    "Weekly Leaderboard"
                </h2>
                <Leaderboard entries=catalog.leaderboard.clone() viewer_id=user.id.clone()/>
            </section>
        </div>
    }
}
