//! Teacher dashboard body: class overview, student roster, module performance.

#[cfg(test)]
#[path = "teacher_dashboard_test.rs"]
mod teacher_dashboard_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::progress_bar::ProgressBar;
use crate::components::stat_tile::StatTile;
use crate::data::catalog::Catalog;
use crate::data::types::{ActivityStatus, LearningModule, StudentProgress};
use crate::util::module_stats::ModuleStats;

pub fn status_dot_class(status: ActivityStatus) -> &'static str {
    match status {
        ActivityStatus::Active => "dot dot--active",
        ActivityStatus::Inactive => "dot dot--idle",
    }
}

#[component]
pub fn TeacherDashboard() -> impl IntoView {
    let catalog = expect_context::<Arc<Catalog>>();

    let overview = catalog.class_overview.iter().cloned().map(|card| view! { <StatTile card=card/> }).collect::<Vec<_>>();
    let roster = catalog.roster.iter().cloned().map(|row| view! { <RosterRow row=row/> }).collect::<Vec<_>>();
    let performance = catalog
        .modules
        .iter()
        .cloned()
        .map(|module| view! { <ModulePerformance module=module/> })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard-body">
            <section class="banner banner--teacher">
                <h1 class="banner__title">"Teacher Dashboard"</h1>
                <p class="banner__subtitle">"Monitor student progress and engagement"</p>
            </section>

            <section>
                <h2 class="section-title">"Class Overview"</h2>
                <div class="grid grid--4">{overview}</div>
            </section>

            <section>
                <h2 class="section-title">"Student Progress"</h2>
                <div class="card list">{roster}</div>
            </section>

            <section>
                <h2 class="section-title">"Module Performance"</h2>
                <div class="grid grid--3">{performance}</div>
            </section>
        </div>
    }
}

#[component]
fn RosterRow(row: StudentProgress) -> impl IntoView {
    view! {
        <div class="list__row">
            <div class="list__lead">
                <span class=status_dot_class(row.status)></span>
                <div>
                    <div class="list__name">{row.name}</div>
                    <div class="muted small">{format!("Last active: {}", row.last_activity)}</div>
                </div>
            </div>
            <div class="list__trail">
                <div class="list__figures">
                    <div class="list__name">{format!("{} pts", row.points)}</div>
                    <div class="muted small">{format!("{}% complete", row.progress)}</div>
                </div>
                <div class="list__bar">
                    <ProgressBar percent=row.progress thin=true/>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ModulePerformance(module: LearningModule) -> impl IntoView {
    let stats = ModuleStats::for_module(&module.id);
    view! {
        <div class="card performance-card">
            <div class="performance-card__head">
                <IconGlyph icon=module.icon tone=module.tone/>
                <h3 class="performance-card__title">{module.title}</h3>
            </div>
            <dl class="performance-card__stats">
                <div class="performance-card__stat">
                    <dt class="muted">"Completion Rate"</dt>
                    <dd>{format!("{}%", stats.completion_rate)}</dd>
                </div>
                <div class="performance-card__stat">
                    <dt class="muted">"Avg. Score"</dt>
                    <dd class="accent--green">{format!("{}%", stats.average_score)}</dd>
                </div>
                <div class="performance-card__stat">
                    <dt class="muted">"Students Enrolled"</dt>
                    <dd>{stats.enrolled}</dd>
                </div>
            </dl>
        </div>
    }
}
