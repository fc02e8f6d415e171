//! Parent dashboard body: child overview, activity feed, impact, recommendations.
//!
//! Child-specific sections follow the first linked child. A parent with no
//! linked child sees the banner and the impact panel only.

#[cfg(test)]
#[path = "parent_dashboard_test.rs"]
mod parent_dashboard_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::difficulty_badge::DifficultyBadge;
use crate::components::icon::{IconGlyph, IconSize};
use crate::components::stat_tile::StatTile;
use crate::data::catalog::{Catalog, stat};
use crate::data::types::{
    ActivityKind, ActivityLogEntry, ChildSnapshot, Icon, ImpactMetric, Recommendation, StatCard, Tone, User,
};
use crate::util::format::{day_count, first_name, points_award, possessive, thousands};

pub fn activity_dot_class(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Achievement => "dot dot--achievement",
        ActivityKind::Badge => "dot dot--badge",
        ActivityKind::Quiz => "dot dot--quiz",
        ActivityKind::Start => "dot dot--idle",
    }
}

/// Overview tiles for one child. Level and points come from the child record.
pub fn child_overview_cards(child: &User, snapshot: &ChildSnapshot) -> Vec<StatCard> {
    let level = child.level.map_or_else(|| "-".to_owned(), |level| level.to_string());
    let points = child.points.map_or_else(|| "-".to_owned(), thousands);
    vec![
        stat("level", "Current Level", &level, Icon::Star, Tone::Yellow, &snapshot.level_title),
        stat("points", "Total Points", &points, Icon::Award, Tone::Green, "This month"),
        stat(
            "modules",
            "Modules Completed",
            &snapshot.modules_completed.to_string(),
            Icon::Target,
            Tone::Blue,
            &format!("Out of {}", snapshot.modules_total),
        ),
        stat("streak", "Learning Streak", &day_count(snapshot.streak_days), Icon::Zap, Tone::Orange, "Personal best!"),
    ]
}

#[component]
pub fn ParentDashboard(user: User) -> impl IntoView {
    let catalog = expect_context::<Arc<Catalog>>();
    let child = user.children.first().cloned();

    let impact = catalog.impact.iter().cloned().map(|metric| view! { <ImpactCard metric=metric/> }).collect::<Vec<_>>();

    let child_sections = child.map(|child| {
        let name = first_name(&child.name).to_owned();
        let overview = child_overview_cards(&child, &catalog.child_snapshot)
            .into_iter()
            .map(|card| view! { <StatTile card=card accent="purple"/> })
            .collect::<Vec<_>>();
        let activities = catalog
            .activities
            .iter()
            .cloned()
            .map(|entry| view! { <ActivityRow entry=entry/> })
            .collect::<Vec<_>>();
        let recommendations = catalog
            .recommendations
            .iter()
            .cloned()
            .map(|recommendation| view! { <RecommendationCard recommendation=recommendation/> })
            .collect::<Vec<_>>();
        (
            view! {
                <section>
                    <h2 class="section-title">{format!("{} Progress Overview", possessive(&name))}</h2>
                    <div class="grid grid--4">{overview}</div>
                </section>
                <section>
                    <h2 class="section-title">"Recent Activities"</h2>
                    <div class="card list">{activities}</div>
                </section>
            },
            view! {
                <section>
                    <h2 class="section-title">{format!("Recommended for {name}")}</h2>
                    <div class="grid grid--2">{recommendations}</div>
                </section>
            },
        )
    });
    let (progress_sections, recommendation_section) = child_sections.unzip();

    view! {
        <div class="dashboard-body">
            <section class="banner banner--parent">
                <h1 class="banner__title">"Parent Dashboard"</h1>
                <p class="banner__subtitle">"Track your child's learning journey and environmental impact"</p>
            </section>

            {progress_sections}

            <section>
                <h2 class="section-title">"Environmental Impact This Month"</h2>
                <div class="grid grid--3">{impact}</div>
            </section>

            {recommendation_section}
        </div>
    }
}

#[component]
fn ActivityRow(entry: ActivityLogEntry) -> impl IntoView {
    view! {
        <div class="list__row">
            <div class="list__lead">
                <span class=activity_dot_class(entry.kind)></span>
                <div>
                    <div class="list__name">{entry.activity}</div>
                    <div class="muted small">{entry.time}</div>
                </div>
            </div>
            {points_award(entry.points).map(|text| view! { <div class="accent--green">{text}</div> })}
        </div>
    }
}

#[component]
fn ImpactCard(metric: ImpactMetric) -> impl IntoView {
    view! {
        <div class="card impact-card">
            <div class="impact-card__head">
                <IconGlyph icon=metric.icon tone=metric.tone size=IconSize::Large/>
                <div>
                    <div class="impact-card__value">{metric.value}</div>
                    <div class="impact-card__title">{metric.title}</div>
                </div>
            </div>
            <p class="muted small">{metric.description}</p>
            <p class="small accent--green">{metric.trend}</p>
        </div>
    }
}

#[component]
fn RecommendationCard(recommendation: Recommendation) -> impl IntoView {
    view! {
        <div class="card recommendation-card">
            <div class="recommendation-card__head">
                <h3 class="recommendation-card__title">{recommendation.title}</h3>
                <DifficultyBadge difficulty=recommendation.difficulty/>
            </div>
            <p class="muted">{recommendation.description}</p>
            <div class="recommendation-card__footer small">
                <span>{format!("⏱ {}", recommendation.estimated_time)}</span>
                <span class="accent--green">{format!("+{} points", recommendation.points)}</span>
            </div>
        </div>
    }
}
