//! Public marketing page: hero, learning journey, platform features.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::brand_header::BrandHeader;
use crate::components::icon::{IconGlyph, IconSize};
use crate::data::catalog::Catalog;
use crate::data::types::{Feature, Icon, JourneyStep, Tone};
use crate::state::session::SessionAction;

#[component]
pub fn LandingPage() -> impl IntoView {
    let catalog = expect_context::<Arc<Catalog>>();
    let dispatch = expect_context::<Callback<SessionAction>>();

    let last_step = catalog.journey.len().saturating_sub(1);
    let journey = catalog
        .journey
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, step)| view! { <JourneyCard step=step show_arrow={index < last_step}/> })
        .collect::<Vec<_>>();
    let features =
        catalog.features.iter().cloned().map(|feature| view! { <FeatureTile feature=feature/> }).collect::<Vec<_>>();

    view! {
        <div class="page">
            <BrandHeader>
                <button class="btn btn--primary" on:click=move |_| dispatch.run(SessionAction::StartOnboarding)>
                    "Get Started"
                </button>
            </BrandHeader>

            <section class="container hero">
                <div class="hero__intro">
                    <h1 class="hero__title gradient-text">"Gamified Environmental Education Platform"</h1>
                    <p class="hero__lead">
                        "Transform environmental education through interactive gaming, AR/VR experiences, and AI-powered personalized learning paths."
                    </p>
                    <button
                        class="btn btn--hero"
                        on:click=move |_| dispatch.run(SessionAction::StartOnboarding)
                    >
                        "Start Learning Journey"
                        <IconGlyph icon=Icon::ArrowRight size=IconSize::Small/>
                    </button>
                </div>

                <div class="journey">
                    <h2 class="section-title section-title--center accent--green">"Learning Journey Process"</h2>
                    <div class="grid grid--3">{journey}</div>
                </div>

                <div class="features">
                    <h2 class="section-title section-title--center accent--green">"Platform Features"</h2>
                    <div class="grid grid--4">{features}</div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn JourneyCard(step: JourneyStep, show_arrow: bool) -> impl IntoView {
    view! {
        <div class="journey-card">
            <div class="card card--interactive journey-card__body">
                <div class="journey-card__step">{step.step}</div>
                <div class="journey-card__icon">
                    <IconGlyph icon=step.icon tone=step.tone size=IconSize::Hero/>
                </div>
                <h3 class="journey-card__title">{step.title}</h3>
                <p class="muted">{step.description}</p>
            </div>
            <Show when=move || show_arrow>
                <div class="journey-card__arrow">
                    <IconGlyph icon=Icon::ArrowRight tone=Tone::Green size=IconSize::Large/>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FeatureTile(feature: Feature) -> impl IntoView {
    view! {
        <div class="card card--interactive feature-tile">
            <div class="feature-tile__icon">
                <IconGlyph icon=feature.icon tone=feature.tone size=IconSize::Large/>
            </div>
            <h3 class="feature-tile__title">{feature.title}</h3>
            <p class="muted small">{feature.description}</p>
        </div>
    }
}
