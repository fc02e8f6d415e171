//! Role picker standing in for sign-in.
//!
//! Each button dispatches a role selection. When no sample account has that
//! role the session stays on this page and nothing is shown.

use leptos::prelude::*;

use crate::components::icon::{IconGlyph, IconSize};
use crate::data::types::{Icon, Role, Tone};
use crate::state::session::SessionAction;

#[component]
pub fn LoginPage() -> impl IntoView {
    let dispatch = expect_context::<Callback<SessionAction>>();

    let options = Role::ALL
        .into_iter()
        .map(|role| {
            view! {
                <button
                    class="card card--interactive role-option"
                    data-role=role.key()
                    on:click=move |_| dispatch.run(SessionAction::SelectRole(role))
                >
                    <span class="role-option__icon">
                        <IconGlyph icon=role.icon() tone=Tone::Green/>
                    </span>
                    <span class="role-option__text">
                        <span class="role-option__label">{role.label()}</span>
                        <span class="muted small">{role.tagline()}</span>
                    </span>
                    <span class="role-option__arrow">
                        <IconGlyph icon=Icon::ArrowRight size=IconSize::Small/>
                    </span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="page login-page">
            <div class="login-card">
                <div class="login-card__head">
                    <IconGlyph icon=Icon::Leaf tone=Tone::Green size=IconSize::Hero/>
                    <h1 class="login-card__title gradient-text">"Welcome to EcoLearn"</h1>
                    <p class="muted">"Select your role to continue"</p>
                </div>
                <div class="login-card__options">{options}</div>
                <button class="login-card__back" on:click=move |_| dispatch.run(SessionAction::GoBack)>
                    "← Back to home"
                </button>
            </div>
        </div>
    }
}
