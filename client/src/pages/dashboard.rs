//! Signed-in layout: header with identity and logout, role-specific body.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached only through a successful role selection. The body is chosen from
//! `Screen::Dashboard(role)`; with no user the header renders and the body is
//! empty.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::brand_header::BrandHeader;
use crate::components::parent_dashboard::ParentDashboard;
use crate::components::student_dashboard::StudentDashboard;
use crate::components::teacher_dashboard::TeacherDashboard;
use crate::data::types::Role;
use crate::state::session::{SessionAction, SessionState};

#[component]
pub fn DashboardPage(role: Option<Role>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dispatch = expect_context::<Callback<SessionAction>>();

    let user = session.get_untracked().user().cloned();
    let identity = user.as_ref().map(|user| (user.name.clone(), user.role.label()));

    let body = match (role, user) {
        (Some(Role::Student), Some(user)) => view! { <StudentDashboard user=user/> }.into_any(),
        (Some(Role::Teacher), Some(_)) => view! { <TeacherDashboard/> }.into_any(),
        (Some(Role::Parent), Some(user)) => view! { <ParentDashboard user=user/> }.into_any(),
        _ => ().into_any(),
    };

    view! {
        <div class="page">
            <BrandHeader>
                {identity.map(|(name, role_label)| view! {
                    <div class="identity">
                        <div class="identity__name">{name}</div>
                        <div class="muted small">{role_label}</div>
                    </div>
                })}
                <button class="btn btn--quiet" on:click=move |_| dispatch.run(SessionAction::Logout)>
                    "Logout"
                </button>
            </BrandHeader>
            <main class="container dashboard-main">{body}</main>
        </div>
    }
}
