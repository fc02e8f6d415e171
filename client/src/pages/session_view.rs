//! Screen dispatch: renders exactly one page for the current session.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::pages::{dashboard::DashboardPage, landing::LandingPage, login::LoginPage};
use crate::state::session::{Screen, SessionState};
use crate::util::scroll;

#[component]
pub fn SessionView() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let screen = Memo::new(move |_| session.with(SessionState::screen));

    Effect::new(move |previous: Option<Screen>| {
        let current = screen.get();
        if scroll::screen_changed(previous, current) {
            scroll::reset_to_top();
        }
        current
    });

    move || match screen.get() {
        Screen::Landing => view! { <LandingPage/> }.into_any(),
        Screen::Login => view! { <LoginPage/> }.into_any(),
        Screen::Dashboard(role) => view! { <DashboardPage role=role/> }.into_any(),
    }
}
