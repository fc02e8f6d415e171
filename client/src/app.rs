//! Root application component with context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::data::catalog::Catalog;
use crate::pages::session_view::SessionView;
use crate::state::session::{SessionAction, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the catalog, the session signal and the action dispatcher. The
/// session starts on the landing page for every fresh render.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = Arc::new(Catalog::sample());
    let session = RwSignal::new(SessionState::default());
    let dispatch = {
        let catalog = Arc::clone(&catalog);
        Callback::new(move |action: SessionAction| {
            session.update(|state| *state = std::mem::take(state).reduce(action, &catalog.users));
        })
    };

    provide_context(catalog);
    provide_context(session);
    provide_context(dispatch);

    view! {
        <Stylesheet id="leptos" href="/pkg/ecolearn.css"/>
        <Title text="EcoLearn"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SessionView/>
            </Routes>
        </Router>
    }
}
