//! Navigation/session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root view holds one `SessionState` in a signal and replaces it with the
//! result of `reduce` on every user action. Rendering reads `screen()` and
//! nothing else, so the reducer is the only place page and user change.
//!
//! INVARIANTS
//! ==========
//! - `user` is `None` exactly when `page` is `Landing` or `Login`.
//! - Fields are private; `Default` and `reduce` are the only constructors.
//! - An action with no transition from the current page returns the state
//!   unchanged. A role selection that matches no user is one of these and is
//!   deliberately silent.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::data::directory::UserDirectory;
use crate::data::types::{Role, User};

/// Top-level page of the app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Landing,
    Login,
    Dashboard,
}

/// Discrete user input delivered by the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// "Get Started" / "Start Learning Journey" on the landing page.
    StartOnboarding,
    /// Role button on the login page.
    SelectRole(Role),
    /// "Back to home" on the login page.
    GoBack,
    /// "Logout" in the dashboard header.
    Logout,
}

/// Which view tree to render for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Login,
    /// Dashboard chrome plus the role-specific body. `None` renders the chrome
    /// with an empty body.
    Dashboard(Option<Role>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    page: Page,
    user: Option<User>,
    selected_role: Role,
}

impl SessionState {
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn selected_role(&self) -> Role {
        self.selected_role
    }

    /// Apply one action, resolving role selections against `directory`.
    #[must_use]
    pub fn reduce(self, action: SessionAction, directory: &UserDirectory) -> Self {
        match (self.page, action) {
            (Page::Landing, SessionAction::StartOnboarding) => {
                log::debug!("session: landing -> login");
                Self { page: Page::Login, ..self }
            }
            (Page::Login, SessionAction::SelectRole(role)) => {
                let Some(user) = directory.find_by_role(role) else {
                    return self;
                };
                log::debug!("session: login -> dashboard as {} ({})", user.name, role.key());
                Self { page: Page::Dashboard, user: Some(user.clone()), selected_role: role }
            }
            (Page::Login, SessionAction::GoBack) => {
                log::debug!("session: login -> landing");
                Self { page: Page::Landing, ..self }
            }
            (Page::Dashboard, SessionAction::Logout) => {
                log::debug!("session: logout");
                Self::default()
            }
            _ => self,
        }
    }

    /// Rendering decision for this state.
    pub fn screen(&self) -> Screen {
        match self.page {
            Page::Landing => Screen::Landing,
            Page::Login => Screen::Login,
            Page::Dashboard => Screen::Dashboard(self.user.as_ref().map(|user| user.role)),
        }
    }
}
