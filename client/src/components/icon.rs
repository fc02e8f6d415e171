//! Glyph rendering for symbolic icons.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

use crate::data::types::{Icon, Tone};

/// Glyph used for each icon.
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Leaf => "🍃",
        Icon::User => "👤",
        Icon::Users => "👥",
        Icon::GraduationCap => "🎓",
        Icon::Award => "🏅",
        Icon::BarChart => "📊",
        Icon::Target => "🎯",
        Icon::Gamepad => "🎮",
        Icon::ArrowRight => "→",
        Icon::Star => "⭐",
        Icon::Trophy => "🏆",
        Icon::Zap => "⚡",
        Icon::TreePine => "🌲",
        Icon::Recycle => "♻",
        Icon::Droplets => "💧",
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
    Hero,
}

impl IconSize {
    fn class(self) -> &'static str {
        match self {
            Self::Small => "icon--sm",
            Self::Medium => "icon--md",
            Self::Large => "icon--lg",
            Self::Hero => "icon--xl",
        }
    }
}

pub fn icon_class(size: IconSize, tone: Option<Tone>) -> String {
    match tone {
        Some(tone) => format!("icon {} {}", size.class(), tone.class()),
        None => format!("icon {}", size.class()),
    }
}

#[component]
pub fn IconGlyph(
    icon: Icon,
    #[prop(optional)] tone: Option<Tone>,
    #[prop(optional)] size: IconSize,
) -> impl IntoView {
    view! {
        <span class=icon_class(size, tone) aria-hidden="true">
            {glyph(icon)}
        </span>
    }
}
