//! Colour-coded EASY / MEDIUM / HARD pill.

#[cfg(test)]
#[path = "difficulty_badge_test.rs"]
mod difficulty_badge_test;

use leptos::prelude::*;

use crate::data::types::Difficulty;

pub fn difficulty_class(difficulty: Difficulty) -> String {
    format!("badge badge--{}", difficulty.key())
}

#[component]
pub fn DifficultyBadge(difficulty: Difficulty) -> impl IntoView {
    view! { <span class=difficulty_class(difficulty)>{difficulty.badge_label()}</span> }
}
