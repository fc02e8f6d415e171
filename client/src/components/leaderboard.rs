//! Weekly leaderboard with podium colours and a highlight for the viewer.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::data::types::{Icon, LeaderboardEntry};

/// Rank bubble modifier: gold, silver, bronze, then plain.
pub fn rank_class(rank: u32) -> &'static str {
    match rank {
        1 => "rank rank--gold",
        2 => "rank rank--silver",
        3 => "rank rank--bronze",
        _ => "rank",
    }
}

/// Trophy colour for the podium; `None` below third place.
pub fn trophy_class(rank: u32) -> Option<&'static str> {
    match rank {
        1 => Some("trophy--gold"),
        2 => Some("trophy--silver"),
        3 => Some("trophy--bronze"),
        _ => None,
    }
}

/// Display name, suffixed with "(You)" for the signed-in user's row.
pub fn entry_label(entry: &LeaderboardEntry, viewer_id: Option<&str>) -> String {
    if entry.is_user(viewer_id) { format!("{} (You)", entry.name) } else { entry.name.clone() }
}

#[component]
pub fn Leaderboard(entries: Vec<LeaderboardEntry>, #[prop(optional)] viewer_id: Option<String>) -> impl IntoView {
    let rows = entries
        .into_iter()
        .map(|entry| {
            let is_viewer = entry.is_user(viewer_id.as_deref());
            let label = entry_label(&entry, viewer_id.as_deref());
            let trophy = trophy_class(entry.rank);
            view! {
                <div class="leaderboard__row" class:leaderboard__row--viewer=is_viewer>
                    <div class="leaderboard__who">
                        <div class=rank_class(entry.rank)>{entry.rank}</div>
                        <div class="leaderboard__avatar">{entry.avatar}</div>
                        <div>
                            <div class="leaderboard__name" class:leaderboard__name--viewer=is_viewer>
                                {label}
                            </div>
                            <div class="muted small">{format!("{} points", entry.points)}</div>
                        </div>
                    </div>
                    {trophy.map(|class| view! {
                        <span class=format!("leaderboard__trophy {class}")>
                            <IconGlyph icon=Icon::Trophy/>
                        </span>
                    })}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="card leaderboard">{rows}</div> }
}
