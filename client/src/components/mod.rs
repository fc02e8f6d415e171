//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections from catalog records. The role dashboards
//! read the catalog from context; smaller pieces take their record as a prop.

pub mod achievement_card;
pub mod brand_header;
pub mod difficulty_badge;
pub mod icon;
pub mod leaderboard;
pub mod module_card;
pub mod parent_dashboard;
pub mod progress_bar;
pub mod stat_tile;
pub mod student_dashboard;
pub mod teacher_dashboard;
