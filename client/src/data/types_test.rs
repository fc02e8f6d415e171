use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_default_is_student() {
    assert_eq!(Role::default(), Role::Student);
}

#[test]
fn role_all_is_login_order() {
    assert_eq!(Role::ALL, [Role::Student, Role::Teacher, Role::Parent]);
}

#[test]
fn role_keys_are_lowercase_labels() {
    for role in Role::ALL {
        assert_eq!(role.key(), role.label().to_ascii_lowercase());
    }
}

#[test]
fn role_labels_are_capitalized() {
    assert_eq!(Role::Student.label(), "Student");
    assert_eq!(Role::Teacher.label(), "Teacher");
    assert_eq!(Role::Parent.label(), "Parent");
}

// =============================================================
// User
// =============================================================

#[test]
fn user_new_has_no_optional_fields() {
    let user = User::new("2", "Ms. Rodriguez", Role::Teacher, "rodriguez@example.com");
    assert!(user.points.is_none());
    assert!(user.level.is_none());
    assert!(user.badges.is_empty());
    assert!(user.children.is_empty());
}

#[test]
fn user_builders_fill_fields() {
    let user = User::new("1", "Alex Chen", Role::Student, "alex@example.com")
        .with_progress(2450, 8)
        .with_badges(&["Water Warrior"]);
    assert_eq!(user.points, Some(2450));
    assert_eq!(user.level, Some(8));
    assert_eq!(user.badges, vec!["Water Warrior".to_owned()]);
}

// =============================================================
// Achievement / LeaderboardEntry
// =============================================================

fn achievement(earned: bool, date: Option<&str>) -> Achievement {
    Achievement {
        id: "1".to_owned(),
        title: "First Steps".to_owned(),
        description: String::new(),
        icon: Icon::Star,
        tone: Tone::Yellow,
        earned,
        date: date.map(str::to_owned),
    }
}

#[test]
fn earned_caption_requires_earned_and_date() {
    assert_eq!(achievement(true, Some("2024-01-15")).earned_caption().as_deref(), Some("Earned 2024-01-15"));
    assert_eq!(achievement(true, None).earned_caption(), None);
    assert_eq!(achievement(false, Some("2024-01-15")).earned_caption(), None);
}

#[test]
fn leaderboard_entry_matches_only_same_user() {
    let entry = LeaderboardEntry {
        rank: 2,
        name: "Alex Chen".to_owned(),
        points: 2450,
        avatar: "🌿".to_owned(),
        user_id: Some("1".to_owned()),
    };
    assert!(entry.is_user(Some("1")));
    assert!(!entry.is_user(Some("2")));
    assert!(!entry.is_user(None));
}

#[test]
fn anonymous_leaderboard_entry_never_matches() {
    let entry = LeaderboardEntry {
        rank: 1,
        name: "Emma Green".to_owned(),
        points: 3200,
        avatar: "🌱".to_owned(),
        user_id: None,
    };
    assert!(!entry.is_user(None));
}

// =============================================================
// Difficulty / Tone
// =============================================================

#[test]
fn difficulty_badge_label_is_uppercase_key() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(difficulty.badge_label(), difficulty.key().to_ascii_uppercase());
    }
}

#[test]
fn tone_default_is_green() {
    assert_eq!(Tone::default().class(), "tone--green");
}
