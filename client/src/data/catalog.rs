//! Static dataset rendered by the landing page and dashboards.
//!
//! DESIGN
//! ======
//! The catalog is built once at app start and provided through context. Pages
//! read it but never mutate it, so all lists render in declaration order.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::directory::UserDirectory;
use super::types::{
    Achievement, ActivityKind, ActivityLogEntry, ActivityStatus, ChildSnapshot, Difficulty, Feature, Icon,
    ImpactMetric, JourneyStep, LeaderboardEntry, LearningModule, Recommendation, StatCard, StudentProgress, Tone,
};

/// Everything the UI displays, including the mock user set.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub users: UserDirectory,
    pub journey: Vec<JourneyStep>,
    pub features: Vec<Feature>,
    pub modules: Vec<LearningModule>,
    pub achievements: Vec<Achievement>,
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Percent progress toward the student's next level.
    pub next_level_progress: u8,
    pub class_overview: Vec<StatCard>,
    pub roster: Vec<StudentProgress>,
    pub child_snapshot: ChildSnapshot,
    pub activities: Vec<ActivityLogEntry>,
    pub impact: Vec<ImpactMetric>,
    pub recommendations: Vec<Recommendation>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl Catalog {
    pub fn sample() -> Self {
        Self {
            users: UserDirectory::sample(),
            journey: journey(),
            features: features(),
            modules: modules(),
            achievements: achievements(),
            leaderboard: leaderboard(),
            next_level_progress: 85,
            class_overview: class_overview(),
            roster: roster(),
            child_snapshot: ChildSnapshot {
                level_title: "Eco Explorer".to_owned(),
                modules_completed: 12,
                modules_total: 15,
                streak_days: 7,
            },
            activities: activities(),
            impact: impact(),
            recommendations: recommendations(),
        }
    }
}

fn journey() -> Vec<JourneyStep> {
    let step = |step: &str, title: &str, description: &str, icon, tone| JourneyStep {
        step: step.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        icon,
        tone,
    };
    vec![
        step(
            "01",
            "Secure Login",
            "Students, Teachers & Parents access via secure web/mobile authentication",
            Icon::User,
            Tone::Blue,
        ),
        step(
            "02",
            "Personalized Dashboard",
            "AI recommends learning modules & games based on individual progress and interests",
            Icon::BarChart,
            Tone::Purple,
        ),
        step(
            "03",
            "Interactive Learning",
            "Quizzes, AR/VR simulations, challenges, and eco-missions for engaging education",
            Icon::Gamepad,
            Tone::Green,
        ),
        step(
            "04",
            "Reward System",
            "Points, badges, and leaderboards motivate continuous engagement and achievement",
            Icon::Award,
            Tone::Yellow,
        ),
        step(
            "05",
            "Progress Tracking",
            "Central server stores student performance data and environmental impact metrics",
            Icon::Target,
            Tone::Red,
        ),
        step(
            "06",
            "Insights Dashboard",
            "Teachers & Parents view detailed progress reports and engagement analytics",
            Icon::Users,
            Tone::Indigo,
        ),
    ]
}

fn features() -> Vec<Feature> {
    let feature = |id: &str, title: &str, description: &str, icon, tone| Feature {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        icon,
        tone,
    };
    vec![
        feature("eco-missions", "Eco Missions", "Real-world environmental challenges", Icon::Leaf, Tone::Green),
        feature("achievements", "Achievements", "Unlock badges and rewards", Icon::Trophy, Tone::Yellow),
        feature("community", "Community", "Connect with eco-warriors globally", Icon::Users, Tone::Blue),
        feature("analytics", "Analytics", "Track your environmental impact", Icon::BarChart, Tone::Purple),
    ]
}

fn modules() -> Vec<LearningModule> {
    vec![
        LearningModule {
            id: "1".to_owned(),
            title: "Water Conservation Challenge".to_owned(),
            description: "Learn about water-saving techniques and complete eco-missions".to_owned(),
            difficulty: Difficulty::Easy,
            points: 150,
            completed: false,
            icon: Icon::Droplets,
            tone: Tone::Blue,
        },
        LearningModule {
            id: "2".to_owned(),
            title: "Recycling Quiz Master".to_owned(),
            description: "Test your knowledge on proper recycling methods".to_owned(),
            difficulty: Difficulty::Medium,
            points: 200,
            completed: true,
            icon: Icon::Recycle,
            tone: Tone::Green,
        },
        LearningModule {
            id: "3".to_owned(),
            title: "Forest AR Explorer".to_owned(),
            description: "Explore virtual forests and learn about biodiversity".to_owned(),
            difficulty: Difficulty::Hard,
            points: 300,
            completed: false,
            icon: Icon::TreePine,
            tone: Tone::Emerald,
        },
    ]
}

fn achievements() -> Vec<Achievement> {
    let achievement = |id: &str, title: &str, description: &str, icon, tone, date: Option<&str>| Achievement {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        icon,
        tone,
        earned: date.is_some(),
        date: date.map(str::to_owned),
    };
    vec![
        achievement(
            "1",
            "First Steps",
            "Complete your first eco-challenge",
            Icon::Star,
            Tone::Yellow,
            Some("2024-01-15"),
        ),
        achievement(
            "2",
            "Water Warrior",
            "Save 100 liters of water through challenges",
            Icon::Droplets,
            Tone::Blue,
            Some("2024-01-20"),
        ),
        achievement(
            "3",
            "Recycling Champion",
            "Master all recycling quizzes with 90%+ score",
            Icon::Trophy,
            Tone::Green,
            Some("2024-01-25"),
        ),
        achievement("4", "Energy Master", "Complete 10 energy conservation missions", Icon::Zap, Tone::Yellow, None),
    ]
}

fn leaderboard() -> Vec<LeaderboardEntry> {
    let entry = |rank, name: &str, points, avatar: &str, user_id: Option<&str>| LeaderboardEntry {
        rank,
        name: name.to_owned(),
        points,
        avatar: avatar.to_owned(),
        user_id: user_id.map(str::to_owned),
    };
    vec![
        entry(1, "Emma Green", 3200, "🌱", None),
        entry(2, "Alex Chen", 2450, "🌿", Some("1")),
        entry(3, "Sam Rivers", 2100, "🌊", None),
        entry(4, "Maya Forest", 1850, "🌳", None),
    ]
}

fn class_overview() -> Vec<StatCard> {
    vec![
        stat("students", "Total Students", "24", Icon::Users, Tone::Blue, "+2 this week"),
        stat("engagement", "Avg. Engagement", "87%", Icon::BarChart, Tone::Green, "+5% from last week"),
        stat("completed", "Modules Completed", "156", Icon::Target, Tone::Purple, "+23 this week"),
        stat("eco-points", "Total Eco-Points", "12.5K", Icon::Award, Tone::Yellow, "+1.2K this week"),
    ]
}

pub(crate) fn stat(id: &str, title: &str, value: &str, icon: Icon, tone: Tone, note: &str) -> StatCard {
    StatCard {
        id: id.to_owned(),
        title: title.to_owned(),
        value: value.to_owned(),
        icon,
        tone,
        note: note.to_owned(),
    }
}

fn roster() -> Vec<StudentProgress> {
    let row = |id: &str, name: &str, progress, points, status, last_activity: &str| StudentProgress {
        id: id.to_owned(),
        name: name.to_owned(),
        progress,
        points,
        status,
        last_activity: last_activity.to_owned(),
    };
    vec![
        row("1", "Alex Chen", 85, 2450, ActivityStatus::Active, "2 hours ago"),
        row("4", "Emma Watson", 92, 3100, ActivityStatus::Active, "1 hour ago"),
        row("5", "Sam Rodriguez", 78, 1890, ActivityStatus::Inactive, "2 days ago"),
        row("6", "Maya Patel", 88, 2750, ActivityStatus::Active, "30 min ago"),
    ]
}

fn activities() -> Vec<ActivityLogEntry> {
    let entry = |id: &str, activity: &str, points, time: &str, kind| ActivityLogEntry {
        id: id.to_owned(),
        activity: activity.to_owned(),
        points,
        time: time.to_owned(),
        kind,
    };
    vec![
        entry("1", "Completed Water Conservation Challenge", 150, "2 hours ago", ActivityKind::Achievement),
        entry("2", "Earned \"Recycling Champion\" badge", 200, "1 day ago", ActivityKind::Badge),
        entry("3", "Started Forest AR Explorer module", 0, "2 days ago", ActivityKind::Start),
        entry("4", "Quiz: \"Plastic Pollution\" - 95% score", 100, "3 days ago", ActivityKind::Quiz),
    ]
}

fn impact() -> Vec<ImpactMetric> {
    let metric = |id: &str, title: &str, value: &str, icon, tone, description: &str, trend: &str| ImpactMetric {
        id: id.to_owned(),
        title: title.to_owned(),
        value: value.to_owned(),
        icon,
        tone,
        description: description.to_owned(),
        trend: trend.to_owned(),
    };
    vec![
        metric(
            "water",
            "Water Saved",
            "250L",
            Icon::Droplets,
            Tone::Blue,
            "Through conservation challenges",
            "+45L from last month",
        ),
        metric(
            "waste",
            "Waste Recycled",
            "15kg",
            Icon::Recycle,
            Tone::Green,
            "Properly sorted and recycled",
            "+3kg from last month",
        ),
        metric(
            "carbon",
            "Carbon Footprint",
            "-12kg",
            Icon::TreePine,
            Tone::Emerald,
            "Reduced through eco-actions",
            "Best month yet!",
        ),
    ]
}

fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: "ocean-vr".to_owned(),
            title: "Ocean Conservation VR".to_owned(),
            difficulty: Difficulty::Medium,
            description: "Explore marine ecosystems and learn about ocean protection".to_owned(),
            estimated_time: "30 min".to_owned(),
            points: 200,
        },
        Recommendation {
            id: "solar-quiz".to_owned(),
            title: "Solar Energy Quiz".to_owned(),
            difficulty: Difficulty::Easy,
            description: "Test knowledge about renewable energy sources".to_owned(),
            estimated_time: "15 min".to_owned(),
            points: 150,
        },
    ]
}
