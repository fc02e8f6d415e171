//! Display records for users, learning content and dashboard panels.
//!
//! DESIGN
//! ======
//! Everything here is an immutable value type. Records carry an `id` only where
//! a list needs a stable render key; identity has no meaning beyond that.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Account role. Selects the mock user and the dashboard view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Parent,
}

impl Role {
    /// All roles in the order the login screen offers them.
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Parent];

    /// Stable lowercase key for markup attributes and log lines.
    pub fn key(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Parent => "parent",
        }
    }

    /// Capitalized label for headers and buttons.
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Parent => "Parent",
        }
    }

    /// One-line description shown under the role button on the login screen.
    pub fn tagline(self) -> &'static str {
        match self {
            Self::Student => "Access learning modules and games",
            Self::Teacher => "Monitor student progress and insights",
            Self::Parent => "Track your child's learning journey",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Student => Icon::GraduationCap,
            Self::Teacher => Icon::Users,
            Self::Parent => Icon::User,
        }
    }
}

/// A sample account. Optional fields are only populated for roles that use them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub email: String,
    pub points: Option<u32>,
    pub level: Option<u32>,
    pub badges: Vec<String>,
    /// Linked student accounts; parents only.
    pub children: Vec<User>,
}

impl User {
    /// Minimal record with no gamification fields.
    pub fn new(id: &str, name: &str, role: Role, email: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            role,
            email: email.to_owned(),
            points: None,
            level: None,
            badges: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_progress(mut self, points: u32, level: u32) -> Self {
        self.points = Some(points);
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_badges(mut self, badges: &[&str]) -> Self {
        self.badges = badges.iter().map(|b| (*b).to_owned()).collect();
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: User) -> Self {
        self.children.push(child);
        self
    }
}

/// Symbolic icon. Rendering maps each variant to a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Leaf,
    User,
    Users,
    GraduationCap,
    Award,
    BarChart,
    Target,
    Gamepad,
    ArrowRight,
    Star,
    Trophy,
    Zap,
    TreePine,
    Recycle,
    Droplets,
}

/// Accent colour applied to an icon or badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Green,
    Emerald,
    Blue,
    Indigo,
    Purple,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl Tone {
    /// CSS modifier suffix, e.g. `tone--green`.
    pub fn class(self) -> &'static str {
        match self {
            Self::Green => "tone--green",
            Self::Emerald => "tone--emerald",
            Self::Blue => "tone--blue",
            Self::Indigo => "tone--indigo",
            Self::Purple => "tone--purple",
            Self::Yellow => "tone--yellow",
            Self::Orange => "tone--orange",
            Self::Red => "tone--red",
            Self::Gray => "tone--gray",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Uppercase badge text.
    pub fn badge_label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

/// A gamified lesson offered on the student dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct LearningModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub points: u32,
    pub completed: bool,
    pub icon: Icon,
    pub tone: Tone,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub tone: Tone,
    pub earned: bool,
    /// ISO date the badge was earned, if it was.
    pub date: Option<String>,
}

impl Achievement {
    /// "Earned <date>" caption, only for earned achievements with a date.
    pub fn earned_caption(&self) -> Option<String> {
        if !self.earned {
            return None;
        }
        self.date.as_ref().map(|date| format!("Earned {date}"))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub points: u32,
    pub avatar: String,
    /// Account the entry belongs to, when it is a known mock user.
    pub user_id: Option<String>,
}

impl LeaderboardEntry {
    pub fn is_user(&self, user_id: Option<&str>) -> bool {
        matches!((self.user_id.as_deref(), user_id), (Some(a), Some(b)) if a == b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Achievement,
    Badge,
    Start,
    Quiz,
}

/// One line of the parent dashboard activity feed.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityLogEntry {
    pub id: String,
    pub activity: String,
    pub points: u32,
    pub time: String,
    pub kind: ActivityKind,
}

/// Monthly environmental outcome tile.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactMetric {
    pub id: String,
    pub title: String,
    pub value: String,
    pub icon: Icon,
    pub tone: Tone,
    pub description: String,
    pub trend: String,
}

/// Headline number tile with a short caption underneath.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCard {
    pub id: String,
    pub title: String,
    pub value: String,
    pub icon: Icon,
    pub tone: Tone,
    pub note: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityStatus {
    Active,
    Inactive,
}

/// Teacher roster row.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentProgress {
    pub id: String,
    pub name: String,
    /// Percent of assigned modules completed, 0..=100.
    pub progress: u8,
    pub points: u32,
    pub status: ActivityStatus,
    pub last_activity: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub estimated_time: String,
    pub points: u32,
}

/// Numbered step of the landing page "Learning Journey Process".
#[derive(Clone, Debug, PartialEq)]
pub struct JourneyStep {
    pub step: String,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub tone: Tone,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub tone: Tone,
}

/// Parent-facing figures that are not carried on the child `User` record.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildSnapshot {
    pub level_title: String,
    pub modules_completed: u32,
    pub modules_total: u32,
    pub streak_days: u32,
}
