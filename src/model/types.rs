//! Core entity types for the dashboard
//!
//! - `Leader`: one leaderboard entry
//! - `Profile`: the connected builder's profile
//! - `Badge` with its `BadgeTier` and `BadgeKind`
//! - `Category` and `TimeRange`: leaderboard selections
//!
//! Entities are built by a data source and stay immutable while a view is
//! derived from them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Badge tier, ordered lowest to highest
///
/// Values outside the known set deserialize to `Unknown`, which sorts below
/// every real tier and renders with the default style.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Diamond,
    #[serde(other)]
    Unknown,
}

impl BadgeTier {
    /// All real tiers, lowest first
    pub const ALL: [BadgeTier; 4] = [
        BadgeTier::Bronze,
        BadgeTier::Silver,
        BadgeTier::Gold,
        BadgeTier::Diamond,
    ];

    /// Parse a tier name; anything unrecognised is `Unknown`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "bronze" => BadgeTier::Bronze,
            "silver" => BadgeTier::Silver,
            "gold" => BadgeTier::Gold,
            "diamond" => BadgeTier::Diamond,
            _ => BadgeTier::Unknown,
        }
    }

    /// Position in the tier ladder; `Unknown` is lowest
    pub fn rank(&self) -> u8 {
        match self {
            BadgeTier::Unknown => 0,
            BadgeTier::Bronze => 1,
            BadgeTier::Silver => 2,
            BadgeTier::Gold => 3,
            BadgeTier::Diamond => 4,
        }
    }
}

impl PartialOrd for BadgeTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BadgeTier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BadgeTier::Unknown => write!(f, "unknown"),
            BadgeTier::Bronze => write!(f, "bronze"),
            BadgeTier::Silver => write!(f, "silver"),
            BadgeTier::Gold => write!(f, "gold"),
            BadgeTier::Diamond => write!(f, "diamond"),
        }
    }
}

/// What a badge was awarded for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Builder,
    Dev,
    Team,
    Contributor,
    #[serde(other)]
    Other,
}

/// An achievement shown on the profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Badge {
    pub id: String,
    pub name: String,
    /// Icon reference (e.g. `lucide:hammer`)
    pub icon: String,
    pub kind: BadgeKind,
    pub tier: BadgeTier,
    pub description: String,
    pub unlocked_at: NaiveDate,
}

/// Leaderboard category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Builders,
    Projects,
    Grants,
    Domains,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Builders,
        Category::Projects,
        Category::Grants,
        Category::Domains,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Builders => "builders",
            Category::Projects => "projects",
            Category::Grants => "grants",
            Category::Domains => "domains",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Builders => "Builders",
            Category::Projects => "Projects",
            Category::Grants => "Grants",
            Category::Domains => "Domains",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Builders => "lucide:code",
            Category::Projects => "lucide:folder",
            Category::Grants => "lucide:gift",
            Category::Domains => "lucide:globe",
        }
    }

    /// Parse a category key; unknown keys select the default
    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .unwrap_or_default()
    }
}

/// Leaderboard time window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    #[serde(rename = "1d")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[default]
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::Day,
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Quarter,
        TimeRange::All,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TimeRange::Day => "1d",
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
            TimeRange::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "24 Hours",
            TimeRange::Week => "7 Days",
            TimeRange::Month => "30 Days",
            TimeRange::Quarter => "90 Days",
            TimeRange::All => "All Time",
        }
    }

    /// Parse a range key; unknown keys select all time
    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.key().eq_ignore_ascii_case(s.trim()))
            .unwrap_or_default()
    }
}

/// Weekly activity counters shown in the grid view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Activity {
    #[serde(default)]
    pub weekly_commits: u32,
    #[serde(default)]
    pub proposals_created: u32,
    #[serde(default)]
    pub proposals_reviewed: u32,
}

/// A leaderboard entry
///
/// `address` is always present. `ens_name` and `username` are optional and
/// resolved for display by [`crate::identity::resolve_display_name`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Leader {
    pub id: u64,
    pub address: String,
    #[serde(default)]
    pub ens_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub rank: i64,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub contributions: u32,
    #[serde(default)]
    pub impact_score: f64,
    /// Weekly growth in percent
    #[serde(default)]
    pub growth: f64,
    #[serde(default)]
    pub badges: Vec<BadgeTier>,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub activity: Activity,
    #[serde(default)]
    pub category: Category,
}

impl Leader {
    /// Create an entry with only the required fields set
    pub fn new(id: u64, address: impl Into<String>, rank: i64) -> Self {
        Self {
            id,
            address: address.into(),
            ens_name: None,
            username: None,
            avatar: None,
            rank,
            points: 0,
            contributions: 0,
            impact_score: 0.0,
            growth: 0.0,
            badges: Vec::new(),
            level: 0,
            specialties: Vec::new(),
            activity: Activity::default(),
            category: Category::default(),
        }
    }

    /// Builder method: set the name-service name
    pub fn ens_name(mut self, name: impl Into<String>) -> Self {
        self.ens_name = Some(name.into());
        self
    }

    /// Builder method: set the username
    pub fn username(mut self, name: impl Into<String>) -> Self {
        self.username = Some(name.into());
        self
    }

    /// Builder method: set points
    pub fn points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    /// Builder method: set impact score and weekly growth
    pub fn impact(mut self, impact_score: f64, growth: f64) -> Self {
        self.impact_score = impact_score;
        self.growth = growth;
        self
    }

    /// Builder method: set badges
    pub fn badges(mut self, badges: impl IntoIterator<Item = BadgeTier>) -> Self {
        self.badges = badges.into_iter().collect();
        self
    }

    /// Builder method: set specialties
    pub fn specialties<S: Into<String>>(mut self, specialties: impl IntoIterator<Item = S>) -> Self {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set category
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

/// A project the profile owner is working on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    pub name: String,
    pub description: String,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

/// One entry in the recent-activity feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityItem {
    pub action: String,
    pub project: String,
    pub at: DateTime<Utc>,
}

/// Profile of a connected builder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub address: String,
    #[serde(default)]
    pub ens_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub experience: i64,
    #[serde(default)]
    pub contributions: u32,
    #[serde(default)]
    pub projects: u32,
    #[serde(default)]
    pub reputation_rank: Option<u32>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub active_projects: Vec<ProjectSummary>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityItem>,
}

impl Profile {
    /// Empty profile for an address with no recorded history
    pub fn empty(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ens_name: None,
            username: None,
            bio: String::new(),
            experience: 0,
            contributions: 0,
            projects: 0,
            reputation_rank: None,
            badges: Vec::new(),
            active_projects: Vec::new(),
            recent_activity: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(BadgeTier::Bronze < BadgeTier::Silver);
        assert!(BadgeTier::Gold < BadgeTier::Diamond);
        assert!(BadgeTier::Unknown < BadgeTier::Bronze);

        let mut tiers = vec![BadgeTier::Diamond, BadgeTier::Unknown, BadgeTier::Silver];
        tiers.sort();
        assert_eq!(tiers, vec![BadgeTier::Unknown, BadgeTier::Silver, BadgeTier::Diamond]);
    }

    #[test]
    fn test_tier_parse_is_total() {
        assert_eq!(BadgeTier::parse("Gold"), BadgeTier::Gold);
        assert_eq!(BadgeTier::parse(" diamond "), BadgeTier::Diamond);
        assert_eq!(BadgeTier::parse("platinum"), BadgeTier::Unknown);
        assert_eq!(BadgeTier::parse(""), BadgeTier::Unknown);
    }

    #[test]
    fn test_unknown_tier_deserializes() {
        let tiers: Vec<BadgeTier> = serde_json::from_str(r#"["gold", "platinum"]"#).unwrap();
        assert_eq!(tiers, vec![BadgeTier::Gold, BadgeTier::Unknown]);
    }

    #[test]
    fn test_category_and_range_parse() {
        assert_eq!(Category::parse("grants"), Category::Grants);
        assert_eq!(Category::parse("nope"), Category::Builders);
        assert_eq!(TimeRange::parse("30d"), TimeRange::Month);
        assert_eq!(TimeRange::parse("1y"), TimeRange::All);
        assert_eq!(TimeRange::Quarter.label(), "90 Days");
    }

    #[test]
    fn test_leader_optional_fields_default() {
        let json = r#"{"id": 7, "address": "0xabc", "rank": 4}"#;
        let leader: Leader = serde_json::from_str(json).unwrap();
        assert_eq!(leader.ens_name, None);
        assert_eq!(leader.username, None);
        assert!(leader.badges.is_empty());
        assert_eq!(leader.category, Category::Builders);
    }

    #[test]
    fn test_leader_builder() {
        let leader = Leader::new(1, "0x1234567890abcdef", 1)
            .ens_name("buildmaster.eth")
            .points(1850)
            .badges([BadgeTier::Diamond, BadgeTier::Gold])
            .specialties(["DeFi"]);

        assert_eq!(leader.points, 1850);
        assert_eq!(leader.badges.len(), 2);
        assert_eq!(leader.specialties, vec!["DeFi".to_string()]);
    }
}
