//! Leaderboard Presentation
//!
//! Derives every display value of a leaderboard row from a [`Leader`]:
//! rank chip, name, specialties, points with progress bar, impact chip,
//! growth trend and badge icons. Rows are ordered by the `rank` the data
//! source assigned; nothing here re-scores entries.

use serde::Serialize;

use crate::badge::{badge_color, icon_for_badge_tier, level_label, rank_color, rank_variant, ChipVariant, ColorTag};
use crate::format::{format_percent, format_thousands};
use crate::identity::DisplayIdentity;
use crate::model::{Activity, Leader};
use crate::view::LeaderboardState;

/// Points per cycle of the decorative progress bar
pub const PROGRESS_CYCLE: i64 = 500;

/// Specialties shown inline in table rows before collapsing into "+N"
pub const TABLE_SPECIALTIES: usize = 2;

/// Fill of the progress bar under the points column, in `[0, 1)`
///
/// Cosmetic placeholder: the bar restarts every [`PROGRESS_CYCLE`] points.
/// It is not a levelling curve and carries no scoring meaning.
pub fn progress_fraction(points: i64) -> f64 {
    points.rem_euclid(PROGRESS_CYCLE) as f64 / PROGRESS_CYCLE as f64
}

/// Colour ladder for impact scores
pub fn impact_tier(score: f64) -> ColorTag {
    if score >= 90.0 {
        ColorTag::Success
    } else if score >= 80.0 {
        ColorTag::Primary
    } else if score >= 70.0 {
        ColorTag::Secondary
    } else {
        // also NaN
        ColorTag::Default
    }
}

/// Direction of weekly growth
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn icon(&self) -> &'static str {
        match self {
            Trend::Up => "lucide:trending-up",
            Trend::Down => "lucide:trending-down",
        }
    }

    pub fn color(&self) -> ColorTag {
        match self {
            Trend::Up => ColorTag::Success,
            Trend::Down => ColorTag::Danger,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }
}

/// Zero or negative growth counts as a downward trend
pub fn growth_trend(growth: f64) -> Trend {
    if growth > 0.0 {
        Trend::Up
    } else {
        Trend::Down
    }
}

/// First few specialties plus a "+N" label for the rest
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SpecialtyPreview {
    pub shown: Vec<String>,
    pub overflow: Option<String>,
}

pub fn specialty_preview(specialties: &[String], limit: usize) -> SpecialtyPreview {
    let shown = specialties.iter().take(limit).cloned().collect();
    let hidden = specialties.len().saturating_sub(limit);

    SpecialtyPreview {
        shown,
        overflow: (hidden > 0).then(|| format!("+{}", hidden)),
    }
}

/// One badge icon in a row
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BadgeIcon {
    pub icon: &'static str,
    pub color: &'static str,
}

/// Fully derived leaderboard row
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeaderRow {
    pub id: u64,
    pub rank: i64,
    pub rank_color: ColorTag,
    pub rank_variant: ChipVariant,
    pub display_name: String,
    pub avatar: Option<String>,
    pub specialties: SpecialtyPreview,
    /// Every specialty, for the grid card
    pub all_specialties: Vec<String>,
    pub points: i64,
    pub points_label: String,
    pub progress: f64,
    pub impact_score: f64,
    pub impact_color: ColorTag,
    pub growth_label: String,
    pub trend: Trend,
    pub contributions: u32,
    pub level_label: String,
    pub badges: Vec<BadgeIcon>,
    pub activity: Activity,
}

impl LeaderRow {
    pub fn from_leader(leader: &Leader) -> Self {
        Self {
            id: leader.id,
            rank: leader.rank,
            rank_color: rank_color(leader.rank),
            rank_variant: rank_variant(leader.rank),
            display_name: leader.display_name(),
            avatar: leader.avatar.clone(),
            specialties: specialty_preview(&leader.specialties, TABLE_SPECIALTIES),
            all_specialties: leader.specialties.clone(),
            points: leader.points,
            points_label: format!("{} XP", format_thousands(leader.points)),
            progress: progress_fraction(leader.points),
            impact_score: leader.impact_score,
            impact_color: impact_tier(leader.impact_score),
            growth_label: format_percent(leader.growth),
            trend: growth_trend(leader.growth),
            contributions: leader.contributions,
            level_label: level_label(leader.level),
            badges: leader
                .badges
                .iter()
                .map(|tier| BadgeIcon {
                    icon: icon_for_badge_tier(*tier),
                    color: badge_color(*tier),
                })
                .collect(),
            activity: leader.activity,
        }
    }

    /// Rank as shown on grid cards
    pub fn rank_label(&self) -> String {
        format!("#{}", self.rank)
    }

    /// Impact chip text on grid cards
    pub fn impact_label(&self) -> String {
        format!("Impact Score: {}", self.impact_score)
    }
}

/// Rows for the selected category, ordered by rank
///
/// Time-range filtering is the data source's job; entries arrive already
/// scoped to the selected window.
pub fn present_leaderboard(leaders: &[Leader], state: &LeaderboardState) -> Vec<LeaderRow> {
    let mut rows: Vec<LeaderRow> = leaders
        .iter()
        .filter(|leader| leader.category == state.category)
        .map(LeaderRow::from_leader)
        .collect();

    rows.sort_by_key(|row| row.rank);
    tracing::debug!(
        category = state.category.key(),
        rows = rows.len(),
        "Leaderboard rows derived"
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::sample_leaders;
    use crate::model::{BadgeTier, Category};

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress_fraction(500), 0.0);
        assert_eq!(progress_fraction(750), 0.5);
        assert_eq!(progress_fraction(0), 0.0);
        assert_eq!(progress_fraction(1850), 0.7);
        let negative = progress_fraction(-100);
        assert!((0.0..1.0).contains(&negative));
    }

    #[test]
    fn test_impact_tier_ladder() {
        assert_eq!(impact_tier(95.3), ColorTag::Success);
        assert_eq!(impact_tier(90.0), ColorTag::Success);
        assert_eq!(impact_tier(87.8), ColorTag::Primary);
        assert_eq!(impact_tier(70.0), ColorTag::Secondary);
        assert_eq!(impact_tier(69.9), ColorTag::Default);
        assert_eq!(impact_tier(f64::NAN), ColorTag::Default);
    }

    #[test]
    fn test_growth_trend() {
        assert_eq!(growth_trend(15.4), Trend::Up);
        assert_eq!(growth_trend(0.0), Trend::Down);
        assert_eq!(growth_trend(-2.0).icon(), "lucide:trending-down");
    }

    #[test]
    fn test_specialty_preview() {
        let specialties: Vec<String> = ["Smart Contracts", "DeFi", "Public Goods"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let preview = specialty_preview(&specialties, 2);
        assert_eq!(preview.shown, vec!["Smart Contracts", "DeFi"]);
        assert_eq!(preview.overflow.as_deref(), Some("+1"));

        let preview = specialty_preview(&specialties[..2], 2);
        assert_eq!(preview.overflow, None);
    }

    #[test]
    fn test_row_from_leader() {
        let leaders = sample_leaders();
        let row = LeaderRow::from_leader(&leaders[0]);

        assert_eq!(row.display_name, "buildmaster.eth");
        assert_eq!(row.points_label, "1,850 XP");
        assert_eq!(row.rank_color, ColorTag::Warning);
        assert_eq!(row.rank_variant, ChipVariant::Solid);
        assert_eq!(row.impact_color, ColorTag::Success);
        assert_eq!(row.growth_label, "15.4%");
        assert_eq!(row.level_label, "Lvl 5");
        assert_eq!(row.badges[0].icon, "lucide:diamond");
        assert_eq!(row.badges[1].color, "text-yellow-400");
        assert_eq!(row.rank_label(), "#1");
        assert_eq!(row.impact_label(), "Impact Score: 95.3");
    }

    #[test]
    fn test_present_sorts_and_filters() {
        let mut leaders = sample_leaders();
        leaders.reverse();
        leaders.push(
            Leader::new(9, "0xfeedfacecafebeef00", 1)
                .category(Category::Grants)
                .badges([BadgeTier::Bronze]),
        );

        let rows = present_leaderboard(&leaders, &LeaderboardState::default());
        let ranks: Vec<i64> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);

        let state = LeaderboardState {
            category: Category::Grants,
            ..LeaderboardState::default()
        };
        let rows = present_leaderboard(&leaders, &state);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].display_name, "0xfeed...ef00");
    }
}
