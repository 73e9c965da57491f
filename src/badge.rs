//! Badge and Rank Classification
//!
//! Fixed lookup tables from badge tiers and leaderboard ranks to display
//! tags. Every table is an exhaustive `match`; `BadgeTier::Unknown` and
//! out-of-range ranks land on a defined default.

use serde::Serialize;

use crate::model::BadgeTier;

/// Semantic colour tag understood by the front end's component library
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    /// Rendered as gold
    Warning,
    Danger,
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorTag::Default => write!(f, "default"),
            ColorTag::Primary => write!(f, "primary"),
            ColorTag::Secondary => write!(f, "secondary"),
            ColorTag::Success => write!(f, "success"),
            ColorTag::Warning => write!(f, "warning"),
            ColorTag::Danger => write!(f, "danger"),
        }
    }
}

/// Chip fill style
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChipVariant {
    Solid,
    Flat,
}

/// Style classes for a tiered badge chip
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TierStyle {
    /// Chip background and border
    pub base: &'static str,
    /// Label text
    pub content: &'static str,
    /// Dot indicator
    pub indicator: &'static str,
    /// Icon tint
    pub icon: &'static str,
}

impl TierStyle {
    pub const DIAMOND: TierStyle = TierStyle {
        base: "bg-gradient-to-r from-blue-50 via-blue-100 to-blue-50 border border-blue-200 shadow-sm hover:shadow-md transition-shadow",
        content: "text-blue-700 font-medium",
        indicator: "bg-gradient-to-r from-blue-400 to-blue-600",
        icon: "text-blue-600",
    };

    pub const GOLD: TierStyle = TierStyle {
        base: "bg-gradient-to-r from-yellow-50 via-amber-100 to-yellow-50 border border-yellow-200 shadow-sm hover:shadow-md transition-shadow",
        content: "text-yellow-700 font-medium",
        indicator: "bg-gradient-to-r from-yellow-400 to-amber-500",
        icon: "text-yellow-600",
    };

    pub const SILVER: TierStyle = TierStyle {
        base: "bg-gradient-to-r from-gray-50 via-slate-100 to-gray-50 border border-gray-200 shadow-sm hover:shadow-md transition-shadow",
        content: "text-gray-700 font-medium",
        indicator: "bg-gradient-to-r from-gray-400 to-slate-500",
        icon: "text-gray-600",
    };

    pub const BRONZE: TierStyle = TierStyle {
        base: "bg-gradient-to-r from-orange-50 via-amber-100 to-orange-50 border border-amber-200 shadow-sm hover:shadow-md transition-shadow",
        content: "text-amber-700 font-medium",
        indicator: "bg-gradient-to-r from-amber-400 to-orange-500",
        icon: "text-amber-600",
    };

    /// Neutral style for tiers outside the known set
    pub const DEFAULT: TierStyle = TierStyle {
        base: "bg-default-100 border border-default-200",
        content: "text-default-600 font-medium",
        indicator: "bg-default-400",
        icon: "text-default-500",
    };
}

/// Style descriptor for a badge tier
pub fn classify_tier(tier: BadgeTier) -> TierStyle {
    match tier {
        BadgeTier::Diamond => TierStyle::DIAMOND,
        BadgeTier::Gold => TierStyle::GOLD,
        BadgeTier::Silver => TierStyle::SILVER,
        BadgeTier::Bronze => TierStyle::BRONZE,
        BadgeTier::Unknown => TierStyle::DEFAULT,
    }
}

/// Icon identifier for a badge tier
pub fn icon_for_badge_tier(tier: BadgeTier) -> &'static str {
    match tier {
        BadgeTier::Diamond => "lucide:diamond",
        BadgeTier::Gold => "lucide:medal",
        BadgeTier::Silver => "lucide:award",
        BadgeTier::Bronze => "lucide:trophy",
        BadgeTier::Unknown => "lucide:badge",
    }
}

/// Icon tint for the compact badge row on the leaderboard
pub fn badge_color(tier: BadgeTier) -> &'static str {
    match tier {
        BadgeTier::Diamond => "text-blue-400",
        BadgeTier::Gold => "text-yellow-400",
        BadgeTier::Silver => "text-gray-400",
        BadgeTier::Bronze => "text-orange-400",
        BadgeTier::Unknown => "text-default-400",
    }
}

/// Colour of the rank chip: podium places get distinct tags
pub fn rank_color(rank: i64) -> ColorTag {
    match rank {
        1 => ColorTag::Warning,
        2 => ColorTag::Primary,
        3 => ColorTag::Secondary,
        _ => ColorTag::Default,
    }
}

/// Podium ranks get a solid chip
pub fn rank_variant(rank: i64) -> ChipVariant {
    if (1..=3).contains(&rank) {
        ChipVariant::Solid
    } else {
        ChipVariant::Flat
    }
}

pub fn level_label(level: u32) -> String {
    format!("Lvl {}", level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tier_gets_default_style() {
        assert_eq!(classify_tier(BadgeTier::Unknown), TierStyle::DEFAULT);
        assert_eq!(classify_tier(BadgeTier::parse("platinum")), TierStyle::DEFAULT);
    }

    #[test]
    fn test_known_tiers_have_own_style() {
        for tier in BadgeTier::ALL {
            assert_ne!(classify_tier(tier), TierStyle::DEFAULT, "{}", tier);
        }
        assert_eq!(classify_tier(BadgeTier::Gold).icon, "text-yellow-600");
    }

    #[test]
    fn test_tier_icons_distinct() {
        let mut icons: Vec<&str> = BadgeTier::ALL.iter().map(|t| icon_for_badge_tier(*t)).collect();
        icons.push(icon_for_badge_tier(BadgeTier::Unknown));
        let count = icons.len();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), count);
    }

    #[test]
    fn test_rank_color() {
        let podium = [rank_color(1), rank_color(2), rank_color(3)];
        assert_ne!(podium[0], podium[1]);
        assert_ne!(podium[1], podium[2]);
        assert_ne!(podium[0], podium[2]);
        assert_eq!(rank_color(4), rank_color(0));
        assert_eq!(rank_color(-7), ColorTag::Default);
    }

    #[test]
    fn test_rank_variant_and_level() {
        assert_eq!(rank_variant(1), ChipVariant::Solid);
        assert_eq!(rank_variant(3), ChipVariant::Solid);
        assert_eq!(rank_variant(0), ChipVariant::Flat);
        assert_eq!(rank_variant(12), ChipVariant::Flat);
        assert_eq!(level_label(5), "Lvl 5");
    }
}
