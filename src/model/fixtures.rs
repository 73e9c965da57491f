//! Built-in sample data
//!
//! Stands in for an API or chain query so the dashboard has something to
//! show without a data file.

use chrono::{Duration, NaiveDate, Utc};

use super::types::*;

/// Bio shown before the builder edits it
pub const DEFAULT_BIO: &str =
    "Building public goods for web3 | Full-stack developer | Open source contributor";

/// Sample leaderboard
pub fn sample_leaders() -> Vec<Leader> {
    vec![
        Leader {
            avatar: Some("https://img.heroui.chat/image/avatar?w=64&h=64&u=1".to_string()),
            contributions: 42,
            level: 5,
            activity: Activity {
                weekly_commits: 24,
                proposals_created: 8,
                proposals_reviewed: 15,
            },
            ..Leader::new(1, "0x1234...5678", 1)
                .ens_name("buildmaster.eth")
                .points(1850)
                .impact(95.3, 15.4)
                .badges([BadgeTier::Diamond, BadgeTier::Gold])
                .specialties(["Smart Contracts", "DeFi", "Public Goods"])
        },
        Leader {
            avatar: Some("https://img.heroui.chat/image/avatar?w=64&h=64&u=2".to_string()),
            contributions: 36,
            level: 4,
            activity: Activity {
                weekly_commits: 18,
                proposals_created: 5,
                proposals_reviewed: 12,
            },
            ..Leader::new(2, "0x8765...4321", 2)
                .username("PublicBuilder")
                .points(1540)
                .impact(87.8, 12.3)
                .badges([BadgeTier::Gold, BadgeTier::Silver])
                .specialties(["Frontend", "Design", "DAOs"])
        },
        Leader {
            avatar: Some("https://img.heroui.chat/image/avatar?w=64&h=64&u=3".to_string()),
            contributions: 28,
            level: 4,
            activity: Activity {
                weekly_commits: 15,
                proposals_created: 3,
                proposals_reviewed: 8,
            },
            ..Leader::new(3, "0xabcd...efgh", 3)
                .ens_name("devguru.eth")
                .points(1320)
                .impact(82.5, 8.7)
                .badges([BadgeTier::Gold])
                .specialties(["Infrastructure", "Security"])
        },
    ]
}

/// Sample badges for the connected profile
pub fn sample_badges() -> Vec<Badge> {
    vec![
        Badge {
            id: "1".to_string(),
            name: "Early Builder".to_string(),
            icon: "lucide:hammer".to_string(),
            kind: BadgeKind::Builder,
            tier: BadgeTier::Gold,
            description: "One of the first builders on the platform".to_string(),
            unlocked_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        },
        Badge {
            id: "2".to_string(),
            name: "Code Contributor".to_string(),
            icon: "lucide:git-pull-request".to_string(),
            kind: BadgeKind::Dev,
            tier: BadgeTier::Silver,
            description: "Contributed to multiple open source projects".to_string(),
            unlocked_at: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap_or_default(),
        },
    ]
}

/// Sample profile for `address`
pub fn sample_profile(address: &str) -> Profile {
    let now = Utc::now();

    let active_projects = (0..2)
        .map(|_| ProjectSummary {
            name: "Project Name".to_string(),
            description: "Description of the project goes here".to_string(),
            status: "Active".to_string(),
            updated_at: now - Duration::hours(2),
        })
        .collect();

    let recent_activity = (0..3)
        .map(|_| ActivityItem {
            action: "Contributed".to_string(),
            project: "Project Name".to_string(),
            at: now - Duration::hours(2),
        })
        .collect();

    Profile {
        bio: DEFAULT_BIO.to_string(),
        experience: 1250,
        contributions: 28,
        projects: 4,
        reputation_rank: Some(125),
        badges: sample_badges(),
        active_projects,
        recent_activity,
        ..Profile::empty(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_leaders_ranked() {
        let leaders = sample_leaders();
        let ranks: Vec<i64> = leaders.iter().map(|l| l.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert!(leaders.iter().all(|l| l.category == Category::Builders));
    }

    #[test]
    fn test_sample_profile() {
        let profile = sample_profile("0x1a2b3c4d5e6f");
        assert_eq!(profile.address, "0x1a2b3c4d5e6f");
        assert_eq!(profile.badges.len(), 2);
        assert_eq!(profile.reputation_rank, Some(125));
        assert_eq!(profile.recent_activity.len(), 3);
    }
}
