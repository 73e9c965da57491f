//! Profile Presentation
//!
//! Turns wallet status, the stored profile, the name-service record and the
//! profile view state into what the profile page shows. A disconnected
//! wallet gets the connect prompt and a pending connection gets the loading
//! state; neither is an error.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::badge::{classify_tier, TierStyle};
use crate::format::{format_balance, format_date, format_relative, format_thousands, truncate_address};
use crate::identity::{avatar_url, resolve_display_name};
use crate::model::{ActivityItem, Badge, BadgeTier, Profile, ProjectSummary};
use crate::providers::{NameRecord, WalletStatus, DEFAULT_SYMBOL};
use crate::view::{ProfileState, ProfileTab};

/// Badges shown as chips in the profile header
pub const HEADER_BADGES: usize = 3;

/// What the profile page renders
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ProfileScreen {
    ConnectPrompt {
        title: &'static str,
        message: &'static str,
    },
    Loading,
    Ready(Box<ProfileView>),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BadgeChip {
    pub name: String,
    pub icon: String,
    pub tier: BadgeTier,
    pub style: TierStyle,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BadgeCard {
    pub name: String,
    pub icon: String,
    pub tier: BadgeTier,
    pub description: String,
    pub unlocked_label: String,
    pub style: TierStyle,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectLine {
    pub name: String,
    pub description: String,
    pub status: String,
    pub updated_label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityLine {
    pub text: String,
    pub when: String,
}

/// Content of the selected tab
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub enum TabContent {
    Overview {
        projects: Vec<ProjectLine>,
        activity: Vec<ActivityLine>,
    },
    Contributions {
        activity: Vec<ActivityLine>,
    },
    Projects {
        projects: Vec<ProjectLine>,
    },
    Badges {
        badges: Vec<BadgeCard>,
    },
}

/// Derived profile page for a connected wallet
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileView {
    pub display_name: String,
    pub short_address: String,
    pub avatar: String,
    pub balance_label: String,
    pub header_badges: Vec<BadgeChip>,
    pub bio: String,
    pub stats: Vec<StatCard>,
    pub tab: ProfileTab,
    /// Title of the open edit modal, if any
    pub modal_title: Option<&'static str>,
    pub content: TabContent,
}

/// Everything needed to derive the profile page
pub struct ProfileInputs<'a> {
    pub wallet: &'a WalletStatus,
    pub profile: Option<&'a Profile>,
    pub names: &'a NameRecord,
    pub state: &'a ProfileState,
    pub avatar_template: &'a str,
    pub now: DateTime<Utc>,
}

pub fn present_profile(inputs: &ProfileInputs<'_>) -> ProfileScreen {
    let (address, balance) = match inputs.wallet {
        WalletStatus::Disconnected => {
            return ProfileScreen::ConnectPrompt {
                title: "Connect Your Wallet",
                message: "Connect your wallet to view your profile, contributions, and builder stats.",
            }
        }
        WalletStatus::Connecting => return ProfileScreen::Loading,
        WalletStatus::Connected { address, balance } => (address.as_str(), balance.as_ref()),
    };

    // Profile data still loading counts as a pending connection
    let Some(profile) = inputs.profile else {
        return ProfileScreen::Loading;
    };

    let ens_name = inputs.names.name.as_deref().or(profile.ens_name.as_deref());
    let display_name = resolve_display_name(ens_name, profile.username.as_deref(), address);

    let balance_label = balance
        .map(|b| b.display())
        .unwrap_or_else(|| format!("{} {}", format_balance(None), DEFAULT_SYMBOL));

    let state = inputs.state;

    ProfileScreen::Ready(Box::new(ProfileView {
        display_name,
        short_address: truncate_address(address),
        avatar: avatar_url(
            inputs.names.avatar.as_deref(),
            address,
            state.avatar_seed.as_deref(),
            inputs.avatar_template,
        ),
        balance_label,
        header_badges: profile
            .badges
            .iter()
            .take(HEADER_BADGES)
            .map(badge_chip)
            .collect(),
        bio: state.bio.clone(),
        stats: stat_cards(profile),
        tab: state.tab,
        modal_title: state.modal.kind().map(|kind| kind.title()),
        content: tab_content(state.tab, profile, inputs.now),
    }))
}

fn badge_chip(badge: &Badge) -> BadgeChip {
    BadgeChip {
        name: badge.name.clone(),
        icon: badge.icon.clone(),
        tier: badge.tier,
        style: classify_tier(badge.tier),
    }
}

fn badge_card(badge: &Badge) -> BadgeCard {
    BadgeCard {
        name: badge.name.clone(),
        icon: badge.icon.clone(),
        tier: badge.tier,
        description: badge.description.clone(),
        unlocked_label: format!("Unlocked {}", format_date(badge.unlocked_at)),
        style: classify_tier(badge.tier),
    }
}

/// Quick stats under the bio
pub fn stat_cards(profile: &Profile) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Experience",
            value: format_thousands(profile.experience),
            icon: "lucide:star",
        },
        StatCard {
            label: "Contributions",
            value: profile.contributions.to_string(),
            icon: "lucide:git-merge",
        },
        StatCard {
            label: "Projects",
            value: profile.projects.to_string(),
            icon: "lucide:folder",
        },
        StatCard {
            label: "Reputation",
            value: profile
                .reputation_rank
                .map(|rank| format!("#{}", rank))
                .unwrap_or_else(|| "-".to_string()),
            icon: "lucide:award",
        },
    ]
}

fn project_line(project: &ProjectSummary, now: DateTime<Utc>) -> ProjectLine {
    ProjectLine {
        name: project.name.clone(),
        description: project.description.clone(),
        status: project.status.clone(),
        updated_label: format!("Updated {}", format_relative(project.updated_at, now)),
    }
}

fn activity_line(item: &ActivityItem, now: DateTime<Utc>) -> ActivityLine {
    ActivityLine {
        text: format!("{} to {}", item.action, item.project),
        when: format_relative(item.at, now),
    }
}

fn tab_content(tab: ProfileTab, profile: &Profile, now: DateTime<Utc>) -> TabContent {
    let projects = || -> Vec<ProjectLine> {
        profile
            .active_projects
            .iter()
            .map(|p| project_line(p, now))
            .collect()
    };
    let activity = || -> Vec<ActivityLine> {
        profile
            .recent_activity
            .iter()
            .map(|a| activity_line(a, now))
            .collect()
    };

    match tab {
        ProfileTab::Overview => TabContent::Overview {
            projects: projects(),
            activity: activity(),
        },
        ProfileTab::Contributions => TabContent::Contributions {
            activity: activity(),
        },
        ProfileTab::Projects => TabContent::Projects {
            projects: projects(),
        },
        ProfileTab::Badges => TabContent::Badges {
            badges: profile.badges.iter().map(badge_card).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::sample_profile;
    use crate::providers::Balance;
    use crate::view::{ModalKind, ProfileEvent, ViewState};

    const ADDRESS: &str = "0x1a2b3c4d5e6f7a8b9c0d";
    const TEMPLATE: &str = "https://avatars.example/{seed}.svg";

    fn connected() -> WalletStatus {
        WalletStatus::Connected {
            address: ADDRESS.to_string(),
            balance: Some(Balance::new("1.23456", "ETH")),
        }
    }

    fn render(wallet: &WalletStatus, names: &NameRecord, state: &ProfileState) -> ProfileScreen {
        let profile = sample_profile(ADDRESS);
        present_profile(&ProfileInputs {
            wallet,
            profile: Some(&profile),
            names,
            state,
            avatar_template: TEMPLATE,
            now: Utc::now(),
        })
    }

    fn ready(screen: ProfileScreen) -> ProfileView {
        match screen {
            ProfileScreen::Ready(view) => *view,
            other => panic!("expected ready profile, got {:?}", other),
        }
    }

    #[test]
    fn test_disconnected_shows_prompt() {
        let screen = render(&WalletStatus::Disconnected, &NameRecord::default(), &ProfileState::default());
        assert!(matches!(screen, ProfileScreen::ConnectPrompt { .. }));
    }

    #[test]
    fn test_connecting_shows_loading() {
        let screen = render(&WalletStatus::Connecting, &NameRecord::default(), &ProfileState::default());
        assert_eq!(screen, ProfileScreen::Loading);

        let wallet = connected();
        let screen = present_profile(&ProfileInputs {
            wallet: &wallet,
            profile: None,
            names: &NameRecord::default(),
            state: &ProfileState::default(),
            avatar_template: TEMPLATE,
            now: Utc::now(),
        });
        assert_eq!(screen, ProfileScreen::Loading);
    }

    #[test]
    fn test_ready_profile_without_name() {
        let view = ready(render(&connected(), &NameRecord::default(), &ProfileState::default()));

        assert_eq!(view.display_name, "0x1a2b...9c0d");
        assert_eq!(view.short_address, "0x1a2b...9c0d");
        assert_eq!(view.balance_label, "1.2346 ETH");
        assert_eq!(view.avatar, format!("https://avatars.example/{}.svg", ADDRESS));
        assert_eq!(view.header_badges.len(), 2);
        assert_eq!(view.stats[0].value, "1,250");
        assert_eq!(view.stats[3].value, "#125");
        assert_eq!(view.modal_title, None);
        assert!(matches!(view.content, TabContent::Overview { .. }));
    }

    #[test]
    fn test_name_service_record_wins() {
        let names = NameRecord {
            name: Some("builder.eth".to_string()),
            avatar: Some("ipfs://builder".to_string()),
        };
        let view = ready(render(&connected(), &names, &ProfileState::default()));
        assert_eq!(view.display_name, "builder.eth");
        assert_eq!(view.avatar, "ipfs://builder");
    }

    #[test]
    fn test_missing_balance_shows_zero() {
        let wallet = WalletStatus::Connected {
            address: ADDRESS.to_string(),
            balance: None,
        };
        let view = ready(render(&wallet, &NameRecord::default(), &ProfileState::default()));
        assert_eq!(view.balance_label, "0.0000 ETH");
    }

    #[test]
    fn test_badges_tab_and_modal() {
        let state = ProfileState::default().apply_all([
            ProfileEvent::SelectTab(ProfileTab::Badges),
            ProfileEvent::OpenModal(ModalKind::Avatar),
            ProfileEvent::RegenerateAvatar { seed: "fresh".to_string() },
        ]);
        let view = ready(render(&connected(), &NameRecord::default(), &state));

        assert_eq!(view.modal_title, Some("Customize Avatar"));
        assert_eq!(view.avatar, "https://avatars.example/fresh.svg");
        match view.content {
            TabContent::Badges { badges } => {
                assert_eq!(badges[0].unlocked_label, "Unlocked 1/1/2024");
                assert_eq!(badges[0].style, TierStyle::GOLD);
                assert_eq!(badges[1].style, TierStyle::SILVER);
            }
            other => panic!("expected badges tab, got {:?}", other),
        }
    }

    #[test]
    fn test_activity_lines() {
        let state = ProfileState::default().apply(ProfileEvent::SelectTab(ProfileTab::Contributions));
        let view = ready(render(&connected(), &NameRecord::default(), &state));
        match view.content {
            TabContent::Contributions { activity } => {
                assert_eq!(activity.len(), 3);
                assert_eq!(activity[0].text, "Contributed to Project Name");
                assert_eq!(activity[0].when, "2 hours ago");
            }
            other => panic!("expected contributions tab, got {:?}", other),
        }
    }
}
