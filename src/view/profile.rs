//! Profile page state: tabs, the edit modal and the bio draft

use serde::{Deserialize, Serialize};

use super::ViewState;
use crate::model::fixtures::DEFAULT_BIO;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Overview,
    Contributions,
    Projects,
    Badges,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::Overview,
        ProfileTab::Contributions,
        ProfileTab::Projects,
        ProfileTab::Badges,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProfileTab::Overview => "overview",
            ProfileTab::Contributions => "contributions",
            ProfileTab::Projects => "projects",
            ProfileTab::Badges => "badges",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Overview => "Overview",
            ProfileTab::Contributions => "Contributions",
            ProfileTab::Projects => "Projects",
            ProfileTab::Badges => "Badges",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProfileTab::Overview => "lucide:layout-dashboard",
            ProfileTab::Contributions => "lucide:git-merge",
            ProfileTab::Projects => "lucide:folder",
            ProfileTab::Badges => "lucide:medal",
        }
    }

    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(s.trim()))
            .unwrap_or_default()
    }
}

/// Which editor the modal shows
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ModalKind {
    Avatar,
    Profile,
}

impl ModalKind {
    pub fn title(&self) -> &'static str {
        match self {
            ModalKind::Avatar => "Customize Avatar",
            ModalKind::Profile => "Edit Profile",
        }
    }
}

/// Edit modal; the kind only exists while the modal is open
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(tag = "state", content = "kind", rename_all = "lowercase")]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalKind),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn kind(&self) -> Option<ModalKind> {
        match self {
            ModalState::Open(kind) => Some(*kind),
            ModalState::Closed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    pub tab: ProfileTab,
    pub modal: ModalState,
    /// Saved bio
    pub bio: String,
    /// Bio being edited in the profile modal
    pub bio_draft: String,
    /// Custom avatar seed; `None` uses the wallet address
    pub avatar_seed: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::with_bio(DEFAULT_BIO)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEvent {
    SelectTab(ProfileTab),
    OpenModal(ModalKind),
    /// Dismiss without saving
    CloseModal,
    EditBio(String),
    SaveModal,
    /// New avatar seed, generated by the caller
    RegenerateAvatar { seed: String },
}

impl ProfileState {
    pub fn with_bio(bio: impl Into<String>) -> Self {
        Self {
            tab: ProfileTab::default(),
            modal: ModalState::Closed,
            bio: bio.into(),
            bio_draft: String::new(),
            avatar_seed: None,
        }
    }
}

impl ViewState for ProfileState {
    type Event = ProfileEvent;

    fn apply(self, event: ProfileEvent) -> Self {
        tracing::debug!(?event, "Profile transition");

        match event {
            ProfileEvent::SelectTab(tab) => Self { tab, ..self },
            ProfileEvent::OpenModal(kind) => Self {
                modal: ModalState::Open(kind),
                bio_draft: self.bio.clone(),
                ..self
            },
            ProfileEvent::CloseModal => Self {
                modal: ModalState::Closed,
                bio_draft: String::new(),
                ..self
            },
            // Drafts only exist while the profile editor is open
            ProfileEvent::EditBio(draft) => match self.modal {
                ModalState::Open(ModalKind::Profile) => Self {
                    bio_draft: draft,
                    ..self
                },
                _ => self,
            },
            ProfileEvent::SaveModal => match self.modal {
                ModalState::Open(ModalKind::Profile) => Self {
                    modal: ModalState::Closed,
                    bio: self.bio_draft,
                    bio_draft: String::new(),
                    ..self
                },
                ModalState::Open(ModalKind::Avatar) => Self {
                    modal: ModalState::Closed,
                    ..self
                },
                ModalState::Closed => self,
            },
            ProfileEvent::RegenerateAvatar { seed } => Self {
                avatar_seed: Some(seed),
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ProfileState::default();
        assert_eq!(state.tab, ProfileTab::Overview);
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.bio, DEFAULT_BIO);
        assert!(state.avatar_seed.is_none());
    }

    #[test]
    fn test_avatar_modal_open_close() {
        let state = ProfileState::default().apply(ProfileEvent::OpenModal(ModalKind::Avatar));
        assert!(state.modal.is_open());
        assert_eq!(state.modal.kind(), Some(ModalKind::Avatar));

        let state = state.apply(ProfileEvent::CloseModal);
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.modal.kind(), None);
    }

    #[test]
    fn test_save_profile_commits_draft() {
        let state = ProfileState::default().apply_all([
            ProfileEvent::OpenModal(ModalKind::Profile),
            ProfileEvent::EditBio("Shipping grants tooling".to_string()),
            ProfileEvent::SaveModal,
        ]);
        assert_eq!(state.bio, "Shipping grants tooling");
        assert_eq!(state.modal, ModalState::Closed);
        assert!(state.bio_draft.is_empty());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let state = ProfileState::default().apply_all([
            ProfileEvent::OpenModal(ModalKind::Profile),
            ProfileEvent::EditBio("scratch".to_string()),
            ProfileEvent::CloseModal,
        ]);
        assert_eq!(state.bio, DEFAULT_BIO);
    }

    #[test]
    fn test_edit_ignored_when_closed() {
        let state = ProfileState::default().apply(ProfileEvent::EditBio("ignored".to_string()));
        assert!(state.bio_draft.is_empty());
        assert_eq!(state.clone().apply(ProfileEvent::SaveModal), state);
    }

    #[test]
    fn test_avatar_save_keeps_bio_and_seed() {
        let state = ProfileState::default().apply_all([
            ProfileEvent::OpenModal(ModalKind::Avatar),
            ProfileEvent::RegenerateAvatar { seed: "seed-1".to_string() },
            ProfileEvent::SaveModal,
        ]);
        assert_eq!(state.avatar_seed.as_deref(), Some("seed-1"));
        assert_eq!(state.bio, DEFAULT_BIO);
        assert!(!state.modal.is_open());
    }

    #[test]
    fn test_tab_selection() {
        let state = ProfileState::default().apply(ProfileEvent::SelectTab(ProfileTab::parse("badges")));
        assert_eq!(state.tab, ProfileTab::Badges);
        assert_eq!(ProfileTab::parse("wallet"), ProfileTab::Overview);
    }
}
