//! Leaderboard page state: category, time range and layout

use serde::{Deserialize, Serialize};

use super::ViewState;
use crate::model::{Category, TimeRange};

/// Table rows or a grid of cards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Table, ViewMode::Grid];

    pub fn key(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Grid => "grid",
        }
    }

    /// Toggle button text
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Table => "List",
            ViewMode::Grid => "Grid",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ViewMode::Table => "lucide:list",
            ViewMode::Grid => "lucide:grid",
        }
    }

    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(s.trim()))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LeaderboardState {
    pub category: Category,
    pub time_range: TimeRange,
    pub view_mode: ViewMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardEvent {
    SelectCategory(Category),
    SelectTimeRange(TimeRange),
    SetViewMode(ViewMode),
}

impl ViewState for LeaderboardState {
    type Event = LeaderboardEvent;

    fn apply(self, event: LeaderboardEvent) -> Self {
        tracing::debug!(?event, "Leaderboard transition");

        match event {
            LeaderboardEvent::SelectCategory(category) => Self { category, ..self },
            LeaderboardEvent::SelectTimeRange(time_range) => Self { time_range, ..self },
            LeaderboardEvent::SetViewMode(view_mode) => Self { view_mode, ..self },
        }
    }
}
