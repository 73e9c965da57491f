//! In-memory providers backed by the built-in sample data

use std::collections::HashMap;

use async_trait::async_trait;

use super::*;
use crate::model::fixtures;

/// Name service answering from a fixed table
#[derive(Debug, Clone, Default)]
pub struct StaticNameService {
    records: HashMap<String, NameRecord>,
}

impl StaticNameService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: register a name (and optional avatar) for an address
    pub fn with_name(
        mut self,
        address: impl Into<String>,
        name: impl Into<String>,
        avatar: Option<String>,
    ) -> Self {
        self.records.insert(
            address.into().to_lowercase(),
            NameRecord {
                name: Some(name.into()),
                avatar,
            },
        );
        self
    }
}

#[async_trait]
impl NameService for StaticNameService {
    async fn lookup(&self, address: &str) -> Result<NameRecord, ProviderError> {
        let record = self
            .records
            .get(&address.to_lowercase())
            .cloned()
            .unwrap_or_default();

        tracing::debug!(address, found = record.name.is_some(), "Name lookup");
        Ok(record)
    }
}

/// Data source serving the built-in sample leaderboard and profile
#[derive(Debug, Clone)]
pub struct MockDataSource {
    leaders: Vec<Leader>,
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDataSource {
    pub fn new() -> Self {
        Self {
            leaders: fixtures::sample_leaders(),
        }
    }

    /// Serve a custom set of entries instead of the samples
    pub fn with_leaders(leaders: Vec<Leader>) -> Self {
        Self { leaders }
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn leaders(&self, query: &LeaderboardQuery) -> Result<Vec<Leader>, ProviderError> {
        // Sample entries carry no history, so every time range sees the same totals
        let leaders: Vec<Leader> = self
            .leaders
            .iter()
            .filter(|leader| leader.category == query.category)
            .cloned()
            .collect();

        tracing::debug!(
            category = query.category.key(),
            range = query.time_range.key(),
            count = leaders.len(),
            "Loaded sample leaderboard"
        );
        Ok(leaders)
    }

    async fn profile(&self, address: &str) -> Result<Profile, ProviderError> {
        Ok(fixtures::sample_profile(address))
    }
}
