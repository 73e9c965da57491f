//! Data source backed by a JSON fixture file
//!
//! ```json
//! {
//!   "leaders": [{ "id": 1, "address": "0x...", "rank": 1, "points": 1850 }],
//!   "profiles": [{ "address": "0x...", "bio": "..." }]
//! }
//! ```
//!
//! Optional fields may be omitted; they load as absent.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DataFile {
    #[serde(default)]
    leaders: Vec<Leader>,
    #[serde(default)]
    profiles: Vec<Profile>,
}

/// Leaderboard and profiles read once from a JSON file
#[derive(Debug, Clone)]
pub struct JsonDataSource {
    path: PathBuf,
    data: DataFile,
}

impl JsonDataSource {
    /// Read and parse `path`
    pub async fn open(path: impl AsRef<Path>) -> ProviderResult<Self> {
        let path = path.as_ref().to_path_buf();
        let content = tokio::fs::read_to_string(&path).await?;
        let data: DataFile = serde_json::from_str(&content)?;

        tracing::info!(
            path = %path.display(),
            leaders = data.leaders.len(),
            profiles = data.profiles.len(),
            "Loaded data file"
        );

        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for JsonDataSource {
    async fn leaders(&self, query: &LeaderboardQuery) -> Result<Vec<Leader>, ProviderError> {
        Ok(self
            .data
            .leaders
            .iter()
            .filter(|leader| leader.category == query.category)
            .cloned()
            .collect())
    }

    async fn profile(&self, address: &str) -> Result<Profile, ProviderError> {
        let profile = self
            .data
            .profiles
            .iter()
            .find(|p| p.address.eq_ignore_ascii_case(address))
            .cloned()
            .unwrap_or_else(|| Profile::empty(address));
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BadgeTier;
    use tempfile::tempdir;

    const DATA: &str = r#"{
        "leaders": [
            { "id": 1, "address": "0x1234567890abcdef", "rank": 2, "points": 900,
              "badges": ["gold", "mythic"] },
            { "id": 2, "address": "0xfedcba0987654321", "rank": 1, "username": "gm",
              "category": "grants" }
        ],
        "profiles": [
            { "address": "0x1234567890ABCDEF", "bio": "hello", "experience": 42 }
        ]
    }"#;

    #[tokio::test]
    async fn test_open_and_query() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, DATA).unwrap();

        let source = JsonDataSource::open(&path).await.unwrap();
        assert_eq!(source.path(), path.as_path());

        let builders = source.leaders(&LeaderboardQuery::default()).await.unwrap();
        assert_eq!(builders.len(), 1);
        assert_eq!(builders[0].badges, vec![BadgeTier::Gold, BadgeTier::Unknown]);

        let grants = source
            .leaders(&LeaderboardQuery {
                category: Category::Grants,
                ..LeaderboardQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(grants[0].username.as_deref(), Some("gm"));
    }

    #[tokio::test]
    async fn test_profile_lookup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, DATA).unwrap();

        let source = JsonDataSource::open(&path).await.unwrap();
        let profile = source.profile("0x1234567890abcdef").await.unwrap();
        assert_eq!(profile.bio, "hello");
        assert_eq!(profile.experience, 42);

        let unknown = source.profile("0x9999").await.unwrap();
        assert_eq!(unknown, Profile::empty("0x9999"));
    }

    #[tokio::test]
    async fn test_missing_and_malformed_files() {
        let dir = tempdir().unwrap();

        let err = JsonDataSource::open(dir.path().join("nope.json")).await.unwrap_err();
        assert!(matches!(err, ProviderError::Io(_)));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = JsonDataSource::open(&path).await.unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
    }
}
