//! External Collaborators
//!
//! Data contracts for everything the dashboard reads from outside:
//! - `NameService`: human readable names and avatars for addresses
//! - `WalletProvider`: connection status, address and balance
//! - `DataSource`: leaderboard entries and profiles
//!
//! Implementations shipped here are simulated: a static name table, a
//! toggleable wallet, built-in sample data and a JSON fixture file.

mod json;
mod mock;
mod wallet;

pub use json::JsonDataSource;
pub use mock::{MockDataSource, StaticNameService};
pub use wallet::SimulatedWallet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::format::format_balance;
use crate::model::{Category, Leader, Profile, TimeRange};

/// Symbol shown when the wallet reports none
pub const DEFAULT_SYMBOL: &str = "ETH";

/// Name-service answer for an address; both fields may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Resolves names for addresses
///
/// An address without a name is a normal answer (`NameRecord::default()`),
/// not an error.
#[async_trait]
pub trait NameService: Send + Sync {
    async fn lookup(&self, address: &str) -> Result<NameRecord, ProviderError>;
}

/// Native token balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Decimal amount as reported by the wallet (e.g. `"1.23456"`)
    pub formatted: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

impl Balance {
    pub fn new(formatted: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            formatted: formatted.into(),
            symbol: Some(symbol.into()),
        }
    }

    /// Balance chip text (`"1.2346 ETH"`)
    pub fn display(&self) -> String {
        format!(
            "{} {}",
            format_balance(Some(&self.formatted)),
            self.symbol.as_deref().unwrap_or(DEFAULT_SYMBOL)
        )
    }
}

/// Wallet connection as seen by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WalletStatus {
    Disconnected,
    /// Connection requested, data still pending
    Connecting,
    Connected {
        address: String,
        balance: Option<Balance>,
    },
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletStatus::Connected { address, .. } => Some(address),
            _ => None,
        }
    }
}

#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn status(&self) -> WalletStatus;
}

/// Which leaderboard slice to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaderboardQuery {
    pub category: Category,
    pub time_range: TimeRange,
}

/// Supplies leaderboard entries and profiles
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn leaders(&self, query: &LeaderboardQuery) -> Result<Vec<Leader>, ProviderError>;

    /// Profile for `address`; unknown addresses get an empty profile
    async fn profile(&self, address: &str) -> Result<Profile, ProviderError>;
}

/// Errors raised by providers
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
