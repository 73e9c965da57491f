//! # YouBuidl
//!
//! View-model core of a public-goods builder dashboard: everything the
//! leaderboard and profile pages show, derived from plain data.
//!
//! ## Modules
//!
//! - [`format`]: compact numbers, addresses, balances, dates
//! - [`identity`]: display-name and avatar resolution
//! - [`badge`]: badge tier styles, rank colours, level labels
//! - [`view`]: shell, leaderboard and profile view states
//! - [`viewport`]: mobile breakpoint and scoped resize subscriptions
//! - [`leaderboard`] / [`profile`]: page presentation
//! - [`providers`]: name service, wallet and data source contracts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use youbuidl::model::Category;
//! use youbuidl::providers::{DataSource, LeaderboardQuery, MockDataSource};
//! use youbuidl::view::{LeaderboardEvent, LeaderboardState, ViewState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = LeaderboardState::default()
//!         .apply(LeaderboardEvent::SelectCategory(Category::Builders));
//!
//!     let source = MockDataSource::new();
//!     let leaders = source
//!         .leaders(&LeaderboardQuery {
//!             category: state.category,
//!             time_range: state.time_range,
//!         })
//!         .await?;
//!
//!     for row in youbuidl::present_leaderboard(&leaders, &state) {
//!         println!("{} {} {}", row.rank, row.display_name, row.points_label);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod badge;
pub mod config;
pub mod format;
pub mod identity;
pub mod leaderboard;
pub mod logging;
pub mod market;
pub mod model;
pub mod profile;
pub mod providers;
pub mod view;
pub mod viewport;

pub use badge::{classify_tier, icon_for_badge_tier, rank_color, ColorTag, TierStyle};
pub use config::Config;
pub use format::{format_balance, format_number, truncate_address};
pub use identity::{avatar_url, resolve_display_name, DisplayIdentity};
pub use leaderboard::{present_leaderboard, LeaderRow};
pub use market::{market_stats, MarketStat};
pub use profile::{present_profile, ProfileInputs, ProfileScreen};
pub use view::ViewState;
pub use viewport::{Viewport, MOBILE_BREAKPOINT};
