//! Dashboard Data Model
//!
//! - **types**: leaderboard entries, profiles, badges and selection enums
//! - **fixtures**: built-in sample data used when no data file is configured

pub mod fixtures;
pub mod types;

pub use types::*;
