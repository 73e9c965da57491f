//! View State
//!
//! The UI selections of each page as immutable values with pure transitions:
//!
//! - **shell**: sidebar, market time filter, wallet toggle, mobile layout
//! - **leaderboard**: category, time range, table/grid view
//! - **profile**: tab, edit modal, bio draft, avatar seed
//!
//! ```text
//!   user action -> Event -> state.apply(event) -> new state -> render
//! ```
//!
//! Every transition is a direct assignment over a closed set of inputs, so
//! none of them can fail. States are created with `Default` at mount and
//! dropped at unmount.

pub mod leaderboard;
pub mod profile;
pub mod shell;

pub use leaderboard::{LeaderboardEvent, LeaderboardState, ViewMode};
pub use profile::{ModalKind, ModalState, ProfileEvent, ProfileState, ProfileTab};
pub use shell::{MarketTimeFilter, ShellEvent, ShellState};

/// A view state with a pure transition function
pub trait ViewState: Sized {
    type Event;

    /// Consume the current state and return the state after `event`
    fn apply(self, event: Self::Event) -> Self;

    /// Apply a sequence of events in order
    fn apply_all<I>(self, events: I) -> Self
    where
        I: IntoIterator<Item = Self::Event>,
    {
        events.into_iter().fold(self, Self::apply)
    }
}
