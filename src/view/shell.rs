//! Navigation shell state: header, sidebar and wallet button

use serde::{Deserialize, Serialize};

use super::ViewState;
use crate::format::truncate_address;
use crate::viewport::{is_mobile_width, MOBILE_BREAKPOINT};

/// Time window of the market widgets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum MarketTimeFilter {
    #[serde(rename = "1H")]
    OneHour,
    #[default]
    #[serde(rename = "6H")]
    SixHours,
    #[serde(rename = "24H")]
    OneDay,
    #[serde(rename = "7D")]
    OneWeek,
}

impl MarketTimeFilter {
    pub const ALL: [MarketTimeFilter; 4] = [
        MarketTimeFilter::OneHour,
        MarketTimeFilter::SixHours,
        MarketTimeFilter::OneDay,
        MarketTimeFilter::OneWeek,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MarketTimeFilter::OneHour => "1H",
            MarketTimeFilter::SixHours => "6H",
            MarketTimeFilter::OneDay => "24H",
            MarketTimeFilter::OneWeek => "7D",
        }
    }

    /// Filter chips show the key itself
    pub fn label(&self) -> &'static str {
        self.key()
    }

    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s.trim()))
            .unwrap_or_default()
    }
}

/// Shell selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_open: bool,
    pub time_filter: MarketTimeFilter,
    pub wallet_connected: bool,
    pub is_mobile: bool,
    /// Viewport width below which the mobile layout is used
    pub mobile_breakpoint: u32,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            sidebar_open: false,
            time_filter: MarketTimeFilter::default(),
            wallet_connected: false,
            is_mobile: false,
            mobile_breakpoint: MOBILE_BREAKPOINT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    ToggleSidebar,
    CloseSidebar,
    SelectTimeFilter(MarketTimeFilter),
    /// Simulated wallet connect/disconnect
    ToggleWallet,
    /// Connection state reported by the wallet provider
    WalletStatusChanged { connected: bool },
    ViewportResized { width: u32 },
}

impl ShellState {
    /// Initial state for a viewport of `width` pixels
    pub fn for_viewport(width: u32, breakpoint: u32) -> Self {
        Self {
            is_mobile: is_mobile_width(width, breakpoint),
            mobile_breakpoint: breakpoint,
            ..Self::default()
        }
    }

    /// The sidebar is only rendered on desktop layouts
    pub fn shows_sidebar(&self) -> bool {
        !self.is_mobile
    }

    /// Mobile layouts get the bottom navigation bar instead
    pub fn shows_mobile_navigation(&self) -> bool {
        self.is_mobile
    }

    /// Label of the wallet button
    pub fn wallet_label(&self, address: &str) -> String {
        if self.wallet_connected {
            truncate_address(address)
        } else {
            "Connect Wallet".to_string()
        }
    }
}

impl ViewState for ShellState {
    type Event = ShellEvent;

    fn apply(self, event: ShellEvent) -> Self {
        tracing::debug!(?event, "Shell transition");

        match event {
            ShellEvent::ToggleSidebar => Self {
                sidebar_open: !self.sidebar_open,
                ..self
            },
            ShellEvent::CloseSidebar => Self {
                sidebar_open: false,
                ..self
            },
            ShellEvent::SelectTimeFilter(time_filter) => Self {
                time_filter,
                ..self
            },
            ShellEvent::ToggleWallet => Self {
                wallet_connected: !self.wallet_connected,
                ..self
            },
            ShellEvent::WalletStatusChanged { connected } => Self {
                wallet_connected: connected,
                ..self
            },
            ShellEvent::ViewportResized { width } => Self {
                is_mobile: is_mobile_width(width, self.mobile_breakpoint),
                ..self
            },
        }
    }
}
