//! Simulated wallet
//!
//! No chain access: connecting just flips a flag and reports a configured
//! address and balance.

use std::sync::atomic::{AtomicU8, Ordering};

use async_trait::async_trait;

use super::*;

const DISCONNECTED: u8 = 0;
const CONNECTING: u8 = 1;
const CONNECTED: u8 = 2;

/// Wallet whose connection is toggled by the user
#[derive(Debug)]
pub struct SimulatedWallet {
    address: String,
    balance: Option<Balance>,
    state: AtomicU8,
}

impl SimulatedWallet {
    pub fn new(address: impl Into<String>, balance: Option<Balance>) -> Self {
        Self {
            address: address.into(),
            balance,
            state: AtomicU8::new(DISCONNECTED),
        }
    }

    /// Connect if disconnected, otherwise disconnect; returns the new flag
    pub fn toggle(&self) -> bool {
        let connected = self.state.load(Ordering::SeqCst) != CONNECTED;
        self.set_connected(connected);
        connected
    }

    pub fn set_connected(&self, connected: bool) {
        let state = if connected { CONNECTED } else { DISCONNECTED };
        self.state.store(state, Ordering::SeqCst);
        tracing::info!(connected, "Simulated wallet toggled");
    }

    /// Mark a connection as pending
    pub fn begin_connect(&self) {
        self.state.store(CONNECTING, Ordering::SeqCst);
    }
}

#[async_trait]
impl WalletProvider for SimulatedWallet {
    async fn status(&self) -> WalletStatus {
        match self.state.load(Ordering::SeqCst) {
            CONNECTED => WalletStatus::Connected {
                address: self.address.clone(),
                balance: self.balance.clone(),
            },
            CONNECTING => WalletStatus::Connecting,
            _ => WalletStatus::Disconnected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet() -> SimulatedWallet {
        SimulatedWallet::new("0x1a2b3c4d5e6f7a8b9c0d", Some(Balance::new("1.23456", "ETH")))
    }

    #[tokio::test]
    async fn test_starts_disconnected() {
        assert_eq!(wallet().status().await, WalletStatus::Disconnected);
    }

    #[tokio::test]
    async fn test_toggle_round_trip() {
        let wallet = wallet();
        assert!(wallet.toggle());
        assert_eq!(
            wallet.status().await.address(),
            Some("0x1a2b3c4d5e6f7a8b9c0d")
        );

        assert!(!wallet.toggle());
        assert_eq!(wallet.status().await, WalletStatus::Disconnected);
    }

    #[tokio::test]
    async fn test_connecting_state() {
        let wallet = wallet();
        wallet.begin_connect();
        assert_eq!(wallet.status().await, WalletStatus::Connecting);

        // toggling a pending connection completes it
        assert!(wallet.toggle());
        assert!(wallet.status().await.is_connected());
    }
}
