//! Wallet store
//!
//! User-facing wallet list operations: validated add, remove with selection
//! clamping, reset to the built-in defaults, and durable persistence of the
//! list under one storage key. Loading tolerates absent or malformed
//! persisted state by keeping the defaults.

use std::sync::Arc;

use tracing::{info, warn};

use dashboard_core::{
    default_wallets, is_valid_address, DashboardError, DashboardResult, Wallet,
};

use crate::prefs_storage::PrefsStorage;
use crate::store::{Action, AppStore};

/// Storage key holding the serialized wallet list
pub const WALLETS_KEY: &str = "footium_wallets";

/// Wallet list management on top of the application store
pub struct WalletStore {
    store: Arc<AppStore>,
    storage: Arc<PrefsStorage>,
}

impl WalletStore {
    pub fn new(store: Arc<AppStore>, storage: Arc<PrefsStorage>) -> Self {
        Self { store, storage }
    }

    /// Load the persisted wallet list, keeping defaults when the key is
    /// absent or unparseable. Never fails; problems are only logged.
    pub async fn load(&self) {
        let raw = match self.storage.get(WALLETS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                warn!("Failed to read persisted wallets: {}", e);
                return;
            }
        };

        match serde_json::from_str::<Vec<Wallet>>(&raw) {
            Ok(wallets) if !wallets.is_empty() => {
                info!("Loaded {} persisted wallets", wallets.len());
                self.store.dispatch(Action::SetWallets(wallets)).await;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Persisted wallets are malformed, keeping defaults: {}", e);
            }
        }
    }

    /// Replace the whole wallet list
    pub async fn set_all(&self, wallets: Vec<Wallet>) {
        self.store.dispatch(Action::SetWallets(wallets)).await;
        self.persist().await;
    }

    /// Add a wallet after validating label, address shape, and uniqueness.
    /// Validation failures leave state untouched.
    pub async fn add(&self, name: &str, address: &str) -> DashboardResult<Wallet> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DashboardError::validation("Wallet name cannot be empty"));
        }
        if !is_valid_address(address) {
            return Err(DashboardError::validation("Invalid wallet address format"));
        }

        let state = self.store.state().await;
        if state.wallets.iter().any(|w| w.same_address(address)) {
            return Err(DashboardError::validation(
                "This wallet address already exists",
            ));
        }

        let wallet = Wallet::new(address, name);
        self.store
            .dispatch(Action::AddWallet(wallet.clone()))
            .await;
        self.persist().await;
        Ok(wallet)
    }

    /// Remove the wallet at `index`; the selection index is clamped by the
    /// reducer
    pub async fn remove(&self, index: usize) {
        self.store.dispatch(Action::RemoveWallet(index)).await;
        self.persist().await;
    }

    /// Select the wallet at `index`
    pub async fn select(&self, index: usize) {
        self.store.dispatch(Action::SelectWallet(index)).await;
    }

    /// Restore the fixed built-in wallet list
    pub async fn reset_to_defaults(&self) {
        self.store
            .dispatch(Action::SetWallets(default_wallets()))
            .await;
        self.persist().await;
    }

    /// Persist the current wallet list. Storage trouble is logged rather
    /// than failing the mutation that triggered it.
    async fn persist(&self) {
        let wallets = self.store.state().await.wallets;
        let serialized = match serde_json::to_string(&wallets) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to serialize wallets: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(WALLETS_KEY, &serialized) {
            warn!("Failed to persist wallets: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> (Arc<AppStore>, Arc<PrefsStorage>, WalletStore) {
        let store = Arc::new(AppStore::new());
        let storage = Arc::new(PrefsStorage::new_in_memory().unwrap());
        let wallets = WalletStore::new(Arc::clone(&store), Arc::clone(&storage));
        (store, storage, wallets)
    }

    #[tokio::test]
    async fn test_reset_restores_the_six_defaults() {
        let (store, _storage, wallets) = make_store();
        wallets
            .set_all(vec![Wallet::new(
                "0x1111111111111111111111111111111111111111",
                "custom",
            )])
            .await;

        wallets.reset_to_defaults().await;
        assert_eq!(store.state().await.wallets, default_wallets());
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_address_case_insensitively() {
        let (store, _storage, wallets) = make_store();
        let before = store.state().await.wallets.clone();

        // Default list contains this address in mixed case
        let result = wallets
            .add("dup", "0x0a032289552d817c15c185dbfdf43b812423ba82")
            .await;
        assert!(matches!(result, Err(DashboardError::Validation(_))));
        assert_eq!(store.state().await.wallets, before);
    }

    #[tokio::test]
    async fn test_add_rejects_empty_name_and_bad_address() {
        let (store, _storage, wallets) = make_store();
        let before = store.state().await.wallets.clone();

        let result = wallets
            .add("   ", "0x1111111111111111111111111111111111111111")
            .await;
        assert!(matches!(result, Err(DashboardError::Validation(_))));

        let result = wallets.add("fine", "0xnothex").await;
        assert!(matches!(result, Err(DashboardError::Validation(_))));

        assert_eq!(store.state().await.wallets, before);
    }

    #[tokio::test]
    async fn test_add_trims_name_and_persists() {
        let (store, storage, wallets) = make_store();
        let added = wallets
            .add("  fresh  ", "0x1111111111111111111111111111111111111111")
            .await
            .unwrap();
        assert_eq!(added.name, "fresh");
        assert_eq!(store.state().await.wallets.len(), 7);

        let raw = storage.get(WALLETS_KEY).unwrap().unwrap();
        let persisted: Vec<Wallet> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, store.state().await.wallets);
    }

    #[tokio::test]
    async fn test_persisted_wallets_round_trip_through_load() {
        let (store, storage, wallets) = make_store();
        wallets
            .add("extra", "0x2222222222222222222222222222222222222222")
            .await
            .unwrap();
        let saved = store.state().await.wallets.clone();

        // Fresh store against the same storage
        let store2 = Arc::new(AppStore::new());
        let wallets2 = WalletStore::new(Arc::clone(&store2), storage);
        wallets2.load().await;
        assert_eq!(store2.state().await.wallets, saved);
    }

    #[tokio::test]
    async fn test_load_keeps_defaults_on_malformed_content() {
        let (store, storage, wallets) = make_store();
        storage.set(WALLETS_KEY, "{not wallets").unwrap();
        wallets.load().await;
        assert_eq!(store.state().await.wallets, default_wallets());
    }

    #[tokio::test]
    async fn test_remove_clamps_selection() {
        let (store, _storage, wallets) = make_store();
        wallets.select(3).await;
        wallets.remove(1).await;

        let state = store.state().await;
        assert_eq!(state.wallets.len(), 5);
        assert_eq!(state.selected_wallet_index, 2);
    }
}
