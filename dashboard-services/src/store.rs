//! Application store
//!
//! Single source of truth for the view layer: an explicit store object
//! holding [`AppState`], mutated only through [`Action`]s applied by the
//! pure [`reduce`] function, with a broadcast channel for change
//! notification.

use tokio::sync::{broadcast, RwLock};

use dashboard_core::{default_wallets, ClubWithDetails, Wallet};

/// Capacity of the state-event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Shared application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub wallets: Vec<Wallet>,
    /// Always within `[0, wallets.len())` while wallets exist
    pub selected_wallet_index: usize,
    pub clubs: Vec<ClubWithDetails>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            wallets: default_wallets(),
            selected_wallet_index: 0,
            clubs: Vec::new(),
            is_loading: false,
            error: None,
        }
    }
}

/// State transitions
#[derive(Debug, Clone)]
pub enum Action {
    SetWallets(Vec<Wallet>),
    AddWallet(Wallet),
    RemoveWallet(usize),
    SelectWallet(usize),
    SetClubs(Vec<ClubWithDetails>),
    SetLoading(bool),
    SetError(Option<String>),
}

/// Which slice of state an action touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEvent {
    Wallets,
    Selection,
    Clubs,
    Loading,
    Error,
}

impl From<&Action> for StateEvent {
    fn from(action: &Action) -> Self {
        match action {
            Action::SetWallets(_) | Action::AddWallet(_) | Action::RemoveWallet(_) => {
                StateEvent::Wallets
            }
            Action::SelectWallet(_) => StateEvent::Selection,
            Action::SetClubs(_) => StateEvent::Clubs,
            Action::SetLoading(_) => StateEvent::Loading,
            Action::SetError(_) => StateEvent::Error,
        }
    }
}

/// Pure state transition function
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SetWallets(wallets) => {
            state.wallets = wallets;
            state.selected_wallet_index = clamp_index(state.selected_wallet_index, &state.wallets);
        }
        Action::AddWallet(wallet) => {
            state.wallets.push(wallet);
        }
        Action::RemoveWallet(index) => {
            if index < state.wallets.len() {
                state.wallets.remove(index);
                if state.selected_wallet_index >= index {
                    state.selected_wallet_index = state.selected_wallet_index.saturating_sub(1);
                }
                state.selected_wallet_index =
                    clamp_index(state.selected_wallet_index, &state.wallets);
            }
        }
        Action::SelectWallet(index) => {
            if index < state.wallets.len() {
                state.selected_wallet_index = index;
            }
        }
        Action::SetClubs(clubs) => {
            state.clubs = clubs;
        }
        Action::SetLoading(is_loading) => {
            state.is_loading = is_loading;
        }
        Action::SetError(error) => {
            state.error = error;
        }
    }
    state
}

fn clamp_index(index: usize, wallets: &[Wallet]) -> usize {
    if wallets.is_empty() {
        0
    } else {
        index.min(wallets.len() - 1)
    }
}

/// Explicit store handle passed by reference to each consumer
pub struct AppStore {
    state: RwLock<AppState>,
    events: broadcast::Sender<StateEvent>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(state),
            events,
        }
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// Apply one action through the reducer and notify subscribers
    pub async fn dispatch(&self, action: Action) {
        let event = StateEvent::from(&action);
        {
            let mut guard = self.state.write().await;
            let next = reduce(guard.clone(), action);
            *guard = next;
        }
        // Send fails only when nobody is subscribed
        let _ = self.events.send(event);
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.events.subscribe()
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
