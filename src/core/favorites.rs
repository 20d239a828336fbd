//! # Favorites Store
//!
//! The single source of truth for which listings the user has favorited.
//! Every screen that shows a favorite marker reads from a handle to the same
//! store, so toggling on the detail screen is reflected on Home, Favorites and
//! Profile at the next redraw.
//!
//! ```text
//! FavoritesStore (clone = new handle, same set)
//! └── watch::Sender<Vec<Property>>   // ordered by insertion
//!         │ send_modify on every toggle
//!         ▼
//!     FavoritesSubscription (one per observer)
//!     ├── has_changed()  // anything since last snapshot?
//!     ├── snapshot()     // current set, marks it seen
//!     └── changed()      // async: wait for next toggle
//! ```
//!
//! ## Threading
//!
//! The terminal shell mutates the store only from its event loop, so toggles
//! are naturally serialized. Each toggle still runs as one `send_modify`
//! closure under the channel's lock, which keeps the membership check and
//! the insert/remove atomic if an adapter ever mutates from another thread.

use log::info;
use std::sync::Arc;
use tokio::sync::watch;

use crate::core::property::{Property, PropertyId};

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// Handle to the shared favorites set. Cloning shares the set.
#[derive(Clone)]
pub struct FavoritesStore {
    tx: Arc<watch::Sender<Vec<Property>>>,
}

impl FavoritesStore {
    /// A new, empty store.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx: Arc::new(tx) }
    }

    /// Remove the listing if a property with the same id is present,
    /// otherwise append it. Membership is decided by id, so a stale or edited
    /// copy of a favorited listing still removes it.
    pub fn toggle(&self, property: &Property) -> Toggled {
        let mut outcome = Toggled::Added;
        self.tx.send_modify(|favorites| {
            let before = favorites.len();
            favorites.retain(|p| !p.same_listing(property));
            if favorites.len() == before {
                favorites.push(property.clone());
            } else {
                outcome = Toggled::Removed;
            }
        });
        info!(
            "Favorite {:?}: {} (id={}), {} favorited",
            outcome,
            property.title,
            property.id,
            self.len()
        );
        outcome
    }

    pub fn is_favorite(&self, id: PropertyId) -> bool {
        self.tx.borrow().iter().any(|p| p.id == id)
    }

    /// Snapshot of the favorited listings in the order they were added.
    pub fn favorites(&self) -> Vec<Property> {
        self.tx.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Register an observer. The subscription starts with the current set
    /// marked as seen.
    pub fn subscribe(&self) -> FavoritesSubscription {
        FavoritesSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<u32> = self.tx.borrow().iter().map(|p| p.id.get()).collect();
        f.debug_struct("FavoritesStore").field("ids", &ids).finish()
    }
}

/// Observer side of the store.
pub struct FavoritesSubscription {
    rx: watch::Receiver<Vec<Property>>,
}

impl FavoritesSubscription {
    /// Whether a toggle happened since the last `snapshot()`.
    pub fn has_changed(&self) -> bool {
        // The sender lives as long as any store handle; a closed channel
        // means nothing can change any more.
        self.rx.has_changed().unwrap_or(false)
    }

    /// Current set, marking it as seen.
    pub fn snapshot(&mut self) -> Vec<Property> {
        self.rx.borrow_and_update().clone()
    }

    /// Wait for the next toggle. Returns `false` once every store handle is
    /// gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
