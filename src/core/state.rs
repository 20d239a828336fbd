//! # Application State
//!
//! Core business state for Estate. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<Catalog>          // the one listing catalog
//! ├── favorites: FavoritesStore      // shared, observable favorites
//! ├── router: Router                 // back-stack, top = current screen
//! ├── profile: UserProfile           // signed-in user (read-only)
//! ├── notifications: Vec<Notification>
//! └── status_message: String         // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::favorites::FavoritesStore;
use crate::core::notifications::{self, Notification};
use crate::core::profile::UserProfile;
use crate::core::router::Router;

pub struct App {
    pub catalog: Arc<Catalog>,
    pub favorites: FavoritesStore,
    pub router: Router,
    pub profile: UserProfile,
    pub notifications: Vec<Notification>,
    pub status_message: String,
}

impl App {
    /// Build the app around an injected catalog and favorites store.
    pub fn new(catalog: Arc<Catalog>, favorites: FavoritesStore) -> Self {
        Self {
            catalog,
            favorites,
            router: Router::new(),
            profile: UserProfile::default(),
            notifications: notifications::seeded(),
            status_message: String::from("Welcome to Estate!"),
        }
    }

    /// Seeded catalog, fresh store, profile from config.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(Arc::new(Catalog::seeded()), FavoritesStore::new());
        app.profile = config.profile.clone();
        app
    }
}

#[cfg(test)]
mod tests {
    use crate::core::route::Route;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Estate!");
        assert_eq!(app.router.current(), &Route::Home);
        assert!(app.favorites.is_empty());
        assert_eq!(app.catalog.len(), 4);
        assert_eq!(app.notifications.len(), 5);
    }
}
