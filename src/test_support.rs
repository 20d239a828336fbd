//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::backend::TestBackend;
use ratatui::{Frame, Terminal};
use std::sync::Arc;

use crate::core::assets::EmbeddedAssets;
use crate::core::catalog::Catalog;
use crate::core::favorites::FavoritesStore;
use crate::core::notifications;
use crate::core::profile::UserProfile;
use crate::core::property::{Property, PropertyId};
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::components::ScreenContext;

/// Creates a test App over the seeded catalog with an empty store.
pub fn test_app() -> App {
    App::new(Arc::new(Catalog::seeded()), FavoritesStore::new())
}

/// A listing with the given id. Ids 1-4 match the seeded catalog.
pub fn sample_property(id: u32) -> Property {
    Catalog::seeded()
        .lookup_by_id(PropertyId::new(id).unwrap())
        .cloned()
        .unwrap_or_else(|| Property {
            id: PropertyId::new(id).unwrap(),
            title: format!("Listing {id}"),
            address: format!("{id} Test Lane, Nowhere"),
            price: 100_000 + id,
            beds: 2,
            baths: 1,
            area: 900,
            image_name: format!("pic_{id}"),
            is_garage: false,
        })
}

/// Runs `f` with a screen context over the seeded catalog, default profile,
/// seeded notifications and the embedded assets.
pub fn with_screen_context<R>(
    route: &Route,
    favorites: &[Property],
    f: impl FnOnce(&ScreenContext) -> R,
) -> R {
    let catalog = Catalog::seeded();
    let profile = UserProfile::default();
    let notifications = notifications::seeded();
    let ctx = ScreenContext {
        catalog: &catalog,
        favorites,
        route,
        profile: &profile,
        notifications: &notifications,
        assets: &EmbeddedAssets,
    };
    f(&ctx)
}

/// Draws with `draw` on a `width`x`height` test terminal and returns every
/// cell's symbol, row by row.
pub fn render_to_text(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
