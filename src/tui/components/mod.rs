//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: app name, current route, status line
//! - `TabBar`: Home / Favorites / Profile
//! - `PropertyCard`: one listing in a list
//! - `ImagePanel`: listing art or the "Image not found" placeholder
//! - `CategoryRow`: category chips on Home
//!
//! ### Stateful Screens (persistent state + transient wrapper)
//!
//! Every screen keeps an `XState` in `TuiState`, keyed by the back-stack
//! entry it belongs to, and an `X<'a>` wrapper created each frame with the
//! borrowed state plus a `ScreenContext`. States answer events with an
//! `EventResult`; anything that changes app state comes back as an `Action`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file: ScreenContext, colors, layout helpers)
//! ├── title_bar.rs
//! ├── tab_bar.rs
//! ├── text_field.rs     (single-line input)
//! ├── property_card.rs  (card + scrolling card list)
//! ├── image_panel.rs
//! ├── category_row.rs
//! ├── home.rs
//! ├── favorites.rs
//! ├── property_detail.rs
//! ├── profile.rs
//! ├── settings.rs
//! ├── edit_profile.rs
//! ├── contact_agent.rs
//! └── notifications.rs
//! ```

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::assets::AssetResolver;
use crate::core::catalog::Catalog;
use crate::core::notifications::Notification;
use crate::core::profile::UserProfile;
use crate::core::property::{Property, PropertyId};
use crate::core::route::Route;

mod category_row;
pub mod contact_agent;
pub mod edit_profile;
pub mod favorites;
pub mod home;
mod image_panel;
pub mod notifications;
pub mod profile;
pub mod property_card;
pub mod property_detail;
pub mod settings;
mod tab_bar;
pub mod text_field;
mod title_bar;

pub use category_row::CategoryRow;
pub use image_panel::ImagePanel;
pub use property_card::{CardList, CardListState, PropertyCard};
pub use tab_bar::{TAB_BAR_HEIGHT, TabBar};
pub use text_field::{FieldEvent, TextField};
pub use title_bar::TitleBar;

/// Brand blue
pub const PRIMARY: Color = Color::Rgb(0x2D, 0x5F, 0xBE);
/// Heart pink
pub const FAVORITE: Color = Color::Rgb(0xE9, 0x1E, 0x63);

pub const HEART_FILLED: &str = "♥";
pub const HEART_EMPTY: &str = "♡";

/// Read-only data every screen renders from.
pub struct ScreenContext<'a> {
    pub catalog: &'a Catalog,
    /// Latest favorites snapshot from the store subscription
    pub favorites: &'a [Property],
    pub route: &'a Route,
    pub profile: &'a UserProfile,
    pub notifications: &'a [Notification],
    pub assets: &'a dyn AssetResolver,
}

impl ScreenContext<'_> {
    pub fn is_favorite(&self, id: PropertyId) -> bool {
        self.favorites.iter().any(|p| p.id == id)
    }
}

/// Truncate a string to fit within `max_width` display cells, adding "..."
/// if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// Move a list selection by `delta`, clamped to `len`.
pub fn step_selection(selected: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    selected.saturating_add_signed(delta).min(len - 1)
}
