//! # Actions
//!
//! Everything that can happen in Estate becomes an `Action`.
//! User taps the heart on a card? That's `Action::ToggleFavorite(property)`.
//! User opens a listing? That's `Action::Navigate(Route::PropertyDetail(..))`.
//!
//! The `update()` function takes the current state and an action, applies
//! it to the store and the router, and tells the shell what to do next via
//! an `Effect`. There is no I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, warn};

use crate::core::favorites::Toggled;
use crate::core::property::Property;
use crate::core::route::{Route, RouteTemplate};
use crate::core::router::{NavOptions, Tab};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Route),
    /// Navigate through the string boundary: template plus raw parameter.
    NavigateTemplate {
        template: RouteTemplate,
        param: Option<String>,
    },
    SelectTab(Tab),
    Back,
    ToggleFavorite(Property),
    SendAgentMessage {
        agent: String,
        message: String,
    },
    /// Leave the edit-profile screen. Edits are not kept.
    SaveProfile,
    /// A menu entry with nothing behind it (help, logout).
    Unavailable(&'static str),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::Navigate(route) => {
            app.router.navigate(route, NavOptions::default());
        }
        Action::NavigateTemplate { template, param } => {
            if let Err(e) =
                app.router
                    .navigate_template(template, param.as_deref(), NavOptions::default())
            {
                app.status_message = format!("Navigation failed: {e}");
            }
        }
        Action::SelectTab(tab) => {
            app.router.navigate_to_tab(tab);
        }
        Action::Back => {
            app.router.back();
        }
        Action::ToggleFavorite(property) => {
            app.status_message = match app.favorites.toggle(&property) {
                Toggled::Added => format!("Added {} to favorites", property.title),
                Toggled::Removed => format!("Removed {} from favorites", property.title),
            };
        }
        Action::SendAgentMessage { agent, message } => {
            if message.trim().is_empty() {
                app.status_message = String::from("Type a message first");
            } else {
                app.status_message = format!("Message sent to {agent}");
            }
        }
        Action::SaveProfile => {
            app.router.back();
            app.status_message = String::from("Profile changes are not saved in this version");
        }
        Action::Unavailable(feature) => {
            warn!("{} is not available", feature);
            app.status_message = format!("{feature} is not available");
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
