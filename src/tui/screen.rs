//! # Screen Host
//!
//! One `ScreenState` per back-stack entry. The variant is chosen from the
//! entry's route when the entry is first shown, and the state then lives
//! until the entry leaves the stack, so returning to a tab restores its
//! search text, selection and scroll.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::profile::UserProfile;
use crate::core::route::Route;
use crate::tui::component::{Component, EventResult};
use crate::tui::components::ScreenContext;
use crate::tui::components::contact_agent::{ContactAgentScreen, ContactAgentState};
use crate::tui::components::edit_profile::{EditProfileScreen, EditProfileState};
use crate::tui::components::favorites::{FavoritesScreen, FavoritesState};
use crate::tui::components::home::{HomeScreen, HomeState};
use crate::tui::components::notifications::{NotificationsScreen, NotificationsState};
use crate::tui::components::profile::{ProfileScreen, ProfileState};
use crate::tui::components::property_detail::{DetailScreen, DetailState};
use crate::tui::components::settings::{SettingsScreen, SettingsState};
use crate::tui::event::TuiEvent;

pub enum ScreenState {
    Home(HomeState),
    Favorites(FavoritesState),
    Detail(DetailState),
    Profile(ProfileState),
    Settings(SettingsState),
    EditProfile(EditProfileState),
    ContactAgent(ContactAgentState),
    Notifications(NotificationsState),
}

impl ScreenState {
    /// Fresh state for the screen that `route` selects.
    pub fn for_route(route: &Route, profile: &UserProfile) -> Self {
        match route {
            Route::Home => ScreenState::Home(HomeState::new()),
            Route::Favorites => ScreenState::Favorites(FavoritesState::default()),
            Route::Profile => ScreenState::Profile(ProfileState::default()),
            Route::PropertyDetail(_) => ScreenState::Detail(DetailState::default()),
            Route::ContactAgent(_) => ScreenState::ContactAgent(ContactAgentState::default()),
            Route::Settings => ScreenState::Settings(SettingsState::default()),
            Route::EditProfile => ScreenState::EditProfile(EditProfileState::new(profile)),
            Route::Notifications => ScreenState::Notifications(NotificationsState::default()),
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, ctx: &ScreenContext) -> EventResult {
        match self {
            ScreenState::Home(s) => s.handle_event(event, ctx),
            ScreenState::Favorites(s) => s.handle_event(event, ctx),
            ScreenState::Detail(s) => s.handle_event(event, ctx),
            ScreenState::Profile(s) => s.handle_event(event, ctx),
            ScreenState::Settings(s) => s.handle_event(event),
            ScreenState::EditProfile(s) => s.handle_event(event),
            ScreenState::ContactAgent(s) => s.handle_event(event, ctx),
            ScreenState::Notifications(s) => s.handle_event(event, ctx),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) {
        match self {
            ScreenState::Home(s) => HomeScreen::new(s, ctx).render(frame, area),
            ScreenState::Favorites(s) => FavoritesScreen::new(s, ctx).render(frame, area),
            ScreenState::Detail(s) => DetailScreen::new(s, ctx).render(frame, area),
            ScreenState::Profile(s) => ProfileScreen::new(s, ctx).render(frame, area),
            ScreenState::Settings(s) => SettingsScreen::new(s).render(frame, area),
            ScreenState::EditProfile(s) => EditProfileScreen::new(s).render(frame, area),
            ScreenState::ContactAgent(s) => ContactAgentScreen::new(s, ctx).render(frame, area),
            ScreenState::Notifications(s) => NotificationsScreen::new(s, ctx).render(frame, area),
        }
    }
}
