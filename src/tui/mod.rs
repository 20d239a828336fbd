//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ─▶ TuiEvent ─┬─ Ctrl+C / F1-F3 ─────────────▶ Action
//!                        └─ ScreenState::handle_event ─┬─ Dispatch(action) ─▶ Action
//!                                                      ├─ Consumed
//!                                                      └─ Ignored ─▶ Esc = Back, q = Quit
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms in `poll` and only redraws
//! after input, a resize, or a favorites change picked up from the store
//! subscription.

mod component;
pub(crate) mod components;
mod event;
mod screen;
mod ui;

use log::{debug, info};
use std::collections::HashMap;
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::assets::{AssetResolver, LayeredAssets};
use crate::core::config::ResolvedConfig;
use crate::core::favorites::FavoritesSubscription;
use crate::core::property::Property;
use crate::core::router::{EntryId, Router};
use crate::core::state::App;
use crate::tui::component::EventResult;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screen::ScreenState;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Screen state per back-stack entry
    pub screens: HashMap<EntryId, ScreenState>,
    /// Latest favorites snapshot; every screen renders from this copy
    pub favorites: Vec<Property>,
    pub assets: Box<dyn AssetResolver>,
}

impl TuiState {
    pub fn new(assets: Box<dyn AssetResolver>) -> Self {
        Self {
            screens: HashMap::new(),
            favorites: Vec::new(),
            assets,
        }
    }

    /// Drop state for entries the router can no longer show.
    pub fn prune(&mut self, router: &Router) {
        let before = self.screens.len();
        self.screens.retain(|id, _| router.is_live(*id));
        if self.screens.len() != before {
            debug!("Dropped {} screen state(s)", before - self.screens.len());
        }
    }

    /// Take a new snapshot if the store changed. Returns whether it did.
    pub fn sync_favorites(&mut self, subscription: &mut FavoritesSubscription) -> bool {
        if !subscription.has_changed() {
            return false;
        }
        self.favorites = subscription.snapshot();
        debug!("Favorites snapshot: {} listing(s)", self.favorites.len());
        true
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Hand an event to the screen on top of the back-stack.
fn dispatch_to_screen(app: &App, tui: &mut TuiState, event: &TuiEvent) -> EventResult {
    let entry = app.router.current_entry();
    let TuiState {
        screens,
        favorites,
        assets,
    } = tui;
    let ctx = ui::screen_context(app, favorites, &**assets);
    screens
        .entry(entry.id)
        .or_insert_with(|| ScreenState::for_route(&entry.route, &app.profile))
        .handle_event(event, &ctx)
}

/// Keys the shell owns once the screen has passed on them.
fn global_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Escape => Some(Action::Back),
        TuiEvent::InputChar('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Map one event to the action it triggers, if any.
fn action_for(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => None,
        // Ctrl+C always quits, even inside a text field
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::SelectTab(tab) => Some(Action::SelectTab(tab)),
        event => match dispatch_to_screen(app, tui, &event) {
            EventResult::Dispatch(action) => Some(action),
            EventResult::Consumed => None,
            EventResult::Ignored => global_action(&event),
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    app.router.navigate_to_tab(config.start_tab);
    let mut favorites = app.favorites.subscribe();
    let mut tui = TuiState::new(Box::new(LayeredAssets::with_override(
        config.assets_dir.clone(),
    )));
    tui.favorites = favorites.snapshot();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    info!("Started on {}", app.router.current());

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = action_for(&app, &mut tui, event) else {
                continue;
            };
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
                break;
            }
            tui.prune(&app.router);
            // Later events in this batch must see the toggle
            tui.sync_favorites(&mut favorites);
        }

        if should_quit {
            break;
        }

        if tui.sync_favorites(&mut favorites) {
            needs_redraw = true;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::EmbeddedAssets;
    use crate::core::property::PropertyId;
    use crate::core::route::Route;
    use crate::core::router::Tab;
    use crate::test_support::test_app;

    /// Feed events through the same path as the event loop.
    fn press(app: &mut App, tui: &mut TuiState, sub: &mut FavoritesSubscription, event: TuiEvent) {
        if let Some(action) = action_for(app, tui, event) {
            update(app, action);
            tui.prune(&app.router);
            tui.sync_favorites(sub);
        }
    }

    fn type_text(app: &mut App, tui: &mut TuiState, sub: &mut FavoritesSubscription, text: &str) {
        for c in text.chars() {
            press(app, tui, sub, TuiEvent::InputChar(c));
        }
    }

    fn setup() -> (App, TuiState, FavoritesSubscription) {
        let app = test_app();
        let sub = app.favorites.subscribe();
        (app, TuiState::new(Box::new(EmbeddedAssets)), sub)
    }

    #[test]
    fn test_open_detail_and_favorite_from_home() {
        let (mut app, mut tui, mut sub) = setup();
        press(&mut app, &mut tui, &mut sub, TuiEvent::Submit);
        assert_eq!(
            app.router.current(),
            &Route::property_detail(PropertyId::new(1).unwrap())
        );

        press(&mut app, &mut tui, &mut sub, TuiEvent::InputChar('f'));
        assert!(app.favorites.is_favorite(PropertyId::new(1).unwrap()));
        assert_eq!(tui.favorites.len(), 1);

        press(&mut app, &mut tui, &mut sub, TuiEvent::Escape);
        assert_eq!(app.router.current(), &Route::Home);
        // Detail entry left the stack, so its state is gone
        assert_eq!(tui.screens.len(), 1);
    }

    #[test]
    fn test_q_types_into_search_but_quits_elsewhere() {
        let (mut app, mut tui, mut sub) = setup();
        press(&mut app, &mut tui, &mut sub, TuiEvent::InputChar('/'));
        assert_eq!(action_for(&app, &mut tui, TuiEvent::InputChar('q')), None);

        press(&mut app, &mut tui, &mut sub, TuiEvent::Escape);
        assert_eq!(
            action_for(&app, &mut tui, TuiEvent::InputChar('q')),
            Some(Action::Quit)
        );
        assert_eq!(action_for(&app, &mut tui, TuiEvent::ForceQuit), Some(Action::Quit));
    }

    #[test]
    fn test_tab_switch_restores_search() {
        let (mut app, mut tui, mut sub) = setup();
        press(&mut app, &mut tui, &mut sub, TuiEvent::SelectTab(Tab::Favorites));
        press(&mut app, &mut tui, &mut sub, TuiEvent::SelectTab(Tab::Home));
        press(&mut app, &mut tui, &mut sub, TuiEvent::InputChar('/'));
        type_text(&mut app, &mut tui, &mut sub, "villa");

        press(&mut app, &mut tui, &mut sub, TuiEvent::SelectTab(Tab::Profile));
        press(&mut app, &mut tui, &mut sub, TuiEvent::SelectTab(Tab::Home));

        let entry = app.router.current_entry().id;
        match tui.screens.get(&entry) {
            Some(ScreenState::Home(home)) => assert_eq!(home.search.text(), "villa"),
            _ => panic!("home state missing"),
        }
    }

    #[test]
    fn test_favorites_tab_state_survives_switch() {
        let (mut app, mut tui, mut sub) = setup();
        for id in [1, 2] {
            app.favorites
                .toggle(&app.catalog.all()[id - 1].clone());
        }
        tui.sync_favorites(&mut sub);

        press(&mut app, &mut tui, &mut sub, TuiEvent::SelectTab(Tab::Favorites));
        press(&mut app, &mut tui, &mut sub, TuiEvent::CursorDown);
        let favorites_entry = app.router.current_entry().id;

        press(&mut app, &mut tui, &mut sub, TuiEvent::SelectTab(Tab::Profile));
        assert!(tui.screens.contains_key(&favorites_entry));
        press(&mut app, &mut tui, &mut sub, TuiEvent::SelectTab(Tab::Favorites));
        assert_eq!(app.router.current_entry().id, favorites_entry);
        match tui.screens.get(&favorites_entry) {
            Some(ScreenState::Favorites(state)) => assert_eq!(state.list.selected, 1),
            _ => panic!("favorites state missing"),
        }
    }

    #[test]
    fn test_favorites_tab_after_profile_shortcut_backs_to_home() {
        let (mut app, mut tui, mut sub) = setup();
        press(&mut app, &mut tui, &mut sub, TuiEvent::SelectTab(Tab::Profile));
        press(&mut app, &mut tui, &mut sub, TuiEvent::CursorDown);
        press(&mut app, &mut tui, &mut sub, TuiEvent::CursorDown);
        press(&mut app, &mut tui, &mut sub, TuiEvent::Submit);
        assert_eq!(app.router.current(), &Route::Favorites);
        assert_eq!(app.router.depth(), 3);

        press(&mut app, &mut tui, &mut sub, TuiEvent::SelectTab(Tab::Favorites));
        assert_eq!(app.router.depth(), 2);
        press(&mut app, &mut tui, &mut sub, TuiEvent::Escape);
        assert_eq!(app.router.current(), &Route::Home);
    }

    #[test]
    fn test_unfavorite_from_favorites_updates_snapshot_in_batch() {
        let (mut app, mut tui, mut sub) = setup();
        app.favorites.toggle(&app.catalog.all()[0].clone());
        tui.sync_favorites(&mut sub);
        press(&mut app, &mut tui, &mut sub, TuiEvent::SelectTab(Tab::Favorites));

        press(&mut app, &mut tui, &mut sub, TuiEvent::InputChar('f'));
        assert!(tui.favorites.is_empty());
        // Nothing left to toggle; the second press must not re-add
        press(&mut app, &mut tui, &mut sub, TuiEvent::InputChar('f'));
        assert!(app.favorites.is_empty());
    }

    #[test]
    fn test_contact_agent_flow() {
        let (mut app, mut tui, mut sub) = setup();
        app.router
            .navigate(Route::property_detail(PropertyId::new(3).unwrap()), Default::default());
        press(&mut app, &mut tui, &mut sub, TuiEvent::InputChar('c'));
        assert_eq!(
            app.router.current(),
            &Route::contact_agent(PropertyId::new(3).unwrap())
        );

        type_text(&mut app, &mut tui, &mut sub, "quick question");
        assert_eq!(app.router.current().path(), "contact_agent/3");
        press(&mut app, &mut tui, &mut sub, TuiEvent::Submit);
        assert_eq!(app.status_message, "Message sent to Bob Johnson");

        press(&mut app, &mut tui, &mut sub, TuiEvent::Escape);
        press(&mut app, &mut tui, &mut sub, TuiEvent::Escape);
        assert_eq!(app.router.current(), &Route::Home);
    }
}
