use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::assets::AssetResolver;
use crate::core::property::Property;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ScreenContext, TAB_BAR_HEIGHT, TabBar, TitleBar};
use crate::tui::screen::ScreenState;

/// Borrow what screens read from `App` and the TUI state.
pub fn screen_context<'a>(
    app: &'a App,
    favorites: &'a [Property],
    assets: &'a dyn AssetResolver,
) -> ScreenContext<'a> {
    ScreenContext {
        catalog: app.catalog.as_ref(),
        favorites,
        route: app.router.current(),
        profile: &app.profile,
        notifications: &app.notifications,
        assets,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(TAB_BAR_HEIGHT)]);
    let [title_area, main_area, tab_area] = layout.areas(frame.area());

    TitleBar::new(app.router.current().path(), app.status_message.clone())
        .render(frame, title_area);

    let [_, screen_area, _] =
        Layout::horizontal([Length(1), Min(0), Length(1)]).areas(main_area);
    let entry = app.router.current_entry();
    let TuiState {
        screens,
        favorites,
        assets,
    } = tui;
    let ctx = screen_context(app, favorites, &**assets);
    screens
        .entry(entry.id)
        .or_insert_with(|| ScreenState::for_route(&entry.route, &app.profile))
        .render(frame, screen_area, &ctx);

    TabBar::new(app.router.active_tab()).render(frame, tab_area);
}
