//! # Router
//!
//! Owns the back-stack. The top entry is the screen on display.
//!
//! ```text
//! stack: [home#0] ── navigate(detail/2) ──▶ [home#0, detail/2#1]
//!                 ◀────── back() ──────────
//!
//! [home#0, favorites#3, detail/1#4] ── navigate_to_tab(Profile) ──▶ [home#0, profile#5]
//!                                      (favorites#3 saved for restore)
//! [home#0, profile#5] ── navigate_to_tab(Favorites) ──▶ [home#0, favorites#3]
//! ```
//!
//! Each entry carries an [`EntryId`]. Screen-local state (scroll offsets,
//! selections, form buffers) is keyed by it in the TUI, so restoring a tab's
//! saved entry id is what brings its screen state back.

use log::{debug, error};
use std::collections::HashMap;

use crate::core::route::{Route, RouteError, RouteTemplate};

/// The route every stack starts from. Never popped.
pub const START_ROUTE: Route = Route::Home;

/// Identity of one back-stack entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStackEntry {
    pub id: EntryId,
    pub route: Route,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Keep the top entry instead of pushing when the target equals it.
    pub single_top: bool,
}

impl NavOptions {
    pub fn single_top() -> Self {
        Self { single_top: true }
    }
}

/// Primary destinations shown in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Home,
    Favorites,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Favorites, Tab::Profile];

    pub fn route(self) -> Route {
        match self {
            Tab::Home => Route::Home,
            Tab::Favorites => Route::Favorites,
            Tab::Profile => Route::Profile,
        }
    }

    pub fn template(self) -> RouteTemplate {
        self.route().template()
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Favorites => "Favorites",
            Tab::Profile => "Profile",
        }
    }

    /// Tab to highlight for a route. Compares the route's template pattern
    /// against each tab's pattern, so parameterized and secondary screens
    /// highlight nothing.
    pub fn for_route(route: &Route) -> Option<Tab> {
        let pattern = route.template().pattern();
        Self::ALL
            .into_iter()
            .find(|tab| tab.template().pattern() == pattern)
    }

    /// Parse a tab name as used in config and CLI flags.
    pub fn from_name(name: &str) -> Option<Tab> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.template().pattern().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Debug)]
pub struct Router {
    stack: Vec<BackStackEntry>,
    /// Tab entries popped by a tab switch, kept so re-selecting the tab
    /// restores its state instead of recreating it.
    saved_tabs: HashMap<Tab, EntryId>,
    next_id: u64,
}

impl Router {
    pub fn new() -> Self {
        let mut router = Self {
            stack: Vec::new(),
            saved_tabs: HashMap::new(),
            next_id: 0,
        };
        let id = router.allocate();
        router.stack.push(BackStackEntry {
            id,
            route: START_ROUTE,
        });
        router
    }

    fn allocate(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn current(&self) -> &Route {
        &self.current_entry().route
    }

    pub fn current_entry(&self) -> &BackStackEntry {
        // The start entry is never popped
        &self.stack[self.stack.len() - 1]
    }

    pub fn entries(&self) -> &[BackStackEntry] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether state for this entry may still be shown again: it is on the
    /// stack or saved for a tab.
    pub fn is_live(&self, id: EntryId) -> bool {
        self.stack.iter().any(|e| e.id == id) || self.saved_tabs.values().any(|saved| *saved == id)
    }

    pub fn active_tab(&self) -> Option<Tab> {
        Tab::for_route(self.current())
    }

    /// Push `route`. With `single_top` set and the top already showing the
    /// same route, the top entry is kept as is.
    pub fn navigate(&mut self, route: Route, options: NavOptions) {
        if options.single_top && *self.current() == route {
            debug!(
                "Navigate (single-top): {} already on top as {:?}",
                route,
                self.current_entry().id
            );
            return;
        }
        let id = self.allocate();
        debug!("Navigate: {} as {:?} (depth {})", route, id, self.stack.len() + 1);
        self.stack.push(BackStackEntry { id, route });
    }

    /// String-boundary navigation: bind `template` with `param`, then navigate.
    ///
    /// Navigating to a parameterized template without a value is a programmer
    /// error. Debug builds assert; release builds log and return the error.
    pub fn navigate_template(
        &mut self,
        template: RouteTemplate,
        param: Option<&str>,
        options: NavOptions,
    ) -> Result<(), RouteError> {
        let route = match template.bind(param) {
            Ok(route) => route,
            Err(e) => {
                error!("Rejected navigation to {}: {}", template, e);
                debug_assert!(
                    !matches!(e, RouteError::MissingParameter { .. }),
                    "missing route parameter: {e}"
                );
                return Err(e);
            }
        };
        self.navigate(route, options);
        Ok(())
    }

    /// Primary navigation. Pops everything above the start entry (saving the
    /// tab entry being left), then shows `tab`, restoring its saved entry if
    /// it has one. Tab switches never grow the stack past start + tab.
    pub fn navigate_to_tab(&mut self, tab: Tab) {
        let target = tab.route();

        if self.is_tab_root(&target) {
            debug!("Tab {:?} already shown", tab);
            return;
        }

        // A tab route pushed from elsewhere is saved here and restored below
        self.pop_to_start();

        if self.current() == &target {
            // Home tab is the start entry itself
            debug!("Tab {:?} is the start route (depth {})", tab, self.depth());
            return;
        }

        let id = match self.saved_tabs.remove(&tab) {
            Some(saved) => {
                debug!("Restoring tab {:?} as {:?}", tab, saved);
                saved
            }
            None => self.allocate(),
        };
        self.stack.push(BackStackEntry { id, route: target });
        debug!("Tab {:?} shown (depth {})", tab, self.depth());
    }

    /// Whether the stack is exactly `[start]` or `[start, target]`.
    fn is_tab_root(&self, target: &Route) -> bool {
        match self.stack.as_slice() {
            [only] => only.route == *target,
            [_, top] => *target != START_ROUTE && top.route == *target,
            _ => false,
        }
    }

    fn pop_to_start(&mut self) {
        while self.stack.len() > 1 {
            if let Some(entry) = self.stack.pop()
                && let Some(tab) = Tab::for_route(&entry.route)
                && tab.route() != START_ROUTE
            {
                // Deeper pops come first, so the entry nearest the start wins
                self.saved_tabs.insert(tab, entry.id);
            }
        }
    }

    /// Pop the top entry. Returns `false` without changing anything when only
    /// the start entry remains.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            debug!("Back at start route, nothing to pop");
            return false;
        }
        if let Some(popped) = self.stack.pop() {
            debug!("Back: left {}, now at {}", popped.route, self.current());
        }
        true
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::property::PropertyId;
    use crate::core::route::PropertyRef;

    fn detail(raw: u32) -> Route {
        Route::property_detail(PropertyId::new(raw).unwrap())
    }

    #[test]
    fn test_starts_at_home() {
        let router = Router::new();
        assert_eq!(router.current(), &Route::Home);
        assert_eq!(router.depth(), 1);
        assert_eq!(router.active_tab(), Some(Tab::Home));
    }

    #[test]
    fn test_navigate_pushes() {
        let mut router = Router::new();
        router.navigate(detail(2), NavOptions::default());
        router.navigate(detail(2), NavOptions::default());
        assert_eq!(router.depth(), 3);
        assert_eq!(router.current(), &detail(2));
    }

    #[test]
    fn test_single_top_keeps_top_entry() {
        let mut router = Router::new();
        router.navigate(Route::Notifications, NavOptions::default());
        let before = router.current_entry().id;

        router.navigate(Route::Notifications, NavOptions::single_top());
        assert_eq!(router.depth(), 2);
        // Same entry, so its screen state survives
        assert_eq!(router.current_entry().id, before);
        assert!(router.is_live(before));

        router.navigate(Route::Settings, NavOptions::single_top());
        assert_eq!(router.depth(), 3);
    }

    #[test]
    fn test_back_returns_to_prior_route_with_params() {
        let mut router = Router::new();
        router.navigate(Route::contact_agent(PropertyId::new(4).unwrap()), NavOptions::default());
        let prior = router.current_entry().clone();

        router
            .navigate_template(RouteTemplate::PropertyDetail, Some("2"), NavOptions::default())
            .unwrap();
        assert_eq!(router.current().path(), "property_detail/2");

        assert!(router.back());
        assert_eq!(router.current_entry(), &prior);
        assert_eq!(router.current().path(), "contact_agent/4");
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let mut router = Router::new();
        assert!(!router.back());
        assert_eq!(router.depth(), 1);
        assert_eq!(router.current(), &Route::Home);
    }

    #[test]
    fn test_malformed_param_still_navigates() {
        let mut router = Router::new();
        router
            .navigate_template(RouteTemplate::PropertyDetail, Some("abc"), NavOptions::default())
            .unwrap();
        assert_eq!(
            router.current(),
            &Route::PropertyDetail(PropertyRef::Malformed("abc".to_string()))
        );
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "missing route parameter"))]
    fn test_missing_param_is_programmer_error() {
        let mut router = Router::new();
        let result =
            router.navigate_template(RouteTemplate::PropertyDetail, None, NavOptions::default());
        // Release builds: rejected, stack untouched
        assert!(matches!(result, Err(RouteError::MissingParameter { .. })));
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_unexpected_param_rejected() {
        let mut router = Router::new();
        let result =
            router.navigate_template(RouteTemplate::Settings, Some("1"), NavOptions::default());
        assert!(matches!(result, Err(RouteError::UnexpectedParameter { .. })));
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_tab_switches_stay_bounded() {
        let mut router = Router::new();
        for _ in 0..10 {
            router.navigate_to_tab(Tab::Home);
            assert!(router.depth() <= 2);
            router.navigate_to_tab(Tab::Favorites);
            assert!(router.depth() <= 2);
            router.navigate_to_tab(Tab::Profile);
            assert!(router.depth() <= 2);
        }
        router.navigate_to_tab(Tab::Home);
        assert_eq!(router.depth(), 1);
        assert_eq!(router.current(), &Route::Home);
    }

    #[test]
    fn test_tab_switch_pops_detail_screens() {
        let mut router = Router::new();
        router.navigate_to_tab(Tab::Favorites);
        router.navigate(detail(1), NavOptions::default());
        router.navigate(Route::contact_agent(PropertyId::new(1).unwrap()), NavOptions::default());
        assert_eq!(router.depth(), 4);

        router.navigate_to_tab(Tab::Profile);
        let routes: Vec<&Route> = router.entries().iter().map(|e| &e.route).collect();
        assert_eq!(routes, vec![&Route::Home, &Route::Profile]);
    }

    #[test]
    fn test_reselecting_tab_restores_entry() {
        let mut router = Router::new();
        router.navigate_to_tab(Tab::Favorites);
        let favorites_entry = router.current_entry().id;

        router.navigate_to_tab(Tab::Profile);
        assert!(router.is_live(favorites_entry));

        router.navigate_to_tab(Tab::Favorites);
        assert_eq!(router.current_entry().id, favorites_entry);
    }

    #[test]
    fn test_reselecting_current_tab_keeps_entry() {
        let mut router = Router::new();
        router.navigate_to_tab(Tab::Profile);
        let entry = router.current_entry().id;
        router.navigate_to_tab(Tab::Profile);
        assert_eq!(router.current_entry().id, entry);
        assert_eq!(router.depth(), 2);
    }

    #[test]
    fn test_tab_pushed_from_profile_pops_to_start() {
        let mut router = Router::new();
        router.navigate_to_tab(Tab::Profile);
        // Profile's "My Favorites" option
        router.navigate(Route::Favorites, NavOptions::default());
        let pushed = router.current_entry().id;

        router.navigate_to_tab(Tab::Favorites);
        let routes: Vec<&Route> = router.entries().iter().map(|e| &e.route).collect();
        assert_eq!(routes, vec![&Route::Home, &Route::Favorites]);
        assert_eq!(router.current_entry().id, pushed);

        assert!(router.back());
        assert_eq!(router.current(), &Route::Home);
    }

    #[test]
    fn test_home_tab_from_nested_home_pops_to_start() {
        let mut router = Router::new();
        let start = router.current_entry().id;
        router.navigate(detail(1), NavOptions::default());
        router.navigate(Route::Home, NavOptions::default());

        router.navigate_to_tab(Tab::Home);
        assert_eq!(router.depth(), 1);
        assert_eq!(router.current_entry().id, start);
    }

    #[test]
    fn test_popped_entries_are_not_live() {
        let mut router = Router::new();
        router.navigate(detail(3), NavOptions::default());
        let entry = router.current_entry().id;
        router.back();
        assert!(!router.is_live(entry));
    }

    #[test]
    fn test_active_tab_uses_template_match() {
        let mut router = Router::new();
        router.navigate_to_tab(Tab::Favorites);
        assert_eq!(router.active_tab(), Some(Tab::Favorites));
        router.navigate(detail(1), NavOptions::default());
        assert_eq!(router.active_tab(), None);
        router.navigate(Route::Settings, NavOptions::default());
        assert_eq!(router.active_tab(), None);
    }

    #[test]
    fn test_tab_from_name() {
        assert_eq!(Tab::from_name("favorites"), Some(Tab::Favorites));
        assert_eq!(Tab::from_name(" Profile "), Some(Tab::Profile));
        assert_eq!(Tab::from_name("settings"), None);
    }
}
