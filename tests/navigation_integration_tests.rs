use std::sync::Arc;

use estate::core::action::{Action, Effect, update};
use estate::core::catalog::Catalog;
use estate::core::favorites::FavoritesStore;
use estate::core::property::{Property, PropertyId};
use estate::core::route::{PropertyRef, Route, RouteError, RouteTemplate};
use estate::core::router::{NavOptions, Router, Tab};
use estate::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

fn id(raw: u32) -> PropertyId {
    PropertyId::new(raw).unwrap()
}

fn listing(catalog: &Catalog, raw: u32) -> Property {
    catalog.lookup_by_id(id(raw)).cloned().unwrap()
}

fn ids(favorites: &[Property]) -> Vec<u32> {
    favorites.iter().map(|p| p.id.get()).collect()
}

// ============================================================================
// Favorites Store
// ============================================================================

#[test]
fn test_double_toggle_restores_membership() {
    let catalog = Catalog::seeded();
    let store = FavoritesStore::new();
    for raw in 1..=4 {
        let property = listing(&catalog, raw);
        store.toggle(&property);
        assert!(store.is_favorite(property.id));

        // A same-id copy with different fields still removes it
        let mut copy = property.clone();
        copy.price += 1;
        store.toggle(&copy);
        assert!(!store.is_favorite(property.id));
    }
    assert!(store.is_empty());
}

#[test]
fn test_insertion_order_after_readd() {
    let catalog = Catalog::seeded();
    let store = FavoritesStore::new();
    let a = listing(&catalog, 1);
    let b = listing(&catalog, 2);

    store.toggle(&a);
    store.toggle(&b);
    store.toggle(&a);
    store.toggle(&a);
    assert_eq!(ids(&store.favorites()), vec![2, 1]);
}

#[test]
fn test_cloned_handles_share_one_set() {
    let catalog = Catalog::seeded();
    let store = FavoritesStore::new();
    let detail_handle = store.clone();

    detail_handle.toggle(&listing(&catalog, 1));
    assert_eq!(ids(&store.favorites()), vec![1]);
    store.toggle(&listing(&catalog, 1));
    assert!(detail_handle.favorites().is_empty());
}

#[tokio::test]
async fn test_subscriber_wakes_on_toggle() {
    let store = FavoritesStore::new();
    let mut sub = store.subscribe();
    let writer = store.clone();
    let villa = listing(&Catalog::seeded(), 1);

    let task = tokio::spawn(async move {
        writer.toggle(&villa);
    });

    assert!(sub.changed().await);
    assert_eq!(ids(&sub.snapshot()), vec![1]);
    assert!(!sub.has_changed());
    task.await.unwrap();
}

#[tokio::test]
async fn test_changed_reports_closed_store() {
    let store = FavoritesStore::new();
    let mut sub = store.subscribe();
    drop(store);
    assert!(!sub.changed().await);
}

// ============================================================================
// Router
// ============================================================================

#[test]
fn test_repeated_tab_switches_stay_shallow() {
    let mut router = Router::new();
    for _ in 0..10 {
        router.navigate_to_tab(Tab::Home);
        assert_eq!(router.depth(), 1);
        router.navigate_to_tab(Tab::Favorites);
        assert_eq!(router.depth(), 2);
        router.navigate_to_tab(Tab::Profile);
        assert!(router.depth() <= 2);
    }
    router.navigate_to_tab(Tab::Home);
    assert_eq!(router.current(), &Route::Home);
}

#[test]
fn test_tab_reselect_pops_pushed_tab_route() {
    let mut router = Router::new();
    router.navigate_to_tab(Tab::Profile);
    router.navigate(Route::Favorites, NavOptions::default());
    router.navigate_to_tab(Tab::Favorites);

    let paths: Vec<String> = router.entries().iter().map(|e| e.route.path()).collect();
    assert_eq!(paths, vec!["home", "favorites"]);
    assert!(router.back());
    assert_eq!(router.current(), &Route::Home);
}

#[test]
fn test_single_top_keeps_entry() {
    let mut router = Router::new();
    router.navigate(Route::Settings, NavOptions::default());
    let entry = router.current_entry().clone();
    router.navigate(Route::Settings, NavOptions::single_top());
    assert_eq!(router.current_entry(), &entry);
    assert_eq!(router.depth(), 2);
}

#[test]
fn test_detail_then_back_keeps_prior_route() {
    let mut router = Router::new();
    router.navigate_to_tab(Tab::Favorites);
    let before = router.current_entry().clone();

    router.navigate(Route::property_detail(id(2)), NavOptions::default());
    assert_eq!(router.current().path(), "property_detail/2");
    assert_eq!(router.active_tab(), None);

    assert!(router.back());
    assert_eq!(router.current_entry(), &before);
    assert_eq!(router.active_tab(), Some(Tab::Favorites));
}

#[test]
fn test_missing_parameter_is_rejected() {
    assert_eq!(
        RouteTemplate::PropertyDetail.bind(None),
        Err(RouteError::MissingParameter {
            template: "property_detail/{propertyId}"
        })
    );
    assert!(RouteTemplate::ContactAgent.bind(None).is_err());
}

#[test]
fn test_path_strings_round_trip() {
    for path in ["home", "favorites", "property_detail/3", "contact_agent/abc"] {
        let route: Route = path.parse().unwrap();
        assert_eq!(route.path(), path);
    }
    assert!(matches!(
        "nowhere".parse::<Route>(),
        Err(RouteError::UnknownRoute(_))
    ));
}

// ============================================================================
// App + Reducer
// ============================================================================

#[test]
fn test_unknown_listing_then_back() {
    let mut app = App::new(Arc::new(Catalog::seeded()), FavoritesStore::new());
    update(&mut app, Action::SelectTab(Tab::Favorites));
    update(
        &mut app,
        Action::NavigateTemplate {
            template: RouteTemplate::PropertyDetail,
            param: Some("5".to_string()),
        },
    );

    let property = app.router.current().property().cloned().unwrap();
    assert_eq!(property, PropertyRef::Id(id(5)));
    assert!(app.catalog.resolve(&property).is_none());

    assert_eq!(update(&mut app, Action::Back), Effect::None);
    assert_eq!(app.router.current(), &Route::Favorites);
}

#[test]
fn test_toggle_from_detail_visible_to_every_subscriber() {
    let mut app = App::new(Arc::new(Catalog::seeded()), FavoritesStore::new());
    let mut home = app.favorites.subscribe();
    let mut favorites_tab = app.favorites.subscribe();

    let villa = listing(&app.catalog, 1);
    update(&mut app, Action::Navigate(Route::property_detail(villa.id)));
    update(&mut app, Action::ToggleFavorite(villa.clone()));
    assert_eq!(ids(&home.snapshot()), vec![1]);
    assert_eq!(ids(&favorites_tab.snapshot()), vec![1]);

    update(&mut app, Action::ToggleFavorite(villa));
    assert!(home.has_changed());
    assert!(home.snapshot().is_empty());
    assert!(favorites_tab.snapshot().is_empty());
}
