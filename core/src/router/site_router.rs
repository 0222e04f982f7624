//! Router root container
//!
//! [`SiteRouter`] is created once at the application root. It owns the
//! navigation store, the signal bus, the history bridge and the page
//! selector, and hands out [`Navigator`]s to whoever renders links.

use super::bridge::HistoryBridge;
use super::history::{History, ScrollBehavior, SharedHistory, SharedViewport};
use super::route::RoutePath;
use super::selector::{PageSelector, Selection};
use super::signal::{Navigator, Signal, SignalBus};
use super::store::{NavigationStore, SubscriptionId};
use std::sync::PoisonError;
use tracing::debug;

/// Options for building a [`SiteRouter`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterOptions {
    /// Behavior of the scroll reset after each navigation
    pub scroll: ScrollBehavior,
}

/// Navigation state, history synchronization and page selection
pub struct SiteRouter<R> {
    store: NavigationStore,
    bus: SignalBus,
    history: SharedHistory,
    bridge: Option<HistoryBridge>,
    selector: PageSelector<R>,
}

impl<R> SiteRouter<R> {
    /// Build a router whose initial path is the history's current location
    pub fn new(
        history: SharedHistory,
        viewport: SharedViewport,
        selector: PageSelector<R>,
        options: RouterOptions,
    ) -> Self {
        let initial = {
            let guard = history.lock().unwrap_or_else(PoisonError::into_inner);
            RoutePath::from_location(guard.location().as_str())
        };
        debug!(%initial, "Starting router");

        let store = NavigationStore::new(initial);
        let bus = SignalBus::new();
        let bridge = HistoryBridge::attach(&bus, &store, history.clone(), viewport, options.scroll);

        Self {
            store,
            bus,
            history,
            bridge: Some(bridge),
            selector,
        }
    }

    /// Handle for emitting navigation requests
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.bus.clone())
    }

    /// The bus the router listens on
    pub fn bus(&self) -> &SignalBus {
        &self.bus
    }

    /// The navigation store
    pub fn store(&self) -> &NavigationStore {
        &self.store
    }

    /// Current path
    pub fn current_path(&self) -> RoutePath {
        self.store.current()
    }

    /// Request navigation to `path`
    pub fn navigate(&self, path: impl Into<RoutePath>) {
        self.navigator().navigate(path);
    }

    /// Move the environment one entry back and signal `popstate`
    pub fn back(&self) -> bool {
        self.traverse(|history| history.back())
    }

    /// Move the environment one entry forward and signal `popstate`
    pub fn forward(&self) -> bool {
        self.traverse(|history| history.forward())
    }

    fn traverse(&self, step: impl FnOnce(&mut (dyn History + Send)) -> bool) -> bool {
        let moved = {
            let mut guard = self.history.lock().unwrap_or_else(PoisonError::into_inner);
            step(&mut *guard)
        };
        if moved {
            self.bus.dispatch(Signal::PopState);
        }
        moved
    }

    /// Number of entries in the session history
    pub fn history_len(&self) -> usize {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Register a subscriber for path changes
    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&RoutePath) + Send + Sync + 'static,
    {
        self.store.subscribe(subscriber)
    }

    /// Render the page for the current path
    pub fn render(&self) -> Selection<R> {
        self.selector.select(&self.store.current())
    }

    /// The page selector
    pub fn selector(&self) -> &PageSelector<R> {
        &self.selector
    }

    /// Whether the history bridge is still attached
    pub fn is_attached(&self) -> bool {
        self.bridge.is_some()
    }

    /// Detach the history bridge; later signals change nothing
    pub fn teardown(&mut self) {
        if let Some(bridge) = self.bridge.take() {
            bridge.teardown();
        }
    }
}

impl<R> Drop for SiteRouter<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::history::{MemoryHistory, RecordingViewport};
    use crate::router::route::KnownRoute;

    fn router(initial: &str) -> SiteRouter<&'static str> {
        let selector = PageSelector::new()
            .route(KnownRoute::Home, |_| "home")
            .route(KnownRoute::Demo, |_| "demo");
        SiteRouter::new(
            MemoryHistory::new(RoutePath::from(initial)).shared(),
            RecordingViewport::new().shared(),
            selector,
            RouterOptions::default(),
        )
    }

    #[test]
    fn test_initial_path_from_location() {
        assert_eq!(router("/demo").current_path().as_str(), "/demo");
        assert_eq!(router("").current_path().as_str(), "/");
    }

    #[test]
    fn test_navigate_and_render() {
        let router = router("/");
        assert_eq!(router.render().into_output(), Some("home"));

        router.navigate("/demo");
        assert_eq!(router.current_path().as_str(), "/demo");
        assert_eq!(router.render().into_output(), Some("demo"));
        assert_eq!(router.history_len(), 2);
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let router = router("/");
        assert!(!router.back());
        assert!(!router.forward());
        assert_eq!(router.store().updates(), 0);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut router = router("/");
        assert!(router.is_attached());
        router.teardown();
        router.teardown();
        assert!(!router.is_attached());

        router.navigate("/demo");
        assert_eq!(router.current_path().as_str(), "/");
    }
}
