//! History bridge
//!
//! Keeps the navigation store consistent with the environment's session
//! history. The bridge owns exactly two listeners on the signal bus and
//! removes both on teardown.

use super::history::{ScrollBehavior, SharedHistory, SharedViewport};
use super::route::RoutePath;
use super::signal::{ListenerId, Signal, SignalBus, SignalKind};
use super::store::NavigationStore;
use std::sync::PoisonError;
use tracing::debug;

/// Attached bridge between bus, store, history and viewport
#[derive(Debug)]
pub struct HistoryBridge {
    bus: SignalBus,
    navigate_listener: ListenerId,
    popstate_listener: ListenerId,
}

impl HistoryBridge {
    /// Subscribe to `navigate` and `popstate` on `bus`
    pub fn attach(
        bus: &SignalBus,
        store: &NavigationStore,
        history: SharedHistory,
        viewport: SharedViewport,
        scroll: ScrollBehavior,
    ) -> Self {
        let navigate_listener = {
            let store = store.clone();
            let history = history.clone();
            let viewport = viewport.clone();
            bus.add_listener(SignalKind::Navigate, move |signal| {
                let Signal::Navigate(detail) = signal else {
                    return;
                };
                let Some(path) = detail.target() else {
                    debug!("Ignoring navigation request without a target path");
                    return;
                };

                history
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(path.clone());
                store.set(path.clone());
                viewport
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .scroll_to_top(scroll);
            })
        };

        let popstate_listener = {
            let store = store.clone();
            bus.add_listener(SignalKind::PopState, move |_| {
                let location = {
                    let guard = history.lock().unwrap_or_else(PoisonError::into_inner);
                    RoutePath::from_location(guard.location().as_str())
                };
                debug!(%location, "Restoring navigation state from history");
                store.set(location);
                viewport
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .scroll_to_top(scroll);
            })
        };

        Self {
            bus: bus.clone(),
            navigate_listener,
            popstate_listener,
        }
    }

    /// Remove both listeners from the bus
    pub fn teardown(self) {
        self.bus.remove_listener(self.navigate_listener);
        self.bus.remove_listener(self.popstate_listener);
        debug!("History bridge torn down");
    }
}
