//! Navigation state store
//!
//! Holds the single current route path and notifies subscribers on every
//! accepted update.

use super::route::RoutePath;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Callback invoked with the new path after every update
pub type Subscriber = Arc<dyn Fn(&RoutePath) + Send + Sync>;

/// Identifier returned by [`NavigationStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct StoreInner {
    current: RoutePath,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
    updates: u64,
}

/// Shareable handle to the navigation state
///
/// Clones refer to the same state. Subscribers run after the internal lock
/// is released, so they may read the store.
#[derive(Clone)]
pub struct NavigationStore(Arc<Mutex<StoreInner>>);

impl NavigationStore {
    /// Create a store holding `initial` as the current path
    pub fn new(initial: RoutePath) -> Self {
        Self(Arc::new(Mutex::new(StoreInner {
            current: initial,
            subscribers: Vec::new(),
            next_id: 0,
            updates: 0,
        })))
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the current path
    pub fn current(&self) -> RoutePath {
        self.lock().current.clone()
    }

    /// Number of accepted updates since creation
    pub fn updates(&self) -> u64 {
        self.lock().updates
    }

    /// Replace the current path and notify subscribers
    ///
    /// Every path is accepted; deciding what to render for it is the
    /// page selector's job.
    pub fn set(&self, path: RoutePath) {
        let subscribers: Vec<Subscriber> = {
            let mut inner = self.lock();
            debug!(from = %inner.current, to = %path, "Navigation state updated");
            inner.current = path.clone();
            inner.updates += 1;
            inner.subscribers.iter().map(|(_, s)| s.clone()).collect()
        };

        for subscriber in subscribers {
            subscriber(&path);
        }
    }

    /// Register a subscriber notified after each update
    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&RoutePath) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(subscriber)));
        id
    }

    /// Remove a subscriber; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }
}

impl std::fmt::Debug for NavigationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("NavigationStore")
            .field("current", &inner.current)
            .field("subscribers", &inner.subscribers.len())
            .field("updates", &inner.updates)
            .finish()
    }
}
