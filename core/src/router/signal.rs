//! In-process navigation signals
//!
//! A [`SignalBus`] is created at the application root and handed to
//! whoever needs to emit or observe navigation signals. Listeners are
//! invoked synchronously, in registration order, one signal at a time.

use super::route::RoutePath;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Payload of a navigation request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigateDetail {
    /// Target path; `None` models a request fired without a payload
    pub path: Option<RoutePath>,
}

impl NavigateDetail {
    /// Request navigation to `path`
    pub fn to(path: impl Into<RoutePath>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The target path if present and non-empty
    pub fn target(&self) -> Option<&RoutePath> {
        self.path.as_ref().filter(|path| !path.is_empty())
    }
}

/// Signals carried on the bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Explicit navigation request (link activation or programmatic)
    Navigate(NavigateDetail),
    /// The environment moved through its history (back/forward)
    PopState,
}

impl Signal {
    /// Shorthand for a navigation request to `path`
    pub fn navigate(path: impl Into<RoutePath>) -> Self {
        Signal::Navigate(NavigateDetail::to(path))
    }

    /// Kind of this signal, used for listener routing
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Navigate(_) => SignalKind::Navigate,
            Signal::PopState => SignalKind::PopState,
        }
    }
}

/// Signal kinds a listener can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Navigate,
    PopState,
}

/// Listener callback
pub type Listener = Arc<dyn Fn(&Signal) + Send + Sync>;

/// Identifier returned by [`SignalBus::add_listener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct BusInner {
    listeners: Vec<(ListenerId, SignalKind, Listener)>,
    next_id: u64,
}

/// Publish/subscribe channel for navigation signals
#[derive(Clone, Default)]
pub struct SignalBus(Arc<Mutex<BusInner>>);

impl SignalBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BusInner> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener for one signal kind
    pub fn add_listener<F>(&self, kind: SignalKind, listener: F) -> ListenerId
    where
        F: Fn(&Signal) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, kind, Arc::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _, _)| *lid != id);
        inner.listeners.len() != before
    }

    /// Deliver a signal to every listener of its kind
    ///
    /// Returns the number of listeners that received it.
    pub fn dispatch(&self, signal: Signal) -> usize {
        let kind = signal.kind();
        let listeners: Vec<Listener> = self
            .lock()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, l)| l.clone())
            .collect();

        trace!(?signal, listeners = listeners.len(), "Dispatching signal");
        for listener in &listeners {
            listener(&signal);
        }
        listeners.len()
    }

    /// Number of listeners registered for `kind`
    pub fn listener_count(&self, kind: SignalKind) -> usize {
        self.lock()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .count()
    }
}

impl std::fmt::Debug for SignalBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalBus")
            .field("listeners", &self.lock().listeners.len())
            .finish()
    }
}

/// Handle for emitting navigation requests
///
/// This is what links hold; it can emit but not observe.
#[derive(Debug, Clone)]
pub struct Navigator {
    bus: SignalBus,
}

impl Navigator {
    /// Create a navigator emitting on `bus`
    pub fn new(bus: SignalBus) -> Self {
        Self { bus }
    }

    /// Request navigation to `path`
    pub fn navigate(&self, path: impl Into<RoutePath>) -> usize {
        self.bus.dispatch(Signal::navigate(path))
    }

    /// Emit a raw navigation request
    pub fn request(&self, detail: NavigateDetail) -> usize {
        self.bus.dispatch(Signal::Navigate(detail))
    }
}
