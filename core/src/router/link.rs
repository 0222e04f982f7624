//! Link element
//!
//! A link exposes a real `href` for accessibility and no-script fallback,
//! but activating it performs client-side navigation through a
//! [`Navigator`] instead of a full page load.

use super::route::RoutePath;
use super::signal::Navigator;
use std::fmt;
use std::sync::Arc;

/// Side effect run after a link emits its navigation request
pub type LinkCallback = Arc<dyn Fn() + Send + Sync>;

/// What happened to the environment's default action on activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAction {
    /// The default full-page navigation was suppressed
    Prevented,
}

/// Activatable element navigating to a fixed path
#[derive(Clone)]
pub struct Link {
    to: RoutePath,
    label: String,
    on_activate: Option<LinkCallback>,
}

impl Link {
    /// Create a link to `to` with a visible label
    pub fn new(to: impl Into<RoutePath>, label: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            label: label.into(),
            on_activate: None,
        }
    }

    /// Attach a side effect run after each activation
    pub fn on_activate<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_activate = Some(Arc::new(callback));
        self
    }

    /// Target path of this link
    pub fn to(&self) -> &RoutePath {
        &self.to
    }

    /// Value for the rendered `href` attribute
    pub fn href(&self) -> &str {
        self.to.as_str()
    }

    /// Visible label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this link targets `current`
    pub fn is_active(&self, current: &RoutePath) -> bool {
        &self.to == current
    }

    /// Activate the link
    ///
    /// Suppresses the default navigation, emits a navigation request for
    /// the target path and then runs the side-effect callback if any. There
    /// is no de-duplication: linking to the current path still emits.
    pub fn activate(&self, navigator: &Navigator) -> DefaultAction {
        navigator.navigate(self.to.clone());
        if let Some(callback) = &self.on_activate {
            callback();
        }
        DefaultAction::Prevented
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("to", &self.to)
            .field("label", &self.label)
            .field("on_activate", &self.on_activate.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::signal::{Signal, SignalBus, SignalKind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_href_matches_target() {
        let link = Link::new("/how-it-works", "How It Works");
        assert_eq!(link.href(), "/how-it-works");
        assert_eq!(link.label(), "How It Works");
        assert!(link.is_active(&RoutePath::from("/how-it-works")));
        assert!(!link.is_active(&RoutePath::root()));
    }

    #[test]
    fn test_activate_emits_then_runs_callback() {
        let bus = SignalBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let sink = order.clone();
        bus.add_listener(SignalKind::Navigate, move |signal| {
            if let Signal::Navigate(detail) = signal {
                sink.lock().unwrap().push(format!("navigate {}", detail.path.clone().unwrap()));
            }
        });

        let sink = order.clone();
        let link = Link::new("/demo", "Demo").on_activate(move || {
            sink.lock().unwrap().push("callback".to_string());
        });

        let action = link.activate(&Navigator::new(bus));
        assert_eq!(action, DefaultAction::Prevented);
        assert_eq!(*order.lock().unwrap(), vec!["navigate /demo", "callback"]);
    }

    #[test]
    fn test_no_deduplication() {
        let bus = SignalBus::new();
        let count = Arc::new(AtomicUsize::new(0));

        let sink = count.clone();
        bus.add_listener(SignalKind::Navigate, move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        let navigator = Navigator::new(bus);
        let link = Link::new("/", "Home");
        link.activate(&navigator);
        link.activate(&navigator);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
