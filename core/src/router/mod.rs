//! Router module for managing page navigation and routing
//!
//! Navigation flows through four pieces: links emit requests on a
//! [`SignalBus`], the [`HistoryBridge`] records them in session history and
//! updates the [`NavigationStore`], and the [`PageSelector`] renders the
//! page for the new path. [`SiteRouter`] wires them together.

pub mod bridge;
pub mod history;
pub mod link;
pub mod route;
pub mod selector;
pub mod signal;
pub mod site_router;
pub mod store;

// Re-export commonly used types
pub use bridge::HistoryBridge;
pub use history::{
    History, MemoryHistory, RecordingViewport, ScrollBehavior, SharedHistory, SharedViewport,
    Viewport, DEFAULT_MAX_HISTORY,
};
pub use link::{DefaultAction, Link};
pub use route::{KnownRoute, RoutePath};
pub use selector::{PageRenderer, PageSelector, Selection};
pub use signal::{NavigateDetail, Navigator, Signal, SignalBus, SignalKind};
pub use site_router::{RouterOptions, SiteRouter};
pub use store::{NavigationStore, SubscriptionId};
