//! Messages passed from the router to the UI

use blink_core::router::{RoutePath, ScrollBehavior};

/// Router events the terminal browser reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMessage {
    /// Navigation state changed
    PathChanged(RoutePath),
    /// Viewport should return to the top of the page
    ScrollToTop(ScrollBehavior),
}
