//! UI framework integration for the site router
//!
//! Bridges the core [`SiteRouter`] with the iocraft component tree: the
//! terminal viewport forwards scroll resets to the UI, and the handle lets
//! event handlers navigate without owning the router.

use super::message::UiMessage;
use blink_core::router::{
    Link, MemoryHistory, RouterOptions, RoutePath, ScrollBehavior, SiteRouter, Viewport,
};
use blink_core::site::{page_selector, SitePage};
use blink_core::SiteConfig;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::broadcast;
use tracing::debug;

/// Viewport of the terminal browser; scroll resets become UI messages
pub struct TerminalViewport {
    ui_sender: broadcast::Sender<UiMessage>,
}

impl TerminalViewport {
    pub fn new(ui_sender: broadcast::Sender<UiMessage>) -> Self {
        Self { ui_sender }
    }
}

impl Viewport for TerminalViewport {
    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        let _ = self.ui_sender.send(UiMessage::ScrollToTop(behavior));
    }
}

/// A shareable, UI-friendly handle to control the router
#[derive(Clone)]
pub struct RouterHandle(Arc<Mutex<SiteRouter<SitePage>>>);

impl RouterHandle {
    /// Build the router for `config`, reporting path changes on `ui_sender`
    pub fn new(config: &SiteConfig, ui_sender: broadcast::Sender<UiMessage>) -> Self {
        let history = MemoryHistory::new(config.initial_path())
            .with_max_entries(config.max_history)
            .shared();
        let viewport = Arc::new(Mutex::new(TerminalViewport::new(ui_sender.clone())));

        let router = SiteRouter::new(
            history,
            viewport,
            page_selector(config.not_found),
            RouterOptions {
                scroll: config.scroll_behavior,
            },
        );

        router.subscribe(move |path| {
            let _ = ui_sender.send(UiMessage::PathChanged(path.clone()));
        });

        Self(Arc::new(Mutex::new(router)))
    }

    fn with<T>(&self, f: impl FnOnce(&SiteRouter<SitePage>) -> T) -> T {
        let guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Activate a link through the router's navigator
    pub fn activate(&self, link: &Link) {
        debug!("Activating link to {}", link.href());
        let navigator = self.with(|router| router.navigator());
        link.activate(&navigator);
    }

    /// Get the current path
    pub fn current_path(&self) -> RoutePath {
        self.with(|router| router.current_path())
    }

    /// Page selected for the current path; `None` for a blank body
    pub fn current_page(&self) -> Option<SitePage> {
        self.with(|router| router.render().into_output())
    }

    /// Go back one history entry
    pub fn go_back(&self) -> bool {
        self.with(|router| router.back())
    }

    /// Go forward one history entry
    pub fn go_forward(&self) -> bool {
        self.with(|router| router.forward())
    }

    /// Number of session history entries
    pub fn history_len(&self) -> usize {
        self.with(|router| router.history_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blink_core::site::SitePageKind;
    use blink_core::{KnownRoute, NotFoundMode};

    fn handle(config: &SiteConfig) -> (RouterHandle, broadcast::Receiver<UiMessage>) {
        let (sender, receiver) = broadcast::channel(16);
        (RouterHandle::new(config, sender), receiver)
    }

    #[test]
    fn test_link_activation_reports_path_then_scroll() {
        let (router, mut rx) = handle(&SiteConfig::default());
        router.activate(&Link::new("/mission", "Mission"));

        assert_eq!(router.current_path().as_str(), "/mission");
        assert_eq!(
            rx.try_recv().unwrap(),
            UiMessage::PathChanged(RoutePath::from("/mission"))
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            UiMessage::ScrollToTop(ScrollBehavior::Smooth)
        );
    }

    #[test]
    fn test_back_and_forward() {
        let (router, _rx) = handle(&SiteConfig::default());
        router.activate(&Link::new("/demo", "Demo"));
        assert_eq!(router.history_len(), 2);

        assert!(router.go_back());
        assert_eq!(router.current_path().as_str(), "/");
        assert!(router.go_forward());
        assert_eq!(router.current_path().as_str(), "/demo");
        assert_eq!(router.history_len(), 2);
    }

    #[test]
    fn test_initial_path_and_not_found_mode() {
        let config = SiteConfig {
            initial_path: Some("/nowhere".to_string()),
            not_found: NotFoundMode::Page,
            ..SiteConfig::default()
        };
        let (router, _rx) = handle(&config);
        assert_eq!(
            router.current_page().map(|page| page.kind),
            Some(SitePageKind::NotFound)
        );

        let config = SiteConfig {
            initial_path: Some("/how-it-works".to_string()),
            ..SiteConfig::default()
        };
        let (router, _rx) = handle(&config);
        assert_eq!(
            router.current_page().and_then(|page| page.route()),
            Some(KnownRoute::HowItWorks)
        );

        let config = SiteConfig {
            initial_path: Some("/nowhere".to_string()),
            not_found: NotFoundMode::Blank,
            ..SiteConfig::default()
        };
        let (router, _rx) = handle(&config);
        assert_eq!(router.current_page(), None);
    }
}
