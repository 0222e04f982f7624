//! Terminal browser behavior independent of the component tree
//!
//! Key bindings, the focus ring over links, and the scrolling rules.

use blink_core::router::Link;
use blink_core::site::{
    page_links, CompactMenu, DemoState, Section, SiteContent, SitePage, SitePageKind,
};
use iocraft::prelude::{KeyCode, KeyModifiers};

/// What a key press asks the browser to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    FocusNext,
    FocusPrev,
    Activate,
    ToggleMenu,
    Back,
    Forward,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    /// Toggle the n-th demo (zero based) on the Demo page
    ToggleDemo(usize),
    Quit,
}

/// Map a key press to a browser action
pub fn action_for(code: KeyCode, modifiers: KeyModifiers) -> Option<BrowserAction> {
    let alt = modifiers.contains(KeyModifiers::ALT);
    let action = match code {
        KeyCode::Left if alt => BrowserAction::Back,
        KeyCode::Right if alt => BrowserAction::Forward,
        KeyCode::Tab | KeyCode::Right => BrowserAction::FocusNext,
        KeyCode::BackTab | KeyCode::Left => BrowserAction::FocusPrev,
        KeyCode::Enter => BrowserAction::Activate,
        KeyCode::Up => BrowserAction::ScrollUp,
        KeyCode::Down => BrowserAction::ScrollDown,
        KeyCode::PageUp => BrowserAction::PageUp,
        KeyCode::PageDown => BrowserAction::PageDown,
        KeyCode::Esc => BrowserAction::Quit,
        KeyCode::Char(c) => match c {
            'q' => BrowserAction::Quit,
            'm' => BrowserAction::ToggleMenu,
            'b' => BrowserAction::Back,
            'f' => BrowserAction::Forward,
            '1'..='9' => BrowserAction::ToggleDemo(c as usize - '1' as usize),
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// Per-page view state, rebuilt whenever the router reports a new path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    pub demos: DemoState,
    pub menu_open: bool,
    pub focus: usize,
}

impl BrowserState {
    /// Fresh state for the page at a new path; back and forward included
    pub fn on_path_changed(menu: &CompactMenu) -> Self {
        Self {
            demos: DemoState::new(),
            menu_open: menu.is_open(),
            focus: 0,
        }
    }
}

/// Links reachable with the focus keys, navbar (or menu) entries first
#[derive(Clone)]
pub struct FocusRing {
    links: Vec<Link>,
    nav_count: usize,
}

impl FocusRing {
    pub fn new(content: &SiteContent, menu: &CompactMenu, page: Option<&SitePage>) -> Self {
        let mut links = if menu.is_open() {
            menu.links(content)
        } else {
            content.nav_links()
        };
        let nav_count = links.len();
        if let Some(page) = page {
            links.extend(page_links(content, page));
        }
        Self { links, nav_count }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, focus: usize) -> Option<&Link> {
        self.links.get(focus)
    }

    /// Focused navbar entry, if focus is in the navbar
    pub fn nav_focus(&self, focus: usize) -> Option<usize> {
        (focus < self.nav_count).then_some(focus)
    }

    /// Focused in-page link, counted from the first page link
    pub fn page_focus(&self, focus: usize) -> Option<usize> {
        (focus >= self.nav_count && focus < self.links.len()).then(|| focus - self.nav_count)
    }

    pub fn next(&self, focus: usize) -> usize {
        if self.links.is_empty() {
            0
        } else {
            (focus + 1) % self.links.len()
        }
    }

    pub fn prev(&self, focus: usize) -> usize {
        if self.links.is_empty() {
            0
        } else {
            (focus + self.links.len() - 1) % self.links.len()
        }
    }
}

/// Ids of the demos on `page`, in display order
pub fn demo_ids(content: &SiteContent, page: Option<&SitePage>) -> Vec<String> {
    let route = match page.map(|page| page.kind) {
        Some(SitePageKind::Page(route)) => route,
        _ => return Vec::new(),
    };

    content
        .page(route)
        .map(|page| {
            page.sections
                .iter()
                .flat_map(|section| match section {
                    Section::Demos { items, .. } => items.iter().map(|d| d.id.clone()).collect(),
                    _ => Vec::new(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Largest scroll offset that still fills the viewport
pub fn max_scroll(total_lines: usize, height: usize) -> usize {
    total_lines.saturating_sub(height.max(1))
}

/// Scroll offset after `action`
pub fn scroll_by(action: BrowserAction, scroll: usize, total_lines: usize, height: usize) -> usize {
    let page = height.saturating_sub(1).max(1);
    let next = match action {
        BrowserAction::ScrollUp => scroll.saturating_sub(1),
        BrowserAction::ScrollDown => scroll + 1,
        BrowserAction::PageUp => scroll.saturating_sub(page),
        BrowserAction::PageDown => scroll + page,
        _ => scroll,
    };
    next.min(max_scroll(total_lines, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::message::UiMessage;
    use crate::interactive::router::RouterHandle;
    use blink_core::config::NotFoundMode;
    use blink_core::router::RoutePath;
    use blink_core::site::page_selector;
    use blink_core::SiteConfig;
    use tokio::sync::broadcast;

    fn page(path: &str) -> Option<SitePage> {
        page_selector(NotFoundMode::Page)
            .select(&RoutePath::from(path))
            .into_output()
    }

    #[test]
    fn test_key_bindings() {
        let none = KeyModifiers::NONE;
        assert_eq!(action_for(KeyCode::Tab, none), Some(BrowserAction::FocusNext));
        assert_eq!(action_for(KeyCode::BackTab, none), Some(BrowserAction::FocusPrev));
        assert_eq!(action_for(KeyCode::Left, none), Some(BrowserAction::FocusPrev));
        assert_eq!(
            action_for(KeyCode::Left, KeyModifiers::ALT),
            Some(BrowserAction::Back)
        );
        assert_eq!(
            action_for(KeyCode::Right, KeyModifiers::ALT),
            Some(BrowserAction::Forward)
        );
        assert_eq!(action_for(KeyCode::Char('2'), none), Some(BrowserAction::ToggleDemo(1)));
        assert_eq!(action_for(KeyCode::Esc, none), Some(BrowserAction::Quit));
        assert_eq!(action_for(KeyCode::Char('x'), none), None);
    }

    #[test]
    fn test_focus_ring_orders_nav_then_page_links() {
        let content = SiteContent::load_default().unwrap();
        let menu = CompactMenu::new();
        let home = page("/");
        let ring = FocusRing::new(&content, &menu, home.as_ref());

        assert_eq!(ring.len(), content.nav.len() + 2);
        assert_eq!(ring.nav_focus(4), Some(4));
        assert_eq!(ring.page_focus(4), None);
        assert_eq!(ring.page_focus(5), Some(0));
        assert_eq!(ring.get(5).map(|link| link.href()), Some("/demo"));

        assert_eq!(ring.next(ring.len() - 1), 0);
        assert_eq!(ring.prev(0), ring.len() - 1);
    }

    #[test]
    fn test_menu_links_close_menu() {
        let content = SiteContent::load_default().unwrap();
        let menu = CompactMenu::new();
        menu.toggle();

        let ring = FocusRing::new(&content, &menu, None);
        assert_eq!(ring.len(), content.nav.len());

        let bus = blink_core::router::SignalBus::new();
        ring.get(1)
            .unwrap()
            .activate(&blink_core::router::Navigator::new(bus));
        assert!(!menu.is_open());
    }

    fn apply_messages(
        rx: &mut broadcast::Receiver<UiMessage>,
        menu: &CompactMenu,
        state: &mut BrowserState,
    ) {
        while let Ok(message) = rx.try_recv() {
            if let UiMessage::PathChanged(_) = message {
                *state = BrowserState::on_path_changed(menu);
            }
        }
    }

    #[test]
    fn test_page_state_resets_on_every_path_change() {
        let content = SiteContent::load_default().unwrap();
        let menu = CompactMenu::new();
        let (sender, mut rx) = broadcast::channel(16);
        let config = SiteConfig {
            initial_path: Some("/demo".to_string()),
            ..SiteConfig::default()
        };
        let router = RouterHandle::new(&config, sender);

        let mut state = BrowserState::default();
        state.demos.toggle("iris");
        state.menu_open = menu.toggle();
        state.focus = 2;

        // Leave through the open menu
        let home = menu.links(&content).into_iter().next().unwrap();
        router.activate(&home);
        apply_messages(&mut rx, &menu, &mut state);
        assert_eq!(router.current_path().as_str(), "/");
        assert_eq!(state, BrowserState::default());

        state.demos.toggle("head");
        assert!(router.go_back());
        apply_messages(&mut rx, &menu, &mut state);
        assert_eq!(router.current_path().as_str(), "/demo");
        assert_eq!(state.demos.active(), None);
        assert!(!state.menu_open);
        assert_eq!(state.focus, 0);
    }

    #[test]
    fn test_demo_ids() {
        let content = SiteContent::load_default().unwrap();
        assert_eq!(demo_ids(&content, page("/demo").as_ref()), vec!["iris", "head"]);
        assert!(demo_ids(&content, page("/").as_ref()).is_empty());
        assert!(demo_ids(&content, None).is_empty());
    }

    #[test]
    fn test_scroll_is_clamped() {
        assert_eq!(scroll_by(BrowserAction::ScrollUp, 0, 100, 20), 0);
        assert_eq!(scroll_by(BrowserAction::ScrollDown, 0, 100, 20), 1);
        assert_eq!(scroll_by(BrowserAction::PageDown, 0, 100, 20), 19);
        assert_eq!(scroll_by(BrowserAction::PageDown, 75, 100, 20), 80);
        assert_eq!(scroll_by(BrowserAction::ScrollDown, 0, 10, 20), 0);
    }
}
