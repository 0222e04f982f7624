//! Navigation bar model
//!
//! The navbar renders the nav entries as links, marks the entry for the
//! current path, and owns the open/closed state of the compact menu.

use super::content::SiteContent;
use crate::router::{Link, RoutePath};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Rendered navbar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Navbar entries for `current`, in navigation order
pub fn nav_items(content: &SiteContent, current: &RoutePath) -> Vec<NavItem> {
    content
        .nav
        .iter()
        .map(|entry| NavItem {
            label: entry.label.clone(),
            href: entry.path.to_string(),
            active: &entry.path == current,
        })
        .collect()
}

/// Open/closed state of the compact menu
///
/// Clones share the same state so links can close the menu they live in.
#[derive(Debug, Clone, Default)]
pub struct CompactMenu {
    open: Arc<AtomicBool>,
}

impl CompactMenu {
    /// Create a closed menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is open
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Flip between open and closed; returns the new state
    pub fn toggle(&self) -> bool {
        !self.open.fetch_xor(true, Ordering::SeqCst)
    }

    /// Close the menu
    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    /// Links for the menu body; activating any of them closes the menu
    pub fn links(&self, content: &SiteContent) -> Vec<Link> {
        content
            .nav_links()
            .into_iter()
            .map(|link| {
                let menu = self.clone();
                link.on_activate(move || menu.close())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{Navigator, SignalBus};

    #[test]
    fn test_exactly_one_active_item_for_known_path() {
        let content = SiteContent::load_default().unwrap();
        let items = nav_items(&content, &RoutePath::from("/mission"));
        let active: Vec<&str> = items
            .iter()
            .filter(|i| i.active)
            .map(|i| i.label.as_str())
            .collect();
        assert_eq!(active, vec!["Mission"]);
    }

    #[test]
    fn test_no_active_item_for_unknown_path() {
        let content = SiteContent::load_default().unwrap();
        let items = nav_items(&content, &RoutePath::from("/pricing"));
        assert!(items.iter().all(|i| !i.active));
    }

    #[test]
    fn test_toggle() {
        let menu = CompactMenu::new();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_link_closes_menu() {
        let content = SiteContent::load_default().unwrap();
        let menu = CompactMenu::new();
        menu.toggle();

        let links = menu.links(&content);
        links[3].activate(&Navigator::new(SignalBus::new()));

        assert!(!menu.is_open());
    }
}
