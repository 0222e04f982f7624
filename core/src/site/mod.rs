//! Blink OS site: content, navbar, page selection and export
//!
//! Every output surface (terminal, HTML, static export) selects pages
//! through the same [`page_selector`], so a path always maps to the same
//! page regardless of how it is displayed.

pub mod content;
pub mod demo;
pub mod export;
pub mod navbar;

pub use content::{
    Action, ActionTarget, Brand, Card, Cell, Checklist, ComparisonRow, Demo, ExternalLink,
    FooterContent, LegendEntry, NavEntry, NotFoundContent, PageContent, Section, SiteContent,
    Stat, Video,
};
pub use demo::DemoState;
pub use export::{export_site, route_file, ExportReport};
pub use navbar::{nav_items, CompactMenu, NavItem};

use crate::config::NotFoundMode;
use crate::router::{KnownRoute, Link, PageSelector, RoutePath};

/// Page chosen for a path, before it is rendered to any surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePage {
    /// Path the page was selected for
    pub path: RoutePath,
    /// What to display
    pub kind: SitePageKind,
}

/// Kind of selected page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitePageKind {
    Page(KnownRoute),
    NotFound,
}

impl SitePage {
    /// Known route displayed, if any
    pub fn route(&self) -> Option<KnownRoute> {
        match self.kind {
            SitePageKind::Page(route) => Some(route),
            SitePageKind::NotFound => None,
        }
    }
}

/// In-page links of `page` that navigate within the site, in display order
///
/// Actions pointing at external URLs are plain hyperlinks and are left out.
pub fn page_links(content: &SiteContent, page: &SitePage) -> Vec<Link> {
    match page.kind {
        SitePageKind::Page(route) => content
            .page(route)
            .map(|page| {
                page.sections
                    .iter()
                    .flat_map(Section::actions)
                    .filter_map(|action| match &action.target {
                        ActionTarget::Route(path) => {
                            Some(Link::new(path.clone(), action.label.clone()))
                        }
                        ActionTarget::Url(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default(),
        SitePageKind::NotFound => vec![Link::new(
            RoutePath::root(),
            content.not_found.link_label.clone(),
        )],
    }
}

/// Selector mapping every known route to its page, with the not-found
/// page as fallback unless `not_found` asks for a blank body
pub fn page_selector(not_found: NotFoundMode) -> PageSelector<SitePage> {
    let selector = KnownRoute::ALL
        .into_iter()
        .fold(PageSelector::new(), |selector, route| {
            selector.route(route, move |path| SitePage {
                path: path.clone(),
                kind: SitePageKind::Page(route),
            })
        });

    match not_found {
        NotFoundMode::Page => selector.fallback(|path| SitePage {
            path: path.clone(),
            kind: SitePageKind::NotFound,
        }),
        NotFoundMode::Blank => selector,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Selection;

    #[test]
    fn test_known_paths_select_their_page() {
        let selector = page_selector(NotFoundMode::Page);
        for route in KnownRoute::ALL {
            let selection = selector.select(&RoutePath::from(route));
            assert_eq!(selection.route(), Some(route));
            assert_eq!(
                selection.into_output().and_then(|page| page.route()),
                Some(route)
            );
        }
    }

    #[test]
    fn test_page_links_skip_external_urls() {
        let content = SiteContent::load_default().unwrap();
        let home = SitePage {
            path: RoutePath::root(),
            kind: SitePageKind::Page(KnownRoute::Home),
        };
        let links = page_links(&content, &home);
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|link| link.to().as_str() == "/demo"));

        let missing = SitePage {
            path: RoutePath::from("/nowhere"),
            kind: SitePageKind::NotFound,
        };
        let links = page_links(&content, &missing);
        assert_eq!(links[0].href(), "/");
        assert_eq!(links[0].label(), "Back to Home");
    }

    #[test]
    fn test_not_found_modes() {
        let path = RoutePath::from("/nowhere");

        let selection = page_selector(NotFoundMode::Page).select(&path);
        assert_eq!(
            selection,
            Selection::Fallback(SitePage {
                path: path.clone(),
                kind: SitePageKind::NotFound,
            })
        );

        assert_eq!(
            page_selector(NotFoundMode::Blank).select(&path),
            Selection::Empty
        );
    }
}
