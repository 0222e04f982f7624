//! Page selector
//!
//! Maps the current path to exactly one page renderer. Every renderer
//! receives the current path as its only parameter, whatever the output
//! type (HTML string, terminal lines, UI element).

use super::route::{KnownRoute, RoutePath};
use std::collections::HashMap;

/// Page render function
pub type PageRenderer<R> = Box<dyn Fn(&RoutePath) -> R + Send + Sync>;

/// Outcome of selecting a page for a path
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<R> {
    /// A known page was rendered
    Page { route: KnownRoute, output: R },
    /// The path is unknown and the fallback renderer was used
    Fallback(R),
    /// The path is unknown and there is no fallback: nothing is rendered
    Empty,
}

impl<R> Selection<R> {
    /// The known route that was selected, if any
    pub fn route(&self) -> Option<KnownRoute> {
        match self {
            Selection::Page { route, .. } => Some(*route),
            _ => None,
        }
    }

    /// Rendered output, if anything was rendered
    pub fn output(&self) -> Option<&R> {
        match self {
            Selection::Page { output, .. } | Selection::Fallback(output) => Some(output),
            Selection::Empty => None,
        }
    }

    /// Take the rendered output
    pub fn into_output(self) -> Option<R> {
        match self {
            Selection::Page { output, .. } | Selection::Fallback(output) => Some(output),
            Selection::Empty => None,
        }
    }

    /// Map the rendered output
    pub fn map<T>(self, f: impl FnOnce(R) -> T) -> Selection<T> {
        match self {
            Selection::Page { route, output } => Selection::Page {
                route,
                output: f(output),
            },
            Selection::Fallback(output) => Selection::Fallback(f(output)),
            Selection::Empty => Selection::Empty,
        }
    }
}

/// Pure mapping from path to rendered page
pub struct PageSelector<R> {
    pages: HashMap<KnownRoute, PageRenderer<R>>,
    fallback: Option<PageRenderer<R>>,
}

impl<R> PageSelector<R> {
    /// Create an empty selector
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            fallback: None,
        }
    }

    /// Register the renderer for a known route
    pub fn route<F>(mut self, route: KnownRoute, renderer: F) -> Self
    where
        F: Fn(&RoutePath) -> R + Send + Sync + 'static,
    {
        self.pages.insert(route, Box::new(renderer));
        self
    }

    /// Register a renderer for unknown paths
    pub fn fallback<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&RoutePath) -> R + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(renderer));
        self
    }

    /// Whether a renderer is registered for `route`
    pub fn has_route(&self, route: KnownRoute) -> bool {
        self.pages.contains_key(&route)
    }

    /// Whether a fallback renderer is registered
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Render the page for `path`
    pub fn select(&self, path: &RoutePath) -> Selection<R> {
        let known = path
            .known()
            .and_then(|route| self.pages.get(&route).map(|renderer| (route, renderer)));

        match (known, &self.fallback) {
            (Some((route, renderer)), _) => Selection::Page {
                route,
                output: renderer(path),
            },
            (None, Some(fallback)) => Selection::Fallback(fallback(path)),
            (None, None) => Selection::Empty,
        }
    }
}

impl<R> Default for PageSelector<R> {
    fn default() -> Self {
        Self::new()
    }
}
