//! Route definitions and utilities
//!
//! This module defines the route path type and the fixed set of
//! known pages the site can display.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Logical page path, e.g. `/` or `/how-it-works`
///
/// Any string is a valid path. Whether a path names a known page is
/// decided by [`KnownRoute::from_path`], never at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(pub String);

impl RoutePath {
    /// Create a new route path
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Root path `/`
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Build a path from an environment location, where an empty
    /// location reads as the root
    pub fn from_location(location: &str) -> Self {
        if location.is_empty() {
            Self::root()
        } else {
            Self(location.to_string())
        }
    }

    /// Get the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the path is an empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve this path to a known route, if any
    pub fn known(&self) -> Option<KnownRoute> {
        KnownRoute::from_path(self.as_str())
    }
}

impl From<&str> for RoutePath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for RoutePath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<KnownRoute> for RoutePath {
    fn from(route: KnownRoute) -> Self {
        Self(route.path().to_string())
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The fixed set of pages the site knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KnownRoute {
    Home,
    Mission,
    HowItWorks,
    Demo,
    Applications,
}

impl KnownRoute {
    /// All known routes in navigation order
    pub const ALL: [KnownRoute; 5] = [
        KnownRoute::Home,
        KnownRoute::Mission,
        KnownRoute::HowItWorks,
        KnownRoute::Demo,
        KnownRoute::Applications,
    ];

    /// The path this route is served at
    pub fn path(&self) -> &'static str {
        match self {
            KnownRoute::Home => "/",
            KnownRoute::Mission => "/mission",
            KnownRoute::HowItWorks => "/how-it-works",
            KnownRoute::Demo => "/demo",
            KnownRoute::Applications => "/applications",
        }
    }

    /// Human-readable label used in navigation
    pub fn label(&self) -> &'static str {
        match self {
            KnownRoute::Home => "Home",
            KnownRoute::Mission => "Mission",
            KnownRoute::HowItWorks => "How It Works",
            KnownRoute::Demo => "Demo",
            KnownRoute::Applications => "Applications",
        }
    }

    /// Match a path exactly against the known routes
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for KnownRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
