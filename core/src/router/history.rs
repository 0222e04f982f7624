//! Environment history and viewport abstractions
//!
//! The router never talks to a concrete environment. It reads and writes
//! session history through [`History`] and resets scroll through
//! [`Viewport`]. [`MemoryHistory`] is the in-process session history used
//! by the terminal browser and the tests.

use super::route::RoutePath;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Default maximum number of session history entries
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Session history of the environment
pub trait History {
    /// Path of the current entry
    fn location(&self) -> RoutePath;

    /// Record a new entry and make it current, without reloading
    fn push(&mut self, path: RoutePath);

    /// Move one entry back; returns false at the start of history
    fn back(&mut self) -> bool;

    /// Move one entry forward; returns false at the end of history
    fn forward(&mut self) -> bool;

    /// Number of entries in the session history
    fn len(&self) -> usize;

    /// Whether the history holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How a scroll reset is animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Scrollable viewport of the environment
pub trait Viewport {
    /// Scroll back to the top of the content
    fn scroll_to_top(&mut self, behavior: ScrollBehavior);
}

/// Shared history handle used by the bridge
pub type SharedHistory = Arc<Mutex<dyn History + Send>>;

/// Shared viewport handle used by the bridge
pub type SharedViewport = Arc<Mutex<dyn Viewport + Send>>;

/// In-memory session history: a stack of entries and a cursor
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<RoutePath>,
    cursor: usize,
    max_entries: usize,
}

impl MemoryHistory {
    /// Create a history whose only entry is `initial`
    pub fn new(initial: RoutePath) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            max_entries: DEFAULT_MAX_HISTORY,
        }
    }

    /// Set the maximum number of entries kept (at least one)
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self.trim();
        self
    }

    /// Wrap into a shared handle
    pub fn shared(self) -> Arc<Mutex<MemoryHistory>> {
        Arc::new(Mutex::new(self))
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[RoutePath] {
        &self.entries
    }

    /// Index of the current entry
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether there is an entry before the current one
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether there is an entry after the current one
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    fn trim(&mut self) {
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
            self.cursor = self.cursor.saturating_sub(excess);
        }
    }
}

impl History for MemoryHistory {
    fn location(&self) -> RoutePath {
        self.entries
            .get(self.cursor)
            .cloned()
            .unwrap_or_else(RoutePath::root)
    }

    fn push(&mut self, path: RoutePath) {
        // Pushing discards any forward entries
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path);
        self.cursor = self.entries.len() - 1;
        self.trim();
    }

    fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    fn forward(&mut self) -> bool {
        if self.can_go_forward() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Viewport that records scroll resets instead of performing them
#[derive(Debug, Clone, Default)]
pub struct RecordingViewport {
    resets: Vec<ScrollBehavior>,
}

impl RecordingViewport {
    /// Create an empty recording viewport
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap into a shared handle
    pub fn shared(self) -> Arc<Mutex<RecordingViewport>> {
        Arc::new(Mutex::new(self))
    }

    /// Scroll resets received so far
    pub fn resets(&self) -> &[ScrollBehavior] {
        &self.resets
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.resets.push(behavior);
    }
}
