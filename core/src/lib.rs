//! # Blink OS Core
//!
//! Core library for the Blink OS site: a client-side router and the pages
//! it selects between.
//!
//! Navigation requests travel over a signal bus, are recorded in session
//! history, and update a shared navigation store whose current path picks
//! the page to render. Pages render to styled text for the terminal browser
//! or to HTML for the static export.

// Core modules
pub mod config;
pub mod error;
pub mod render;
pub mod router;
pub mod site;

// Re-export commonly used types
pub use config::{NotFoundMode, SiteConfig};
pub use error::{Error, Result};
pub use router::{
    HistoryBridge, KnownRoute, Link, MemoryHistory, NavigationStore, Navigator, PageSelector,
    RouterOptions, RoutePath, ScrollBehavior, Selection, SignalBus, SiteRouter,
};
pub use site::{page_selector, SiteContent, SitePage, SitePageKind};

/// Current version of the blink-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
///
/// Logs are written to stderr.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
